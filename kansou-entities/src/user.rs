use std::fmt;

/// Opaque user identifier issued by the auth backend (a UUID string).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for UserId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for UserId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<UserId> for String {
    fn from(from: UserId) -> Self {
        from.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : UserId,
    pub email : Option<String>,
}

impl User {
    /// A short name that can be displayed next to the logout button.
    pub fn display_name(&self) -> &str {
        self.email.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}
