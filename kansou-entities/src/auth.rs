use crate::{time::Timestamp, user::User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Both fields contain at least one non-whitespace character.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token  : String,
    pub refresh_token : String,
    pub expires_at    : Option<Timestamp>,
    pub user          : User,
}

impl Session {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// The outcome of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUp {
    /// The account must be confirmed by email before it can be used.
    ConfirmationPending(User),
    /// The backend confirmed the account immediately and opened a session.
    SignedIn(Session),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEvent {
    pub kind: AuthChangeEvent,
    pub session: Option<Session>,
}

impl AuthEvent {
    pub const fn signed_in(session: Session) -> Self {
        Self {
            kind: AuthChangeEvent::SignedIn,
            session: Some(session),
        }
    }

    pub const fn signed_out() -> Self {
        Self {
            kind: AuthChangeEvent::SignedOut,
            session: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }
}
