//! Wire format of the hosted backend.
//!
//! Rows of the `comments` table are exchanged with the REST endpoint
//! (`/rest/v1`), sessions and users with the auth endpoint (`/auth/v1`).

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[cfg(feature = "entity-conversions")]
mod conv;

pub const COMMENTS_TABLE: &str = "comments";

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id         : i64,
    pub content    : String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at : OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id    : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewComment {
    pub content : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id : Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Session {
    pub access_token  : String,
    #[serde(default = "default_token_type")]
    pub token_type    : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in    : Option<i64>,
    /// Seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at    : Option<i64>,
    pub refresh_token : String,
    pub user          : User,
}

/// Request body of the `refresh_token` grant.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct RefreshToken {
    pub refresh_token: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Response of the sign-up endpoint.
///
/// Without email auto-confirmation the backend only returns the new user,
/// otherwise a complete session.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(Session),
    User(User),
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum ErrorCode {
    Status(u16),
    Text(String),
}

/// Error payload of both the REST and the auth endpoint.
///
/// The REST endpoint uses `message`, `details` and `hint`;
/// the auth endpoint either `msg` and `error_code` or the
/// OAuth style `error` and `error_description`.
#[rustfmt::skip]
#[derive(Debug, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Clone, PartialEq, Eq))]
pub struct Error {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code              : Option<ErrorCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message           : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg               : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code        : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error             : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details           : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint              : Option<String>,
}

impl Error {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// The most specific human readable message of the payload.
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error_description.as_deref())
            .or(self.error.as_deref())
            .unwrap_or("Unknown error")
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let Some(details) = &self.details {
            write!(f, " ({details})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
