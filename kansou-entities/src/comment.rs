use std::fmt;

use crate::{time::Timestamp, user::UserId};

/// Identifier assigned by the backend on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CommentId(i64);

impl CommentId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_inner(self) -> i64 {
        self.0
    }
}

impl From<i64> for CommentId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<CommentId> for i64 {
    fn from(from: CommentId) -> Self {
        from.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : CommentId,
    pub content    : String,
    pub created_at : Timestamp,
    pub user_id    : Option<UserId>,
}

/// A comment that has not been stored yet.
///
/// `id` and `created_at` are assigned by the backend.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content : String,
    pub user_id : Option<UserId>,
}
