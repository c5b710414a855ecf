// Access to the hosted relational store.
// The store enforces its own row-level security policies,
// so every operation may be rejected by the backend.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Backend(String),
    #[error("Unable to reach the backend: {0}")]
    Transport(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[allow(async_fn_in_trait)]
pub trait CommentRepo {
    /// All comments ordered by creation time, newest first.
    async fn recent_comments(&self) -> Result<Vec<Comment>>;

    async fn create_comment(&self, comment: NewComment) -> Result<()>;

    // Deleting a row that is not visible due to the
    // security policies is not an error.
    async fn delete_comment(&self, id: CommentId) -> Result<()>;
}
