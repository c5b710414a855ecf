use crate::{gateways::auth, repositories};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Missing email or password")]
    EmptyCredentials,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error(transparent)]
    Auth(#[from] auth::Error),
}
