use thiserror::Error;

use crate::{entities::*, util::listeners::Subscription};

#[derive(Debug, Error)]
pub enum Error {
    /// The auth service refused the request, e.g. because of
    /// invalid credentials or an unconfirmed account.
    #[error("{0}")]
    Rejected(String),
    #[error("Unable to reach the auth service: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<SignUp>;

    async fn sign_out(&self) -> Result<()>;

    /// The user of the current session (if any).
    async fn current_user(&self) -> Result<Option<User>>;

    /// Register a listener that is notified about every session change
    /// until the returned [`Subscription`] is released.
    fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + 'static;
}
