use std::{cell::RefCell, fmt, rc::Rc};

use gloo_net::http::RequestBuilder;
use web_sys::RequestCredentials;

use kansou_core::{
    entities::{AuthChangeEvent, AuthEvent, Session, Timestamp},
    util::listeners::{Listeners, Subscription},
};

use crate::{Config, Query};

/// Handle to the backend project.
///
/// Clones share the current session and the registered
/// auth listeners.
#[derive(Clone)]
pub struct BackendClient {
    config: Rc<Config>,
    session: Rc<RefCell<Option<Session>>>,
    listeners: Listeners<AuthEvent>,
}

impl fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendClient")
            .field("url", &self.config.url)
            .field("signed_in", &self.session.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl BackendClient {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Rc::new(config),
            session: Rc::default(),
            listeners: Listeners::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start a query against `table`.
    pub fn from(&self, table: &str) -> Query<'_> {
        Query::new(self, table)
    }

    /// The current session (if any).
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// The current session has expired at `now`.
    #[must_use]
    pub fn session_expired_at(&self, now: Timestamp) -> bool {
        self.session
            .borrow()
            .as_ref()
            .is_some_and(|s| s.is_expired_at(now))
    }

    /// Register a listener for session changes.
    pub fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub(crate) fn set_session(&self, kind: AuthChangeEvent, session: Option<Session>) {
        // The borrow must end before the listeners are called.
        *self.session.borrow_mut() = session.clone();
        log::debug!("Auth state changed: {kind:?}");
        self.listeners.emit(&AuthEvent { kind, session });
    }

    /// Headers that are sent with every request.
    ///
    /// Without a session the public key is used as bearer token.
    #[must_use]
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let token = self
            .session
            .borrow()
            .as_ref()
            .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token.clone());
        vec![
            ("apikey", self.config.anon_key.clone()),
            ("Authorization", format!("Bearer {token}")),
        ]
    }

    pub(crate) fn request(&self, req: RequestBuilder) -> RequestBuilder {
        self.headers()
            .into_iter()
            .fold(req, |req, (name, value)| req.header(name, &value))
            .credentials(RequestCredentials::Omit)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.url)
    }
}
