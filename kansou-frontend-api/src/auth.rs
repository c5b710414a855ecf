use gloo_net::http::Request;

use kansou_boundary as boundary;
use kansou_core::entities::{AuthChangeEvent, Credentials, Session, SignUp, Timestamp, User};

use crate::{into_empty, into_json, BackendClient, Error, Result};

impl BackendClient {
    pub async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session> {
        let url = self.auth_url("token?grant_type=password");
        let body = boundary::Credentials::from(credentials.clone());
        let response = self.request(Request::post(&url)).json(&body)?.send().await?;
        let session = into_session(into_json(response).await?);
        self.set_session(AuthChangeEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUp> {
        let url = self.auth_url("signup");
        let body = boundary::Credentials::from(credentials.clone());
        let response = self.request(Request::post(&url)).json(&body)?.send().await?;
        let sign_up = match into_json(response).await? {
            boundary::SignUpResponse::Session(session) => SignUp::SignedIn(into_session(session)),
            boundary::SignUpResponse::User(user) => SignUp::ConfirmationPending(user.into()),
        };
        if let SignUp::SignedIn(session) = &sign_up {
            self.set_session(AuthChangeEvent::SignedIn, Some(session.clone()));
        }
        Ok(sign_up)
    }

    /// Revoke the current session.
    ///
    /// The local session is dropped even if the backend
    /// could not be reached.
    pub async fn sign_out(&self) -> Result<()> {
        if self.session().is_none() {
            return Ok(());
        }
        let url = self.auth_url("logout");
        let result = match self.request(Request::post(&url)).send().await {
            Ok(response) => into_empty(response).await,
            Err(err) => Err(err.into()),
        };
        self.set_session(AuthChangeEvent::SignedOut, None);
        result
    }

    /// Ask the backend for the user of the current session.
    ///
    /// Changes of the user data are applied to the session.
    pub async fn current_user(&self) -> Result<Option<User>> {
        self.ensure_fresh_session().await;
        if self.session().is_none() {
            return Ok(None);
        }
        let url = self.auth_url("user");
        let response = self.request(Request::get(&url)).send().await?;
        let user: User = into_json::<boundary::User>(response).await?.into();
        self.update_user(&user);
        Ok(Some(user))
    }

    /// Exchange the refresh token for a new session.
    pub async fn refresh_session(&self) -> Result<Option<Session>> {
        let Some(refresh_token) = self.session().map(|s| s.refresh_token) else {
            return Ok(None);
        };
        let url = self.auth_url("token?grant_type=refresh_token");
        let body = boundary::RefreshToken { refresh_token };
        let response = self.request(Request::post(&url)).json(&body)?.send().await?;
        let session = into_session(into_json(response).await?);
        self.set_session(AuthChangeEvent::TokenRefreshed, Some(session.clone()));
        Ok(Some(session))
    }

    /// Continue a session that was persisted by a previous visit.
    pub async fn restore_session(&self, session: Option<Session>) {
        self.set_session(AuthChangeEvent::InitialSession, session);
        self.ensure_fresh_session().await;
    }

    /// Refresh an expired session before it is used for a request.
    ///
    /// If that fails, the user is treated as signed out.
    pub(crate) async fn ensure_fresh_session(&self) {
        if !self.session_expired_at(Timestamp::now()) {
            return;
        }
        log::info!("Refreshing expired session");
        if let Err(err) = self.refresh_session().await {
            self.drop_session_after_failed_refresh(&err);
        }
    }

    fn drop_session_after_failed_refresh(&self, err: &Error) {
        log::warn!("Unable to refresh session: {err}");
        self.set_session(AuthChangeEvent::SignedOut, None);
    }

    fn update_user(&self, user: &User) {
        let Some(mut session) = self.session() else {
            return;
        };
        if session.user == *user {
            return;
        }
        session.user = user.clone();
        self.set_session(AuthChangeEvent::UserUpdated, Some(session));
    }
}

// The auth endpoint might only return the lifetime of the token.
fn into_session(mut session: boundary::Session) -> Session {
    if session.expires_at.is_none() {
        session.expires_at = session
            .expires_in
            .map(|secs| Timestamp::now().unix_seconds() + secs);
    }
    session.into()
}
