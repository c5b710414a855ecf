use std::rc::Rc;

use super::Observable;
use crate::{
    entities::*,
    gateways::{auth::AuthGateway, dialog::DialogGateway},
    usecases,
};

pub const CONFIRMATION_SENT_MESSAGE: &str =
    "A confirmation email has been sent. Please follow the link in it to activate your account.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    /// A request is in flight.
    pub loading: bool,
}

impl AuthForm {
    fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Succeeded,
    /// Nothing was sent to the backend.
    Skipped,
    Failed,
}

/// Login, sign-up and logout.
///
/// The widget does not know whether a user is logged in;
/// the page that embeds it observes the session.
pub struct AuthWidget<A, D> {
    auth: A,
    dialogs: D,
    form: Observable<AuthForm>,
}

impl<A, D> AuthWidget<A, D>
where
    A: AuthGateway,
    D: DialogGateway,
{
    pub fn new(auth: A, dialogs: D) -> Self {
        Self {
            auth,
            dialogs,
            form: Observable::new(),
        }
    }

    pub fn form(&self) -> AuthForm {
        self.form.get()
    }

    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&AuthForm) + 'static,
    {
        self.form.set_listener(Some(Rc::new(listener)));
    }

    pub fn clear_listener(&self) {
        self.form.set_listener(None);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.form.update(|f| f.email = email);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        let password = password.into();
        self.form.update(|f| f.password = password);
    }

    pub async fn login(&self) -> AuthOutcome {
        let Some(credentials) = self.start_request() else {
            return AuthOutcome::Skipped;
        };
        let result = usecases::login_with_password(&self.auth, &credentials).await;
        self.form.update(|f| f.loading = false);
        match result {
            Ok(_) => {
                log::info!("Successfully logged in");
                self.form.update(|f| f.password.clear());
                AuthOutcome::Succeeded
            }
            Err(usecases::Error::EmptyCredentials) => AuthOutcome::Skipped,
            Err(err) => {
                log::warn!("Unable to login with {}: {err}", credentials.email);
                self.dialogs.alert(&format!("Login failed: {err}"));
                AuthOutcome::Failed
            }
        }
    }

    pub async fn sign_up(&self) -> AuthOutcome {
        let Some(credentials) = self.start_request() else {
            return AuthOutcome::Skipped;
        };
        let result = usecases::sign_up_with_password(&self.auth, &credentials).await;
        self.form.update(|f| f.loading = false);
        match result {
            Ok(SignUp::ConfirmationPending(_)) => {
                log::info!("Sign-up of {} awaits confirmation", credentials.email);
                self.form.update(|f| f.password.clear());
                self.dialogs.alert(CONFIRMATION_SENT_MESSAGE);
                AuthOutcome::Succeeded
            }
            Ok(SignUp::SignedIn(_)) => {
                log::info!("Signed up and logged in");
                self.form.update(|f| f.password.clear());
                AuthOutcome::Succeeded
            }
            Err(usecases::Error::EmptyCredentials) => AuthOutcome::Skipped,
            Err(err) => {
                log::warn!("Unable to sign up with {}: {err}", credentials.email);
                self.dialogs.alert(&format!("Sign-up failed: {err}"));
                AuthOutcome::Failed
            }
        }
    }

    pub async fn logout(&self) -> AuthOutcome {
        match usecases::logout(&self.auth).await {
            Ok(()) => AuthOutcome::Succeeded,
            Err(err) => {
                log::error!("Unable to logout: {err}");
                AuthOutcome::Failed
            }
        }
    }

    // Returns `None` if a request is already in flight
    // or if the form is incomplete.
    fn start_request(&self) -> Option<Credentials> {
        let (loading, credentials) = self.form.with(|f| (f.loading, f.credentials()));
        if loading || !credentials.is_complete() {
            return None;
        }
        self.form.update(|f| f.loading = true);
        Some(credentials)
    }
}
