use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use leptos_router::*;

use kansou_boundary as boundary;
use kansou_frontend_api::{self as api, BackendClient, Config};

mod browser;
mod components;
mod pages;

use self::pages::*;

const SESSION_STORAGE_KEY: &str = "kansou-session";

/// Settings that were captured when the application was built.
fn config() -> Config {
    Config::from_lookup(|name| {
        let value = match name {
            api::BACKEND_URL => option_env!("KANSOU_BACKEND_URL"),
            api::BACKEND_ANON_KEY => option_env!("KANSOU_BACKEND_ANON_KEY"),
            _ => None,
        };
        value.map(ToOwned::to_owned)
    })
    .unwrap_or_else(|err| panic!("Invalid backend configuration: {err}"))
}

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- init API -- //

    let client = BackendClient::new(config());

    // -- session persistence -- //

    let persistence = client.on_auth_state_change(|event| {
        if let Some(session) = &event.session {
            log::debug!("Session changed: save it in LocalStorage");
            let session = boundary::Session::from(session.clone());
            if let Err(err) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
                log::warn!("Unable to save session: {err}");
            }
        } else {
            log::debug!("Session closed: delete it from LocalStorage");
            LocalStorage::delete(SESSION_STORAGE_KEY);
        }
    });
    on_cleanup(move || persistence.unsubscribe());

    let stored_session = LocalStorage::get::<boundary::Session>(SESSION_STORAGE_KEY)
        .ok()
        .map(Into::into);
    spawn_local({
        let client = client.clone();
        async move { client.restore_session(stored_session).await }
    });

    let client = store_value(client);

    view! {
      <Router>
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! { <Home client = client.get_value() /> }
            />
            <Route
              path=Page::Delete.path()
              view=move || view! { <Delete client = client.get_value() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
