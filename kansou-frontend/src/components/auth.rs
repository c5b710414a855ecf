use std::rc::Rc;

use leptos::{ev, *};

use kansou_core::{entities::User, pages::AuthWidget};
use kansou_frontend_api::BackendClient;

use crate::browser::BrowserDialogs;

type Widget = AuthWidget<BackendClient, BrowserDialogs>;

/// Login and sign-up form or the logout button,
/// depending on the session of the embedding page.
#[component]
pub fn AuthPanel(client: BackendClient, user: Signal<Option<User>>) -> impl IntoView {
    let widget = Rc::new(Widget::new(client, BrowserDialogs));
    let form = RwSignal::new(widget.form());
    widget.on_change(move |f| form.set(f.clone()));
    let widget = store_value(widget);
    on_cleanup(move || widget.with_value(|w| w.clear_listener()));

    let login = move || {
        let widget = widget.get_value();
        spawn_local(async move {
            widget.login().await;
        });
    };
    let sign_up = move || {
        let widget = widget.get_value();
        spawn_local(async move {
            widget.sign_up().await;
        });
    };
    let logout = move || {
        let widget = widget.get_value();
        spawn_local(async move {
            widget.logout().await;
        });
    };

    let disabled = Signal::derive(move || form.with(|f| f.loading));

    move || match user.get() {
        Some(user) => view! {
          <div>
            <span>{ format!("Signed in as {}", user.display_name()) }</span>
            <button on:click = move |_| logout()>"Logout"</button>
          </div>
        }
        .into_view(),
        None => view! {
          <form on:submit=|ev| ev.prevent_default()>
            <input
              type = "email"
              placeholder = "Email address"
              prop:value = move || form.with(|f| f.email.clone())
              prop:disabled = move || disabled.get()
              on:input = move |ev| {
                let val = event_target_value(&ev);
                widget.with_value(|w| w.set_email(val));
              }
            />
            <input
              type = "password"
              placeholder = "Password"
              prop:value = move || form.with(|f| f.password.clone())
              prop:disabled = move || disabled.get()
              on:input = move |ev| {
                let val = event_target_value(&ev);
                widget.with_value(|w| w.set_password(val));
              }
              on:keyup = move |ev: ev::KeyboardEvent| {
                if ev.key() == "Enter" {
                  login();
                }
              }
            />
            <button prop:disabled = move || disabled.get() on:click = move |_| login()>
              "Log in"
            </button>
            <button prop:disabled = move || disabled.get() on:click = move |_| sign_up()>
              "Sign up"
            </button>
          </form>
        }
        .into_view(),
    }
}
