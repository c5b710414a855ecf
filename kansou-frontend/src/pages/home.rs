use leptos::*;
use leptos_router::*;

use kansou_core::pages::{FeedPage, FeedState, SubmitOutcome};
use kansou_frontend_api::BackendClient;

use crate::{
    browser::{BrowserDialogs, LeptosSpawner},
    components::*,
    Page,
};

type Feed = FeedPage<BackendClient, BackendClient, BrowserDialogs, LeptosSpawner>;

#[component]
pub fn Home(client: BackendClient) -> impl IntoView {
    let client_for_auth = client.clone();
    let page = Feed::new(client.clone(), client, BrowserDialogs, LeptosSpawner);

    // -- signals -- //

    let state = RwSignal::new(page.state());
    page.on_change(move |s| state.set(s.clone()));

    let text = Signal::derive(move || state.with(|s| s.text.clone()));
    let user = Signal::derive(move || state.with(|s| s.user.clone()));
    let comments = Signal::derive(move || state.with(|s| s.comments.clone()));
    let can_post = Signal::derive(move || state.with(FeedState::can_post));
    let placeholder = Signal::derive(move || state.with(FeedState::draft_placeholder));

    // -- lifecycle -- //

    page.mount();
    let page = store_value(page);
    on_cleanup(move || page.with_value(|p| p.unmount()));

    // -- actions -- //

    let submit = move || {
        let page = page.get_value();
        spawn_local(async move {
            if page.submit().await == SubmitOutcome::Failed {
                log::debug!("Keeping the draft of the failed comment");
            }
        });
    };

    view! {
      <section>
        <h1>"Kansou"</h1>
        <AuthPanel client = client_for_auth user />
        <form on:submit=move |ev| {
          ev.prevent_default();
          submit();
        }>
          <textarea
            placeholder = move || placeholder.get()
            prop:value = move || text.get()
            prop:disabled = move || !can_post.get()
            on:input = move |ev| {
              let val = event_target_value(&ev);
              page.with_value(|p| p.set_text(val));
            }
          />
          <button type="submit" prop:disabled = move || !can_post.get()>"Post"</button>
        </form>
        <CommentList comments />
        <p>
          <A href=Page::Delete.path()>"Manage comments"</A>
        </p>
      </section>
    }
}
