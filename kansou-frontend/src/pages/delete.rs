use leptos::*;
use leptos_router::*;

use kansou_core::{entities::CommentId, pages::AdminPage};
use kansou_frontend_api::BackendClient;

use crate::{
    browser::{BrowserDialogs, LeptosSpawner},
    components::*,
    Page,
};

#[component]
pub fn Delete(client: BackendClient) -> impl IntoView {
    let page = AdminPage::new(client, BrowserDialogs, LeptosSpawner);

    let state = RwSignal::new(page.state());
    page.on_change(move |s| state.set(s.clone()));
    let comments = Signal::derive(move || state.with(|s| s.comments.clone()));

    page.mount();
    let page = store_value(page);
    on_cleanup(move || page.with_value(|p| p.unmount()));

    let on_delete = Callback::new(move |id: CommentId| {
        let page = page.get_value();
        spawn_local(async move {
            let outcome = page.delete(id).await;
            log::debug!("Deletion of comment {id}: {outcome:?}");
        });
    });

    view! {
      <section>
        <h1>"Manage comments"</h1>
        <CommentList comments on_delete />
        <p>
          <A href=Page::Home.path()>"Back to the feed"</A>
        </p>
      </section>
    }
}
