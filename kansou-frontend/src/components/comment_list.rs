use leptos::*;
use time::{macros::format_description, UtcOffset};

use kansou_core::entities::{Comment, CommentId, Timestamp};

#[component]
pub fn CommentList(
    comments: Signal<Vec<Comment>>,
    /// Show a delete button next to every comment.
    #[prop(optional)]
    on_delete: Option<Callback<CommentId>>,
) -> impl IntoView {
    let is_empty = Signal::derive(move || comments.with(Vec::is_empty));
    view! {
      <Show
        when = move || !is_empty.get()
        fallback = || view! { <p>"No comments yet."</p> }
      >
        <ul>
          <For
            each = move || comments.get()
            key = |comment| comment.id
            children = move |comment| view! { <CommentItem comment on_delete /> }
          />
        </ul>
      </Show>
    }
}

#[component]
fn CommentItem(comment: Comment, on_delete: Option<Callback<CommentId>>) -> impl IntoView {
    let Comment {
        id,
        content,
        created_at,
        user_id: _,
    } = comment;
    view! {
      <li>
        <small>{ local_time(created_at) }</small>
        <p>{ content }</p>
        {on_delete.map(|on_delete| view! {
          <button on:click = move |_| on_delete.call(id)>"Delete"</button>
        })}
      </li>
    }
}

fn local_time(timestamp: Timestamp) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    timestamp
        .to_offset(offset)
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| timestamp.format_rfc3339())
}
