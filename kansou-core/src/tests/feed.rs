use std::{cell::RefCell, rc::Rc};

use rand::seq::SliceRandom;

use super::prelude::*;

type Page = FeedPage<Rc<MockCommentRepo>, Rc<MockAuth>, Rc<MockDialogs>, TokioSpawner>;

fn comment(id: i64, created_at: i64) -> Comment {
    Comment::build()
        .id(id)
        .content(&format!("comment {id}"))
        .created_at(created_at)
        .finish()
}

fn new_page(repo: &Rc<MockCommentRepo>, auth: &Rc<MockAuth>, dialogs: &Rc<MockDialogs>) -> Rc<Page> {
    FeedPage::new(
        Rc::clone(repo),
        Rc::clone(auth),
        Rc::clone(dialogs),
        TokioSpawner,
    )
}

#[test]
fn show_newest_comments_first_after_mount() {
    run_local(async {
        let mut comments: Vec<_> = (1..=10).map(|i| comment(i, 100 + i)).collect();
        comments.shuffle(&mut rand::thread_rng());
        let repo = MockCommentRepo::with_comments(comments);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);

        page.mount();
        settle().await;

        let state = page.state();
        assert_eq!(
            MockCommentRepo::ids(&state.comments),
            (1..=10).rev().collect::<Vec<_>>()
        );
        assert_eq!(repo.load_calls.get(), 1);
        assert_eq!(state.refresh_signal, 0);
    });
}

#[test]
fn discard_late_response_of_superseded_fetch() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);

        let first = repo.gate_next_load();
        let second = repo.gate_next_load();
        page.mount();
        page.refresh();
        settle().await;
        assert_eq!(repo.load_calls.get(), 2);

        second.send(vec![comment(2, 200), comment(1, 100)]).unwrap();
        settle().await;
        assert_eq!(MockCommentRepo::ids(&page.state().comments), vec![2, 1]);

        first.send(vec![comment(1, 100)]).unwrap();
        settle().await;
        assert_eq!(MockCommentRepo::ids(&page.state().comments), vec![2, 1]);
    });
}

#[test]
fn discard_early_response_of_superseded_fetch() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);

        let first = repo.gate_next_load();
        let second = repo.gate_next_load();
        page.mount();
        page.refresh();
        settle().await;

        first.send(vec![comment(1, 100)]).unwrap();
        settle().await;
        assert!(page.state().comments.is_empty());

        second.send(vec![comment(2, 200), comment(1, 100)]).unwrap();
        settle().await;
        assert_eq!(MockCommentRepo::ids(&page.state().comments), vec![2, 1]);
    });
}

#[test]
fn ignore_empty_draft() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![comment(1, 100)]);
        let auth = MockAuth::logged_in_as(session_of("a@example.com").user);
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;
        let before = page.state();
        assert!(before.user.is_some());

        for draft in ["", "   "] {
            page.set_text(draft);
            assert_eq!(page.submit().await, SubmitOutcome::EmptyDraft);
        }
        settle().await;

        let after = page.state();
        assert_eq!(after.comments, before.comments);
        assert_eq!(after.refresh_signal, 0);
        assert!(repo.inserted.borrow().is_empty());
        assert_eq!(repo.load_calls.get(), 1);
        assert!(dialogs.alerts.borrow().is_empty());
    });
}

#[test]
fn alert_when_posting_without_login() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;

        page.set_text("Hello");
        assert_eq!(page.submit().await, SubmitOutcome::NotLoggedIn);

        assert_eq!(*dialogs.alerts.borrow(), vec![LOGIN_REQUIRED_MESSAGE]);
        assert!(repo.inserted.borrow().is_empty());
        assert_eq!(page.state().text, "Hello");
    });
}

#[test]
fn clear_draft_and_refetch_exactly_once_after_posting() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![comment(1, 100)]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;

        let session = session_of("a@example.com");
        auth.emit(AuthEvent::signed_in(session.clone()));
        page.set_text("Hello");
        assert_eq!(page.submit().await, SubmitOutcome::Posted);
        settle().await;

        let state = page.state();
        assert!(state.text.is_empty());
        assert_eq!(state.refresh_signal, 1);
        assert_eq!(repo.load_calls.get(), 2);
        assert_eq!(state.comments.len(), 2);
        assert_eq!(state.comments[0].content, "Hello");

        let inserted = repo.inserted.borrow();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].user_id, Some(session.user.id));
    });
}

#[test]
fn keep_draft_if_posting_fails() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        repo.fail_insert.set(true);
        let auth = MockAuth::logged_in_as(session_of("a@example.com").user);
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;

        page.set_text("Hello");
        assert_eq!(page.submit().await, SubmitOutcome::Failed);
        settle().await;

        let state = page.state();
        assert_eq!(state.text, "Hello");
        assert_eq!(state.refresh_signal, 0);
        assert_eq!(repo.load_calls.get(), 1);
        assert!(dialogs.alerts.borrow().is_empty());
    });
}

#[test]
fn keep_snapshot_if_loading_fails() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![comment(1, 100)]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;

        repo.fail_load.set(true);
        page.refresh();
        settle().await;

        assert_eq!(MockCommentRepo::ids(&page.state().comments), vec![1]);
        assert!(dialogs.alerts.borrow().is_empty());
    });
}

#[test]
fn mirror_session_changes() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;
        assert!(page.state().user.is_none());

        let session = session_of("a@example.com");
        auth.emit(AuthEvent::signed_in(session.clone()));
        assert_eq!(page.state().user, Some(session.user));

        auth.emit(AuthEvent::signed_out());
        assert!(page.state().user.is_none());
    });
}

#[test]
fn look_up_current_user_on_mount() {
    run_local(async {
        let user = session_of("a@example.com").user;
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::logged_in_as(user.clone());
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;
        assert_eq!(page.state().user, Some(user));
    });
}

#[test]
fn session_change_supersedes_pending_user_lookup() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        let lookup = auth.gate_current_user();
        page.mount();
        settle().await;

        let session = session_of("b@example.com");
        auth.emit(AuthEvent::signed_in(session.clone()));
        lookup.send(None).unwrap();
        settle().await;

        assert_eq!(page.state().user, Some(session.user));
    });
}

#[test]
fn notify_listener_about_changes() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![comment(1, 100)]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        let rendered = Rc::new(RefCell::new(Vec::<FeedState>::new()));
        {
            let rendered = Rc::clone(&rendered);
            page.on_change(move |state| rendered.borrow_mut().push(state.clone()));
        }
        page.mount();
        settle().await;

        let last = rendered.borrow().last().cloned().unwrap();
        assert_eq!(last, page.state());
        assert_eq!(MockCommentRepo::ids(&last.comments), vec![1]);
    });
}

#[test]
fn stop_following_the_session_after_unmount() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;
        assert_eq!(auth.listeners.len(), 1);

        page.unmount();
        assert!(auth.listeners.is_empty());

        auth.emit(AuthEvent::signed_in(session_of("a@example.com")));
        assert!(page.state().user.is_none());
    });
}

#[test]
fn discard_pending_fetch_after_unmount() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        let pending = repo.gate_next_load();
        page.mount();
        settle().await;

        page.unmount();
        pending.send(vec![comment(1, 100)]).unwrap();
        settle().await;

        assert!(page.state().comments.is_empty());
    });
}

#[test]
fn remount_subscribes_only_once() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        page.unmount();
        page.mount();
        settle().await;
        assert_eq!(auth.listeners.len(), 1);
    });
}

#[test]
fn ask_anonymous_users_to_log_in_before_writing() {
    run_local(async {
        let repo = MockCommentRepo::with_comments(vec![]);
        let auth = MockAuth::new();
        let dialogs = MockDialogs::answering(true);
        let page = new_page(&repo, &auth, &dialogs);
        page.mount();
        settle().await;

        let state = page.state();
        assert!(!state.can_post());
        assert_eq!(state.draft_placeholder(), LOGIN_PLACEHOLDER);

        auth.emit(AuthEvent::signed_in(session_of("a@example.com")));
        let state = page.state();
        assert!(state.can_post());
        assert_eq!(state.draft_placeholder(), DRAFT_PLACEHOLDER);
    });
}
