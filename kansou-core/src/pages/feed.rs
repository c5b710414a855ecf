use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::Observable;
use crate::{
    entities::*,
    gateways::{auth::AuthGateway, dialog::DialogGateway},
    repositories::CommentRepo,
    usecases,
    util::{fetch_guard::FetchGuard, listeners::Subscription, spawn::Spawner},
};

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to post a comment.";
pub const DRAFT_PLACEHOLDER: &str = "Write a comment";
pub const LOGIN_PLACEHOLDER: &str = "Log in to post a comment";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    /// The draft of the next comment.
    pub text: String,
    /// Newest first.
    pub comments: Vec<Comment>,
    /// Incremented after every successful post.
    pub refresh_signal: u64,
    pub user: Option<User>,
}

impl FeedState {
    /// Only signed in users can write a comment.
    pub const fn can_post(&self) -> bool {
        self.user.is_some()
    }

    pub const fn draft_placeholder(&self) -> &'static str {
        if self.can_post() {
            DRAFT_PLACEHOLDER
        } else {
            LOGIN_PLACEHOLDER
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted,
    NotLoggedIn,
    EmptyDraft,
    Failed,
}

/// The main page: post comments and read the feed.
pub struct FeedPage<R, A, D, S> {
    repo: R,
    auth: A,
    dialogs: D,
    spawner: S,
    state: Observable<FeedState>,
    mounted: Cell<bool>,
    comments_guard: FetchGuard,
    user_guard: FetchGuard,
    auth_subscription: RefCell<Option<Subscription>>,
}

impl<R, A, D, S> FeedPage<R, A, D, S>
where
    R: CommentRepo + 'static,
    A: AuthGateway + 'static,
    D: DialogGateway + 'static,
    S: Spawner + 'static,
{
    pub fn new(repo: R, auth: A, dialogs: D, spawner: S) -> Rc<Self> {
        Rc::new(Self {
            repo,
            auth,
            dialogs,
            spawner,
            state: Observable::new(),
            mounted: Cell::new(false),
            comments_guard: FetchGuard::new(),
            user_guard: FetchGuard::new(),
            auth_subscription: RefCell::new(None),
        })
    }

    pub fn state(&self) -> FeedState {
        self.state.get()
    }

    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&FeedState) + 'static,
    {
        self.state.set_listener(Some(Rc::new(listener)));
    }

    /// Load the feed and start following the session.
    pub fn mount(self: &Rc<Self>) {
        log::debug!("Mount feed page");
        self.mounted.set(true);
        self.fetch_comments();
        self.watch_user();
    }

    /// Stop following the session and ignore all pending responses.
    pub fn unmount(&self) {
        log::debug!("Unmount feed page");
        self.mounted.set(false);
        self.comments_guard.invalidate();
        self.user_guard.invalidate();
        if let Some(subscription) = self.auth_subscription.borrow_mut().take() {
            subscription.unsubscribe();
        }
        self.state.set_listener(None);
    }

    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.update(|s| s.text = text);
    }

    /// Trigger a new fetch cycle.
    pub fn refresh(self: &Rc<Self>) {
        self.state.update(|s| s.refresh_signal += 1);
        self.fetch_comments();
    }

    pub async fn submit(self: &Rc<Self>) -> SubmitOutcome {
        let (user, text) = self.state.with(|s| (s.user.clone(), s.text.clone()));
        match usecases::post_comment(&self.repo, user.as_ref(), &text).await {
            Ok(()) => {
                self.state.update(|s| s.text.clear());
                self.refresh();
                SubmitOutcome::Posted
            }
            Err(usecases::Error::Unauthorized) => {
                self.dialogs.alert(LOGIN_REQUIRED_MESSAGE);
                SubmitOutcome::NotLoggedIn
            }
            Err(usecases::Error::EmptyComment) => SubmitOutcome::EmptyDraft,
            Err(err) => {
                log::warn!("Unable to post comment: {err}");
                SubmitOutcome::Failed
            }
        }
    }

    fn fetch_comments(self: &Rc<Self>) {
        if !self.mounted.get() {
            return;
        }
        let ticket = self.comments_guard.begin();
        let page = Rc::clone(self);
        self.spawner.spawn_local(Box::pin(async move {
            match usecases::load_comments(&page.repo).await {
                Ok(comments) => {
                    if ticket.is_current() {
                        page.state.update(|s| s.comments = comments);
                    } else {
                        log::debug!("Discard outdated comments");
                    }
                }
                Err(err) => {
                    log::error!("Unable to load comments: {err}");
                }
            }
        }));
    }

    fn watch_user(self: &Rc<Self>) {
        let ticket = self.user_guard.begin();
        let page = Rc::clone(self);
        self.spawner.spawn_local(Box::pin(async move {
            match usecases::current_user(&page.auth).await {
                Ok(user) => {
                    if ticket.is_current() {
                        page.state.update(|s| s.user = user);
                    }
                }
                Err(err) => {
                    log::warn!("Unable to fetch the current user: {err}");
                }
            }
        }));
        let page = Rc::downgrade(self);
        let subscription = self.auth.on_auth_state_change(move |event: &AuthEvent| {
            let Some(page) = page.upgrade() else {
                return;
            };
            log::debug!("Auth state changed: {:?}", event.kind);
            // A pending lookup of the current user is outdated now.
            page.user_guard.invalidate();
            let user = event.user().cloned();
            page.state.update(|s| s.user = user);
        });
        if let Some(previous) = self.auth_subscription.replace(Some(subscription)) {
            previous.unsubscribe();
        }
    }
}
