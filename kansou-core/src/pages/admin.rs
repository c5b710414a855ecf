use std::{cell::Cell, rc::Rc};

use super::Observable;
use crate::{
    entities::*,
    gateways::dialog::DialogGateway,
    repositories::CommentRepo,
    usecases,
    util::{fetch_guard::FetchGuard, spawn::Spawner},
};

pub const CONFIRM_DELETE_MESSAGE: &str = "Do you really want to delete this comment permanently?";
pub const DELETE_FAILED_MESSAGE: &str =
    "Deleting the comment failed. Please check the row-level security policies of the comments table.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminState {
    /// Newest first.
    pub comments: Vec<Comment>,
    /// Incremented after every successful deletion.
    pub refresh_signal: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
}

/// The admin page: list all comments and delete single ones.
pub struct AdminPage<R, D, S> {
    repo: R,
    dialogs: D,
    spawner: S,
    state: Observable<AdminState>,
    mounted: Cell<bool>,
    guard: FetchGuard,
}

impl<R, D, S> AdminPage<R, D, S>
where
    R: CommentRepo + 'static,
    D: DialogGateway + 'static,
    S: Spawner + 'static,
{
    pub fn new(repo: R, dialogs: D, spawner: S) -> Rc<Self> {
        Rc::new(Self {
            repo,
            dialogs,
            spawner,
            state: Observable::new(),
            mounted: Cell::new(false),
            guard: FetchGuard::new(),
        })
    }

    pub fn state(&self) -> AdminState {
        self.state.get()
    }

    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&AdminState) + 'static,
    {
        self.state.set_listener(Some(Rc::new(listener)));
    }

    pub fn mount(self: &Rc<Self>) {
        log::debug!("Mount admin page");
        self.mounted.set(true);
        self.fetch_comments();
    }

    pub fn unmount(&self) {
        log::debug!("Unmount admin page");
        self.mounted.set(false);
        self.guard.invalidate();
        self.state.set_listener(None);
    }

    pub fn refresh(self: &Rc<Self>) {
        self.state.update(|s| s.refresh_signal += 1);
        self.fetch_comments();
    }

    pub async fn delete(self: &Rc<Self>, id: CommentId) -> DeleteOutcome {
        if !self.dialogs.confirm(CONFIRM_DELETE_MESSAGE) {
            return DeleteOutcome::Cancelled;
        }
        match usecases::delete_comment(&self.repo, id).await {
            Ok(()) => {
                self.refresh();
                DeleteOutcome::Deleted
            }
            Err(err) => {
                log::error!("Unable to delete comment {id}: {err}");
                self.dialogs.alert(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }

    fn fetch_comments(self: &Rc<Self>) {
        if !self.mounted.get() {
            return;
        }
        let ticket = self.guard.begin();
        let page = Rc::clone(self);
        self.spawner.spawn_local(Box::pin(async move {
            let result = usecases::load_comments(&page.repo).await;
            if !ticket.is_current() {
                log::debug!("Discard outdated comments");
                return;
            }
            match result {
                Ok(comments) => {
                    page.state.update(|s| s.comments = comments);
                }
                Err(err) => {
                    log::error!("Unable to load comments: {err}");
                }
            }
        }));
    }
}
