//! Framework-agnostic models of the pages.
//!
//! A page model owns the state that is rendered, performs the
//! asynchronous backend calls and notifies a single listener
//! whenever its state changed.

mod admin;
mod auth;
mod feed;

pub use self::{admin::*, auth::*, feed::*};

use std::{cell::RefCell, rc::Rc};

/// Holds the state of a page and the listener that renders it.
struct Observable<T> {
    state: RefCell<T>,
    listener: RefCell<Option<Rc<dyn Fn(&T)>>>,
}

impl<T: Clone + Default> Observable<T> {
    fn new() -> Self {
        Self {
            state: RefCell::new(T::default()),
            listener: RefCell::new(None),
        }
    }

    fn get(&self) -> T {
        self.state.borrow().clone()
    }

    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow())
    }

    fn set_listener(&self, listener: Option<Rc<dyn Fn(&T)>>) {
        *self.listener.borrow_mut() = listener;
    }

    // The listener receives a snapshot, so it may call back into
    // the page without running into a borrowed state.
    fn update(&self, f: impl FnOnce(&mut T)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(&snapshot);
        }
    }
}
