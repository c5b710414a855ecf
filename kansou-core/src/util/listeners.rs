use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

type Callback<E> = Rc<dyn Fn(&E)>;

struct Registry<E> {
    next_id: u64,
    callbacks: Vec<(u64, Callback<E>)>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
        }
    }
}

impl<E> Registry<E> {
    fn remove(&mut self, id: u64) {
        self.callbacks.retain(|(i, _)| *i != id);
    }

    fn contains(&self, id: u64) -> bool {
        self.callbacks.iter().any(|(i, _)| *i == id)
    }
}

/// A set of callbacks that are notified about events of type `E`.
pub struct Listeners<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self {
            registry: Rc::default(),
        }
    }
}

impl<E> Clone for Listeners<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}

impl<E: 'static> Listeners<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&E) + 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.callbacks.push((id, Rc::new(callback)));
            id
        };
        let registry = Rc::downgrade(&self.registry);
        Subscription::new(move || remove(&registry, id))
    }

    /// Notify all listeners.
    ///
    /// Listeners may subscribe or unsubscribe while being notified.
    /// A listener that has been removed in the meantime is skipped.
    pub fn emit(&self, event: &E) {
        let callbacks: Vec<_> = self
            .registry
            .borrow()
            .callbacks
            .iter()
            .map(|(id, cb)| (*id, Rc::clone(cb)))
            .collect();
        for (id, callback) in callbacks {
            if self.registry.borrow().contains(id) {
                callback(event);
            }
        }
    }
}

impl<E> Listeners<E> {
    pub fn len(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn remove<E>(registry: &Weak<RefCell<Registry<E>>>, id: u64) {
    if let Some(registry) = registry.upgrade() {
        registry.borrow_mut().remove(id);
    }
}

/// Handle of a registered listener.
///
/// The listener is removed exactly once, either by calling
/// [`Subscription::unsubscribe`] or when the handle is dropped.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F>(unsubscribe: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
