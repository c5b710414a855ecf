use std::{future::Future, pin::Pin};

pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs futures on the current thread without waiting for them.
pub trait Spawner {
    fn spawn_local(&self, task: LocalTask);
}
