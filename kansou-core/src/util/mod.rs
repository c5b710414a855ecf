pub mod fetch_guard;
pub mod listeners;
pub mod sort;
pub mod spawn;
