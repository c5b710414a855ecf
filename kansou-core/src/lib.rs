//! # kansou-core
//!
//! Use cases and page models of the comment board.
//!
//! Everything that talks to the outside world is hidden behind the
//! traits in [`repositories`] and [`gateways`]. All types are meant to
//! be used on a single thread: state lives in `Rc`/`RefCell` and
//! asynchronous work is started through a [`util::spawn::Spawner`].

pub mod entities {
    pub use kansou_entities::{auth::*, comment::*, time::*, user::*};
}

pub mod gateways;
pub mod pages;
pub mod repositories;
pub mod usecases;
pub mod util;

#[cfg(test)]
mod tests;
