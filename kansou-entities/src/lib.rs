#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # kansou-entities
//!
//! Reusable, agnostic domain entities for the Kansou comment board.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod auth;
pub mod comment;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
