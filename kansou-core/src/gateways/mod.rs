pub mod auth;
pub mod dialog;
