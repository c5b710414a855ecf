mod auth;
mod comment_list;

pub use self::{auth::*, comment_list::*};
