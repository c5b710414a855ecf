mod delete;
mod home;

#[derive(Debug, Clone, Copy, Default)]
pub enum Page {
    #[default]
    Home,
    Delete,
}

impl Page {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Delete => "/delete",
        }
    }
}

pub use self::{delete::*, home::*};
