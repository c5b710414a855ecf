mod delete_comment;
mod error;
mod load_comments;
mod login;
mod logout;
mod post_comment;
mod sign_up;

pub use self::{
    delete_comment::*, error::Error, load_comments::*, login::*, logout::*, post_comment::*,
    sign_up::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::auth::AuthGateway, repositories::CommentRepo};
}
use self::prelude::*;

pub async fn current_user<A>(auth: &A) -> Result<Option<User>>
where
    A: AuthGateway,
{
    Ok(auth.current_user().await?)
}
