use kansou_boundary as boundary;
use kansou_core::{
    entities::*,
    gateways::auth::{self, AuthGateway},
    repositories::{self, CommentRepo},
    util::listeners::Subscription,
};

use crate::{BackendClient, Error, Order};

impl From<Error> for repositories::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(err) => Self::Backend(err.to_string()),
            Error::Fetch(msg) => Self::Transport(msg),
            Error::Decode(msg) => Self::Other(anyhow::anyhow!("Unexpected response: {msg}")),
        }
    }
}

impl From<Error> for auth::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(err) => Self::Rejected(err.to_string()),
            Error::Fetch(msg) => Self::Transport(msg),
            Error::Decode(msg) => Self::Transport(format!("Unexpected response: {msg}")),
        }
    }
}

impl CommentRepo for BackendClient {
    async fn recent_comments(&self) -> repositories::Result<Vec<Comment>> {
        let rows: Vec<boundary::Comment> = self
            .from(boundary::COMMENTS_TABLE)
            .select("*")
            .order("created_at", Order::Descending)
            .execute()
            .await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create_comment(&self, comment: NewComment) -> repositories::Result<()> {
        let row = boundary::NewComment::from(comment);
        self.from(boundary::COMMENTS_TABLE).insert(&[row]).await?;
        Ok(())
    }

    async fn delete_comment(&self, id: CommentId) -> repositories::Result<()> {
        self.from(boundary::COMMENTS_TABLE)
            .eq("id", id)
            .delete()
            .await?;
        Ok(())
    }
}

impl AuthGateway for BackendClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> auth::Result<Session> {
        Ok(BackendClient::sign_in_with_password(self, credentials).await?)
    }

    async fn sign_up(&self, credentials: &Credentials) -> auth::Result<SignUp> {
        Ok(BackendClient::sign_up(self, credentials).await?)
    }

    async fn sign_out(&self) -> auth::Result<()> {
        Ok(BackendClient::sign_out(self).await?)
    }

    async fn current_user(&self) -> auth::Result<Option<User>> {
        Ok(BackendClient::current_user(self).await?)
    }

    fn on_auth_state_change<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthEvent) + 'static,
    {
        BackendClient::on_auth_state_change(self, listener)
    }
}
