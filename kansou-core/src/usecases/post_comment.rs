use super::prelude::*;

/// Store a new comment of the given author.
///
/// A missing author is checked first, so an anonymous user gets
/// feedback even if the draft is still empty.
pub async fn post_comment<R>(repo: &R, author: Option<&User>, content: &str) -> Result<()>
where
    R: CommentRepo,
{
    let Some(author) = author else {
        return Err(Error::Unauthorized);
    };
    if content.trim().is_empty() {
        return Err(Error::EmptyComment);
    }
    let new_comment = NewComment {
        content: content.to_owned(),
        user_id: Some(author.id.clone()),
    };
    log::debug!("Posting comment of user {}", author.id);
    repo.create_comment(new_comment).await?;
    Ok(())
}
