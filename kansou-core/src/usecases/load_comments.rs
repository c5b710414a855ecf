use super::prelude::*;
use crate::util::sort::NewestFirst;

pub async fn load_comments<R>(repo: &R) -> Result<Vec<Comment>>
where
    R: CommentRepo,
{
    let mut comments = repo.recent_comments().await?;
    // Rows inserted concurrently by other clients must not
    // break the order even if the backend returns them unsorted.
    comments.sort_newest_first();
    log::debug!("Loaded {} comments", comments.len());
    Ok(comments)
}
