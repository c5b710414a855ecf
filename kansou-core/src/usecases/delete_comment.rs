use super::prelude::*;

pub async fn delete_comment<R>(repo: &R, id: CommentId) -> Result<()>
where
    R: CommentRepo,
{
    log::debug!("Deleting comment {id}");
    Ok(repo.delete_comment(id).await?)
}
