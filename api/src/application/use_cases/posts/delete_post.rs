use crate::application::error::ServiceError;
use crate::application::ports::post_repository::PostRepository;
use crate::application::services::ids;

pub struct DeletePost<'a, R: PostRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostRepository + ?Sized> DeletePost<'a, R> {
    pub async fn execute(&self, raw_id: &str) -> Result<(), ServiceError> {
        tracing::debug!(raw_id, "post_service.delete");
        let id = ids::parse_id(raw_id)?;
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("post"))?;
        self.repo.delete(&post).await?;
        Ok(())
    }
}
