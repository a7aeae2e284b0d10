use crate::application::error::ServiceError;
use crate::application::ports::post_repository::PostRepository;
use crate::application::services::ids;
use crate::domain::posts::post::Post;

pub struct GetPost<'a, R: PostRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostRepository + ?Sized> GetPost<'a, R> {
    pub async fn execute(&self, raw_id: &str) -> Result<Post, ServiceError> {
        tracing::debug!(raw_id, "post_service.get_by_id");
        let id = ids::parse_id(raw_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("post"))
    }
}
