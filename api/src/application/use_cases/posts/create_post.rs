use crate::application::error::ServiceError;
use crate::application::ports::post_repository::PostRepository;
use crate::application::services::ids;
use crate::domain::posts::post::{Post, PostDraft};

pub struct CreatePost<'a, R: PostRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostRepository + ?Sized> CreatePost<'a, R> {
    /// Expects a draft that already passed `validate_post`.
    pub async fn execute(&self, draft: PostDraft) -> Result<Post, ServiceError> {
        let post = draft.into_post(ids::generate_id());
        tracing::debug!(post_id = post.id, "post_service.create");
        Ok(self.repo.save(&post).await?)
    }
}
