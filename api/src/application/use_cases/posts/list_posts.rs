use crate::application::error::ServiceError;
use crate::application::ports::post_repository::PostRepository;
use crate::domain::posts::post::Post;

pub struct ListPosts<'a, R: PostRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PostRepository + ?Sized> ListPosts<'a, R> {
    pub async fn execute(&self) -> Result<Vec<Post>, ServiceError> {
        tracing::debug!("post_service.find_all");
        Ok(self.repo.find_all().await?)
    }
}
