use async_trait::async_trait;

use crate::domain::posts::post::Post;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn save(&self, post: &Post) -> anyhow::Result<Post>;
    async fn find_all(&self) -> anyhow::Result<Vec<Post>>;
    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Post>>;
    async fn delete(&self, post: &Post) -> anyhow::Result<()>;
}
