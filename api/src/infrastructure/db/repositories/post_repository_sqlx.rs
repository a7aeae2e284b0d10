use async_trait::async_trait;
use sqlx::Row;
use sqlx::mysql::MySqlRow;

use crate::application::ports::post_repository::PostRepository;
use crate::domain::posts::post::Post;
use crate::infrastructure::db::DbPool;

pub struct SqlxPostRepository {
    pub pool: DbPool,
}

impl SqlxPostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_post(row: MySqlRow) -> Post {
    Post {
        id: row.get("id"),
        title: row.get("title"),
        text: row.get("text"),
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn save(&self, post: &Post) -> anyhow::Result<Post> {
        sqlx::query(r#"INSERT INTO posts (id, title, `text`) VALUES (?, ?, ?)"#)
            .bind(post.id)
            .bind(&post.title)
            .bind(&post.text)
            .execute(&self.pool)
            .await?;
        Ok(post.clone())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Post>> {
        let rows = sqlx::query(r#"SELECT id, title, `text` FROM posts ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_post).collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query(r#"SELECT id, title, `text` FROM posts WHERE id = ?"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_post))
    }

    async fn delete(&self, post: &Post) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(post.id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
