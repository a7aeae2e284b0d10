use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::post_repository::PostRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::posts::post::Post;
use crate::domain::users::user::User;

#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: Mutex<BTreeMap<i64, Post>>,
    pub fail: bool,
}

impl InMemoryPostRepository {
    pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
        let repo = Self::default();
        {
            let mut rows = repo.rows.lock().unwrap();
            for p in posts {
                rows.insert(p.id, p);
            }
        }
        repo
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, post: &Post) -> anyhow::Result<Post> {
        self.check()?;
        self.rows.lock().unwrap().insert(post.id, post.clone());
        Ok(post.clone())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Post>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Post>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, post: &Post) -> anyhow::Result<()> {
        self.check()?;
        self.rows.lock().unwrap().remove(&post.id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepository {
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::default();
        {
            let mut rows = repo.rows.lock().unwrap();
            for u in users {
                rows.insert(u.id, u);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> anyhow::Result<User> {
        self.rows.lock().unwrap().insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<User>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, user: &User) -> anyhow::Result<()> {
        self.rows.lock().unwrap().remove(&user.id);
        Ok(())
    }
}

pub fn post(id: i64, title: &str, text: &str) -> Post {
    Post {
        id,
        title: title.into(),
        text: text.into(),
    }
}

pub fn user(id: i64, name: &str, email: &str) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
    }
}
