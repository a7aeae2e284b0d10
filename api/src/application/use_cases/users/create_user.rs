use crate::application::error::ServiceError;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::ids;
use crate::domain::users::user::{User, UserDraft};

pub struct CreateUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> CreateUser<'a, R> {
    pub async fn execute(&self, draft: UserDraft) -> Result<User, ServiceError> {
        let user = draft.into_user(ids::generate_id());
        tracing::debug!(user_id = user.id, "user_service.create");
        Ok(self.repo.save(&user).await?)
    }
}
