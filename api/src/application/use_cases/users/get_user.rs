use crate::application::error::ServiceError;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::ids;
use crate::domain::users::user::User;

pub struct GetUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetUser<'a, R> {
    pub async fn execute(&self, raw_id: &str) -> Result<User, ServiceError> {
        tracing::debug!(raw_id, "user_service.get_by_id");
        let id = ids::parse_id(raw_id)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("user"))
    }
}
