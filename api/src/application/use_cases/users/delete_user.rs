use crate::application::error::ServiceError;
use crate::application::ports::user_repository::UserRepository;
use crate::application::services::ids;

pub struct DeleteUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> DeleteUser<'a, R> {
    pub async fn execute(&self, raw_id: &str) -> Result<(), ServiceError> {
        tracing::debug!(raw_id, "user_service.delete");
        let id = ids::parse_id(raw_id)?;
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("user"))?;
        self.repo.delete(&user).await?;
        Ok(())
    }
}
