use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ServiceError;
use crate::application::services::validation::validate_user;
use crate::application::use_cases::users::create_user::CreateUser;
use crate::application::use_cases::users::delete_user::DeleteUser;
use crate::application::use_cases::users::get_user::GetUser;
use crate::application::use_cases::users::list_users::ListUsers;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user as domain;
use crate::presentation::http::MessageResponse;
use crate::presentation::http::error::{ApiError, optional_body};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<domain::User> for User {
    fn from(u: domain::User) -> Self {
        User {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub data: User,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub data: Vec<User>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).delete(delete_user))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/users", tag = "Users", responses((status = 200, body = UserListResponse)))]
pub async fn list_users(State(ctx): State<AppContext>) -> Result<Json<UserListResponse>, ServiceError> {
    let repo = ctx.user_repo();
    let uc = ListUsers {
        repo: repo.as_ref(),
    };
    let users = uc.execute().await?;
    Ok(Json(UserListResponse {
        data: users.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(post, path = "/users", tag = "Users", request_body = CreateUserRequest,
    responses(
        (status = 200, body = UserResponse),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Body exceeds the configured limit")
    ))]
pub async fn create_user(
    State(ctx): State<AppContext>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let draft = validate_user(optional_body(body)?.map(|req| domain::UserDraft {
        name: req.name,
        email: req.email,
    }))?;
    let repo = ctx.user_repo();
    let uc = CreateUser {
        repo: repo.as_ref(),
    };
    let user = uc.execute(draft).await?;
    tracing::info!(user_id = user.id, "user_created");
    Ok(Json(UserResponse { data: user.into() }))
}

#[utoipa::path(get, path = "/users/{id}", tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, body = UserResponse),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ))]
pub async fn get_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ServiceError> {
    let repo = ctx.user_repo();
    let uc = GetUser {
        repo: repo.as_ref(),
    };
    let user = uc.execute(&id).await?;
    Ok(Json(UserResponse { data: user.into() }))
}

#[utoipa::path(delete, path = "/users/{id}", tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ))]
pub async fn delete_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let repo = ctx.user_repo();
    let uc = DeleteUser {
        repo: repo.as_ref(),
    };
    uc.execute(&id).await?;
    tracing::info!(user_id = %id, "user_deleted");
    Ok(Json(MessageResponse {
        data: "user deleted".into(),
    }))
}
