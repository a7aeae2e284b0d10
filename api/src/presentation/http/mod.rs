use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::infrastructure::db::DbPool;

pub mod error;
pub mod health;
pub mod middleware;
pub mod posts;
pub mod users;

/// Plain acknowledgement body, e.g. after a delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub data: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        posts::list_posts,
        posts::create_post,
        posts::get_post,
        posts::delete_post,
        users::list_users,
        users::create_user,
        users::get_user,
        users::delete_user,
    ),
    components(schemas(
        health::HealthResp,
        posts::Post,
        posts::CreatePostRequest,
        posts::PostResponse,
        posts::PostListResponse,
        users::User,
        users::CreateUserRequest,
        users::UserResponse,
        users::UserListResponse,
        error::ErrorBody,
        error::ErrorResponse,
        MessageResponse,
    )),
    tags(
        (name = "Posts", description = "Posts management"),
        (name = "Users", description = "Users management"),
        (name = "Health", description = "System health checks")
    )
)]
pub struct ApiDoc;

/// Full HTTP surface with CORS, body limit and request tracing applied.
pub fn router(ctx: AppContext, pool: DbPool) -> Router {
    let cors = middleware::cors(&ctx.cfg);
    let body_limit = ctx.cfg.body_limit_bytes;

    Router::new()
        .nest("/api", health::routes(pool))
        .merge(posts::routes(ctx.clone()))
        .merge(users::routes(ctx))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}
