use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ServiceError;
use crate::application::services::validation::validate_post;
use crate::application::use_cases::posts::create_post::CreatePost;
use crate::application::use_cases::posts::delete_post::DeletePost;
use crate::application::use_cases::posts::get_post::GetPost;
use crate::application::use_cases::posts::list_posts::ListPosts;
use crate::bootstrap::app_context::AppContext;
use crate::domain::posts::post as domain;
use crate::presentation::http::MessageResponse;
use crate::presentation::http::error::{ApiError, optional_body};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
}

impl From<domain::Post> for Post {
    fn from(p: domain::Post) -> Self {
        Post {
            id: p.id,
            title: p.title,
            text: p.text,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub data: Post,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PostListResponse {
    pub data: Vec<Post>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(get_post).delete(delete_post))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/posts", tag = "Posts", responses((status = 200, body = PostListResponse)))]
pub async fn list_posts(State(ctx): State<AppContext>) -> Result<Json<PostListResponse>, ServiceError> {
    let repo = ctx.post_repo();
    let uc = ListPosts {
        repo: repo.as_ref(),
    };
    let posts = uc.execute().await?;
    Ok(Json(PostListResponse {
        data: posts.into_iter().map(Into::into).collect(),
    }))
}

/// A missing or malformed body is treated as an absent post.
#[utoipa::path(post, path = "/posts", tag = "Posts", request_body = CreatePostRequest,
    responses(
        (status = 200, body = PostResponse),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Body exceeds the configured limit")
    ))]
pub async fn create_post(
    State(ctx): State<AppContext>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<PostResponse>, ApiError> {
    let draft = optional_body(body)?.map(|req| domain::PostDraft {
        title: req.title,
        text: req.text,
    });
    let draft = validate_post(draft)?;

    let repo = ctx.post_repo();
    let uc = CreatePost {
        repo: repo.as_ref(),
    };
    let post = uc.execute(draft).await?;
    tracing::info!(post_id = post.id, "post_created");
    Ok(Json(PostResponse { data: post.into() }))
}

#[utoipa::path(get, path = "/posts/{id}", tag = "Posts",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, body = PostResponse),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ))]
pub async fn get_post(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, ServiceError> {
    let repo = ctx.post_repo();
    let uc = GetPost {
        repo: repo.as_ref(),
    };
    let post = uc.execute(&id).await?;
    Ok(Json(PostResponse { data: post.into() }))
}

#[utoipa::path(delete, path = "/posts/{id}", tag = "Posts",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 400, body = crate::presentation::http::error::ErrorResponse),
        (status = 404, body = crate::presentation::http::error::ErrorResponse)
    ))]
pub async fn delete_post(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let repo = ctx.post_repo();
    let uc = DeletePost {
        repo: repo.as_ref(),
    };
    uc.execute(&id).await?;
    tracing::info!(post_id = %id, "post_deleted");
    Ok(Json(MessageResponse {
        data: "post deleted".into(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::application::ports::post_repository::PostRepository;
    use crate::application::testing::{InMemoryPostRepository, InMemoryUserRepository, post};
    use crate::bootstrap::app_context::test_context;

    fn app(repo: Arc<InMemoryPostRepository>) -> Router {
        routes(test_context(
            repo,
            Arc::new(InMemoryUserRepository::default()),
        ))
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/posts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let repo = Arc::new(InMemoryPostRepository::default());
        let resp = app(repo.clone())
            .oneshot(post_json(r#"{"title":"Hi","text":"there"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let created: PostResponse = serde_json::from_value(json_body(resp).await).unwrap();
        assert_eq!(created.data.title, "Hi");
        assert_eq!(repo.len(), 1);

        let resp = app(repo)
            .oneshot(
                Request::get(format!("/posts/{}", created.data.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let fetched: PostResponse = serde_json::from_value(json_body(resp).await).unwrap();
        assert_eq!(fetched.data.id, created.data.id);
        assert_eq!(fetched.data.text, "there");
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() {
        let repo = Arc::new(InMemoryPostRepository::default());
        let resp = app(repo.clone())
            .oneshot(post_json(r#"{"title":"only title"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "The post text is empty");
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn create_without_body_reports_empty_post() {
        let resp = app(Arc::new(InMemoryPostRepository::default()))
            .oneshot(Request::post("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"]["message"], "The post is empty");
    }

    #[tokio::test]
    async fn non_json_body_reports_empty_post() {
        let resp = app(Arc::new(InMemoryPostRepository::default()))
            .oneshot(
                Request::post("/posts")
                    .header(header::CONTENT_TYPE, "text/plain")
                    .body(Body::from("title=Hi"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"]["message"], "The post is empty");
    }

    #[tokio::test]
    async fn oversized_body_keeps_payload_too_large() {
        let repo = Arc::new(InMemoryPostRepository::default());
        let resp = app(repo.clone())
            .layer(axum::extract::DefaultBodyLimit::max(16))
            .oneshot(post_json(r#"{"title":"a fairly long title","text":"and a body"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn list_returns_all_posts() {
        let repo = Arc::new(InMemoryPostRepository::with_posts([
            post(1, "a", "b"),
            post(2, "c", "d"),
        ]));
        let resp = app(repo)
            .oneshot(Request::get("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let list: PostListResponse = serde_json::from_value(json_body(resp).await).unwrap();
        let ids: Vec<i64> = list.data.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn bad_id_carries_field_context() {
        let resp = app(Arc::new(InMemoryPostRepository::default()))
            .oneshot(Request::get("/posts/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"]["context"]["id"], "wrong id format");
    }

    #[tokio::test]
    async fn delete_existing_and_missing() {
        let repo = Arc::new(InMemoryPostRepository::with_posts([post(5, "a", "b")]));
        let resp = app(repo.clone())
            .oneshot(Request::delete("/posts/5").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(repo.find_by_id(5).await.unwrap().is_none());

        let resp = app(repo)
            .oneshot(Request::delete("/posts/5").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = json_body(resp).await;
        assert_eq!(body["error"]["message"], "post not found");
    }

    #[tokio::test]
    async fn storage_failure_hides_details() {
        let resp = app(Arc::new(InMemoryPostRepository::failing()))
            .oneshot(Request::get("/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("connection refused"));
    }
}
