use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::infrastructure::db::{self, DbPool};

/// Always served with 200; `status` is `degraded` when the database does not answer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResp {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health(State(pool): State<DbPool>) -> Json<HealthResp> {
    let status = match db::ping(&pool).await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = ?e, "database_ping_failed");
            "degraded"
        }
    };
    Json(HealthResp {
        status: status.into(),
    })
}

pub fn routes(pool: DbPool) -> Router {
    Router::new().route("/health", get(health)).with_state(pool)
}
