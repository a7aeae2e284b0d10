use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::application::error::ServiceError;
use crate::application::services::validation::ValidationError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServiceError::Validation(_) | ServiceError::InvalidId(_) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", self.to_string())
            }
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            ServiceError::Internal(e) => {
                tracing::error!(error = ?e, "service_internal_error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };
        let context = self.context().map(|(field, detail)| {
            BTreeMap::from([(field.to_string(), detail.to_string())])
        });

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                context,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Handler error for routes that read a JSON body.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    Body(JsonRejection),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Service(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::Service(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(e) => e.into_response(),
            ApiError::Body(rejection) => {
                tracing::debug!(status = %rejection.status(), "request_body_rejected");
                rejection.into_response()
            }
        }
    }
}

/// Missing, non-JSON or malformed bodies read as an absent payload. Failures
/// while buffering (e.g. the body limit) keep their own status.
pub fn optional_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<Option<T>, ApiError> {
    match body {
        Ok(Json(value)) => Ok(Some(value)),
        Err(rejection @ JsonRejection::BytesRejection(_)) => Err(ApiError::Body(rejection)),
        Err(_) => Ok(None),
    }
}
