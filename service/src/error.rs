use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use caresheet::SheetError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Sheet generation failed: {0}")]
    GenerationFailed(String),

    #[error("Service overloaded, please try again later")]
    ServiceOverloaded,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SheetError> for ServiceError {
    fn from(err: SheetError) -> Self {
        match err {
            SheetError::MissingField(_) | SheetError::UnknownRole(_) => {
                Self::InvalidRequest(err.to_string())
            }
            SheetError::Font(_) | SheetError::Render(_) => {
                Self::GenerationFailed(err.to_string())
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "InvalidRequest", self.to_string())
            }
            Self::GenerationFailed(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "GenerationFailed",
                self.to_string(),
            ),
            Self::ServiceOverloaded => (
                StatusCode::SERVICE_UNAVAILABLE,
                "ServiceOverloaded",
                self.to_string(),
            ),
            Self::Internal(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
