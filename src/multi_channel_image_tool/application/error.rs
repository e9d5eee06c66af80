use thiserror::Error;
use crate::domain::error::DomainError; // ドメインエラーをラップするため
use crate::infrastructure::error::InfrastructureError;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Invalid channel sources: {}", .0.join(" "))]
    InvalidSources(Vec<String>),

    #[error("Background worker failed: {0}")]
    WorkerFailed(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Domain error occurred: {0}")]
    DomainError(#[from] DomainError),

    #[error("Infrastructure error occurred: {0}")]
    InfrastructureError(#[from] InfrastructureError),
}

use axum::response::{IntoResponse, Response};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use tracing::error;

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            ApplicationError::InvalidSources(errors) => (StatusCode::UNPROCESSABLE_ENTITY, errors),
            ApplicationError::WorkerFailed(msg) => {
                error!("Worker failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, vec![msg])
            }
            ApplicationError::ConfigurationError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, vec![msg]),
            ApplicationError::DomainError(domain_err) => {
                (StatusCode::BAD_REQUEST, vec![domain_err.to_string()])
            }
            ApplicationError::InfrastructureError(infra_err) => {
                error!("InfrastructureError: {:?}", infra_err);
                let status = match infra_err {
                    InfrastructureError::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    InfrastructureError::ImageLibError(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, vec![infra_err.to_string()])
            }
        };
        let body = Json(json!({ "errors": errors }));
        (status, body).into_response()
    }
}
