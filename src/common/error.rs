use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::common::models::{ApiResponse, ResponseCode};

/// Underlying text of a 500, attached to the response for `error_detail_mw`.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(
        "Insufficient questions. An amount of {requested} questions was requested, but only {available} were found."
    )]
    InsufficientQuestions { requested: u16, available: usize },

    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn code(&self) -> ResponseCode {
        match self {
            ServerError::BadRequest(_) => ResponseCode::BadRequest,
            ServerError::NotFound(_) => ResponseCode::NotFound,
            ServerError::InsufficientQuestions { .. } => ResponseCode::InsufficientQuestions,
            ServerError::Sqlx(_) | ServerError::Internal(_) => ResponseCode::InternalServerError,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) | ServerError::InsufficientQuestions { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Sqlx(_) | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, detail) = match &self {
            ServerError::Sqlx(_) | ServerError::Internal(_) => {
                error!("{}", self);
                ("Server error.".to_string(), Some(ErrorDetail(self.to_string())))
            }
            _ => {
                warn!("Request rejected: {}", self);
                (self.to_string(), None)
            }
        };

        let body = ApiResponse::<()>::failure(self.code(), message);
        let mut response = (status, Json(body)).into_response();
        if let Some(detail) = detail {
            response.extensions_mut().insert(detail);
        }

        response
    }
}
