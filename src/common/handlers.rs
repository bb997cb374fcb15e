use axum::{Json, extract::OriginalUri, http::StatusCode, response::IntoResponse};

use crate::common::models::{ApiResponse, ResponseCode};

pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    let body = ApiResponse::<()>::failure(ResponseCode::NotFound, format!("Not Found: {}", uri));
    (StatusCode::NOT_FOUND, Json(body))
}
