use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::common::{
    app_state::AppState,
    error::ErrorDetail,
    models::{ApiResponse, ResponseCode},
};

/// Swaps the generic 500 message for the underlying error text when the
/// settings allow it.
pub async fn error_detail_mw(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(req).await;

    let Some(ErrorDetail(detail)) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };

    if !state.get_settings().expose_error_details {
        return response;
    }

    let body = ApiResponse::<()>::failure(ResponseCode::InternalServerError, detail);
    (response.status(), Json(body)).into_response()
}
