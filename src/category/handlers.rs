use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::{
    category::db,
    common::{app_state::AppState, error::ServerError, models::ApiResponse},
};

pub fn category_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_categories))
        .with_state(state)
}

async fn get_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let categories = db::list_categories(state.get_pool()).await?;
    Ok((StatusCode::OK, Json(ApiResponse::ok(categories))))
}
