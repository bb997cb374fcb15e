use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
};

use crate::{
    category::handlers::category_routes, common::app_state::AppState,
    common::handlers::not_found, health::handlers::health_routes, mw::error_mw::error_detail_mw,
    mw::request_mw::request_mw, quiz::handlers::quiz_routes,
};

pub mod category;
pub mod client;
pub mod common;
pub mod config;
pub mod health;
pub mod mw;
pub mod quiz;
pub mod quizzer;
pub mod seed;

#[cfg(test)]
mod tests;

pub fn app(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/categories", category_routes(state.clone()))
        .nest("/quiz", quiz_routes(state.clone()));

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(from_fn_with_state(state, error_detail_mw))
        .layer(from_fn(request_mw))
}
