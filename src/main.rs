use dotenv::dotenv;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use trivia_quizzer::{
    app,
    common::app_state::AppState,
    config::config::CONFIG,
};

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_config(&CONFIG)
        .await
        .unwrap_or_else(|e| panic!("{}", e));

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap_or_else(|e| panic!("Failed to bind listener: {}", e));

    match listener.local_addr() {
        Ok(addr) => info!("Server listening on address: {}", addr),
        Err(e) => info!("Server listening, address unknown: {}", e),
    }

    if let Err(e) = axum::serve(listener, app(state)).await {
        panic!("Server error: {}", e);
    }
}
