use std::process::ExitCode;

use dotenv::dotenv;
use sqlx::{Pool, Postgres};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use trivia_quizzer::{client::trivia_client::TriviaClient, config::config::CONFIG, seed};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    let pool = match Pool::<Postgres>::connect(&CONFIG.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = sqlx::migrate!().run(&pool).await {
        error!("Failed to run migrations: {}", e);
        return ExitCode::FAILURE;
    }

    info!("This will take a while, the trivia api allows one request every 5 seconds");
    let client = TriviaClient::new(&CONFIG.trivia.api_url);

    let code = match seed::run(&pool, &client, &CONFIG.trivia).await {
        Ok(summary) => {
            info!(
                "Inserted {} questions and {} categories, pruned {}",
                summary.questions,
                summary.categories,
                summary.pruned.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("An error occurred while seeding the database: {}", e);
            ExitCode::FAILURE
        }
    };

    pool.close().await;
    code
}
