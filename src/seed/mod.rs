use std::time::Duration;

use sqlx::{Pool, Postgres};
use tracing::{error, info, warn};

use crate::{
    client::trivia_client::{TriviaCategory, TriviaClient},
    common::error::ServerError,
    config::config::TriviaConfig,
    seed::models::{CategoryFetch, SeedData, usable_categories},
};

pub mod db;
pub mod models;

#[derive(Debug)]
pub struct SeedSummary {
    pub questions: u64,
    pub categories: u64,
    pub pruned: Vec<String>,
}

/// Replaces the whole store with a fresh copy of the trivia api.
pub async fn run(
    pool: &Pool<Postgres>,
    client: &TriviaClient,
    config: &TriviaConfig,
) -> Result<SeedSummary, ServerError> {
    let categories = client
        .get_categories()
        .await
        .map_err(|e| ServerError::Internal(format!("Unable to get categories: {}", e)))?;

    let categories = usable_categories(categories, config.category_limit);
    if categories.is_empty() {
        return Err(ServerError::Internal(
            "The trivia api did not return any categories".into(),
        ));
    }

    let fetches = fetch_questions(client, categories, config).await;
    let data = SeedData::from_fetches(fetches);

    if !data.pruned.is_empty() {
        warn!(
            "Pruning categories without questions: {}",
            data.pruned.join(", ")
        );
    }

    let mut tx = pool.begin().await?;
    db::tx_clear_store(&mut tx).await?;
    let questions = db::tx_insert_questions(&mut tx, &data.questions).await?;
    let categories = db::tx_insert_categories(&mut tx, &data.categories).await?;
    tx.commit().await?;

    info!(
        "Seeding complete: {} questions, {} categories",
        questions, categories
    );

    Ok(SeedSummary {
        questions,
        categories,
        pruned: data.pruned,
    })
}

async fn fetch_questions(
    client: &TriviaClient,
    categories: Vec<TriviaCategory>,
    config: &TriviaConfig,
) -> Vec<CategoryFetch> {
    let delay = Duration::from_millis(config.request_delay_ms);
    let total = categories.len();
    let mut fetches = Vec::with_capacity(total);

    for (idx, category) in categories.into_iter().enumerate() {
        tokio::time::sleep(delay).await;
        info!(
            "Fetching questions for category: {} ({}/{})",
            category.name,
            idx + 1,
            total
        );

        match client
            .get_questions(category.id, config.questions_per_category)
            .await
        {
            Ok(questions) => {
                info!(
                    "Fetched {} questions for category: {}",
                    questions.len(),
                    category.name
                );
                fetches.push(CategoryFetch::Fetched {
                    category,
                    questions,
                });
            }
            Err(e) => {
                error!("Failed to fetch questions for category {}: {}", category.name, e);
                fetches.push(CategoryFetch::Failed {
                    category,
                    reason: e.to_string(),
                });
            }
        }
    }

    let failed = fetches
        .iter()
        .filter(|f| matches!(f, CategoryFetch::Failed { .. }))
        .count();
    info!(
        "Question requests finished: {} categories succeeded, {} failed",
        total - failed,
        failed
    );

    fetches
}
