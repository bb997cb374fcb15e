use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::{common::error::ServerError, config::config::AppConfig};

#[derive(Debug, Clone, Copy, Default)]
pub struct QuizSettings {
    /// 500 responses carry the underlying error text when set.
    pub expose_error_details: bool,
}

pub struct AppState {
    pool: Pool<Postgres>,
    settings: QuizSettings,
}

impl AppState {
    pub async fn from_config(config: &AppConfig) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(&config.database_url).await?;
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| ServerError::Internal(format!("Failed to run migrations: {}", e)))?;

        let settings = QuizSettings {
            expose_error_details: config.is_development(),
        };

        Ok(Self::from_pool(pool, settings))
    }

    pub fn from_pool(pool: Pool<Postgres>, settings: QuizSettings) -> Arc<Self> {
        Arc::new(Self { pool, settings })
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    pub fn get_settings(&self) -> &QuizSettings {
        &self.settings
    }
}
