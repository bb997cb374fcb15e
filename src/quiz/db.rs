use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::quiz::models::{Difficulty, Question};

/// Uniform random sample without replacement, at most `amount` rows.
pub async fn sample_questions(
    pool: &Pool<Postgres>,
    category: &str,
    difficulty: Difficulty,
    amount: u16,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, difficulty, category, question, correct_answer, incorrect_answers
        FROM "question"
        WHERE category = $1 AND difficulty = $2
        ORDER BY RANDOM()
        LIMIT $3
        "#,
    )
    .bind(category)
    .bind(difficulty)
    .bind(amount as i64)
    .fetch_all(pool)
    .await
}

pub async fn get_questions_by_ids(
    pool: &Pool<Postgres>,
    ids: &[Uuid],
) -> Result<Vec<Question>, sqlx::Error> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, difficulty, category, question, correct_answer, incorrect_answers
        FROM "question"
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .fetch_all(pool)
    .await
}
