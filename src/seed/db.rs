use chrono::Utc;
use sqlx::{Postgres, Transaction};

use crate::{category::models::Category, common::error::ServerError, quiz::models::Question};

pub async fn tx_clear_store(tx: &mut Transaction<'_, Postgres>) -> Result<(), ServerError> {
    sqlx::query(r#"DELETE FROM "question""#)
        .execute(&mut **tx)
        .await?;
    sqlx::query(r#"DELETE FROM "category""#)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

pub async fn tx_insert_questions(
    tx: &mut Transaction<'_, Postgres>,
    questions: &[Question],
) -> Result<u64, ServerError> {
    let created_at = Utc::now();
    let mut inserted = 0;

    for question in questions {
        let row = sqlx::query(
            r#"
            INSERT INTO "question" (id, difficulty, category, question, correct_answer, incorrect_answers, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(question.id)
        .bind(question.difficulty)
        .bind(&question.category)
        .bind(&question.question)
        .bind(&question.correct_answer)
        .bind(&question.incorrect_answers)
        .bind(created_at)
        .execute(&mut **tx)
        .await?;

        inserted += row.rows_affected();
    }

    Ok(inserted)
}

pub async fn tx_insert_categories(
    tx: &mut Transaction<'_, Postgres>,
    categories: &[Category],
) -> Result<u64, ServerError> {
    let created_at = Utc::now();
    let mut inserted = 0;

    for category in categories {
        let row = sqlx::query(
            r#"
            INSERT INTO "category" (id, name, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(created_at)
        .execute(&mut **tx)
        .await?;

        inserted += row.rows_affected();
    }

    Ok(inserted)
}
