use sqlx::{Pool, Postgres};

use crate::category::models::Category;

pub async fn list_categories(pool: &Pool<Postgres>) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name
        FROM "category"
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}
