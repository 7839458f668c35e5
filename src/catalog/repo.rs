use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use tracing::warn;

/// Catalog row: nutrient values are grams per 100 g, `None` means unknown
/// and counts as zero during aggregation. Rows are written only by the
/// seeding binary and never mutated by end-user flows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub calories_per_100g: i32,
    pub protein: Option<i32>,
    pub carbs: Option<i32>,
    pub fat: Option<i32>,
    pub fiber: Option<i32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Full catalog in insertion order. The catalog is best-effort reference
/// data: if the store is unreachable the caller gets an empty list, not an
/// error.
pub async fn list_all(db: &PgPool) -> Vec<Food> {
    let res = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, category, calories_per_100g, protein, carbs, fat, fiber, created_at
        FROM foods
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await;

    match res {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "cannot list foods; returning empty catalog");
            Vec::new()
        }
    }
}

/// Exact, case-sensitive match on `category`.
pub async fn list_by_category(db: &PgPool, category: &str) -> Vec<Food> {
    let res = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, category, calories_per_100g, protein, carbs, fat, fiber, created_at
        FROM foods
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(db)
    .await;

    match res {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, category, "cannot list foods by category; returning empty catalog");
            Vec::new()
        }
    }
}

/// Case-insensitive substring match on `name`. An empty query matches
/// everything; minimum-length rules are the caller's concern.
pub async fn search(db: &PgPool, query: &str) -> Vec<Food> {
    let res = sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, category, calories_per_100g, protein, carbs, fat, fiber, created_at
        FROM foods
        WHERE name ILIKE '%' || $1 || '%'
        ORDER BY id
        "#,
    )
    .bind(query)
    .fetch_all(db)
    .await;

    match res {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, query, "cannot search foods; returning empty catalog");
            Vec::new()
        }
    }
}

/// Distinct category labels in ascending lexical order.
pub async fn list_categories(db: &PgPool) -> Vec<String> {
    let res = sqlx::query_scalar::<_, String>(
        r#"
        SELECT DISTINCT category
        FROM foods
        ORDER BY category
        "#,
    )
    .fetch_all(db)
    .await;

    match res {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "cannot list categories; returning empty list");
            Vec::new()
        }
    }
}

/// Lookup for the write path. Unlike the listing reads above, storage
/// failures propagate here: recording a consumption must not be silently
/// degraded.
pub async fn find_by_id(db: &PgPool, food_id: i32) -> Result<Option<Food>, sqlx::Error> {
    sqlx::query_as::<_, Food>(
        r#"
        SELECT id, name, category, calories_per_100g, protein, carbs, fat, fiber, created_at
        FROM foods
        WHERE id = $1
        "#,
    )
    .bind(food_id)
    .fetch_optional(db)
    .await
}
