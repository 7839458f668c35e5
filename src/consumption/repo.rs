use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, Duration, OffsetDateTime};

/// One logged instance of the user eating a portion of a food.
///
/// `calories` is computed once at creation and stored; totals always sum
/// this field rather than re-joining the catalog, so later catalog edits
/// cannot rewrite logged history.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionEntry {
    pub id: i32,
    pub user_id: i32,
    pub food_id: i32,
    pub portion_size_grams: i32,
    pub calories: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub consumed_at: OffsetDateTime,
}

/// Appends a row as-is. The caller has already computed `calories` and
/// checked that the food exists; this layer does neither.
pub async fn append(
    db: &PgPool,
    user_id: i32,
    food_id: i32,
    portion_size_grams: i32,
    calories: i32,
) -> Result<ConsumptionEntry, sqlx::Error> {
    sqlx::query_as::<_, ConsumptionEntry>(
        r#"
        INSERT INTO food_consumption (user_id, food_id, portion_size_grams, calories)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, food_id, portion_size_grams, calories, consumed_at
        "#,
    )
    .bind(user_id)
    .bind(food_id)
    .bind(portion_size_grams)
    .bind(calories)
    .fetch_one(db)
    .await
}

/// All entries whose `consumed_at` falls on the given UTC calendar date.
pub async fn list_for_day(
    db: &PgPool,
    user_id: i32,
    day: Date,
) -> Result<Vec<ConsumptionEntry>, sqlx::Error> {
    let start = day.midnight().assume_utc();
    let end = start + Duration::days(1);

    sqlx::query_as::<_, ConsumptionEntry>(
        r#"
        SELECT id, user_id, food_id, portion_size_grams, calories, consumed_at
        FROM food_consumption
        WHERE user_id = $1 AND consumed_at >= $2 AND consumed_at < $3
        ORDER BY consumed_at
        "#,
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

/// Unconditional hard delete; a missing id deletes zero rows and is not an
/// error. Returns the number of rows removed.
pub async fn remove(db: &PgPool, entry_id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM food_consumption WHERE id = $1")
        .bind(entry_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
