use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::catalog::repo::{self as catalog_repo, Food};
use crate::error::ApiError;
use crate::identity::CurrentUser;
use crate::state::AppState;

use super::dto::{
    DailySummary, RecordConsumptionRequest, RecordConsumptionResponse, RemoveConsumptionResponse,
    SummaryItem, WeightGainQuery, WeightGainResponse,
};
use super::{repo, services};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/consumption/today", get(today_summary))
        .route("/weight-gain", get(estimate_weight_gain))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/consumption", post(record_consumption))
        .route("/consumption/:id", delete(remove_consumption))
}

/// POST /consumption { foodId, portionSizeGrams }
#[instrument(skip(state))]
pub async fn record_consumption(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<RecordConsumptionRequest>,
) -> Result<Json<RecordConsumptionResponse>, ApiError> {
    if payload.portion_size_grams < 1 {
        return Err(ApiError::Validation(
            "portionSizeGrams must be at least 1".into(),
        ));
    }

    let food = catalog_repo::find_by_id(&state.db, payload.food_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Food not found".into()))?;

    let calories = services::portion_calories(food.calories_per_100g, payload.portion_size_grams);
    let entry = repo::append(
        &state.db,
        user_id,
        payload.food_id,
        payload.portion_size_grams,
        calories,
    )
    .await?;

    info!(
        user_id,
        food_id = payload.food_id,
        entry_id = entry.id,
        calories,
        "consumption recorded"
    );
    Ok(Json(RecordConsumptionResponse { calories }))
}

/// GET /consumption/today
///
/// Recomputes totals from today's rows on every read; there is no cached
/// running total to invalidate.
#[instrument(skip(state))]
pub async fn today_summary(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<DailySummary>, ApiError> {
    let today = OffsetDateTime::now_utc().date();
    let entries = repo::list_for_day(&state.db, user_id, today).await?;

    // Degraded catalog reads leave foods unresolved; stored calories still
    // count, macros contribute zero.
    let foods = catalog_repo::list_all(&state.db).await;
    let by_id: HashMap<i32, Food> = foods.into_iter().map(|f| (f.id, f)).collect();

    let items: Vec<SummaryItem> = entries
        .into_iter()
        .map(|entry| {
            let food = by_id.get(&entry.food_id).cloned();
            SummaryItem { entry, food }
        })
        .collect();

    let totals = services::summarize(&items);
    Ok(Json(DailySummary { items, totals }))
}

/// DELETE /consumption/:id
/// Removing an id that does not exist is a no-op, not an error.
#[instrument(skip(state))]
pub async fn remove_consumption(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RemoveConsumptionResponse>, ApiError> {
    let removed = repo::remove(&state.db, id).await?;
    if removed == 0 {
        debug!(consumption_id = id, "no consumption entry to remove");
    }
    Ok(Json(RemoveConsumptionResponse { success: true }))
}

/// GET /weight-gain?totalCalories=
/// Stateless: estimates for arbitrary hypothetical calorie totals.
#[instrument]
pub async fn estimate_weight_gain(
    Query(q): Query<WeightGainQuery>,
) -> Result<Json<WeightGainResponse>, ApiError> {
    if !q.total_calories.is_finite() || q.total_calories < 0.0 {
        return Err(ApiError::Validation(
            "totalCalories must be non-negative".into(),
        ));
    }

    let weight_gain_grams = services::estimate_weight_gain_grams(q.total_calories);
    Ok(Json(WeightGainResponse {
        weight_gain_grams,
        weight_gain_kg: services::weight_gain_kg(weight_gain_grams),
    }))
}
