use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::state::AppState;

use super::dto::FoodQuery;
use super::repo::{self, Food};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods))
        .route("/foods/categories", get(list_categories))
}

/// GET /foods?search=&category=
/// Search takes precedence over category; with neither, the full catalog.
#[instrument(skip(state))]
pub async fn list_foods(
    State(state): State<AppState>,
    Query(q): Query<FoodQuery>,
) -> Json<Vec<Food>> {
    let foods = if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        repo::search(&state.db, search).await
    } else if let Some(category) = q.category.as_deref().filter(|c| !c.is_empty()) {
        repo::list_by_category(&state.db, category).await
    } else {
        repo::list_all(&state.db).await
    };
    Json(foods)
}

#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(repo::list_categories(&state.db).await)
}
