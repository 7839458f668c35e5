use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::state::AppState;

/// Resolves the acting user for a request.
///
/// Single-tenant mode: every request acts as the configured anonymous user.
/// A real session/identity provider plugs in here without touching the
/// aggregation logic, which already takes `user_id` as a parameter.
pub struct CurrentUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.config.anonymous_user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_to_configured_anonymous_user() {
        let state = AppState::fake();
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/api/v1/consumption/today")
            .body(())
            .unwrap()
            .into_parts();

        let CurrentUser(user_id) = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user_id, 1);
    }
}
