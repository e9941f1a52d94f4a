//! Handlers for `/leaderboard` endpoints.

use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tread_core::store::{DEFAULT_TOP_N, DashboardStore, LeaderboardEntry};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct TopParams {
  pub limit: Option<usize>,
}

/// `GET /leaderboard[?limit=n]` — lowest scores first.
pub async fn top<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<TopParams>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError>
where
  S: DashboardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let entries = state
    .store
    .top_scores(params.limit.unwrap_or(DEFAULT_TOP_N))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(entries))
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
  pub removed: usize,
}

/// `DELETE /leaderboard` — removes every entry, irreversibly.
pub async fn clear<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<ClearResponse>, ApiError>
where
  S: DashboardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let removed =
    state.store.clear_scores().await.map_err(ApiError::store)?;
  Ok(Json(ClearResponse { removed }))
}
