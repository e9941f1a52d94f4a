//! Handlers for `/footprint` endpoints.
//!
//! The calculate handler performs the whole interaction in one
//! round-trip: estimate, record the total on the leaderboard, then
//! re-read the top entries for display.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tread_core::{
  emissions,
  footprint::{self, FootprintBreakdown, FootprintInput},
  store::{ANONYMOUS_USER, DEFAULT_TOP_N, DashboardStore, LeaderboardEntry},
  tips,
};

use crate::{AppState, error::ApiError};

// ─── Calculate ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CalculateBody {
  /// Recorded on the leaderboard; defaults to the anonymous placeholder
  /// when absent or blank.
  pub username: Option<String>,
  #[serde(flatten)]
  pub input:    FootprintInput,
}

#[derive(Debug, Serialize)]
pub struct TipSection {
  pub section: &'static str,
  pub tips:    &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct CalculateResponse {
  pub username:    String,
  pub breakdown:   FootprintBreakdown,
  pub tips:        Vec<TipSection>,
  pub leaderboard: Vec<LeaderboardEntry>,
}

/// `POST /footprint`
pub async fn calculate<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<CalculateBody>,
) -> Result<Json<CalculateResponse>, ApiError>
where
  S: DashboardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let breakdown = footprint::estimate(&body.input)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let username = body
    .username
    .filter(|u| !u.trim().is_empty())
    .unwrap_or_else(|| ANONYMOUS_USER.to_owned());

  state
    .store
    .record_score(&username, breakdown.total)
    .await
    .map_err(ApiError::store)?;

  let leaderboard = state
    .store
    .top_scores(DEFAULT_TOP_N)
    .await
    .map_err(ApiError::store)?;

  let tips = tips::reduction_tips()
    .iter()
    .map(|&(section, tips)| TipSection { section, tips })
    .collect();

  Ok(Json(CalculateResponse {
    username,
    breakdown,
    tips,
    leaderboard,
  }))
}

// ─── Options ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Options {
  pub countries:       Vec<&'static str>,
  pub cooking_methods: Vec<&'static str>,
}

/// `GET /footprint/options` — what the calculator accepts.
pub async fn options() -> Json<Options> {
  Json(Options {
    countries:       emissions::countries(),
    cooking_methods: emissions::cooking_methods(),
  })
}
