//! Handler for `GET /aqi/{city}`.
//!
//! Fetches the latest PM2.5 reading, classifies it, and returns the
//! six-slot category distribution the chart renders. Exactly one slot is
//! ever non-zero — the chart shows a single classified sample, not a
//! history.

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Serialize;
use tread_core::{
  aqi::{self, AqiCategory, AqiReading},
  store::DashboardStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize)]
pub struct AqiResponse {
  #[serde(flatten)]
  pub reading:      AqiReading,
  /// Labels for the distribution slots, in severity order.
  pub labels:       [&'static str; 6],
  pub distribution: [u32; 6],
}

/// `GET /aqi/{city}`
pub async fn latest<S>(
  State(state): State<AppState<S>>,
  Path(city): Path<String>,
) -> Result<Json<AqiResponse>, ApiError>
where
  S: DashboardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let reading = state.aqi.fetch_latest(&city).await?;

  Ok(Json(AqiResponse {
    labels:       AqiCategory::ALL.map(AqiCategory::label),
    distribution: aqi::distribution(reading.category),
    reading,
  }))
}
