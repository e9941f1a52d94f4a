//! [`AqiClient`] — reqwest wrapper for the latest-readings endpoint.

use std::time::Duration;

use serde::Deserialize;
use tread_core::aqi::AqiReading;

use crate::{Error, Result};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the air-quality provider.
#[derive(Debug, Clone)]
pub struct AqiConfig {
  /// Provider root, e.g. `https://api.openaq.org`.
  pub base_url: String,
  /// Sent as the `X-API-Key` header. Supplied by configuration — never
  /// embed a literal key in source.
  pub api_key:  String,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async client for the provider's latest-readings-by-city endpoint.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct AqiClient {
  client: reqwest::Client,
  config: AqiConfig,
}

impl AqiClient {
  pub fn new(config: AqiConfig) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  /// `GET /v1/latest?city=<city>` — the latest classified PM2.5 reading.
  ///
  /// Returns [`Error::NoData`] when the provider knows no locations for
  /// the city, or when none of the first location's measurements carries
  /// the `pm25` parameter tag.
  pub async fn fetch_latest(&self, city: &str) -> Result<AqiReading> {
    let url =
      format!("{}/v1/latest", self.config.base_url.trim_end_matches('/'));

    let resp = self
      .client
      .get(&url)
      .query(&[("city", city)])
      .header("X-API-Key", self.config.api_key.as_str())
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Upstream { status });
    }

    let body: LatestResponse = resp.json().await?;
    let value = extract_pm25(&body)
      .ok_or_else(|| Error::NoData { city: city.to_owned() })?;

    tracing::debug!(city, pm25 = value, "fetched latest reading");
    Ok(AqiReading::new(city, value))
  }
}

// ─── Wire types ──────────────────────────────────────────────────────────────

/// Provider response; absent keys decode as empty rather than failing.
#[derive(Debug, Deserialize)]
struct LatestResponse {
  #[serde(default)]
  results: Vec<LocationResult>,
}

#[derive(Debug, Deserialize)]
struct LocationResult {
  #[serde(default)]
  measurements: Vec<Measurement>,
}

#[derive(Debug, Deserialize)]
struct Measurement {
  parameter: String,
  value:     f64,
}

/// The first location's PM2.5 value, if that location reports one.
fn extract_pm25(response: &LatestResponse) -> Option<f64> {
  response
    .results
    .first()?
    .measurements
    .iter()
    .find(|m| m.parameter == "pm25")
    .map(|m| m.value)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
