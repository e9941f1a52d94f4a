//! Error type for `tread-aqi`.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The provider returned no locations for the city, or no PM2.5
  /// measurement among the first location's readings.
  #[error("no AQI data found for {city:?}")]
  NoData { city: String },

  /// The provider answered with a non-success HTTP status.
  #[error("air-quality provider returned HTTP {status}")]
  Upstream { status: StatusCode },

  /// Transport-level failure (DNS, connect, timeout, body decode).
  #[error("air-quality request failed: {0}")]
  Http(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
