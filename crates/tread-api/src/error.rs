//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Every variant renders as an inline JSON message; nothing here aborts
/// the process.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Deliberately silent on whether the username or the password was
  /// wrong, so the endpoint cannot be used to enumerate usernames.
  #[error("invalid username or password")]
  InvalidCredentials,

  #[error("username already taken")]
  UsernameTaken,

  /// The air-quality provider answered with a non-success status; the
  /// status is part of the user-visible message.
  #[error("error fetching data from the air-quality provider (HTTP {0})")]
  Upstream(StatusCode),

  /// The air-quality provider could not be reached at all.
  #[error("error reaching the air-quality provider: {0}")]
  Unreachable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend error.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

impl From<tread_aqi::Error> for ApiError {
  fn from(e: tread_aqi::Error) -> Self {
    match e {
      tread_aqi::Error::NoData { city } => Self::NotFound(format!(
        "no AQI data found for {city}; try a different city"
      )),
      tread_aqi::Error::Upstream { status } => Self::Upstream(status),
      tread_aqi::Error::Http(e) => Self::Unreachable(e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
      ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
      ApiError::UsernameTaken => StatusCode::CONFLICT,
      ApiError::Upstream(_) | ApiError::Unreachable(_) => {
        StatusCode::BAD_GATEWAY
      }
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
