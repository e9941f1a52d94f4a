//! Error types for `tread-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown country: {0:?}")]
  UnknownCountry(String),

  #[error("unknown cooking method: {0:?}")]
  UnknownCookingMethod(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
