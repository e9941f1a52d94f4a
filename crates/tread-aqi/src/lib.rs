//! HTTP client for the external air-quality provider.
//!
//! Fetches the latest PM2.5 reading for a city and classifies it with
//! [`tread_core::aqi`]. Provider failures degrade to typed errors that
//! the API layer renders as inline messages — a city with no data is an
//! expected outcome, not a fault.

mod client;

pub mod error;

pub use client::{AqiClient, AqiConfig};
pub use error::{Error, Result};
