//! JSON REST API for the tread dashboard.
//!
//! Exposes an axum [`Router`] backed by any [`DashboardStore`] plus an
//! [`AqiClient`]. TLS, sessions, and transport concerns are the caller's
//! responsibility — the API itself is stateless; who is "logged in" is
//! the client's business.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tread_api::api_router(state))
//! ```

pub mod aqi;
pub mod auth;
pub mod error;
pub mod footprint;
pub mod leaderboard;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use tread_aqi::AqiClient;
use tread_core::store::DashboardStore;

pub use error::ApiError;

/// Shared state threaded through all handlers.
#[derive(Clone)]
pub struct AppState<S> {
  pub store: Arc<S>,
  pub aqi:   Arc<AqiClient>,
}

/// Build a fully-materialised API router.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: DashboardStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Credentials
    .route("/auth/register", post(auth::register::<S>))
    .route("/auth/login", post(auth::login::<S>))
    // Footprint
    .route("/footprint", post(footprint::calculate::<S>))
    .route("/footprint/options", get(footprint::options))
    // Leaderboard
    .route(
      "/leaderboard",
      get(leaderboard::top::<S>).delete(leaderboard::clear::<S>),
    )
    // Air quality
    .route("/aqi/{city}", get(aqi::latest::<S>))
    .with_state(state)
}
