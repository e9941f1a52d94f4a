//! The `DashboardStore` trait and persisted entity types.
//!
//! The trait is implemented by storage backends (e.g.
//! `tread-store-sqlite`). The API layer depends on this abstraction, not
//! on any concrete backend, and receives a handle opened once at process
//! start — there is no ambient global store.

use std::future::Future;

use serde::{Deserialize, Serialize};

// ─── Constants ───────────────────────────────────────────────────────────────

/// Username recorded for scores submitted without a logged-in user.
pub const ANONYMOUS_USER: &str = "Anonymous User";

/// Default number of entries shown on the leaderboard.
pub const DEFAULT_TOP_N: usize = 5;

// ─── Entities ────────────────────────────────────────────────────────────────

/// A registered user. Created on signup; never mutated or deleted in
/// normal operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id:            i64,
  pub username:      String,
  /// Hex SHA-256 digest — see [`crate::credential`].
  pub password_hash: String,
}

/// One leaderboard row. The same username may appear any number of
/// times; the username is free text and may be the anonymous
/// placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
  pub id:       i64,
  pub username: String,
  /// Annual footprint in tonnes of CO2.
  pub score:    f64,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the dashboard's persisted store.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`). The store
/// assumes a single concurrent writer; implementations are not required
/// to serialise competing sessions.
pub trait DashboardStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Credentials ───────────────────────────────────────────────────────

  /// Store `username` with a digest of `password`.
  ///
  /// Returns `Ok(false)` — not an error — when the username is already
  /// taken; the store's uniqueness constraint is the sole source of
  /// truth, and the existing row is left untouched.
  fn register_user<'a>(
    &'a self,
    username: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// True iff a user exists matching `username` and the digest of
  /// `password`. Unknown user and wrong password are indistinguishable
  /// from the outside.
  fn authenticate_user<'a>(
    &'a self,
    username: &'a str,
    password: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  // ── Leaderboard ───────────────────────────────────────────────────────

  /// Append a score. Always succeeds; there is no per-user uniqueness.
  /// Not idempotent — callers must not retry blindly.
  fn record_score<'a>(
    &'a self,
    username: &'a str,
    score: f64,
  ) -> impl Future<Output = Result<LeaderboardEntry, Self::Error>> + Send + 'a;

  /// The lowest `limit` scores, ascending — a smaller footprint ranks
  /// first. Ties resolve in insertion order.
  fn top_scores(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<LeaderboardEntry>, Self::Error>> + Send + '_;

  /// Delete every leaderboard entry. Irreversible. Returns the number of
  /// rows removed.
  fn clear_scores(
    &self,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
