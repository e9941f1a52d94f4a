//! [`SqliteStore`] — the SQLite implementation of [`DashboardStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tread_core::{
  credential::hash_password,
  store::{DashboardStore, LeaderboardEntry, User},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A dashboard store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The
/// store assumes a single writer and applies no locking discipline
/// beyond what SQLite itself provides.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DashboardStore impl ─────────────────────────────────────────────────────

impl DashboardStore for SqliteStore {
  type Error = Error;

  // ── Credentials ───────────────────────────────────────────────────────────

  async fn register_user(&self, username: &str, password: &str) -> Result<bool> {
    let username = username.to_owned();
    let digest   = hash_password(password);

    let inserted = self
      .conn
      .call(move |conn| {
        match conn.execute(
          "INSERT INTO users (username, password_hash) VALUES (?1, ?2)",
          rusqlite::params![username, digest],
        ) {
          Ok(_) => Ok(true),
          // The UNIQUE constraint on username is the sole source of
          // truth for "already taken".
          Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
          {
            Ok(false)
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    Ok(inserted)
  }

  async fn authenticate_user(
    &self,
    username: &str,
    password: &str,
  ) -> Result<bool> {
    let username = username.to_owned();
    let digest   = hash_password(password);

    let user: Option<User> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, username, password_hash FROM users WHERE username = ?1",
              rusqlite::params![username],
              |row| {
                Ok(User {
                  id:            row.get(0)?,
                  username:      row.get(1)?,
                  password_hash: row.get(2)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    Ok(user.is_some_and(|u| u.password_hash == digest))
  }

  // ── Leaderboard ───────────────────────────────────────────────────────────

  async fn record_score(
    &self,
    username: &str,
    score: f64,
  ) -> Result<LeaderboardEntry> {
    let username = username.to_owned();

    let entry = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO leaderboard (username, score) VALUES (?1, ?2)",
          rusqlite::params![username, score],
        )?;
        let id = conn.last_insert_rowid();
        Ok(LeaderboardEntry { id, username, score })
      })
      .await?;

    Ok(entry)
  }

  async fn top_scores(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
    let limit = limit as i64;

    let entries = self
      .conn
      .call(move |conn| {
        // Ascending: the smallest footprint ranks first. Ties resolve by
        // row id, i.e. insertion order.
        let mut stmt = conn.prepare(
          "SELECT id, username, score FROM leaderboard
           ORDER BY score ASC, id ASC LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit], |row| {
            Ok(LeaderboardEntry {
              id:       row.get(0)?,
              username: row.get(1)?,
              score:    row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(entries)
  }

  async fn clear_scores(&self) -> Result<usize> {
    let removed = self
      .conn
      .call(|conn| Ok(conn.execute("DELETE FROM leaderboard", [])?))
      .await?;
    Ok(removed)
  }
}
