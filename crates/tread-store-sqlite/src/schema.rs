//! SQL schema for the tread SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated
//! on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS users (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL
);

-- Scores are append-only in normal operation; the only delete is the
-- wholesale clear.
CREATE TABLE IF NOT EXISTS leaderboard (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL,
    score    REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS leaderboard_score_idx ON leaderboard(score);

PRAGMA user_version = 1;
";
