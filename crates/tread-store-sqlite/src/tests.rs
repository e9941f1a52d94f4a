//! Integration tests for `SqliteStore` against an in-memory database.

use tread_core::store::DashboardStore;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Credentials ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_then_authenticate() {
  let s = store().await;

  assert!(s.register_user("alice", "pw1").await.unwrap());
  assert!(s.authenticate_user("alice", "pw1").await.unwrap());
}

#[tokio::test]
async fn register_duplicate_reports_taken() {
  let s = store().await;

  assert!(s.register_user("alice", "pw1").await.unwrap());
  assert!(!s.register_user("alice", "pw2").await.unwrap());

  // The first stored digest is untouched: the original password still
  // authenticates, the rejected one never does.
  assert!(s.authenticate_user("alice", "pw1").await.unwrap());
  assert!(!s.authenticate_user("alice", "pw2").await.unwrap());
}

#[tokio::test]
async fn authenticate_wrong_password_fails() {
  let s = store().await;

  s.register_user("alice", "pw1").await.unwrap();
  assert!(!s.authenticate_user("alice", "wrong").await.unwrap());
}

#[tokio::test]
async fn authenticate_unknown_user_fails() {
  let s = store().await;
  assert!(!s.authenticate_user("nouser", "x").await.unwrap());
}

#[tokio::test]
async fn distinct_users_keep_distinct_credentials() {
  let s = store().await;

  s.register_user("alice", "pw1").await.unwrap();
  s.register_user("bob", "pw2").await.unwrap();

  assert!(s.authenticate_user("alice", "pw1").await.unwrap());
  assert!(s.authenticate_user("bob", "pw2").await.unwrap());
  assert!(!s.authenticate_user("alice", "pw2").await.unwrap());
  assert!(!s.authenticate_user("bob", "pw1").await.unwrap());
}

// ─── Leaderboard ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn record_returns_the_persisted_entry() {
  let s = store().await;

  let entry = s.record_score("bob", 3.2).await.unwrap();
  assert_eq!(entry.username, "bob");
  assert_eq!(entry.score, 3.2);
  assert!(entry.id > 0);
}

#[tokio::test]
async fn top_orders_ascending_by_score() {
  let s = store().await;

  s.record_score("bob", 3.2).await.unwrap();
  s.record_score("amy", 1.1).await.unwrap();

  let top = s.top_scores(5).await.unwrap();
  let names: Vec<_> = top.iter().map(|e| (e.username.as_str(), e.score)).collect();
  assert_eq!(names, [("amy", 1.1), ("bob", 3.2)]);
}

#[tokio::test]
async fn ties_resolve_in_insertion_order() {
  let s = store().await;

  let first  = s.record_score("first", 2.0).await.unwrap();
  let second = s.record_score("second", 2.0).await.unwrap();

  let top = s.top_scores(5).await.unwrap();
  assert_eq!(top, [first, second]);
}

#[tokio::test]
async fn top_respects_limit() {
  let s = store().await;

  for i in 0..10 {
    s.record_score("amy", f64::from(i)).await.unwrap();
  }

  let top = s.top_scores(5).await.unwrap();
  assert_eq!(top.len(), 5);
  assert_eq!(top[0].score, 0.0);
  assert_eq!(top[4].score, 4.0);
}

#[tokio::test]
async fn same_user_may_appear_multiple_times() {
  let s = store().await;

  s.record_score("amy", 1.0).await.unwrap();
  s.record_score("amy", 2.0).await.unwrap();

  let top = s.top_scores(5).await.unwrap();
  assert_eq!(top.len(), 2);
  assert!(top.iter().all(|e| e.username == "amy"));
}

#[tokio::test]
async fn clear_removes_everything() {
  let s = store().await;

  s.record_score("bob", 3.2).await.unwrap();
  s.record_score("amy", 1.1).await.unwrap();

  let removed = s.clear_scores().await.unwrap();
  assert_eq!(removed, 2);
  assert!(s.top_scores(5).await.unwrap().is_empty());
}

#[tokio::test]
async fn clear_on_empty_store_removes_nothing() {
  let s = store().await;
  assert_eq!(s.clear_scores().await.unwrap(), 0);
}
