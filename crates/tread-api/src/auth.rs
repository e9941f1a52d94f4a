//! Handlers for `/auth` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/register` | 201, or 409 when the name is taken |
//! | `POST` | `/auth/login`    | 200 with the username, or 401 |

use axum::{
  Json, extract::State, http::StatusCode, response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tread_core::store::DashboardStore;

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionInfo {
  pub username: String,
}

/// `POST /auth/register` — body: `{"username": …, "password": …}`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Credentials>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DashboardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if body.username.trim().is_empty() {
    return Err(ApiError::BadRequest("username must not be empty".into()));
  }

  let created = state
    .store
    .register_user(&body.username, &body.password)
    .await
    .map_err(ApiError::store)?;

  if !created {
    return Err(ApiError::UsernameTaken);
  }
  Ok((
    StatusCode::CREATED,
    Json(SessionInfo { username: body.username }),
  ))
}

/// `POST /auth/login` — body: `{"username": …, "password": …}`
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<Credentials>,
) -> Result<Json<SessionInfo>, ApiError>
where
  S: DashboardStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let ok = state
    .store
    .authenticate_user(&body.username, &body.password)
    .await
    .map_err(ApiError::store)?;

  if !ok {
    return Err(ApiError::InvalidCredentials);
  }
  Ok(Json(SessionInfo { username: body.username }))
}
