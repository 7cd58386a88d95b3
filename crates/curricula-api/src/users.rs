//! Handlers for `/users` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
};
use curricula_core::{
  registry::Registry,
  user::{Identity, Role, UserRecord},
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{JsonBody, PathParams},
};

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
  pub identity: Identity,
  pub role:     Role,
}

/// `POST /users` — body: `{"identity":"...","role":"student"}`
pub async fn register<R: Registry>(
  State(registry): State<Arc<R>>,
  JsonBody(body): JsonBody<RegisterBody>,
) -> Result<StatusCode, ApiError> {
  registry.register_user(body.identity, body.role)?;
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /users/:identity`
pub async fn get_one<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams(raw): PathParams<String>,
) -> Result<Json<UserRecord>, ApiError> {
  let identity =
    Identity::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?;
  Ok(Json(registry.get_user(&identity)?))
}
