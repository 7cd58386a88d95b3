//! Handlers for `/subjects` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/subjects` | Ids in creation order |
//! | `POST`   | `/subjects` | Body: [`SubjectFields`]; returns 201 + `{"id":n}` |
//! | `GET`    | `/subjects/:id` | 404 if never created; deleted subjects still returned |
//! | `PUT`    | `/subjects/:id` | Body: [`SubjectFields`]; returns 204 |
//! | `DELETE` | `/subjects/:id` | Soft delete; returns 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use curricula_core::{
  registry::Registry,
  subject::{Subject, SubjectFields, SubjectId},
};
use serde::Serialize;

use crate::{
  error::ApiError,
  extract::{JsonBody, PathParams},
};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /subjects`
pub async fn list<R: Registry>(
  State(registry): State<Arc<R>>,
) -> Result<Json<Vec<SubjectId>>, ApiError> {
  Ok(Json(registry.list_subjects()?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Created {
  pub id: SubjectId,
}

/// `POST /subjects`
pub async fn create<R: Registry>(
  State(registry): State<Arc<R>>,
  JsonBody(body): JsonBody<SubjectFields>,
) -> Result<impl IntoResponse, ApiError> {
  let id = registry.create_subject(body)?;
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /subjects/:id`
pub async fn get_one<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams(id): PathParams<SubjectId>,
) -> Result<Json<Subject>, ApiError> {
  Ok(Json(registry.get_subject(id)?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /subjects/:id`
pub async fn update<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams(id): PathParams<SubjectId>,
  JsonBody(body): JsonBody<SubjectFields>,
) -> Result<StatusCode, ApiError> {
  registry.update_subject(id, body)?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /subjects/:id`
pub async fn delete<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams(id): PathParams<SubjectId>,
) -> Result<StatusCode, ApiError> {
  registry.delete_subject(id)?;
  Ok(StatusCode::NO_CONTENT)
}
