//! Handlers for `/enrollments`. Both act on the [`Caller`] only; there is no
//! way to enroll, or inspect, another principal.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use curricula_core::{registry::Registry, subject::SubjectId};
use serde::Deserialize;

use crate::{caller::Caller, error::ApiError, extract::JsonBody};

/// `GET /enrollments`
pub async fn list<R: Registry>(
  Caller(caller): Caller,
  State(registry): State<Arc<R>>,
) -> Result<Json<Vec<SubjectId>>, ApiError> {
  Ok(Json(registry.list_enrolled_subjects(&caller)?))
}

#[derive(Debug, Deserialize)]
pub struct EnrollBody {
  pub subject_id: SubjectId,
}

/// `POST /enrollments` — body: `{"subject_id":1}`
pub async fn enroll<R: Registry>(
  Caller(caller): Caller,
  State(registry): State<Arc<R>>,
  JsonBody(body): JsonBody<EnrollBody>,
) -> Result<StatusCode, ApiError> {
  registry.enroll_self_in_subject(&caller, body.subject_id)?;
  Ok(StatusCode::NO_CONTENT)
}
