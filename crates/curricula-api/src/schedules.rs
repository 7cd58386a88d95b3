//! Handlers for `/subjects/:id/schedules` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use curricula_core::{
  registry::Registry,
  schedule::{NewSchedule, ScheduleId, ScheduleSlot},
  subject::SubjectId,
};

use crate::{
  error::ApiError,
  extract::{JsonBody, PathParams},
};

/// `GET /subjects/:id/schedules`
pub async fn list<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams(subject_id): PathParams<SubjectId>,
) -> Result<Json<Vec<ScheduleSlot>>, ApiError> {
  Ok(Json(registry.list_schedules(subject_id)?))
}

/// `POST /subjects/:id/schedules` — returns 201 + the stored slot.
pub async fn create<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams(subject_id): PathParams<SubjectId>,
  JsonBody(body): JsonBody<NewSchedule>,
) -> Result<impl IntoResponse, ApiError> {
  registry.add_schedule(subject_id, body)?;
  Ok((StatusCode::CREATED, Json(body.into_slot(subject_id))))
}

/// `GET /subjects/:id/schedules/:schedule_id`
pub async fn get_one<R: Registry>(
  State(registry): State<Arc<R>>,
  PathParams((subject_id, schedule_id)): PathParams<(SubjectId, ScheduleId)>,
) -> Result<Json<ScheduleSlot>, ApiError> {
  Ok(Json(registry.get_schedule(subject_id, schedule_id)?))
}
