//! Error types for `curricula-core`.

use serde::Serialize;
use thiserror::Error;

use crate::{
  schedule::ScheduleId, subject::SubjectId, user::Identity,
  validation::ValidationError,
};

/// Coarse classification of an [`Error`], used by hosts to pick a response
/// (an HTTP status, an exit code, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
  /// A referenced subject, schedule, or user does not exist.
  NotFound,
  /// The operation collides with existing state.
  Conflict,
  /// The calling identity may not perform the operation.
  Unauthorized,
  /// An argument failed validation.
  InvalidInput,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("subject not found: {0}")]
  SubjectNotFound(SubjectId),

  #[error("schedule {schedule_id} not found for subject {subject_id}")]
  ScheduleNotFound {
    subject_id:  SubjectId,
    schedule_id: ScheduleId,
  },

  #[error("user not found: {0}")]
  UserNotFound(Identity),

  #[error("schedule {schedule_id} already exists for subject {subject_id}")]
  DuplicateSchedule {
    subject_id:  SubjectId,
    schedule_id: ScheduleId,
  },

  #[error("{identity} is already enrolled in subject {subject_id}")]
  AlreadyEnrolled {
    identity:   Identity,
    subject_id: SubjectId,
  },

  #[error("subject {0} cannot record more schedules")]
  ScheduleCountOverflow(SubjectId),

  #[error("subject {0} is inactive")]
  SubjectInactive(SubjectId),

  #[error("{0} is not a registered user")]
  NotRegistered(Identity),

  #[error("{0} is not a student")]
  NotAStudent(Identity),

  #[error("invalid input: {0}")]
  Invalid(#[from] ValidationError),
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::SubjectNotFound(_)
      | Self::ScheduleNotFound { .. }
      | Self::UserNotFound(_) => ErrorKind::NotFound,
      Self::DuplicateSchedule { .. }
      | Self::AlreadyEnrolled { .. }
      | Self::ScheduleCountOverflow(_)
      | Self::SubjectInactive(_) => ErrorKind::Conflict,
      Self::NotRegistered(_) | Self::NotAStudent(_) => ErrorKind::Unauthorized,
      Self::Invalid(_) => ErrorKind::InvalidInput,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
