//! Schedule slots attached to a subject.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::subject::SubjectId;

/// Caller-supplied slot identifier. Unique only within its owning subject.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct ScheduleId(pub u64);

impl fmt::Display for ScheduleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A time range during which a subject meets. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
  pub subject_id:  SubjectId,
  pub schedule_id: ScheduleId,
  /// Hour of day, `0..=23`.
  pub start_hour:  u8,
  /// Hour of day, `0..=23`; strictly after `start_hour`.
  pub end_hour:    u8,
}

/// Input to [`Registry::add_schedule`](crate::registry::Registry::add_schedule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchedule {
  pub schedule_id: ScheduleId,
  pub start_hour:  u8,
  pub end_hour:    u8,
}

impl NewSchedule {
  pub fn into_slot(self, subject_id: SubjectId) -> ScheduleSlot {
    ScheduleSlot {
      subject_id,
      schedule_id: self.schedule_id,
      start_hour: self.start_hour,
      end_hour: self.end_hour,
    }
  }
}
