//! Subject — a catalog entry representing a course.
//!
//! Subjects are never purged. Deleting one only clears its `active` flag, so
//! every id ever issued stays readable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sequentially assigned subject identifier. The first subject is `1`.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct SubjectId(pub u64);

impl fmt::Display for SubjectId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

/// A catalog entry as returned by
/// [`Registry::get_subject`](crate::registry::Registry::get_subject).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
  pub id:             SubjectId,
  pub name:           String,
  pub description:    String,
  pub credits:        u32,
  /// `false` once the subject has been deleted.
  pub active:         bool,
  /// Number of schedule slots ever added; unaffected by deletion.
  pub schedule_count: u64,
}

impl Subject {
  /// A freshly created, active subject with no schedules.
  pub fn new(id: SubjectId, fields: SubjectFields) -> Self {
    Self {
      id,
      name: fields.name,
      description: fields.description,
      credits: fields.credits,
      active: true,
      schedule_count: 0,
    }
  }

  /// Overwrite the caller-editable fields. `id`, `active` and
  /// `schedule_count` are left alone.
  pub fn apply(&mut self, fields: SubjectFields) {
    self.name = fields.name;
    self.description = fields.description;
    self.credits = fields.credits;
  }
}

/// The caller-editable part of a subject; input to both
/// [`Registry::create_subject`](crate::registry::Registry::create_subject) and
/// [`Registry::update_subject`](crate::registry::Registry::update_subject).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFields {
  pub name:        String,
  pub description: String,
  pub credits:     u32,
}

impl SubjectFields {
  pub fn new(
    name: impl Into<String>,
    description: impl Into<String>,
    credits: u32,
  ) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      credits,
    }
  }
}
