//! Behavioural switches for cases the registry's contract leaves open.

use serde::Deserialize;

/// Which subject ids [`Registry::list_subjects`](crate::registry::Registry::list_subjects)
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectListing {
  /// Every id ever issued, deleted or not.
  #[default]
  All,
  ActiveOnly,
}

/// What happens when a caller enrolls in a subject they are already in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEnrollment {
  /// Fail with a conflict.
  #[default]
  Reject,
  /// Succeed without recording anything.
  Ignore,
  /// Append the subject again.
  Allow,
}

/// Whether updates, new schedules and enrollments may target a deleted
/// subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InactiveSubjectWrites {
  #[default]
  Allow,
  Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryPolicy {
  pub subject_listing:         SubjectListing,
  pub duplicate_enrollment:    DuplicateEnrollment,
  pub inactive_subject_writes: InactiveSubjectWrites,
  /// Only users registered as [`Role::Student`](crate::user::Role::Student)
  /// may enroll.
  pub students_only:           bool,
}

impl Default for RegistryPolicy {
  fn default() -> Self {
    Self {
      subject_listing:         SubjectListing::default(),
      duplicate_enrollment:    DuplicateEnrollment::default(),
      inactive_subject_writes: InactiveSubjectWrites::default(),
      students_only:           true,
    }
  }
}
