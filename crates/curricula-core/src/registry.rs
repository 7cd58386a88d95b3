//! The `Registry` trait — the full operation set of the catalog.
//!
//! The trait is implemented by backends (e.g. `curricula-store-memory`).
//! Hosts (`curricula-api`) depend on this abstraction, not on any concrete
//! backend.

use crate::{
  Result,
  schedule::{NewSchedule, ScheduleId, ScheduleSlot},
  subject::{Subject, SubjectFields, SubjectId},
  user::{Identity, Role, UserRecord},
};

/// Abstraction over a subject catalog and enrollment registry.
///
/// Every operation is synchronous and either completes or fails without side
/// effects. Operations acting on behalf of a principal take the caller's
/// [`Identity`] explicitly; implementations must never derive it from stored
/// data.
pub trait Registry: Send + Sync {
  // ── Subjects ──────────────────────────────────────────────────────────

  /// Create an active subject and return its freshly allocated id.
  fn create_subject(&self, fields: SubjectFields) -> Result<SubjectId>;

  /// Fetch a subject whether or not it is active.
  fn get_subject(&self, id: SubjectId) -> Result<Subject>;

  /// Overwrite name, description and credits. Never reactivates.
  fn update_subject(&self, id: SubjectId, fields: SubjectFields) -> Result<()>;

  /// Soft-delete a subject. Deleting an inactive subject succeeds.
  fn delete_subject(&self, id: SubjectId) -> Result<()>;

  /// Subject ids in creation order.
  fn list_subjects(&self) -> Result<Vec<SubjectId>>;

  // ── Schedules ─────────────────────────────────────────────────────────

  /// Attach a slot to a subject and bump its `schedule_count`.
  fn add_schedule(&self, subject_id: SubjectId, slot: NewSchedule) -> Result<()>;

  fn get_schedule(
    &self,
    subject_id: SubjectId,
    schedule_id: ScheduleId,
  ) -> Result<ScheduleSlot>;

  /// A subject's slots in ascending schedule-id order.
  fn list_schedules(&self, subject_id: SubjectId) -> Result<Vec<ScheduleSlot>>;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Register `identity`, or overwrite its role and reactivate it.
  fn register_user(&self, identity: Identity, role: Role) -> Result<()>;

  fn get_user(&self, identity: &Identity) -> Result<UserRecord>;

  // ── Enrollment ────────────────────────────────────────────────────────

  /// Enroll the calling principal in `subject_id`.
  fn enroll_self_in_subject(
    &self,
    caller: &Identity,
    subject_id: SubjectId,
  ) -> Result<()>;

  /// The calling principal's enrollments, oldest first. Empty if none.
  fn list_enrolled_subjects(&self, caller: &Identity) -> Result<Vec<SubjectId>>;
}
