//! [`MemoryRegistry`] — the in-memory implementation of [`Registry`].

use curricula_core::{
  Error, Result,
  policy::{DuplicateEnrollment, InactiveSubjectWrites, RegistryPolicy},
  registry::Registry,
  schedule::{NewSchedule, ScheduleId, ScheduleSlot},
  subject::{Subject, SubjectFields, SubjectId},
  user::{Identity, Role, UserRecord},
  validation::{ValidationConfig, validate_hours, validate_subject_fields},
};
use tracing::debug;

use crate::{EnrollmentIndex, ScheduleStore, SubjectStore, UserDirectory};

// ─── Registry ────────────────────────────────────────────────────────────────

/// A complete registry held in process memory.
///
/// Construct one per host; instances share nothing, so tests can run many
/// side by side.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
  pub(crate) subjects: SubjectStore,
  schedules:           ScheduleStore,
  users:               UserDirectory,
  enrollments:         EnrollmentIndex,
  policy:              RegistryPolicy,
  validation:          ValidationConfig,
}

impl MemoryRegistry {
  /// An empty registry with the default policy and validation limits.
  pub fn new() -> Self { Self::default() }

  pub fn with_config(policy: RegistryPolicy, validation: ValidationConfig) -> Self {
    Self {
      policy,
      validation,
      ..Self::default()
    }
  }

  pub fn policy(&self) -> &RegistryPolicy { &self.policy }

  fn ensure_writable(&self, subject: &Subject) -> Result<()> {
    if !subject.active
      && self.policy.inactive_subject_writes == InactiveSubjectWrites::Reject
    {
      return Err(Error::SubjectInactive(subject.id));
    }
    Ok(())
  }

  fn ensure_may_enroll(
    &self,
    user: Option<&UserRecord>,
    caller: &Identity,
  ) -> Result<()> {
    let user = match user {
      Some(u) if u.active => u,
      _ => return Err(Error::NotRegistered(caller.clone())),
    };
    if self.policy.students_only && user.role != Role::Student {
      return Err(Error::NotAStudent(caller.clone()));
    }
    Ok(())
  }
}

// ─── Registry impl ───────────────────────────────────────────────────────────

impl Registry for MemoryRegistry {
  // ── Subjects ──────────────────────────────────────────────────────────────

  fn create_subject(&self, fields: SubjectFields) -> Result<SubjectId> {
    validate_subject_fields(&fields, &self.validation)?;
    let id = self.subjects.create(fields);
    debug!(subject_id = %id, "subject created");
    Ok(id)
  }

  fn get_subject(&self, id: SubjectId) -> Result<Subject> {
    self.subjects.get(id)
  }

  fn update_subject(&self, id: SubjectId, fields: SubjectFields) -> Result<()> {
    validate_subject_fields(&fields, &self.validation)?;
    let mut subjects = self.subjects.write();
    let subject = subjects.get_mut(id)?;
    self.ensure_writable(subject)?;
    subject.apply(fields);
    debug!(subject_id = %id, "subject updated");
    Ok(())
  }

  fn delete_subject(&self, id: SubjectId) -> Result<()> {
    self.subjects.delete(id)?;
    debug!(subject_id = %id, "subject deleted");
    Ok(())
  }

  fn list_subjects(&self) -> Result<Vec<SubjectId>> {
    Ok(self.subjects.list(self.policy.subject_listing))
  }

  // ── Schedules ─────────────────────────────────────────────────────────────

  fn add_schedule(&self, subject_id: SubjectId, slot: NewSchedule) -> Result<()> {
    validate_hours(&slot)?;

    let mut subjects = self.subjects.write();
    let subject = subjects.get_mut(subject_id)?;
    self.ensure_writable(subject)?;

    // Checked before the insert, stored only once the insert succeeds.
    let count = subject
      .schedule_count
      .checked_add(1)
      .ok_or(Error::ScheduleCountOverflow(subject_id))?;
    self.schedules.write().insert(slot.into_slot(subject_id))?;
    subject.schedule_count = count;

    debug!(
      subject_id = %subject_id,
      schedule_id = %slot.schedule_id,
      start_hour = slot.start_hour,
      end_hour = slot.end_hour,
      "schedule added"
    );
    Ok(())
  }

  fn get_schedule(
    &self,
    subject_id: SubjectId,
    schedule_id: ScheduleId,
  ) -> Result<ScheduleSlot> {
    self.schedules.get(subject_id, schedule_id)
  }

  fn list_schedules(&self, subject_id: SubjectId) -> Result<Vec<ScheduleSlot>> {
    let subjects = self.subjects.read();
    subjects.get(subject_id)?;
    Ok(self.schedules.for_subject(subject_id))
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  fn register_user(&self, identity: Identity, role: Role) -> Result<()> {
    debug!(identity = %identity, role = %role, "user registered");
    self.users.register(identity, role);
    Ok(())
  }

  fn get_user(&self, identity: &Identity) -> Result<UserRecord> {
    self.users.get(identity)
  }

  // ── Enrollment ────────────────────────────────────────────────────────────

  fn enroll_self_in_subject(
    &self,
    caller: &Identity,
    subject_id: SubjectId,
  ) -> Result<()> {
    let subjects = self.subjects.read();
    let users = self.users.read();
    let mut enrollments = self.enrollments.write();

    self.ensure_may_enroll(users.get(caller), caller)?;
    self.ensure_writable(subjects.get(subject_id)?)?;

    let enrolled = enrollments.entry(caller.clone()).or_default();
    if enrolled.contains(&subject_id) {
      match self.policy.duplicate_enrollment {
        DuplicateEnrollment::Reject => {
          return Err(Error::AlreadyEnrolled {
            identity: caller.clone(),
            subject_id,
          });
        }
        DuplicateEnrollment::Ignore => return Ok(()),
        DuplicateEnrollment::Allow => {}
      }
    }
    enrolled.push(subject_id);

    debug!(identity = %caller, subject_id = %subject_id, "enrollment recorded");
    Ok(())
  }

  fn list_enrolled_subjects(&self, caller: &Identity) -> Result<Vec<SubjectId>> {
    Ok(self.enrollments.list(caller))
  }
}
