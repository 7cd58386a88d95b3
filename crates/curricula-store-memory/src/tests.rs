//! Behavioural tests for `MemoryRegistry`.

use std::thread;

use curricula_core::{
  Error, ErrorKind,
  policy::{DuplicateEnrollment, InactiveSubjectWrites, RegistryPolicy, SubjectListing},
  registry::Registry,
  schedule::{NewSchedule, ScheduleId, ScheduleSlot},
  subject::{SubjectFields, SubjectId},
  user::{Identity, Role, UserRecord},
  validation::ValidationConfig,
};

use crate::MemoryRegistry;

fn registry() -> MemoryRegistry { MemoryRegistry::new() }

fn registry_with(policy: RegistryPolicy) -> MemoryRegistry {
  MemoryRegistry::with_config(policy, ValidationConfig::default())
}

fn calculus() -> SubjectFields {
  SubjectFields::new(
    "Calculo integral",
    "Se estudian los principios del calculo integral",
    3,
  )
}

fn slot(schedule_id: u64, start_hour: u8, end_hour: u8) -> NewSchedule {
  NewSchedule {
    schedule_id: ScheduleId(schedule_id),
    start_hour,
    end_hour,
  }
}

fn id(raw: &str) -> Identity { Identity::parse(raw).unwrap() }

fn student(r: &MemoryRegistry, raw: &str) -> Identity {
  let identity = id(raw);
  r.register_user(identity.clone(), Role::Student).unwrap();
  identity
}

// ─── Subjects ────────────────────────────────────────────────────────────────

#[test]
fn ids_are_sequential_from_one() {
  let r = registry();
  let ids: Vec<_> = (0..3)
    .map(|_| r.create_subject(calculus()).unwrap())
    .collect();

  assert_eq!(ids, vec![SubjectId(1), SubjectId(2), SubjectId(3)]);
  assert_eq!(r.list_subjects().unwrap(), ids);
}

#[test]
fn fresh_subject_is_active_with_no_schedules() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();

  let subject = r.get_subject(sid).unwrap();
  assert_eq!(subject.id, sid);
  assert_eq!(subject.name, "Calculo integral");
  assert_eq!(
    subject.description,
    "Se estudian los principios del calculo integral"
  );
  assert_eq!(subject.credits, 3);
  assert!(subject.active);
  assert_eq!(subject.schedule_count, 0);
}

#[test]
fn duplicate_names_are_allowed() {
  let r = registry();
  let a = r.create_subject(calculus()).unwrap();
  let b = r.create_subject(calculus()).unwrap();
  assert_ne!(a, b);
}

#[test]
fn get_unknown_subject_is_not_found() {
  let r = registry();
  r.create_subject(calculus()).unwrap();

  for missing in [SubjectId(0), SubjectId(2), SubjectId(u64::MAX)] {
    let err = r.get_subject(missing).unwrap_err();
    assert!(matches!(err, Error::SubjectNotFound(s) if s == missing));
  }
}

#[test]
fn update_overwrites_fields_only() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  r.add_schedule(sid, slot(1, 8, 10)).unwrap();

  r.update_subject(
    sid,
    SubjectFields::new("Fundamentos de calculo integral", "Nueva descripcion", 4),
  )
  .unwrap();

  let subject = r.get_subject(sid).unwrap();
  assert_eq!(subject.id, sid);
  assert_eq!(subject.name, "Fundamentos de calculo integral");
  assert_eq!(subject.description, "Nueva descripcion");
  assert_eq!(subject.credits, 4);
  assert!(subject.active);
  assert_eq!(subject.schedule_count, 1);
}

#[test]
fn update_unknown_subject_is_not_found() {
  let r = registry();
  let err = r.update_subject(SubjectId(9), calculus()).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_is_soft_and_idempotent() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();

  r.delete_subject(sid).unwrap();
  assert!(!r.get_subject(sid).unwrap().active);

  r.delete_subject(sid).unwrap();
  let subject = r.get_subject(sid).unwrap();
  assert!(!subject.active);
  assert_eq!(subject.name, "Calculo integral");
}

#[test]
fn delete_unknown_subject_is_not_found() {
  let r = registry();
  let err = r.delete_subject(SubjectId(1)).unwrap_err();
  assert!(matches!(err, Error::SubjectNotFound(SubjectId(1))));
}

#[test]
fn deleted_ids_are_never_reissued() {
  let r = registry();
  let first = r.create_subject(calculus()).unwrap();
  r.delete_subject(first).unwrap();
  let second = r.create_subject(calculus()).unwrap();
  assert_eq!(second, SubjectId(2));
}

#[test]
fn invalid_subject_fields_leave_no_trace() {
  let r = registry();
  let err = r
    .create_subject(SubjectFields::new("", "no name", 3))
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidInput);

  let err = r
    .create_subject(SubjectFields::new("Seminar", "", 0))
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::InvalidInput);

  assert!(r.list_subjects().unwrap().is_empty());
  assert_eq!(r.create_subject(calculus()).unwrap(), SubjectId(1));
}

#[test]
fn invalid_update_keeps_previous_values() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  assert!(r.update_subject(sid, SubjectFields::new(" ", "", 3)).is_err());
  assert_eq!(r.get_subject(sid).unwrap().name, "Calculo integral");
}

// ─── Listing policy ──────────────────────────────────────────────────────────

#[test]
fn listing_includes_deleted_subjects_by_default() {
  let r = registry();
  let a = r.create_subject(calculus()).unwrap();
  let b = r.create_subject(calculus()).unwrap();
  r.delete_subject(a).unwrap();

  assert_eq!(r.list_subjects().unwrap(), vec![a, b]);
}

#[test]
fn listing_can_exclude_deleted_subjects() {
  let r = registry_with(RegistryPolicy {
    subject_listing: SubjectListing::ActiveOnly,
    ..RegistryPolicy::default()
  });
  let a = r.create_subject(calculus()).unwrap();
  let b = r.create_subject(calculus()).unwrap();
  r.delete_subject(a).unwrap();

  assert_eq!(r.list_subjects().unwrap(), vec![b]);
  // Still readable directly.
  assert!(!r.get_subject(a).unwrap().active);
}

// ─── Schedules ───────────────────────────────────────────────────────────────

#[test]
fn add_schedule_bumps_count() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();

  r.add_schedule(sid, slot(1, 8, 10)).unwrap();

  assert_eq!(r.get_subject(sid).unwrap().schedule_count, 1);
  let fetched = r.get_schedule(sid, ScheduleId(1)).unwrap();
  assert_eq!(
    fetched,
    ScheduleSlot {
      subject_id:  sid,
      schedule_id: ScheduleId(1),
      start_hour:  8,
      end_hour:    10,
    }
  );
}

#[test]
fn duplicate_schedule_is_conflict_without_count_change() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  r.add_schedule(sid, slot(1, 8, 10)).unwrap();

  let err = r.add_schedule(sid, slot(1, 14, 16)).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Conflict);
  assert!(matches!(
    err,
    Error::DuplicateSchedule { subject_id, schedule_id: ScheduleId(1) } if subject_id == sid
  ));

  assert_eq!(r.get_subject(sid).unwrap().schedule_count, 1);
  assert_eq!(r.get_schedule(sid, ScheduleId(1)).unwrap().start_hour, 8);
}

#[test]
fn exhausted_schedule_count_is_conflict_without_insert() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  r.subjects.write().get_mut(sid).unwrap().schedule_count = u64::MAX - 1;

  r.add_schedule(sid, slot(1, 8, 10)).unwrap();
  assert_eq!(r.get_subject(sid).unwrap().schedule_count, u64::MAX);

  let err = r.add_schedule(sid, slot(2, 8, 10)).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Conflict);
  assert!(matches!(err, Error::ScheduleCountOverflow(s) if s == sid));
  assert_eq!(r.get_subject(sid).unwrap().schedule_count, u64::MAX);
  assert!(matches!(
    r.get_schedule(sid, ScheduleId(2)),
    Err(Error::ScheduleNotFound { .. })
  ));
}

#[test]
fn schedule_ids_are_scoped_per_subject() {
  let r = registry();
  let a = r.create_subject(calculus()).unwrap();
  let b = r.create_subject(calculus()).unwrap();

  r.add_schedule(a, slot(1, 8, 10)).unwrap();
  r.add_schedule(b, slot(1, 12, 13)).unwrap();

  assert_eq!(r.get_schedule(a, ScheduleId(1)).unwrap().start_hour, 8);
  assert_eq!(r.get_schedule(b, ScheduleId(1)).unwrap().start_hour, 12);
}

#[test]
fn add_schedule_to_unknown_subject_is_not_found() {
  let r = registry();
  let err = r.add_schedule(SubjectId(4), slot(1, 8, 10)).unwrap_err();
  assert!(matches!(err, Error::SubjectNotFound(SubjectId(4))));
}

#[test]
fn malformed_hours_are_rejected() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();

  for bad in [slot(1, 10, 8), slot(1, 9, 9), slot(1, 22, 24)] {
    let err = r.add_schedule(sid, bad).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
  }
  assert_eq!(r.get_subject(sid).unwrap().schedule_count, 0);
  assert!(r.get_schedule(sid, ScheduleId(1)).is_err());
}

#[test]
fn get_unknown_schedule_is_not_found() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  r.add_schedule(sid, slot(1, 8, 10)).unwrap();

  let err = r.get_schedule(sid, ScheduleId(2)).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  let err = r.get_schedule(SubjectId(2), ScheduleId(1)).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn list_schedules_is_ordered_by_schedule_id() {
  let r = registry();
  let a = r.create_subject(calculus()).unwrap();
  let b = r.create_subject(calculus()).unwrap();
  r.add_schedule(a, slot(7, 14, 16)).unwrap();
  r.add_schedule(b, slot(1, 8, 9)).unwrap();
  r.add_schedule(a, slot(2, 8, 10)).unwrap();

  let ids: Vec<_> = r
    .list_schedules(a)
    .unwrap()
    .into_iter()
    .map(|s| s.schedule_id)
    .collect();
  assert_eq!(ids, vec![ScheduleId(2), ScheduleId(7)]);

  assert!(r.list_schedules(SubjectId(3)).is_err());
}

#[test]
fn deleting_a_subject_keeps_its_schedules() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  r.add_schedule(sid, slot(1, 8, 10)).unwrap();
  r.delete_subject(sid).unwrap();

  assert!(r.get_schedule(sid, ScheduleId(1)).is_ok());
  assert_eq!(r.get_subject(sid).unwrap().schedule_count, 1);
}

// ─── Inactive-subject policy ─────────────────────────────────────────────────

#[test]
fn writes_on_deleted_subject_allowed_by_default() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  r.delete_subject(sid).unwrap();

  r.update_subject(sid, SubjectFields::new("Renamed", "", 2)).unwrap();
  r.add_schedule(sid, slot(1, 8, 10)).unwrap();

  let subject = r.get_subject(sid).unwrap();
  assert_eq!(subject.name, "Renamed");
  assert_eq!(subject.schedule_count, 1);
  assert!(!subject.active);
}

#[test]
fn writes_on_deleted_subject_can_be_rejected() {
  let r = registry_with(RegistryPolicy {
    inactive_subject_writes: InactiveSubjectWrites::Reject,
    ..RegistryPolicy::default()
  });
  let sid = r.create_subject(calculus()).unwrap();
  let alice = student(&r, "alice");
  r.delete_subject(sid).unwrap();

  let err = r.update_subject(sid, SubjectFields::new("Renamed", "", 2)).unwrap_err();
  assert!(matches!(err, Error::SubjectInactive(_)));
  let err = r.add_schedule(sid, slot(1, 8, 10)).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Conflict);
  let err = r.enroll_self_in_subject(&alice, sid).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::Conflict);

  let subject = r.get_subject(sid).unwrap();
  assert_eq!(subject.name, "Calculo integral");
  assert_eq!(subject.schedule_count, 0);
  assert!(r.list_enrolled_subjects(&alice).unwrap().is_empty());
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[test]
fn register_then_get() {
  let r = registry();
  let alice = id("alice");
  r.register_user(alice.clone(), Role::Student).unwrap();

  assert_eq!(
    r.get_user(&alice).unwrap(),
    UserRecord {
      identity: alice,
      role:     Role::Student,
      active:   true,
    }
  );
}

#[test]
fn re_registration_overwrites_role() {
  let r = registry();
  let bob = id("bob");
  r.register_user(bob.clone(), Role::Student).unwrap();
  r.register_user(bob.clone(), Role::Staff).unwrap();

  let user = r.get_user(&bob).unwrap();
  assert_eq!(user.role, Role::Staff);
  assert!(user.active);
}

#[test]
fn get_unknown_user_is_not_found() {
  let r = registry();
  let err = r.get_user(&id("nobody")).unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

// ─── Enrollment ──────────────────────────────────────────────────────────────

#[test]
fn enroll_then_list() {
  let r = registry();
  let addr = student(&r, "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
  let sid = r.create_subject(calculus()).unwrap();
  assert_eq!(sid, SubjectId(1));

  r.enroll_self_in_subject(&addr, sid).unwrap();

  assert_eq!(r.list_enrolled_subjects(&addr).unwrap(), vec![SubjectId(1)]);
}

#[test]
fn enrollments_keep_order_and_are_per_caller() {
  let r = registry();
  let alice = student(&r, "alice");
  let bob = student(&r, "bob");
  let a = r.create_subject(calculus()).unwrap();
  let b = r.create_subject(calculus()).unwrap();

  r.enroll_self_in_subject(&alice, b).unwrap();
  r.enroll_self_in_subject(&alice, a).unwrap();
  r.enroll_self_in_subject(&bob, a).unwrap();

  assert_eq!(r.list_enrolled_subjects(&alice).unwrap(), vec![b, a]);
  assert_eq!(r.list_enrolled_subjects(&bob).unwrap(), vec![a]);
}

#[test]
fn never_enrolled_lists_empty() {
  let r = registry();
  assert!(r.list_enrolled_subjects(&id("carol")).unwrap().is_empty());
}

#[test]
fn enroll_in_unknown_subject_is_not_found() {
  let r = registry();
  let alice = student(&r, "alice");
  let err = r.enroll_self_in_subject(&alice, SubjectId(1)).unwrap_err();
  assert!(matches!(err, Error::SubjectNotFound(SubjectId(1))));
  assert!(r.list_enrolled_subjects(&alice).unwrap().is_empty());
}

#[test]
fn unregistered_caller_is_unauthorized() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  let stranger = id("stranger");

  let err = r.enroll_self_in_subject(&stranger, sid).unwrap_err();
  assert!(matches!(err, Error::NotRegistered(_)));
  assert!(r.list_enrolled_subjects(&stranger).unwrap().is_empty());
}

#[test]
fn staff_cannot_enroll_by_default() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();
  let staff = id("registrar");
  r.register_user(staff.clone(), Role::Staff).unwrap();

  let err = r.enroll_self_in_subject(&staff, sid).unwrap_err();
  assert!(matches!(err, Error::NotAStudent(_)));
  assert_eq!(err.kind(), ErrorKind::Unauthorized);
}

#[test]
fn staff_may_enroll_when_not_students_only() {
  let r = registry_with(RegistryPolicy {
    students_only: false,
    ..RegistryPolicy::default()
  });
  let sid = r.create_subject(calculus()).unwrap();
  let staff = id("registrar");
  r.register_user(staff.clone(), Role::Staff).unwrap();

  r.enroll_self_in_subject(&staff, sid).unwrap();
  assert_eq!(r.list_enrolled_subjects(&staff).unwrap(), vec![sid]);
}

#[test]
fn duplicate_enrollment_rejected_by_default() {
  let r = registry();
  let alice = student(&r, "alice");
  let sid = r.create_subject(calculus()).unwrap();
  r.enroll_self_in_subject(&alice, sid).unwrap();

  let err = r.enroll_self_in_subject(&alice, sid).unwrap_err();
  assert!(matches!(err, Error::AlreadyEnrolled { .. }));
  assert_eq!(r.list_enrolled_subjects(&alice).unwrap(), vec![sid]);
}

#[test]
fn duplicate_enrollment_can_be_ignored() {
  let r = registry_with(RegistryPolicy {
    duplicate_enrollment: DuplicateEnrollment::Ignore,
    ..RegistryPolicy::default()
  });
  let alice = student(&r, "alice");
  let sid = r.create_subject(calculus()).unwrap();

  r.enroll_self_in_subject(&alice, sid).unwrap();
  r.enroll_self_in_subject(&alice, sid).unwrap();
  assert_eq!(r.list_enrolled_subjects(&alice).unwrap(), vec![sid]);
}

#[test]
fn duplicate_enrollment_can_be_recorded_twice() {
  let r = registry_with(RegistryPolicy {
    duplicate_enrollment: DuplicateEnrollment::Allow,
    ..RegistryPolicy::default()
  });
  let alice = student(&r, "alice");
  let sid = r.create_subject(calculus()).unwrap();

  r.enroll_self_in_subject(&alice, sid).unwrap();
  r.enroll_self_in_subject(&alice, sid).unwrap();
  assert_eq!(r.list_enrolled_subjects(&alice).unwrap(), vec![sid, sid]);
}

#[test]
fn deleting_a_subject_keeps_enrollments() {
  let r = registry();
  let alice = student(&r, "alice");
  let sid = r.create_subject(calculus()).unwrap();
  r.enroll_self_in_subject(&alice, sid).unwrap();
  r.delete_subject(sid).unwrap();

  assert_eq!(r.list_enrolled_subjects(&alice).unwrap(), vec![sid]);
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[test]
fn concurrent_creates_allocate_dense_ids() {
  let r = registry();

  thread::scope(|scope| {
    for _ in 0..8 {
      scope.spawn(|| {
        for _ in 0..25 {
          r.create_subject(calculus()).unwrap();
        }
      });
    }
  });

  let ids = r.list_subjects().unwrap();
  let expected: Vec<_> = (1..=200).map(SubjectId).collect();
  assert_eq!(ids, expected);
}

#[test]
fn concurrent_schedules_are_counted_once_each() {
  let r = registry();
  let sid = r.create_subject(calculus()).unwrap();

  // Every thread races for the same 50 schedule ids; each id lands once.
  thread::scope(|scope| {
    for _ in 0..4 {
      scope.spawn(|| {
        for n in 0..50 {
          let _ = r.add_schedule(sid, slot(n, 8, 10));
        }
      });
    }
  });

  assert_eq!(r.get_subject(sid).unwrap().schedule_count, 50);
  assert_eq!(r.list_schedules(sid).unwrap().len(), 50);
}

#[test]
fn registries_are_independent() {
  let a = registry();
  let b = registry();
  a.create_subject(calculus()).unwrap();

  assert_eq!(a.list_subjects().unwrap().len(), 1);
  assert!(b.list_subjects().unwrap().is_empty());
  assert_eq!(b.create_subject(calculus()).unwrap(), SubjectId(1));
}
