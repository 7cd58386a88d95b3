//! [`ScheduleStore`] — schedule slots keyed by `(subject, schedule)`.

use std::collections::BTreeMap;

use curricula_core::{
  Error, Result,
  schedule::{ScheduleId, ScheduleSlot},
  subject::SubjectId,
};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Owns every schedule slot. Slots are never removed, including when their
/// subject is deleted.
#[derive(Debug, Default)]
pub struct ScheduleStore {
  table: RwLock<ScheduleTable>,
}

#[derive(Debug, Default)]
pub(crate) struct ScheduleTable {
  // Ordered so a subject's slots form one contiguous range.
  slots: BTreeMap<(SubjectId, ScheduleId), ScheduleSlot>,
}

impl ScheduleTable {
  /// Insert `slot`, failing if its id is already taken within its subject.
  pub(crate) fn insert(&mut self, slot: ScheduleSlot) -> Result<()> {
    let key = (slot.subject_id, slot.schedule_id);
    if self.slots.contains_key(&key) {
      return Err(Error::DuplicateSchedule {
        subject_id:  slot.subject_id,
        schedule_id: slot.schedule_id,
      });
    }
    self.slots.insert(key, slot);
    Ok(())
  }

  pub(crate) fn get(
    &self,
    subject_id: SubjectId,
    schedule_id: ScheduleId,
  ) -> Result<&ScheduleSlot> {
    self
      .slots
      .get(&(subject_id, schedule_id))
      .ok_or(Error::ScheduleNotFound { subject_id, schedule_id })
  }

  pub(crate) fn for_subject(&self, subject_id: SubjectId) -> Vec<ScheduleSlot> {
    self
      .slots
      .range((subject_id, ScheduleId(u64::MIN))..=(subject_id, ScheduleId(u64::MAX)))
      .map(|(_, slot)| slot.clone())
      .collect()
  }
}

impl ScheduleStore {
  pub(crate) fn read(&self) -> RwLockReadGuard<'_, ScheduleTable> {
    self.table.read()
  }

  pub(crate) fn write(&self) -> RwLockWriteGuard<'_, ScheduleTable> {
    self.table.write()
  }

  pub fn get(
    &self,
    subject_id: SubjectId,
    schedule_id: ScheduleId,
  ) -> Result<ScheduleSlot> {
    self.read().get(subject_id, schedule_id).cloned()
  }

  pub fn for_subject(&self, subject_id: SubjectId) -> Vec<ScheduleSlot> {
    self.read().for_subject(subject_id)
  }
}
