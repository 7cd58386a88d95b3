//! [`SubjectStore`] — the subject table and id allocation.

use curricula_core::{
  Error, Result,
  policy::SubjectListing,
  subject::{Subject, SubjectFields, SubjectId},
};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Owns every subject ever created.
///
/// Rows are stored in an append-only arena: the subject with id `n` lives at
/// index `n - 1`, so ids are dense and never reused.
#[derive(Debug, Default)]
pub struct SubjectStore {
  table: RwLock<SubjectTable>,
}

#[derive(Debug, Default)]
pub(crate) struct SubjectTable {
  rows: Vec<Subject>,
}

impl SubjectTable {
  pub(crate) fn insert(&mut self, fields: SubjectFields) -> SubjectId {
    let id = SubjectId(self.rows.len() as u64 + 1);
    self.rows.push(Subject::new(id, fields));
    id
  }

  fn index(id: SubjectId) -> Option<usize> {
    id.0.checked_sub(1).and_then(|i| usize::try_from(i).ok())
  }

  pub(crate) fn get(&self, id: SubjectId) -> Result<&Subject> {
    Self::index(id)
      .and_then(|i| self.rows.get(i))
      .ok_or(Error::SubjectNotFound(id))
  }

  pub(crate) fn get_mut(&mut self, id: SubjectId) -> Result<&mut Subject> {
    Self::index(id)
      .and_then(|i| self.rows.get_mut(i))
      .ok_or(Error::SubjectNotFound(id))
  }

  pub(crate) fn ids(&self, listing: SubjectListing) -> Vec<SubjectId> {
    self
      .rows
      .iter()
      .filter(|s| listing == SubjectListing::All || s.active)
      .map(|s| s.id)
      .collect()
  }
}

impl SubjectStore {
  pub(crate) fn read(&self) -> RwLockReadGuard<'_, SubjectTable> {
    self.table.read()
  }

  pub(crate) fn write(&self) -> RwLockWriteGuard<'_, SubjectTable> {
    self.table.write()
  }

  /// Allocate the next id and insert an active subject under it.
  pub fn create(&self, fields: SubjectFields) -> SubjectId {
    self.write().insert(fields)
  }

  pub fn get(&self, id: SubjectId) -> Result<Subject> {
    self.read().get(id).cloned()
  }

  /// Clear the `active` flag. Idempotent.
  pub fn delete(&self, id: SubjectId) -> Result<()> {
    self.write().get_mut(id)?.active = false;
    Ok(())
  }

  pub fn list(&self, listing: SubjectListing) -> Vec<SubjectId> {
    self.read().ids(listing)
  }
}
