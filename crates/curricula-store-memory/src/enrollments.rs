//! [`EnrollmentIndex`] — identity to the subjects it enrolled in.

use std::collections::HashMap;

use curricula_core::{subject::SubjectId, user::Identity};
use parking_lot::{RwLock, RwLockWriteGuard};

/// Append-only enrollment sequences, one per identity, in enrollment order.
#[derive(Debug, Default)]
pub struct EnrollmentIndex {
  table: RwLock<HashMap<Identity, Vec<SubjectId>>>,
}

impl EnrollmentIndex {
  pub(crate) fn write(
    &self,
  ) -> RwLockWriteGuard<'_, HashMap<Identity, Vec<SubjectId>>> {
    self.table.write()
  }

  /// Enrollments for `identity`; empty if it never enrolled.
  pub fn list(&self, identity: &Identity) -> Vec<SubjectId> {
    self.table.read().get(identity).cloned().unwrap_or_default()
  }
}
