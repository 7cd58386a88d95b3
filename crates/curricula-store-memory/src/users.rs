//! [`UserDirectory`] — identity to user record.

use std::collections::HashMap;

use curricula_core::{
  Error, Result,
  user::{Identity, Role, UserRecord},
};
use parking_lot::{RwLock, RwLockReadGuard};

#[derive(Debug, Default)]
pub struct UserDirectory {
  table: RwLock<HashMap<Identity, UserRecord>>,
}

impl UserDirectory {
  pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<Identity, UserRecord>> {
    self.table.read()
  }

  /// Insert or overwrite the record for `identity`; always leaves it active.
  pub fn register(&self, identity: Identity, role: Role) {
    let record = UserRecord {
      identity: identity.clone(),
      role,
      active: true,
    };
    self.table.write().insert(identity, record);
  }

  pub fn get(&self, identity: &Identity) -> Result<UserRecord> {
    self
      .read()
      .get(identity)
      .cloned()
      .ok_or_else(|| Error::UserNotFound(identity.clone()))
  }
}
