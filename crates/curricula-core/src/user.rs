//! Users and the identities they act under.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationError, validate_identity};

/// An opaque principal id, authenticated by the host before it reaches the
/// registry. The registry never mints or infers one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
  /// Wrap `raw` after checking it is non-empty, bounded, and free of
  /// whitespace and control characters.
  pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
    let raw = raw.into();
    validate_identity(&raw)?;
    Ok(Self(raw))
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Identity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl TryFrom<String> for Identity {
  type Error = ValidationError;

  fn try_from(raw: String) -> Result<Self, Self::Error> { Self::parse(raw) }
}

impl From<Identity> for String {
  fn from(identity: Identity) -> Self { identity.0 }
}

/// What a registered user is allowed to do.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
  Student,
  Staff,
}

/// A registered principal as returned by
/// [`Registry::get_user`](crate::registry::Registry::get_user).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
  pub identity: Identity,
  pub role:     Role,
  pub active:   bool,
}
