//! Input validation for registry operations.
//!
//! Limits on text fields and credits come from [`ValidationConfig`]; hour
//! bounds are fixed by the clock.

use serde::Deserialize;
use thiserror::Error;

use crate::{schedule::NewSchedule, subject::SubjectFields};

/// Hours run `0..HOURS_PER_DAY`.
pub const HOURS_PER_DAY: u8 = 24;

/// Upper bound on identity length, in UTF-8 bytes.
pub const MAX_IDENTITY_BYTES: usize = 256;

/// The field that failed validation and the constraint it violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
  pub field:      String,
  pub constraint: String,
}

impl ValidationError {
  pub fn new(field: impl Into<String>, constraint: impl Into<String>) -> Self {
    Self {
      field:      field.into(),
      constraint: constraint.into(),
    }
  }
}

/// Limits applied to subject fields. The upper bounds are unset, and so
/// unlimited, unless a deployment configures them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
  pub max_name_bytes:        Option<usize>,
  pub max_description_bytes: Option<usize>,
  /// Credits below this are rejected; `1` forbids zero-credit subjects.
  pub min_credits:           u32,
  pub max_credits:           Option<u32>,
}

impl Default for ValidationConfig {
  fn default() -> Self {
    Self {
      max_name_bytes:        None,
      max_description_bytes: None,
      min_credits:           1,
      max_credits:           None,
    }
  }
}

fn check_text_len(
  field: &str,
  value: &str,
  max: Option<usize>,
) -> Result<(), ValidationError> {
  match max {
    Some(max) if value.len() > max => Err(ValidationError::new(
      field,
      format!("length {} bytes exceeds maximum {max} bytes", value.len()),
    )),
    _ => Ok(()),
  }
}

/// Check the caller-editable fields of a subject.
///
/// # Errors
///
/// Returns [`ValidationError`] if the name is blank, a text field exceeds a
/// configured byte limit, or credits fall below `min_credits` or above a
/// configured `max_credits`.
pub fn validate_subject_fields(
  fields: &SubjectFields,
  config: &ValidationConfig,
) -> Result<(), ValidationError> {
  if fields.name.trim().is_empty() {
    return Err(ValidationError::new("name", "must not be empty"));
  }
  check_text_len("name", &fields.name, config.max_name_bytes)?;
  check_text_len(
    "description",
    &fields.description,
    config.max_description_bytes,
  )?;
  if fields.credits < config.min_credits {
    return Err(ValidationError::new(
      "credits",
      format!("must be at least {}", config.min_credits),
    ));
  }
  if let Some(max) = config.max_credits
    && fields.credits > max
  {
    return Err(ValidationError::new(
      "credits",
      format!("must be at most {max}"),
    ));
  }
  Ok(())
}

/// Check that both hours fall within a day and the slot has positive length.
pub fn validate_hours(slot: &NewSchedule) -> Result<(), ValidationError> {
  for (field, hour) in [("start_hour", slot.start_hour), ("end_hour", slot.end_hour)] {
    if hour >= HOURS_PER_DAY {
      return Err(ValidationError::new(
        field,
        format!("{hour} is outside 0..={}", HOURS_PER_DAY - 1),
      ));
    }
  }
  if slot.start_hour >= slot.end_hour {
    return Err(ValidationError::new(
      "end_hour",
      format!(
        "must be after start_hour ({} >= {})",
        slot.start_hour, slot.end_hour
      ),
    ));
  }
  Ok(())
}

pub fn validate_identity(raw: &str) -> Result<(), ValidationError> {
  if raw.is_empty() {
    return Err(ValidationError::new("identity", "must not be empty"));
  }
  if raw.len() > MAX_IDENTITY_BYTES {
    return Err(ValidationError::new(
      "identity",
      format!(
        "length {} bytes exceeds maximum {MAX_IDENTITY_BYTES} bytes",
        raw.len()
      ),
    ));
  }
  if let Some(c) = raw.chars().find(|c| c.is_whitespace() || c.is_control()) {
    return Err(ValidationError::new(
      "identity",
      format!("contains invalid character {c:?}"),
    ));
  }
  Ok(())
}
