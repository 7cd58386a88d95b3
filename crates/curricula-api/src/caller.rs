//! The [`Caller`] extractor: the identity the host authenticated.
//!
//! Authentication happens upstream (a gateway or proxy). It forwards the
//! principal in a trusted header, named by [`ApiState::caller_header`]; this
//! module only reads and validates it.

use axum::{
  extract::FromRequestParts,
  http::{HeaderMap, HeaderName, request::Parts},
};
use curricula_core::user::Identity;

use crate::{ApiState, error::ApiError};

/// Header used when the host does not configure one.
pub const DEFAULT_CALLER_HEADER: &str = "x-caller-identity";

/// The principal on whose behalf the request runs.
#[derive(Debug, Clone)]
pub struct Caller(pub Identity);

/// Read the caller identity from `headers`.
pub fn caller_identity(
  headers: &HeaderMap,
  header: &HeaderName,
) -> Result<Identity, ApiError> {
  let raw = headers
    .get(header)
    .ok_or_else(|| ApiError::Unauthenticated(format!("missing {header} header")))?
    .to_str()
    .map_err(|_| ApiError::Unauthenticated(format!("{header} is not valid ASCII")))?;

  Identity::parse(raw).map_err(|e| ApiError::Unauthenticated(e.to_string()))
}

impl<R> FromRequestParts<ApiState<R>> for Caller
where
  R: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &ApiState<R>,
  ) -> Result<Self, Self::Rejection> {
    caller_identity(&parts.headers, &state.caller_header).map(Caller)
  }
}
