//! Request extractors whose rejections surface as [`ApiError`].
//!
//! axum's own [`Json`] and [`Path`] reject with a 422 or 400 and a
//! plain-text body. These wrappers route the rejection through
//! [`ApiError::BadRequest`] so a malformed request gets the same
//! `{ "error": ... }` body as a registry error.

use axum::{
  Json,
  extract::{
    FromRequest, FromRequestParts, Path, Request,
    rejection::{JsonRejection, PathRejection},
  },
  http::request::Parts,
};

use crate::error::ApiError;

/// A JSON request body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
  Json<T>: FromRequest<S, Rejection = JsonRejection>,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state).await?;
    Ok(Self(value))
  }
}

/// Typed path parameters.
#[derive(Debug)]
pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
  Path<T>: FromRequestParts<S, Rejection = PathRejection>,
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
    Ok(Self(value))
  }
}
