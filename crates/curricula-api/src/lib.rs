//! JSON REST API for Curricula.
//!
//! Exposes an axum [`Router`] backed by any [`curricula_core::registry::Registry`].
//! Authentication and TLS are the host's responsibility; the authenticated
//! principal arrives in a trusted header (see [`caller`]).
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", curricula_api::api_router(ApiState::new(registry)))
//! ```

pub mod caller;
pub mod enrollments;
pub mod error;
pub mod extract;
pub mod schedules;
pub mod subjects;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  extract::FromRef,
  http::HeaderName,
  routing::{get, post},
};
use curricula_core::registry::Registry;

pub use caller::{Caller, DEFAULT_CALLER_HEADER};
pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<R> {
  pub registry:      Arc<R>,
  /// Header carrying the authenticated principal.
  pub caller_header: HeaderName,
}

impl<R> ApiState<R> {
  pub fn new(registry: Arc<R>) -> Self {
    Self {
      registry,
      caller_header: HeaderName::from_static(DEFAULT_CALLER_HEADER),
    }
  }

  pub fn with_caller_header(mut self, header: HeaderName) -> Self {
    self.caller_header = header;
    self
  }
}

impl<R> Clone for ApiState<R> {
  fn clone(&self) -> Self {
    Self {
      registry:      Arc::clone(&self.registry),
      caller_header: self.caller_header.clone(),
    }
  }
}

impl<R> FromRef<ApiState<R>> for Arc<R> {
  fn from_ref(state: &ApiState<R>) -> Self { Arc::clone(&state.registry) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<R>(state: ApiState<R>) -> Router<()>
where
  R: Registry + 'static,
{
  Router::new()
    // Subjects
    .route("/subjects", get(subjects::list::<R>).post(subjects::create::<R>))
    .route(
      "/subjects/{id}",
      get(subjects::get_one::<R>)
        .put(subjects::update::<R>)
        .delete(subjects::delete::<R>),
    )
    // Schedules
    .route(
      "/subjects/{id}/schedules",
      get(schedules::list::<R>).post(schedules::create::<R>),
    )
    .route(
      "/subjects/{id}/schedules/{schedule_id}",
      get(schedules::get_one::<R>),
    )
    // Users
    .route("/users", post(users::register::<R>))
    .route("/users/{identity}", get(users::get_one::<R>))
    // Enrollment
    .route(
      "/enrollments",
      get(enrollments::list::<R>).post(enrollments::enroll::<R>),
    )
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
