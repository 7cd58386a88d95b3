//! Core types and trait definitions for the Curricula registry.
//!
//! This crate is deliberately free of HTTP and storage dependencies. Backends
//! implement [`registry::Registry`]; hosts depend on that abstraction.

pub mod error;
pub mod policy;
pub mod registry;
pub mod schedule;
pub mod subject;
pub mod user;
pub mod validation;

pub use error::{Error, ErrorKind, Result};
