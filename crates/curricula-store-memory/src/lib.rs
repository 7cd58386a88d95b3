//! In-memory backend for the Curricula registry.
//!
//! Each table lives behind its own [`parking_lot::RwLock`]. Operations that
//! touch several tables lock them in a fixed order (subjects, schedules,
//! users, enrollments) and hold every lock until they are done, so no caller
//! ever observes a half-applied write.

mod enrollments;
mod registry;
mod schedules;
mod subjects;
mod users;

pub use enrollments::EnrollmentIndex;
pub use registry::MemoryRegistry;
pub use schedules::ScheduleStore;
pub use subjects::SubjectStore;
pub use users::UserDirectory;

pub use curricula_core::{Error, Result};

#[cfg(test)]
mod tests;
