//! Shared building blocks for `pinger`.
//!
//! * **[`target`]**: the host/port pair a probe runs against and its validation.
//! * **[`settings`]**: the storage contract for the current target.
//! * **[`config`]**: runtime configuration assembled by the front end.
//! * **[`error`]**: error types shared across crates.

pub mod config;
pub mod error;
pub mod macros;
pub mod settings;
pub mod target;

#[doc(hidden)]
pub use tracing as __tracing;
