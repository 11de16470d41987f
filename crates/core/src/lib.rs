//! WatchedIt domain core.
//!
//! Shared types, domain constants, and validation helpers used by the
//! database and API crates. This crate has no I/O dependencies.

pub mod error;
pub mod tag;
pub mod types;
pub mod work;
