//! skycast core: city catalog, reading generation, and error types.
//!
//! This crate defines the weather domain shared by the server and any
//! tooling built on top of it. It intentionally carries no HTTP or runtime
//! dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SkycastError`/`Result` so the serving
//! process does not crash while handling a request.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod reading;

/// Shared result type.
pub use error::{Result, SkycastError};
