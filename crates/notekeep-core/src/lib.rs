//! notekeep core: the note store and the error surface shared by the server.
//!
//! This crate carries no HTTP or runtime dependencies. The server wraps it in
//! axum handlers; tests drive it directly.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `NoteError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;

/// Shared result type.
pub use error::{Result, NoteError};
pub use store::{NoteStore, StoreObserver};
