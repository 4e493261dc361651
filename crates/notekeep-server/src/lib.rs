//! notekeep server library entry.
//!
//! Wires the note store, HTTP handlers, config, and metrics into an axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod notes;
pub mod obs;
pub mod ops;
pub mod router;
