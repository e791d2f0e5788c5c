//! Core types shared by the agent-rs tool crates
//!
//! Tools report failures through a single [`Error`] type so an orchestrator
//! can handle every adapter the same way.

pub mod error;

pub use error::{Error, Result};
