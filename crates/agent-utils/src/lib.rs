//! Shared utilities for agent-rs
//!
//! Logging setup and configuration helpers used across the workspace.

pub mod config;
pub mod logging;

pub use config::{env_var, load_json_file};
pub use logging::{LogFormat, init_tracing, init_tracing_with};
