//! Tool management and execution framework for agent-rs
//!
//! Tools are narrow capabilities exposed behind one calling convention so an
//! external orchestrator can invoke them interchangeably.

pub mod registry;
pub mod tool;

pub use registry::ToolRegistry;
pub use tool::Tool;
