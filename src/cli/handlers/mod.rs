//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod broadcast;
pub mod demo;
pub mod send;

pub use broadcast::BroadcastCommandHandler;
pub use demo::DemoCommandHandler;
pub use send::SendCommandHandler;
