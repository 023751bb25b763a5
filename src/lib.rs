//! Notifier-RS Library
//!
//! Interchangeable notification channels (email, SMS), a manager that
//! broadcasts one message over all of them, and the CLI around them.

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
