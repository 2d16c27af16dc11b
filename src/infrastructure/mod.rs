//! Infrastructure layer module
//!
//! - Configuration loading and validation
//! - Logging infrastructure

pub mod config;
pub mod logging;
