//! # Elastic Scout
//!
//! Binary entry point for the elastic-scout search layer: environment-driven
//! dependency wiring plus cluster inspection commands.

pub mod commands;
pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during startup or command execution.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Engine error.
    #[error("Engine error: {0}")]
    EngineError(#[from] elastic_scout_engine::EngineError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
