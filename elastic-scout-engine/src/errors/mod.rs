//! Error types for the search engine layer.

mod engine_error;

pub use engine_error::EngineError;
