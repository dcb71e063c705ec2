//! OpenSearch implementation of the search backend.
//!
//! This module provides a concrete implementation of `SearchBackend` using
//! the OpenSearch client, plus the connection configuration the transport
//! is built from.

mod client;
mod connection;

pub use client::OpenSearchBackend;
pub use connection::ConnectionConfig;
