//! # Elastic Scout Shared
//!
//! Shared data types for the elastic-scout search engine layer: filter and
//! sort primitives, query-method configuration, and typed views over search
//! responses. These types carry no backend dependencies so they can be used
//! by application code without pulling in the engine.

pub mod config;
pub mod filter;
pub mod result;
pub mod sort;

pub use config::{QueryConfig, SearchConfig};
pub use filter::FilterValue;
pub use result::{PaginatedResult, SearchHit, SearchResult};
pub use sort::{SortDirection, SortSpec};
