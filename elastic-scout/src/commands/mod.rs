//! Cluster inspection commands.

mod indices;

pub use indices::indices;
