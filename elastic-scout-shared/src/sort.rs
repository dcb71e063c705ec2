//! Sort specification primitives.

use serde::{Deserialize, Serialize};

/// Direction of an ordered sort clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The wire representation used in sort clauses.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// A single (field, direction) sort specification.
///
/// Caller-supplied sorts are appended after the default relevance-descending
/// sort in the generated query document; they never replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The document field to sort on.
    pub field: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a new sort specification.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Ascending sort on the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_as_str() {
        assert_eq!(SortDirection::Asc.as_str(), "asc");
        assert_eq!(SortDirection::Desc.as_str(), "desc");
    }

    #[test]
    fn test_constructors() {
        let spec = SortSpec::asc("price");
        assert_eq!(spec.field, "price");
        assert_eq!(spec.direction, SortDirection::Asc);

        let spec = SortSpec::desc("created_at");
        assert_eq!(spec.direction, SortDirection::Desc);
    }
}
