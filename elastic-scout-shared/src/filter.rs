//! Filter value primitives.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The value side of a search filter.
///
/// A scalar value compiles to an exact-equality clause in the generated
/// query document; a set of values compiles to a set-membership clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Set-valued filter, compiled to a `terms` clause.
    Many(Vec<Value>),
    /// Scalar filter, compiled to a `term` clause.
    One(Value),
}

impl From<Value> for FilterValue {
    /// JSON arrays become set-membership filters; every other value is
    /// an exact-match filter.
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => FilterValue::Many(values),
            other => FilterValue::One(other),
        }
    }
}

impl FilterValue {
    /// Create a scalar filter value.
    pub fn one(value: impl Into<Value>) -> Self {
        FilterValue::One(value.into())
    }

    /// Create a set-valued filter value.
    pub fn many<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        FilterValue::Many(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_scalar() {
        let value = FilterValue::from(json!("active"));
        assert_eq!(value, FilterValue::One(json!("active")));
    }

    #[test]
    fn test_from_array() {
        let value = FilterValue::from(json!(["a", "b"]));
        assert_eq!(value, FilterValue::Many(vec![json!("a"), json!("b")]));
    }

    #[test]
    fn test_many_constructor() {
        let value = FilterValue::many(vec![1, 2, 3]);
        assert_eq!(value, FilterValue::Many(vec![json!(1), json!(2), json!(3)]));
    }
}
