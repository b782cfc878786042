//! Flat field-name to value mapping submitted to the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat mapping of field name to value for one stored event.
///
/// Writing an existing key replaces its value, so callers layering fields on
/// top of each other get last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any existing value under the same name.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style variant of [`set`](Record::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Returns the value stored under `field`, if any.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the value under `field` as a string slice, if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Whether the record contains `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over fields in the record.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut record = Record::new();
        record.set("text", "first");
        record.set("text", "second");

        assert_eq!(record.get_str("text"), Some("second"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_mixed_value_types() {
        let record = Record::new()
            .with("text", "boom")
            .with("attempts", 3)
            .with("recovered", true);

        assert_eq!(record.get_str("text"), Some("boom"));
        assert_eq!(record.get("attempts"), Some(&Value::from(3)));
        assert_eq!(record.get("recovered"), Some(&Value::Bool(true)));
    }
}
