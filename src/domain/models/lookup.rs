use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Values the provider uses to mean "no data" for a field
pub const PLACEHOLDER_VALUES: [&str; 3] = ["", "NA", "N/A"];

/// A single result record returned by the upstream provider.
///
/// The record is forwarded verbatim; field order is that of the upstream
/// response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupRecord(Map<String, Value>);

/// A labelled field ready to be shown to a person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
}

impl LookupRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Get a raw field value
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Number of fields in the record, placeholders included
    pub fn field_count(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Fields worth displaying, in record order.
    ///
    /// Null and placeholder values are skipped. Labels are the field name
    /// with underscores turned into spaces, upper-cased.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        self.0
            .iter()
            .filter(|(_, value)| !is_placeholder(value))
            .map(|(key, value)| DisplayRow {
                label: key.replace('_', " ").to_uppercase(),
                value: match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            })
            .collect()
    }
}

impl std::fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

fn is_placeholder(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => PLACEHOLDER_VALUES.contains(&s.as_str()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> LookupRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_rows_skip_placeholders() {
        let record = record(json!({
            "name": "John",
            "circle": "Delhi",
            "operator": "NA",
        }));

        let rows: Vec<String> = record.display_rows().iter().map(|r| r.to_string()).collect();
        assert_eq!(rows, vec!["NAME: John", "CIRCLE: Delhi"]);
    }

    #[test]
    fn test_display_rows_labels_and_values() {
        let record = record(json!({
            "father_name": "Ram",
            "alt_mobile": "N/A",
            "address": "",
            "email": null,
            "age": 42,
            "verified": false,
        }));

        let rows = record.display_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "FATHER NAME");
        assert_eq!(rows[0].value, "Ram");
        assert_eq!(rows[1].to_string(), "AGE: 42");
        assert_eq!(rows[2].to_string(), "VERIFIED: false");
    }

    #[test]
    fn test_record_serializes_verbatim() {
        let value = json!({"name": "John", "circle": "Delhi", "operator": "NA"});
        let record = record(value.clone());
        assert_eq!(serde_json::to_value(&record).unwrap(), value);
        assert_eq!(record.get("operator"), Some(&json!("NA")));
        assert_eq!(record.field_count(), 3);
    }
}
