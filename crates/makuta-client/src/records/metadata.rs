use serde_json::{Map, Value};

const FLATTEN_DELIMITER: &str = " | ";
const MISSING_CELL: &str = "-";

/// Backend metadata arrives either as a native JSON object or as a
/// JSON-encoded string, and is optional everywhere. Normalizing up front
/// keeps the rest of the pipeline off ad hoc shape probing: anything that
/// refuses to become an object is carried verbatim as `Raw`.
#[derive(Debug, Clone, PartialEq)]
pub enum Metadata {
    Absent,
    Object(Map<String, Value>),
    Raw(String),
}

impl Metadata {
    pub fn normalize(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return Self::Absent;
        };

        match value {
            Value::Null => Self::Absent,
            Value::Object(map) => Self::Object(map.clone()),
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Object(map)) => Self::Object(map),
                _ => Self::Raw(text.clone()),
            },
            other => Self::Raw(other.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Serialized form used as the free-text search haystack.
    pub fn search_haystack(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Object(map) => Value::Object(map.clone()).to_string(),
            Self::Raw(text) => text.clone(),
        }
    }

    /// One-line `key: value` summary for export cells. Recurses one level
    /// into nested objects; anything deeper degrades to its structural
    /// serialization rather than failing the row.
    pub fn flatten(&self) -> String {
        match self {
            Self::Absent => MISSING_CELL.to_string(),
            Self::Raw(text) => text.clone(),
            Self::Object(map) => {
                let mut pairs = Vec::new();
                for (key, value) in map {
                    match value {
                        Value::Object(nested) => {
                            for (nested_key, nested_value) in nested {
                                pairs.push(format!(
                                    "{key}.{nested_key}: {}",
                                    scalar_text(nested_value)
                                ));
                            }
                        }
                        other => pairs.push(format!("{key}: {}", scalar_text(other))),
                    }
                }

                if pairs.is_empty() {
                    return MISSING_CELL.to_string();
                }
                pairs.join(FLATTEN_DELIMITER)
            }
        }
    }

    /// Payment method for the export's dedicated column. `-` when absent.
    pub fn payment_method(&self) -> String {
        let Self::Object(map) = self else {
            return MISSING_CELL.to_string();
        };

        for key in ["payment_method", "method"] {
            if let Some(value) = map.get(key) {
                let text = scalar_text(value);
                if !text.is_empty() && text != MISSING_CELL {
                    return text;
                }
            }
        }

        MISSING_CELL.to_string()
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => MISSING_CELL.to_string(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
