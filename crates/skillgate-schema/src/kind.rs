use std::fmt;

use serde_json::Value;

/// The JSON kind of a decoded value.
///
/// Arrays and objects are distinct kinds — an array never classifies as
/// an object and vice versa. Integer and float numbers both classify as
/// [`JsonKind::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a decoded value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Lowercase name used in defect details.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `text` is a complete RFC 3339 timestamp.
///
/// Accepted: full date, `T` separator, full time, optional fractional
/// seconds, and a mandatory `Z` or numeric offset designator. Partial
/// dates, date-only strings, and offset-less timestamps are rejected.
pub fn is_iso8601(text: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(text).is_ok()
}
