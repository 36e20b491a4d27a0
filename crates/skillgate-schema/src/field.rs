use std::sync::Arc;

use serde_json::Value;

use crate::defect::{Defect, DefectKind};
use crate::kind::{is_iso8601, JsonKind};
use crate::object::ObjectSchema;
use crate::path::FieldPath;

/// Expected shape of a single declared field.
#[derive(Debug, Clone)]
pub enum FieldKind {
    String,
    /// Integer or float; both JSON number forms are accepted.
    Number,
    Boolean,
    /// Any JSON object. The internal shape is not checked — used for
    /// opaque payloads whose contract belongs to another validator.
    Object,
    /// Array whose every element must match the item kind. Failing
    /// elements each contribute their own defect at an indexed path.
    Array(Box<FieldKind>),
    /// String carrying a complete RFC 3339 timestamp.
    Iso8601,
    /// One of a closed, non-empty set of literals (strings or booleans).
    Enum(Vec<Value>),
    /// Object matching a referenced schema. Defects are flattened into
    /// the caller's list with this field's path prefix.
    Nested(Arc<ObjectSchema>),
}

impl FieldKind {
    /// Enum field over literal values. The set must be non-empty and
    /// hold only string or boolean literals.
    pub fn one_of<I: IntoIterator<Item = Value>>(literals: I) -> Self {
        let literals: Vec<Value> = literals.into_iter().collect();
        assert!(!literals.is_empty(), "enum field requires at least one literal");
        assert!(
            literals
                .iter()
                .all(|lit| matches!(lit, Value::String(_) | Value::Bool(_))),
            "enum literals must be strings or booleans"
        );
        Self::Enum(literals)
    }

    /// Array field whose elements must match `item`.
    pub fn array_of(item: FieldKind) -> Self {
        Self::Array(Box::new(item))
    }

    /// Object field matching a referenced schema.
    pub fn nested(schema: Arc<ObjectSchema>) -> Self {
        Self::Nested(schema)
    }

    /// Short name of the expected shape, used in defect details.
    pub fn expected(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object | Self::Nested(_) => "object",
            Self::Array(_) => "array",
            Self::Iso8601 => "iso8601 string",
            Self::Enum(_) => "enum literal",
        }
    }

    /// Longer description for schema introspection, naming nested
    /// schemas, element kinds, and enum literals.
    pub fn describe(&self) -> String {
        match self {
            Self::Array(item) => format!("array<{}>", item.describe()),
            Self::Nested(schema) => format!("object<{}>", schema.name()),
            Self::Enum(literals) => {
                let rendered: Vec<String> = literals.iter().map(Value::to_string).collect();
                format!("enum({})", rendered.join("|"))
            }
            other => other.expected().to_string(),
        }
    }

    /// Check a present value against this kind, appending every defect
    /// found. Recurses through arrays and nested schemas.
    pub(crate) fn check_value(&self, value: &Value, path: &FieldPath, defects: &mut Vec<Defect>) {
        match self {
            Self::String => self.expect_kind(JsonKind::String, value, path, defects),
            Self::Number => self.expect_kind(JsonKind::Number, value, path, defects),
            Self::Boolean => self.expect_kind(JsonKind::Boolean, value, path, defects),
            Self::Object => self.expect_kind(JsonKind::Object, value, path, defects),
            Self::Iso8601 => match value {
                Value::String(text) if is_iso8601(text) => {}
                Value::String(text) => defects.push(Defect::new(
                    path,
                    DefectKind::TypeMismatch,
                    format!("expected iso8601 string, found non-conforming string \"{text}\""),
                )),
                other => defects.push(Defect::new(
                    path,
                    DefectKind::TypeMismatch,
                    format!("expected iso8601 string, found {}", JsonKind::of(other)),
                )),
            },
            Self::Enum(literals) => {
                if !literals.contains(value) {
                    let allowed: Vec<String> = literals.iter().map(Value::to_string).collect();
                    defects.push(Defect::new(
                        path,
                        DefectKind::EnumViolation,
                        format!("value {value} is not one of [{}]", allowed.join(", ")),
                    ));
                }
            }
            Self::Array(item) => match value {
                Value::Array(elements) => {
                    for (i, element) in elements.iter().enumerate() {
                        item.check_value(element, &path.index(i), defects);
                    }
                }
                other => defects.push(Defect::new(
                    path,
                    DefectKind::TypeMismatch,
                    format!("expected array, found {}", JsonKind::of(other)),
                )),
            },
            Self::Nested(schema) => schema.check(value, path, defects),
        }
    }

    fn expect_kind(
        &self,
        want: JsonKind,
        value: &Value,
        path: &FieldPath,
        defects: &mut Vec<Defect>,
    ) {
        let got = JsonKind::of(value);
        if got != want {
            defects.push(Defect::new(
                path,
                DefectKind::TypeMismatch,
                format!("expected {}, found {got}", self.expected()),
            ));
        }
    }
}

/// A named field rule: presence requirement plus expected kind.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: true,
            kind,
        }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            required: false,
            kind,
        }
    }

    /// Check a candidate value, or its absence, against this rule.
    ///
    /// An omitted optional field is fine. An explicit `null` is a present
    /// value and must satisfy the declared kind — no schema in this
    /// system marks fields nullable.
    pub fn check(&self, value: Option<&Value>, path: &FieldPath, defects: &mut Vec<Defect>) {
        let Some(value) = value else {
            if self.required {
                defects.push(Defect::new(
                    path,
                    DefectKind::MissingRequiredField,
                    format!("required field of kind {} is missing", self.kind.expected()),
                ));
            }
            return;
        };
        self.kind.check_value(value, path, defects);
    }
}
