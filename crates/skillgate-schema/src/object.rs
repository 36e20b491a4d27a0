use serde_json::Value;

use crate::defect::{Defect, DefectKind};
use crate::field::FieldSpec;
use crate::kind::JsonKind;
use crate::path::FieldPath;

/// A named object shape: an ordered set of field rules.
///
/// Closed schemas reject any candidate key they do not declare — no
/// undeclared data or control channels cross the boundary.
#[derive(Debug, Clone)]
pub struct ObjectSchema {
    name: &'static str,
    fields: Vec<FieldSpec>,
    closed: bool,
}

impl ObjectSchema {
    /// A schema that rejects undeclared keys.
    pub fn closed(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            fields,
            closed: true,
        }
    }

    /// A schema that tolerates undeclared keys. Declared fields are
    /// still checked.
    pub fn open(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            fields,
            closed: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Check a candidate value against this shape, appending every
    /// defect found.
    ///
    /// Runs two passes: every declared field rule in declaration order,
    /// then — for closed schemas — a sweep over the candidate's keys for
    /// undeclared members. Both passes always run; an earlier defect
    /// never suppresses a later one.
    pub fn check(&self, value: &Value, path: &FieldPath, defects: &mut Vec<Defect>) {
        let Value::Object(members) = value else {
            defects.push(Defect::new(
                path,
                DefectKind::TypeMismatch,
                format!("expected object, found {}", JsonKind::of(value)),
            ));
            return;
        };

        for field in &self.fields {
            field.check(members.get(field.name), &path.child(field.name), defects);
        }

        if self.closed {
            // serde_json keeps object keys sorted, so this sweep is
            // deterministic across repeated validations.
            for key in members.keys() {
                if !self.fields.iter().any(|field| field.name == key) {
                    defects.push(Defect::new(
                        &path.child(key),
                        DefectKind::UndeclaredField,
                        format!("field is not declared by the {} schema", self.name),
                    ));
                }
            }
        }
    }
}
