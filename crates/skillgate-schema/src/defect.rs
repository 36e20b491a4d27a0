use std::fmt;

use serde::Serialize;

use crate::path::FieldPath;

/// Fixed taxonomy of contract defects.
///
/// Existing kinds keep a stable meaning across releases; consumers match
/// on the wire code returned by [`DefectKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefectKind {
    /// A required field is absent from the candidate object.
    MissingRequiredField,
    /// A present value does not match the declared kind.
    TypeMismatch,
    /// A present value is not one of the declared enum literals.
    EnumViolation,
    /// A key is present that a closed schema does not declare.
    UndeclaredField,
    /// A success response carries no structured `output`.
    MissingOutputOnSuccess,
    /// A failure response carries no structured `error`.
    MissingErrorOnFailure,
}

impl DefectKind {
    /// Stable wire code for this defect kind.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::EnumViolation => "ENUM_VIOLATION",
            Self::UndeclaredField => "UNDECLARED_FIELD",
            Self::MissingOutputOnSuccess => "MISSING_OUTPUT_ON_SUCCESS",
            Self::MissingErrorOnFailure => "MISSING_ERROR_ON_FAILURE",
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One structural contract violation at a specific location.
///
/// Defects are plain data. They are collected into ordered lists and
/// surfaced through a caller-facing error, never thrown mid-validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Defect {
    /// Dot/bracket-addressed location, e.g. `result.trends[0].score`.
    pub path: String,
    pub kind: DefectKind,
    /// Human-readable explanation of the violation.
    pub detail: String,
}

impl Defect {
    pub fn new(path: &FieldPath, kind: DefectKind, detail: impl Into<String>) -> Self {
        Self {
            path: path.as_str().to_string(),
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at '{}': {}", self.kind, self.path, self.detail)
    }
}
