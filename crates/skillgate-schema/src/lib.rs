//! Schema-as-data validation engine for JSON envelope contracts.
//!
//! Schemas are immutable descriptions — field rules composed into closed
//! object shapes — and the engine is a deterministic recursive descent
//! over a decoded `serde_json::Value`. Every defect found in one pass is
//! reported; nothing short-circuits at the first violation.
//!
//! This crate knows nothing about concrete envelope families. Declare
//! those as data on top of it (see `skillgate-envelope`).

pub mod defect;
pub mod field;
pub mod kind;
pub mod object;
pub mod path;

pub use defect::{Defect, DefectKind};
pub use field::{FieldKind, FieldSpec};
pub use kind::{is_iso8601, JsonKind};
pub use object::ObjectSchema;
pub use path::FieldPath;
