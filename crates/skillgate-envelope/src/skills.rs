//! Contracts for the agent ↔ skill boundary.
//!
//! A skill is invoked with a closed request envelope and answers with a
//! closed response envelope. Responses are never side-effect-only: a
//! success must surface its effects as structured `output`, a failure
//! must carry a structured `error`.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use skillgate_schema::{Defect, DefectKind, FieldKind, FieldPath, FieldSpec, ObjectSchema};

use crate::error::Result;
use crate::registry::{shared, EnvelopeKind, EnvelopeSchema};

/// Validate an agent → skill invocation request.
///
/// Accepts silently; on rejection the error carries every defect found.
pub fn validate_skill_invocation_request(value: &Value) -> Result<()> {
    shared().validate(EnvelopeKind::SkillInvocationRequest, value)
}

/// Validate a skill → agent invocation response, including the
/// `status` ↔ `output`/`error` cross-field rule.
pub fn validate_skill_invocation_response(value: &Value) -> Result<()> {
    shared().validate(EnvelopeKind::SkillInvocationResponse, value)
}

pub(crate) fn invocation_request() -> EnvelopeSchema {
    let context = Arc::new(ObjectSchema::closed(
        "context",
        vec![
            FieldSpec::required("persona_id", FieldKind::String),
            FieldSpec::required("objective_id", FieldKind::String),
            FieldSpec::required("risk_profile", FieldKind::String),
            FieldSpec::required("trace_id", FieldKind::String),
        ],
    ));

    EnvelopeSchema::new(ObjectSchema::closed(
        "skill_invocation_request",
        vec![
            FieldSpec::required("invocation_id", FieldKind::String),
            FieldSpec::required("agent_id", FieldKind::String),
            FieldSpec::required("skill_name", FieldKind::String),
            FieldSpec::required("intent", FieldKind::String),
            // The input shape is skill-specific; this boundary only
            // requires it to be an object.
            FieldSpec::required("input", FieldKind::Object),
            FieldSpec::required("context", FieldKind::nested(context)),
        ],
    ))
}

pub(crate) fn invocation_response() -> EnvelopeSchema {
    let error = Arc::new(ObjectSchema::closed(
        "error",
        vec![
            FieldSpec::required("code", FieldKind::String),
            FieldSpec::required("message", FieldKind::String),
            FieldSpec::required("retryable", FieldKind::Boolean),
        ],
    ));
    let meta = Arc::new(ObjectSchema::closed(
        "meta",
        vec![
            FieldSpec::required("duration_ms", FieldKind::Number),
            FieldSpec::required("trace_id", FieldKind::String),
            FieldSpec::optional("warnings", FieldKind::array_of(FieldKind::String)),
        ],
    ));

    // `output` and `error` are declared optional here; which of the two
    // must be present is decided by `status` in the cross-field pass.
    EnvelopeSchema::with_cross_check(
        ObjectSchema::closed(
            "skill_invocation_response",
            vec![
                FieldSpec::required("invocation_id", FieldKind::String),
                FieldSpec::required("skill_name", FieldKind::String),
                FieldSpec::required(
                    "status",
                    FieldKind::one_of([json!("success"), json!("failure")]),
                ),
                FieldSpec::optional("output", FieldKind::Object),
                FieldSpec::optional("error", FieldKind::nested(error)),
                FieldSpec::required("meta", FieldKind::nested(meta)),
            ],
        ),
        status_cross_check,
    )
}

/// Exactly one of `output`/`error` must be present, matching `status`.
/// With `status` absent or malformed the field pass already reported
/// it, and there is nothing coherent to cross-check.
fn status_cross_check(members: &Map<String, Value>, defects: &mut Vec<Defect>) {
    match members.get("status").and_then(Value::as_str) {
        Some("success") => {
            if !members.contains_key("output") {
                defects.push(Defect::new(
                    &FieldPath::root().child("output"),
                    DefectKind::MissingOutputOnSuccess,
                    "success responses must surface their effects as structured output",
                ));
            }
            if members.contains_key("error") {
                defects.push(Defect::new(
                    &FieldPath::root().child("error"),
                    DefectKind::UndeclaredField,
                    "error is not part of a success envelope",
                ));
            }
        }
        Some("failure") => {
            if !members.contains_key("error") {
                defects.push(Defect::new(
                    &FieldPath::root().child("error"),
                    DefectKind::MissingErrorOnFailure,
                    "failure responses must carry a structured error object",
                ));
            }
            if members.contains_key("output") {
                defects.push(Defect::new(
                    &FieldPath::root().child("output"),
                    DefectKind::UndeclaredField,
                    "output is not part of a failure envelope",
                ));
            }
        }
        _ => {}
    }
}
