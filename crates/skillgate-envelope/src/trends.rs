//! Contracts for the trend-data path: the upstream `trend_fetch_api`
//! MCP tool response and the `skill_fetch_trends` output it feeds.

use std::sync::Arc;

use serde_json::{Map, Value};
use skillgate_schema::{Defect, DefectKind, FieldKind, FieldPath, FieldSpec, ObjectSchema};

use crate::error::Result;
use crate::registry::{shared, EnvelopeKind, EnvelopeSchema};

/// Validate a `trend_fetch_api` MCP tool response, including the
/// `ok` ↔ `result` cross-field rule.
pub fn validate_mcp_trend_response(value: &Value) -> Result<()> {
    shared().validate(EnvelopeKind::McpTrendResponse, value)
}

/// Validate the `output` contract of the `skill_fetch_trends` skill.
pub fn validate_skill_fetch_trends_output(value: &Value) -> Result<()> {
    shared().validate(EnvelopeKind::SkillFetchTrendsOutput, value)
}

pub(crate) fn mcp_trend_response() -> EnvelopeSchema {
    let trend_item = Arc::new(ObjectSchema::closed(
        "trend_item",
        vec![
            FieldSpec::required("topic", FieldKind::String),
            FieldSpec::required("score", FieldKind::Number),
            FieldSpec::required("timestamp", FieldKind::Iso8601),
        ],
    ));
    let result = Arc::new(ObjectSchema::closed(
        "result",
        vec![FieldSpec::required(
            "trends",
            FieldKind::array_of(FieldKind::nested(trend_item)),
        )],
    ));

    // `result` is declared optional; whether it must be present is
    // decided by `ok` in the cross-field pass.
    EnvelopeSchema::with_cross_check(
        ObjectSchema::closed(
            "mcp_trend_response",
            vec![
                FieldSpec::required("ok", FieldKind::Boolean),
                FieldSpec::optional("result", FieldKind::nested(result)),
            ],
        ),
        ok_cross_check,
    )
}

pub(crate) fn fetch_trends_output() -> EnvelopeSchema {
    let example_item = Arc::new(ObjectSchema::closed(
        "example_item",
        vec![
            FieldSpec::required("content_id", FieldKind::String),
            FieldSpec::required("title", FieldKind::String),
            FieldSpec::required("url", FieldKind::String),
        ],
    ));
    let extended_trend_item = Arc::new(ObjectSchema::closed(
        "extended_trend_item",
        vec![
            FieldSpec::required("topic", FieldKind::String),
            FieldSpec::required("score", FieldKind::Number),
            FieldSpec::required("timestamp", FieldKind::Iso8601),
            FieldSpec::optional(
                "examples",
                FieldKind::array_of(FieldKind::nested(example_item)),
            ),
        ],
    ));
    let source = Arc::new(ObjectSchema::closed(
        "source",
        vec![
            FieldSpec::required("platform", FieldKind::String),
            FieldSpec::required("region", FieldKind::String),
            FieldSpec::required("retrieved_at", FieldKind::Iso8601),
        ],
    ));

    EnvelopeSchema::new(ObjectSchema::closed(
        "skill_fetch_trends_output",
        vec![
            FieldSpec::required(
                "trends",
                FieldKind::array_of(FieldKind::nested(extended_trend_item)),
            ),
            FieldSpec::required("source", FieldKind::nested(source)),
        ],
    ))
}

/// `result` is required when `ok` is true. A failed call does not have
/// to carry one, though any `result` present is still type-checked by
/// the field pass.
fn ok_cross_check(members: &Map<String, Value>, defects: &mut Vec<Defect>) {
    if members.get("ok").and_then(Value::as_bool) == Some(true)
        && !members.contains_key("result")
    {
        defects.push(Defect::new(
            &FieldPath::root().child("result"),
            DefectKind::MissingRequiredField,
            "result is required when ok is true",
        ));
    }
}
