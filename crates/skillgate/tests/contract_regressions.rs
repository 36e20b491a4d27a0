//! Boundary regressions for the four envelope families, exercised
//! through the public crate surface the way producing runtimes use it.

use serde_json::{json, Value};
use skillgate::envelope::{
    validate_mcp_trend_response, validate_skill_fetch_trends_output,
    validate_skill_invocation_request, validate_skill_invocation_response, ContractError,
};
use skillgate::schema::DefectKind;

fn minimal_request() -> Value {
    json!({
        "invocation_id": "i1",
        "agent_id": "a1",
        "skill_name": "s1",
        "intent": "x",
        "input": {},
        "context": {
            "persona_id": "p1",
            "objective_id": "o1",
            "risk_profile": "standard",
            "trace_id": "t1",
        },
    })
}

fn defects(err: &ContractError) -> &[skillgate::schema::Defect] {
    err.defects()
}

#[test]
fn minimal_request_scenario_is_valid() {
    validate_skill_invocation_request(&minimal_request()).expect("request should validate");
}

#[test]
fn extra_top_level_key_is_exactly_one_undeclared_field() {
    let mut request = minimal_request();
    request["extra"] = json!("x");
    let err =
        validate_skill_invocation_request(&request).expect_err("extra key should be rejected");
    assert_eq!(defects(&err).len(), 1);
    assert_eq!(defects(&err)[0].kind, DefectKind::UndeclaredField);
    assert_eq!(defects(&err)[0].path, "extra");
}

#[test]
fn every_missing_required_request_field_names_its_path() {
    let all_fields = [
        "invocation_id",
        "agent_id",
        "skill_name",
        "intent",
        "input",
        "context",
    ];
    for field in all_fields {
        let mut request = minimal_request();
        request
            .as_object_mut()
            .expect("request is an object")
            .remove(field);
        let err = validate_skill_invocation_request(&request)
            .expect_err(&format!("request without {field} should be rejected"));
        assert_eq!(defects(&err).len(), 1, "field {field}");
        assert_eq!(defects(&err)[0].kind, DefectKind::MissingRequiredField);
        assert_eq!(defects(&err)[0].path, field);
    }
}

#[test]
fn missing_and_undeclared_defects_are_detected_together() {
    let mut request = minimal_request();
    request
        .as_object_mut()
        .expect("request is an object")
        .remove("intent");
    request["sidechannel"] = json!(true);
    let err = validate_skill_invocation_request(&request)
        .expect_err("combined defects should be rejected");
    let kinds: Vec<DefectKind> = defects(&err).iter().map(|d| d.kind).collect();
    assert!(kinds.contains(&DefectKind::MissingRequiredField));
    assert!(kinds.contains(&DefectKind::UndeclaredField));
}

#[test]
fn validation_is_idempotent() {
    let mut request = minimal_request();
    request
        .as_object_mut()
        .expect("request is an object")
        .remove("agent_id");
    request["zz_extra"] = json!(1);
    request["aa_extra"] = json!(2);

    let first = validate_skill_invocation_request(&request)
        .expect_err("defective request should be rejected");
    let second = validate_skill_invocation_request(&request)
        .expect_err("defective request should be rejected");
    assert_eq!(defects(&first), defects(&second));
}

#[test]
fn success_response_without_output_is_rejected_with_valid_meta() {
    let response = json!({
        "invocation_id": "invocation-uuid",
        "skill_name": "skill_fetch_trends",
        "status": "success",
        "meta": {"duration_ms": 100, "trace_id": "trace-uuid"},
    });
    let err = validate_skill_invocation_response(&response)
        .expect_err("side-effect-only success should be rejected");
    assert_eq!(defects(&err).len(), 1);
    assert_eq!(defects(&err)[0].kind, DefectKind::MissingOutputOnSuccess);
}

#[test]
fn string_score_fails_at_the_indexed_trend_path() {
    let response = json!({
        "ok": true,
        "result": {
            "trends": [
                {"topic": "t", "score": "0.87", "timestamp": "2025-01-10T11:58:00Z"}
            ]
        },
    });
    let err =
        validate_mcp_trend_response(&response).expect_err("string score should be rejected");
    assert_eq!(defects(&err).len(), 1);
    assert_eq!(defects(&err)[0].kind, DefectKind::TypeMismatch);
    assert_eq!(defects(&err)[0].path, "result.trends[0].score");
}

#[test]
fn trends_output_requires_its_source() {
    let output = json!({
        "trends": [
            {"topic": "t", "score": 0.5, "timestamp": "2025-01-10T11:58:00Z"}
        ],
    });
    let err = validate_skill_fetch_trends_output(&output)
        .expect_err("source-less output should be rejected");
    assert_eq!(defects(&err)[0].kind, DefectKind::MissingRequiredField);
    assert_eq!(defects(&err)[0].path, "source");
}

#[test]
fn violation_error_message_carries_every_defect() {
    let mut request = minimal_request();
    request
        .as_object_mut()
        .expect("request is an object")
        .remove("invocation_id");
    request["context"]["risk_profile"] = json!(7);
    request["extra"] = json!("x");

    let err = validate_skill_invocation_request(&request)
        .expect_err("three defects should be rejected");
    assert_eq!(defects(&err).len(), 3);
    let message = err.to_string();
    assert!(message.contains("3 contract defect(s)"));
    assert!(message.contains("invocation_id"));
    assert!(message.contains("context.risk_profile"));
    assert!(message.contains("extra"));
}

#[test]
fn concurrent_validations_share_the_registry() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                validate_skill_invocation_request(&minimal_request()).is_ok()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("validation thread should not panic"));
    }
}
