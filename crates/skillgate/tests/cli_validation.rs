#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::Command;

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "skillgate-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn write_document(dir: &PathBuf, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents.as_bytes()).expect("document should be writable");
    path
}

fn skillgate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_skillgate"))
}

const VALID_REQUEST: &str = r#"{
    "invocation_id": "i1",
    "agent_id": "a1",
    "skill_name": "s1",
    "intent": "x",
    "input": {},
    "context": {
        "persona_id": "p1",
        "objective_id": "o1",
        "risk_profile": "standard",
        "trace_id": "t1"
    }
}"#;

#[test]
fn valid_document_exits_zero() {
    let dir = unique_temp_dir("valid");
    let doc = write_document(&dir, "request.json", VALID_REQUEST);

    let output = skillgate()
        .args(["validate", "--envelope", "skill_invocation_request", "--format", "json"])
        .arg(&doc)
        .output()
        .expect("validate command should run");

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report should be JSON");
    assert_eq!(report["valid"], true);
    assert_eq!(report["envelope"], "skill_invocation_request");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn defective_document_exits_data_invalid_and_lists_defects() {
    let dir = unique_temp_dir("defective");
    let doc = write_document(
        &dir,
        "response.json",
        r#"{
            "invocation_id": "i1",
            "skill_name": "s1",
            "status": "success",
            "meta": {"duration_ms": 100, "trace_id": "t1"},
            "debug": {"leak": true}
        }"#,
    );

    let output = skillgate()
        .args(["validate", "--envelope", "skill_invocation_response", "--format", "json"])
        .arg(&doc)
        .output()
        .expect("validate command should run");

    assert_eq!(output.status.code(), Some(60));
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report should be JSON");
    assert_eq!(report["valid"], false);
    let codes: Vec<&str> = report["defects"]
        .as_array()
        .expect("defects should be an array")
        .iter()
        .map(|d| d["code"].as_str().expect("code should be a string"))
        .collect();
    assert!(codes.contains(&"UNDECLARED_FIELD"));
    assert!(codes.contains(&"MISSING_OUTPUT_ON_SUCCESS"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_json_exits_data_invalid() {
    let dir = unique_temp_dir("malformed");
    let doc = write_document(&dir, "garbage.json", "not-json");

    let output = skillgate()
        .args(["validate", "--envelope", "skill_invocation_request"])
        .arg(&doc)
        .output()
        .expect("validate command should run");

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not valid JSON"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_envelope_name_exits_usage() {
    let dir = unique_temp_dir("unknown");
    let doc = write_document(&dir, "request.json", VALID_REQUEST);

    let output = skillgate()
        .args(["validate", "--envelope", "mystery_envelope"])
        .arg(&doc)
        .output()
        .expect("validate command should run");

    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mystery_envelope"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn stdin_document_is_accepted() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = skillgate()
        .args(["validate", "--envelope", "skill_invocation_request", "--format", "raw", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("validate command should start");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(VALID_REQUEST.as_bytes())
        .expect("payload should write");

    let output = child.wait_with_output().expect("command should finish");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "valid");
}

#[test]
fn envelopes_lists_all_four_families() {
    let output = skillgate()
        .args(["envelopes", "--format", "raw"])
        .output()
        .expect("envelopes command should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "skill_invocation_request",
        "skill_invocation_response",
        "mcp_trend_response",
        "skill_fetch_trends_output",
    ] {
        assert!(stdout.contains(name), "missing {name}");
    }
}
