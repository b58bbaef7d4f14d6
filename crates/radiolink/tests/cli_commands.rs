#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

use radiolink::frame::{encode_to_bytes, HEADER_SIZE};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "radiolink-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn radiolink(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_radiolink"))
        .env_remove("RUST_LOG")
        .env_remove("RADIOLINK_DIRECTORY")
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("radiolink should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be json")
}

fn build_page_hex() -> String {
    let output = radiolink(&[
        "--format",
        "json",
        "page",
        "--from",
        "AB1CD",
        "--to",
        "EF2GH",
        "--retransmit",
        "--via",
        "RPT1",
    ]);
    assert!(output.status.success());
    let built = stdout_json(&output);
    assert_eq!(built["type_name"], "PAGE_MESSAGE");
    built["frame"]
        .as_str()
        .expect("frame should be hex")
        .to_string()
}

#[test]
fn page_build_then_decode_reproduces_fields() {
    let frame_hex = build_page_hex();

    let output = radiolink(&["--format", "json", "decode", "--hex", &frame_hex]);
    assert!(output.status.success());

    let decoded = stdout_json(&output);
    assert_eq!(decoded["outcome"], "page");
    assert_eq!(decoded["page"]["calling_user"], "AB1CD");
    assert_eq!(decoded["page"]["called_user"], "EF2GH");
    assert_eq!(decoded["page"]["retransmit"], true);
    assert_eq!(decoded["page"]["via_node"], "RPT1");
}

#[test]
fn raw_frame_file_roundtrip() {
    let dir = unique_temp_dir("raw");
    let frame_path = dir.join("page.bin");

    let output = radiolink(&[
        "page",
        "--from",
        "AB1CD",
        "--to",
        "EF2GH",
        "--out",
        frame_path.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success());
    let wire = std::fs::read(&frame_path).expect("frame file should exist");
    assert!(wire.len() > HEADER_SIZE);
    assert_eq!(&wire[0..4], &[0, 0, 0, 1]);

    let output = radiolink(&[
        "--format",
        "json",
        "decode",
        frame_path.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["outcome"], "page");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn repeater_info_keeps_directory_order() {
    let dir = unique_temp_dir("repeater");
    let directory = dir.join("directory.json");
    std::fs::write(
        &directory,
        r#"{
            "channels": [
                {"channel_id": 1, "parent_id": 0, "name": "A"},
                {"channel_id": 2, "parent_id": 0, "name": "B"}
            ],
            "users": [
                {"user_id": 7, "channel_id": 1, "name": "U1"},
                {"user_id": 8, "channel_id": 2, "name": "U2"}
            ]
        }"#,
    )
    .expect("directory should be writable");

    let output = radiolink(&[
        "--format",
        "hex",
        "repeater-info",
        "--directory",
        directory.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success());
    let frame_hex = String::from_utf8_lossy(&output.stdout).trim().to_string();

    let output = radiolink(&["--format", "json", "decode", "--hex", &frame_hex]);
    assert!(output.status.success());
    let decoded = stdout_json(&output);
    let info = &decoded["repeater_info"];
    assert_eq!(info["channels"][0]["name"], "A");
    assert_eq!(info["channels"][1]["name"], "B");
    assert_eq!(info["users"][0]["name"], "U1");
    assert_eq!(info["users"][1]["name"], "U2");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn corrupted_frame_is_dropped_with_data_invalid() {
    let mut frame_hex = build_page_hex();
    // Flip the low bit of the last payload byte.
    let last = frame_hex.pop().expect("non-empty hex");
    let flipped = u8::from_str_radix(&last.to_string(), 16).expect("hex digit") ^ 0x1;
    frame_hex.push_str(&format!("{flipped:x}"));

    let output = radiolink(&["--format", "json", "decode", "--hex", &frame_hex]);
    assert_eq!(output.status.code(), Some(60));
    let decoded = stdout_json(&output);
    assert_eq!(decoded["outcome"], "dropped");
    assert_eq!(decoded["reason"], "checksum");
}

#[test]
fn unknown_message_type_is_accepted() {
    let wire = encode_to_bytes(1234, b"future").expect("frame should encode");

    let output = radiolink(&["--format", "json", "decode", "--hex", &hex::encode(&wire)]);
    assert!(output.status.success());
    let decoded = stdout_json(&output);
    assert_eq!(decoded["outcome"], "unknown");
    assert_eq!(decoded["message_type"], 1234);
}

#[test]
fn oversized_declared_length_is_dropped() {
    let mut wire = vec![0, 0, 0, 1];
    wire.extend_from_slice(&(1024u32 * 1024 + 1).to_be_bytes());

    let output = radiolink(&["--format", "json", "decode", "--hex", &hex::encode(&wire)]);
    assert_eq!(output.status.code(), Some(60));
    assert_eq!(stdout_json(&output)["reason"], "oversized");
}

#[test]
fn legacy_decode_user_record() {
    // tag 2 (user), field 3 "AB1CD"
    let output = radiolink(&[
        "--format",
        "json",
        "legacy-decode",
        "--hex",
        "021a054142314344",
    ]);
    assert!(output.status.success());
    let decoded = stdout_json(&output);
    assert_eq!(decoded["tag"], 2);
    assert_eq!(decoded["user"]["name"], "AB1CD");
}

#[test]
fn legacy_decode_unknown_tag_fails() {
    let output = radiolink(&["legacy-decode", "--hex", "09"]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn missing_directory_file_fails() {
    let output = radiolink(&[
        "repeater-info",
        "--directory",
        "/nonexistent/radiolink/directory.json",
    ]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn envinfo_reports_version() {
    let output = radiolink(&["--format", "json", "envinfo"]);
    assert!(output.status.success());
    let payload = stdout_json(&output);
    assert_eq!(
        payload.get("version").and_then(|v| v.as_str()),
        Some(env!("CARGO_PKG_VERSION"))
    );
    assert_eq!(payload["protocol"]["max_payload"], 1_048_576);
    assert_eq!(payload["protocol"]["header_size"], 12);
    assert!(payload.get("dependencies").is_none());
    assert_eq!(payload["features"], serde_json::json!(["cli"]));
}
