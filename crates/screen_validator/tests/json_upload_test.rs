//! Uploads arriving as JSON documents with a JSON policy.
//!
//! Exercises the full path a web handler takes: policy decoded with
//! `screen_parser`, rows loaded through a `TableSource`, outcome serialized.

use pretty_assertions::assert_eq;
use screen_core::{FILE_COLUMN, TableSource};
use screen_parser::{JsonTableSource, parse_json};
use screen_validator::{PARSE_FAILED_MESSAGE, PASSED_MESSAGE, TableValidator};
use std::io::Write;

const CUSTOMER_POLICY: &str = r#"{
    "headers": {
        "expectedHeaders": ["Name", "Email", "Age", "Subscribed"],
        "caseInsensitive": true,
        "columnSchemas": {
            "age": { "type": "number", "allowNull": false },
            "Subscribed": { "type": "boolean" },
            "Nickname": { "type": "number" }
        }
    },
    "encoding": { "allowedEncodings": ["LATIN1"] }
}"#;

#[tokio::test]
async fn test_clean_json_upload() {
    let policy = parse_json(CUSTOMER_POLICY).unwrap();
    let source = JsonTableSource::from_text(
        r#"[
            ["name", "EMAIL", "Age", "Subscribed"],
            ["Renée", "renee@example.com", 34, true],
            ["Bob", "bob@example.com", "\"41\"", null]
        ]"#,
    );

    let outcome = TableValidator::new().validate_source(&source, &policy).await;

    assert!(outcome.valid, "unexpected failures: {:?}", outcome.errors);
    assert_eq!(outcome.message, PASSED_MESSAGE);
}

#[tokio::test]
async fn test_json_upload_with_violations() {
    let policy = parse_json(CUSTOMER_POLICY).unwrap();
    let source = JsonTableSource::from_text(
        r#"[
            ["Name", "Email", "Age", "Subscribed"],
            ["Eve", "eve@example.com'; DELETE FROM users", "", "maybe"],
            ["Zhang Wei 张伟", "zw@example.com", 29, "f"]
        ]"#,
    );

    let outcome = TableValidator::new().validate_source(&source, &policy).await;

    let rendered: Vec<String> = outcome.errors.iter().map(|f| f.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "line 2, Email: Contains potentially dangerous SQL pattern (Statement terminator): eve@example.com'; DELETE FROM users",
            "line 2, Age: Age does not allow null or empty values",
            "line 2, Subscribed: Subscribed must be a boolean (t, f, true, false), found 'maybe'",
            "line 3, Name: Contains character '张' (0x5F20) outside allowed encodings: LATIN1",
        ]
    );
}

#[tokio::test]
async fn test_undecodable_upload_becomes_outcome() {
    let policy = parse_json(CUSTOMER_POLICY).unwrap();
    let source = JsonTableSource::from_text(r#"{"not": "rows"}"#);

    let outcome = TableValidator::new().validate_source(&source, &policy).await;

    assert!(!outcome.valid);
    assert_eq!(outcome.message, PARSE_FAILED_MESSAGE);
    assert_eq!(outcome.error_count(), 1);
    assert_eq!(outcome.errors[0].column, FILE_COLUMN);
    assert_eq!(outcome.errors[0].line, 0);
    assert_eq!(outcome.errors[0].reason, "Invalid table: expected an array of rows");
}

#[tokio::test]
async fn test_upload_read_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[["Name","Email","Age","Subscribed"],["Ann","ann@example.com","-0.","T"]]"#
    )
    .unwrap();

    let policy = parse_json(CUSTOMER_POLICY).unwrap();
    let source = JsonTableSource::from_path(file.path());
    let table = source.load().await.unwrap();
    assert_eq!(table.len(), 2);

    let outcome = TableValidator::new().validate_source(&source, &policy).await;
    assert!(outcome.valid);
}

#[tokio::test]
async fn test_missing_upload_file() {
    let policy = parse_json(CUSTOMER_POLICY).unwrap();
    let source = JsonTableSource::from_path("/nonexistent/upload.json");

    let outcome = TableValidator::new().validate_source(&source, &policy).await;

    assert_eq!(outcome.message, PARSE_FAILED_MESSAGE);
    let reason = &outcome.errors[0].reason;
    assert!(
        reason.starts_with("Failed to read /nonexistent/upload.json: "),
        "unexpected reason: {reason}"
    );
    assert!(reason.contains("No such file"), "I/O cause lost: {reason}");
}

#[tokio::test]
async fn test_malformed_upload_reason_names_cause_once() {
    let policy = parse_json(CUSTOMER_POLICY).unwrap();
    let source = JsonTableSource::from_text("[[\"Name\", ");

    let outcome = TableValidator::new().validate_source(&source, &policy).await;

    let reason = &outcome.errors[0].reason;
    assert!(reason.starts_with("Failed to parse JSON: "), "{reason}");
    assert_eq!(reason.matches("line 1 column").count(), 1, "{reason}");
}

#[test]
fn test_policy_definition_flags_unknown_schema_column() {
    let policy = parse_json(CUSTOMER_POLICY).unwrap();

    let issues = TableValidator::new().validate_definition(&policy);
    let messages: Vec<String> = issues.iter().map(|e| e.to_string()).collect();

    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Nickname"));
}
