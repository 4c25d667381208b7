use crate::User;

use serde_json::{Map, Value, json};

fn metadata(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[test]
fn test_display_name_defaults_to_email_local_part() {
    let user = User::new(String::from("u1"), "jane.doe@x.com", "pw", Map::new());
    assert_eq!(user.display_name(), "jane.doe");
}

#[test]
fn test_display_name_prefers_metadata() {
    let user = User::new(
        String::from("u1"),
        "jane@x.com",
        "pw",
        metadata(json!({ "display_name": "Dr. Jane" })),
    );
    assert_eq!(user.display_name(), "Dr. Jane");
}

#[test]
fn test_display_name_ignores_empty_metadata_value() {
    let user = User::new(
        String::from("u1"),
        "jane@x.com",
        "pw",
        metadata(json!({ "display_name": "" })),
    );
    assert_eq!(user.display_name(), "jane");
}

#[test]
fn test_matches_requires_exact_email_and_password() {
    let user = User::new(String::from("u1"), "a@x.com", "pw", Map::new());
    assert!(user.matches("a@x.com", "pw"));
    assert!(!user.matches("a@x.com", "PW"));
    assert!(!user.matches("A@x.com", "pw"));
}
