use crate::{Profile, Record};

use serde_json::json;

#[test]
fn test_record_flattens_payload_fields() {
    let value = json!({
        "id": "abc",
        "created_at": "2026-01-02T03:04:05.000006Z",
        "user_id": "u1",
        "display_name": "jane"
    });

    let record: Record<Profile> = serde_json::from_value(value).unwrap();

    assert_eq!(record.id, "abc");
    assert_eq!(record.user_id, "u1");
    assert_eq!(record.data.display_name, "jane");
    assert_eq!(record.created_at.timestamp_subsec_micros(), 6);
}
