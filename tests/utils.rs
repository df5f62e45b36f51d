//! Utility helper tests: timestamped construction, validation, size, and
//! mapping/JSON conversion.

use msg_codec::{
    create_with_timestamp, from_json, from_mapping, size_in_bytes, to_json, to_mapping, validate,
    Msg,
};

fn sample() -> Msg {
    Msg::new(
        "Hello, world!",
        "sender123",
        "msg456",
        vec!["recipient1".to_string(), "recipient2".to_string()],
        "greeting",
    )
}

#[test]
fn test_create_with_timestamp() {
    let (msg, timestamp) = create_with_timestamp(
        "Test message",
        "sender",
        vec!["recipient".to_string()],
        "utility_test",
    );
    assert!(validate(&msg));
    assert!(timestamp > 0);
    assert!(size_in_bytes(&msg) > 0);

    // ID format: {from_id}-{millis}-{8 hex chars}
    let parts: Vec<&str> = msg.id().splitn(3, '-').collect();
    assert_eq!(parts[0], "sender");
    assert_eq!(parts[1], timestamp.to_string());
    assert_eq!(parts[2].len(), 8);
    assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_generated_ids_are_unique() {
    let (a, _) = create_with_timestamp("x", "s", vec![], "t");
    let (b, _) = create_with_timestamp("x", "s", vec![], "t");
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_validate() {
    assert!(validate(&sample()));
    // Empty recipient list is still structurally valid.
    assert!(validate(&Msg::new("b", "f", "i", vec![], "t")));

    assert!(!validate(&Msg::new("", "f", "i", vec![], "t")));
    assert!(!validate(&Msg::new("b", "", "i", vec![], "t")));
    assert!(!validate(&Msg::new("b", "f", "", vec![], "t")));
    assert!(!validate(&Msg::new("b", "f", "i", vec![], "")));
}

#[test]
fn test_size_in_bytes_matches_encode() {
    let msg = sample();
    assert_eq!(size_in_bytes(&msg), msg.encode().expect("encode").len());
}

#[test]
fn test_size_grows_with_fields() {
    let base = sample();
    let bigger = Msg::new(
        format!("{}!", base.body()),
        base.from_id(),
        base.id(),
        base.to_ids().to_vec(),
        base.kind(),
    );
    assert!(size_in_bytes(&bigger) > size_in_bytes(&base));
}

#[test]
fn test_mapping_round_trip() {
    let msg = sample();
    let map = to_mapping(&msg);
    assert_eq!(map.get("body").and_then(|v| v.as_str()), Some("Hello, world!"));
    // The discriminator keeps the schema key "type".
    assert_eq!(map.get("type").and_then(|v| v.as_str()), Some("greeting"));
    assert!(map.get("to_ids").map(|v| v.is_array()).unwrap_or(false));

    let rebuilt = from_mapping(map).expect("from_mapping");
    assert_eq!(rebuilt, msg);
}

#[test]
fn test_from_mapping_rejects_missing_keys() {
    let mut map = to_mapping(&sample());
    map.remove("body");
    assert!(from_mapping(map).is_err());
}

#[test]
fn test_json_round_trip() {
    let msg = sample();
    let json = to_json(&msg).expect("to_json");
    assert!(json.contains("\"type\":\"greeting\""));
    let rebuilt = from_json(&json).expect("from_json");
    assert_eq!(rebuilt, msg);
}

#[test]
fn test_from_json_rejects_garbage() {
    assert!(from_json("not json").is_err());
    assert!(from_json("{\"body\": 3}").is_err());
}
