//! Glue helpers around [`Msg`]: timestamped construction, soft validation,
//! size calculation, and mapping/JSON conversion.

use crate::msg::Msg;
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("mapping conversion: {0}")]
    Conversion(#[from] serde_json::Error),
}

/// Create a message stamped with the current time. The generated ID is
/// `{from_id}-{millis}-{suffix}` where `suffix` is the first 8 hex digits of
/// a random v4 UUID. Returns the message and the millisecond Unix timestamp
/// baked into its ID.
pub fn create_with_timestamp(
    body: impl Into<String>,
    from_id: impl Into<String>,
    to_ids: Vec<String>,
    kind: impl Into<String>,
) -> (Msg, i64) {
    let from_id = from_id.into();
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    let id = format!("{}-{}-{}", from_id, millis, &suffix[..8]);
    (Msg::new(body, from_id, id, to_ids, kind), millis)
}

/// Soft structural check: true iff `body`, `from_id`, `id`, and `type` are
/// all non-empty. An empty recipient list is allowed (broadcast messages
/// have no explicit recipients). Never raises; decode errors are a separate
/// concern.
pub fn validate(msg: &Msg) -> bool {
    !msg.body().is_empty()
        && !msg.from_id().is_empty()
        && !msg.id().is_empty()
        && !msg.kind().is_empty()
}

/// Serialized size of the message in bytes.
pub fn size_in_bytes(msg: &Msg) -> usize {
    msg.encoded_len()
}

/// Convert a message to a key/value mapping. The discriminator field uses
/// the schema key `"type"`.
pub fn to_mapping(msg: &Msg) -> Map<String, Value> {
    match serde_json::to_value(msg) {
        Ok(Value::Object(map)) => map,
        // Msg always serializes to an object.
        _ => Map::new(),
    }
}

/// Rebuild a message from a mapping produced by [`to_mapping`] (or any
/// mapping with the same keys). Missing or mistyped keys fail.
pub fn from_mapping(map: Map<String, Value>) -> Result<Msg, MappingError> {
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Serialize a message to a JSON string.
pub fn to_json(msg: &Msg) -> Result<String, MappingError> {
    Ok(serde_json::to_string(msg)?)
}

/// Parse a message from a JSON string.
pub fn from_json(json: &str) -> Result<Msg, MappingError> {
    Ok(serde_json::from_str(json)?)
}
