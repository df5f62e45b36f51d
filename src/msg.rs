//! The `Msg` record and its binary codec.
//!
//! Field order on the wire is fixed: `body`, `from_id`, `id`, `to_ids`,
//! `type`. The `to_ids` sequence is written as a 4-byte unsigned element
//! count followed by each recipient as a length-prefixed string, in original
//! order. There is no record-level length prefix; framing belongs to the
//! caller.

use crate::wire::{DecodeError, EncodeError, Reader, WireRead, WireWrite, Writer, LEN_PREFIX_SIZE};
use serde::{Deserialize, Serialize};

/// An immutable message record. All five fields are supplied at construction
/// and never mutated; a "changed" message is a newly constructed value.
///
/// The schema's `type` field is named `kind` here (`type` is a Rust keyword)
/// but keeps the key `"type"` in serialized mappings and JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Msg {
    body: String,
    from_id: String,
    id: String,
    to_ids: Vec<String>,
    #[serde(rename = "type")]
    kind: String,
}

impl Msg {
    /// Construct a message with all five fields. Empty strings and an empty
    /// recipient list are valid values, distinct from absence.
    pub fn new(
        body: impl Into<String>,
        from_id: impl Into<String>,
        id: impl Into<String>,
        to_ids: Vec<String>,
        kind: impl Into<String>,
    ) -> Self {
        Msg {
            body: body.into(),
            from_id: from_id.into(),
            id: id.into(),
            to_ids,
            kind: kind.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn from_id(&self) -> &str {
        &self.from_id
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn to_ids(&self) -> &[String] {
        &self.to_ids
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Encode to a standalone byte buffer. Deterministic and side-effect
    /// free; fails only if a field exceeds the `u32` length-prefix range.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut w = Writer::with_capacity(self.encoded_len());
        self.encode_into(&mut w)?;
        Ok(w.finish())
    }

    /// Write the record's fields, in declaration order, to an existing writer.
    pub fn encode_into<W: WireWrite>(&self, w: &mut W) -> Result<(), EncodeError> {
        w.write_string(&self.body)?;
        w.write_string(&self.from_id)?;
        w.write_string(&self.id)?;
        let count =
            u32::try_from(self.to_ids.len()).map_err(|_| EncodeError::TooLong(self.to_ids.len()))?;
        w.write_uint32(count)?;
        for to_id in &self.to_ids {
            w.write_string(to_id)?;
        }
        w.write_string(&self.kind)?;
        Ok(())
    }

    /// Decode a message from a byte buffer produced by [`Msg::encode`] (or
    /// any externally supplied buffer claiming the same layout). The result
    /// owns all of its data; the input buffer is not retained. A failed
    /// decode yields no partial record.
    pub fn decode(bytes: &[u8]) -> Result<Msg, DecodeError> {
        Msg::read_from(&mut Reader::new(bytes))
    }

    /// Read the record's fields, in declaration order, from an existing reader.
    pub fn read_from<R: WireRead>(r: &mut R) -> Result<Msg, DecodeError> {
        let body = r.read_string()?;
        let from_id = r.read_string()?;
        let id = r.read_string()?;
        let count = r.read_uint32()?;
        // Each element needs at least its own length prefix, so a count the
        // remaining buffer cannot possibly satisfy is rejected before any
        // allocation sized by it.
        let remaining = r.remaining();
        if count as usize > remaining / LEN_PREFIX_SIZE {
            return Err(DecodeError::CountOutOfBounds { count, remaining });
        }
        let mut to_ids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            to_ids.push(r.read_string()?);
        }
        let kind = r.read_string()?;
        Ok(Msg { body, from_id, id, to_ids, kind })
    }

    /// Exact size of the encoded record in bytes, without encoding.
    /// Equals `self.encode()?.len()`.
    pub fn encoded_len(&self) -> usize {
        let strings = self.body.len() + self.from_id.len() + self.id.len() + self.kind.len();
        let to_ids: usize = self.to_ids.iter().map(|s| LEN_PREFIX_SIZE + s.len()).sum();
        // Four string prefixes plus the to_ids count field.
        strings + to_ids + 5 * LEN_PREFIX_SIZE
    }
}
