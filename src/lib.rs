//! # msg-codec — Bebop-compatible binary codec for the `Msg` schema
//!
//! A data-binding for a single message record type with a deterministic,
//! length-prefixed binary encoding. Strings carry a 4-byte little-endian
//! length prefix followed by raw UTF-8; the recipient list carries a 4-byte
//! element count. Fields are written in fixed declaration order:
//! `body`, `from_id`, `id`, `to_ids`, `type`.
//!
//! ## Wire layout
//!
//! ```text
//! [body:    u32 LE length + UTF-8 bytes]
//! [from_id: u32 LE length + UTF-8 bytes]
//! [id:      u32 LE length + UTF-8 bytes]
//! [to_ids:  u32 LE count, then count × (u32 LE length + UTF-8 bytes)]
//! [type:    u32 LE length + UTF-8 bytes]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use msg_codec::Msg;
//!
//! let msg = Msg::new(
//!     "Hello, world!",
//!     "sender123",
//!     "msg456",
//!     vec!["recipient1".to_string(), "recipient2".to_string()],
//!     "greeting",
//! );
//!
//! let bytes = msg.encode()?;
//! let decoded = Msg::decode(&bytes)?;
//! assert_eq!(decoded, msg);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Encode and decode are pure, single-pass, and non-blocking; calls may run
//! in parallel across threads with no coordination.

pub mod msg;
pub mod util;
pub mod wire;

pub use msg::Msg;
pub use util::{
    create_with_timestamp, from_json, from_mapping, size_in_bytes, to_json, to_mapping, validate,
    MappingError,
};
pub use wire::{DecodeError, EncodeError, Reader, WireRead, WireWrite, Writer};
