//! CRC32-checked, length-prefixed framing for narrowband radio links.
//!
//! Every message is framed with:
//! - A 4-byte big-endian signed message type
//! - A 4-byte big-endian payload length (at most 1 MiB)
//! - A 4-byte big-endian CRC32 of the payload
//!
//! A frame is decoded from one complete buffer handed over by the radio
//! transport. Frames failing any structural or integrity check are
//! rejected with a [`FrameError`] and never reach dispatch.

pub mod codec;
pub mod crc;
pub mod error;
pub mod message_type;

pub use codec::{
    decode_frame, encode_frame, encode_to_bytes, Frame, FrameConfig, HEADER_SIZE, MAX_PAYLOAD,
};
pub use error::{FrameError, Result};
pub use message_type::{message_type_name, MessageType, PAGE_MESSAGE, REPEATER_INFO};
