use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::crc;
use crate::error::{FrameError, Result};
use crate::message_type::MessageType;

/// Frame header: message type (4) + payload length (4) + checksum (4) = 12 bytes.
pub const HEADER_SIZE: usize = 12;

/// Hard upper bound on a frame payload: 1 MiB.
pub const MAX_PAYLOAD: usize = 1024 * 1024;

/// A decoded, integrity-verified frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Raw message type code.
    pub message_type: i32,
    /// CRC32 of the payload as carried on the wire.
    pub checksum: u32,
    /// The message payload.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame, stamping the payload checksum.
    pub fn new(message_type: i32, payload: impl Into<Bytes>) -> Self {
        let payload = payload.into();
        Self {
            message_type,
            checksum: crc::compute(&payload),
            payload,
        }
    }

    /// Typed view of the message type code.
    pub fn kind(&self) -> MessageType {
        MessageType::from_code(self.message_type)
    }

    /// Returns true if the stored checksum matches the payload.
    pub fn verify(&self) -> bool {
        crc::verify(&self.payload, self.checksum)
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a frame into the wire format.
///
/// Wire format (all integers big-endian):
/// ```text
/// ┌──────────────┬──────────────┬──────────────┬─────────────────┐
/// │ Type (4B)    │ Length (4B)  │ CRC32 (4B)   │ Payload         │
/// │ signed       │ unsigned     │ of payload   │ (Length bytes)  │
/// └──────────────┴──────────────┴──────────────┴─────────────────┘
/// ```
pub fn encode_frame(message_type: i32, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    encode_frame_with_limit(message_type, payload, MAX_PAYLOAD, dst)
}

fn encode_frame_with_limit(
    message_type: i32,
    payload: &[u8],
    max_payload: usize,
    dst: &mut BytesMut,
) -> Result<()> {
    let max = max_payload.min(MAX_PAYLOAD);
    if payload.len() > max {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_i32(message_type);
    dst.put_u32(payload.len() as u32);
    dst.put_u32(crc::compute(payload));
    dst.put_slice(payload);
    Ok(())
}

/// Encode a frame into a freshly allocated buffer.
pub fn encode_to_bytes(message_type: i32, payload: &[u8]) -> Result<Bytes> {
    let mut dst = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    encode_frame(message_type, payload, &mut dst)?;
    Ok(dst.freeze())
}

/// Decode a complete frame from `src`.
///
/// The declared length is checked against `max_payload` (never above
/// [`MAX_PAYLOAD`]) before the payload is read or copied. Bytes following
/// the declared payload are ignored.
pub fn decode_frame(src: &[u8], max_payload: usize) -> Result<Frame> {
    let mut buf = src;

    let message_type = read_u32(&mut buf, src.len())? as i32;
    let payload_len = read_u32(&mut buf, src.len())? as usize;

    let max = max_payload.min(MAX_PAYLOAD);
    if payload_len > max {
        return Err(FrameError::OversizedPayload {
            size: payload_len,
            max,
        });
    }

    let checksum = read_u32(&mut buf, src.len())?;

    if buf.remaining() < payload_len {
        return Err(FrameError::TruncatedFrame {
            needed: HEADER_SIZE + payload_len,
            available: src.len(),
        });
    }
    let body = &buf[..payload_len];

    let actual = crc::compute(body);
    if actual != checksum {
        return Err(FrameError::ChecksumMismatch {
            expected: checksum,
            actual,
        });
    }

    tracing::trace!(message_type, payload_len, "decoded frame");

    Ok(Frame {
        message_type,
        checksum,
        payload: Bytes::copy_from_slice(body),
    })
}

fn read_u32(buf: &mut &[u8], total: usize) -> Result<u32> {
    if buf.remaining() < 4 {
        return Err(FrameError::TruncatedFrame {
            needed: total - buf.remaining() + 4,
            available: total,
        });
    }
    Ok(buf.get_u32())
}

/// Configuration for the frame codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Maximum payload size in bytes. Default and ceiling: 1 MiB.
    pub max_payload_size: usize,
}

impl FrameConfig {
    /// Payload bound actually enforced; values above [`MAX_PAYLOAD`] are clamped.
    pub fn effective_max_payload(&self) -> usize {
        self.max_payload_size.min(MAX_PAYLOAD)
    }

    /// Encode a frame, enforcing this configuration's payload bound.
    pub fn encode(&self, message_type: i32, payload: &[u8], dst: &mut BytesMut) -> Result<()> {
        encode_frame_with_limit(message_type, payload, self.max_payload_size, dst)
    }

    /// Decode a frame, enforcing this configuration's payload bound.
    pub fn decode(&self, src: &[u8]) -> Result<Frame> {
        decode_frame(src, self.max_payload_size)
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD,
        }
    }
}
