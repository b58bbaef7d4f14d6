//! Tag-prefixed single-record payloads.
//!
//! One leading tag byte (1 = channel, 2 = user) followed by the bare
//! record encoding. No length field and no checksum, so this path is kept
//! apart from [`Dispatcher`](crate::Dispatcher) and is never reached from
//! the integrity-checked receive loop.

use bytes::{BufMut, Bytes, BytesMut};
use radiolink_records::{Channel, PayloadRecord, RecordError, User};

pub const TAG_CHANNEL: u8 = 1;
pub const TAG_USER: u8 = 2;

/// Errors from the tag-prefixed path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LegacyError {
    /// The buffer has no tag byte.
    #[error("empty tagged payload")]
    Empty,

    /// The tag byte is not a known record kind.
    #[error("unknown payload tag {0}")]
    UnknownTag(u8),

    /// The record after the tag is malformed.
    #[error("tagged record decode failed: {0}")]
    Record(#[from] RecordError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyRecord {
    Channel(Channel),
    User(User),
}

impl LegacyRecord {
    pub fn tag(&self) -> u8 {
        match self {
            Self::Channel(_) => TAG_CHANNEL,
            Self::User(_) => TAG_USER,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Channel(channel) => &channel.name,
            Self::User(user) => &user.name,
        }
    }
}

/// Decode a tag-prefixed payload and log the record name.
pub fn process_tagged_payload(data: &[u8]) -> Result<LegacyRecord, LegacyError> {
    let (&tag, body) = data.split_first().ok_or(LegacyError::Empty)?;
    let record = match tag {
        TAG_CHANNEL => LegacyRecord::Channel(Channel::decode(body)?),
        TAG_USER => LegacyRecord::User(User::decode(body)?),
        other => return Err(LegacyError::UnknownTag(other)),
    };
    tracing::debug!(tag, name = %record.name(), "tagged record");
    Ok(record)
}

/// Encode a record behind its tag byte.
pub fn encode_tagged(record: &LegacyRecord) -> Bytes {
    let mut dst = BytesMut::new();
    dst.put_u8(record.tag());
    match record {
        LegacyRecord::Channel(channel) => {
            dst.reserve(channel.encoded_len());
            channel.encode(&mut dst);
        }
        LegacyRecord::User(user) => {
            dst.reserve(user.encoded_len());
            user.encode(&mut dst);
        }
    }
    dst.freeze()
}
