use bytes::{Bytes, BytesMut};

use crate::error::Result;

/// A structured message body with its own deterministic byte encoding.
///
/// Implemented for every `prost` message in this crate.
pub trait PayloadRecord: Sized {
    /// Exact number of bytes [`PayloadRecord::encode`] will append.
    fn encoded_len(&self) -> usize;

    /// Append the encoded record to `dst`.
    fn encode(&self, dst: &mut BytesMut);

    /// Decode a record from a complete payload.
    fn decode(src: &[u8]) -> Result<Self>;

    /// Encode into a freshly allocated buffer.
    fn to_bytes(&self) -> Bytes {
        let mut dst = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut dst);
        dst.freeze()
    }
}

impl<M: prost::Message + Default> PayloadRecord for M {
    fn encoded_len(&self) -> usize {
        prost::Message::encoded_len(self)
    }

    fn encode(&self, dst: &mut BytesMut) {
        dst.reserve(prost::Message::encoded_len(self));
        prost::Message::encode_raw(self, dst);
    }

    fn decode(src: &[u8]) -> Result<Self> {
        Ok(<M as prost::Message>::decode(src)?)
    }
}
