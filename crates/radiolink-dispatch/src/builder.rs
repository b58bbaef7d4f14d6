//! Outbound frame construction.

use bytes::{Bytes, BytesMut};
use radiolink_frame::{encode_frame, HEADER_SIZE, PAGE_MESSAGE, REPEATER_INFO};
use radiolink_records::{PageMessage, PayloadRecord};

use crate::directory::DirectorySnapshot;
use crate::error::Result;

/// Encode `record` and wrap it in a frame of the given type.
pub fn build_frame<R: PayloadRecord>(message_type: i32, record: &R) -> Result<Bytes> {
    let payload = record.to_bytes();
    let mut dst = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    encode_frame(message_type, &payload, &mut dst)?;
    Ok(dst.freeze())
}

/// Build a page frame ready for the transport.
pub fn build_page_message(
    calling_callsign: &str,
    called_callsign: &str,
    retransmit: bool,
    via_node: &str,
) -> Result<Bytes> {
    let page = PageMessage::new(calling_callsign, called_callsign, retransmit, via_node);
    build_frame(PAGE_MESSAGE, &page)
}

/// Build a repeater info frame from a directory snapshot.
///
/// Entries are written in snapshot order.
pub fn build_repeater_info(snapshot: &DirectorySnapshot) -> Result<Bytes> {
    let info = snapshot.to_repeater_info();
    tracing::debug!(
        channels = info.channels.len(),
        users = info.users.len(),
        "building repeater info"
    );
    build_frame(REPEATER_INFO, &info)
}
