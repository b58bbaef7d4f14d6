use serde::{Deserialize, Serialize};

/// Paging request from one station to another, optionally relayed.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct PageMessage {
    /// Callsign of the paging station.
    #[prost(string, tag = "1")]
    pub calling_user: String,
    /// Callsign of the station being paged.
    #[prost(string, tag = "2")]
    pub called_user: String,
    /// Whether the receiving node should retransmit the page.
    #[prost(bool, tag = "3")]
    pub retransmit: bool,
    /// Callsign of the relaying node, empty when sent directly.
    #[prost(string, tag = "4")]
    pub via_node: String,
}

impl PageMessage {
    pub fn new(
        calling_user: impl Into<String>,
        called_user: impl Into<String>,
        retransmit: bool,
        via_node: impl Into<String>,
    ) -> Self {
        Self {
            calling_user: calling_user.into(),
            called_user: called_user.into(),
            retransmit,
            via_node: via_node.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;
    use crate::error::RecordError;
    use crate::record::PayloadRecord;

    #[test]
    fn roundtrip_all_fields() {
        let page = PageMessage::new("AB1CD", "EF2GH", true, "RPT1");
        let bytes = page.to_bytes();
        assert_eq!(bytes.len(), page.encoded_len());
        assert_eq!(PageMessage::decode(&bytes).unwrap(), page);
    }

    #[test]
    fn known_wire_bytes() {
        let page = PageMessage::new("AB1CD", "EF2GH", true, "RPT1");
        let expected: &[u8] = &[
            0x0A, 0x05, b'A', b'B', b'1', b'C', b'D', //
            0x12, 0x05, b'E', b'F', b'2', b'G', b'H', //
            0x18, 0x01, //
            0x22, 0x04, b'R', b'P', b'T', b'1',
        ];
        assert_eq!(&page.to_bytes()[..], expected);
    }

    #[test]
    fn empty_message_encodes_to_nothing() {
        let page = PageMessage::default();
        assert!(page.to_bytes().is_empty());
        assert_eq!(PageMessage::decode(&[]).unwrap(), page);
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let mut bytes = BytesMut::from(&PageMessage::new("A", "B", false, "").to_bytes()[..]);
        // field 9, varint 150
        bytes.extend_from_slice(&[0x48, 0x96, 0x01]);
        let page = PageMessage::decode(&bytes).unwrap();
        assert_eq!(page.calling_user, "A");
        assert_eq!(page.called_user, "B");
    }

    #[test]
    fn wrong_wire_type_rejected() {
        // field 1 sent as varint
        assert!(matches!(
            PageMessage::decode(&[0x08, 0x01]),
            Err(RecordError::Decode(_))
        ));
    }

    #[test]
    fn invalid_utf8_rejected() {
        assert!(PageMessage::decode(&[0x0A, 0x02, 0xC3, 0x28]).is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(PageMessage::decode(&[0x0A, 0x7F, b'x']).is_err());
        assert!(PageMessage::decode(&[0xFF]).is_err());
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_value(PageMessage::new("AB1CD", "EF2GH", false, "")).unwrap();
        assert_eq!(json["calling_user"], "AB1CD");
        assert_eq!(json["retransmit"], false);
    }
}
