use serde::{Deserialize, Serialize};

/// A voice channel known to a repeater.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct Channel {
    #[prost(int32, tag = "1")]
    pub channel_id: i32,
    #[prost(int32, tag = "2")]
    pub parent_id: i32,
    #[prost(string, tag = "3")]
    pub name: String,
    #[prost(string, tag = "4")]
    #[serde(default)]
    pub description: String,
}

impl Channel {
    pub fn new(
        channel_id: i32,
        parent_id: i32,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            channel_id,
            parent_id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A station present on a repeater, identified by its callsign.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct User {
    #[prost(int32, tag = "1")]
    pub user_id: i32,
    #[prost(int32, tag = "2")]
    pub channel_id: i32,
    /// Station callsign.
    #[prost(string, tag = "3")]
    pub name: String,
}

impl User {
    pub fn new(user_id: i32, channel_id: i32, name: impl Into<String>) -> Self {
        Self {
            user_id,
            channel_id,
            name: name.into(),
        }
    }
}

/// Snapshot of a repeater's channel and user directory.
///
/// Both lists keep their order across encode and decode. Duplicate ids are
/// carried as-is.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, prost::Message)]
pub struct RepeaterInfo {
    #[prost(message, repeated, tag = "1")]
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[prost(message, repeated, tag = "2")]
    #[serde(default)]
    pub users: Vec<User>,
}

impl RepeaterInfo {
    pub fn new(channels: Vec<Channel>, users: Vec<User>) -> Self {
        Self { channels, users }
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::record::PayloadRecord;

    fn sample() -> RepeaterInfo {
        RepeaterInfo::new(
            vec![
                Channel::new(0, 0, "Root", ""),
                Channel::new(7, 0, "Local", "Local QSO channel"),
            ],
            vec![User::new(3, 7, "YO8RZZ"), User::new(11, 0, "AB1CD")],
        )
    }

    /// Key byte, one-byte length, body. Only for short test entries.
    fn embedded<R: PayloadRecord>(key: u8, record: &R) -> Vec<u8> {
        let body = record.to_bytes();
        let mut out = vec![key, body.len() as u8];
        out.extend_from_slice(&body);
        out
    }

    #[test]
    fn roundtrip_preserves_order() {
        let info = sample();
        let bytes = info.to_bytes();
        assert_eq!(bytes.len(), info.encoded_len());

        let decoded = RepeaterInfo::decode(&bytes).unwrap();
        let channel_names: Vec<_> = decoded.channels.iter().map(|c| c.name.as_str()).collect();
        let user_names: Vec<_> = decoded.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(channel_names, ["Root", "Local"]);
        assert_eq!(user_names, ["YO8RZZ", "AB1CD"]);
        assert_eq!(decoded, info);
    }

    #[test]
    fn interleaved_entries_keep_relative_order() {
        let mut buf = Vec::new();
        buf.extend(embedded(0x12, &User::new(1, 0, "U1")));
        buf.extend(embedded(0x0A, &Channel::new(1, 0, "A", "")));
        buf.extend(embedded(0x12, &User::new(2, 0, "U2")));
        buf.extend(embedded(0x0A, &Channel::new(2, 0, "B", "")));

        let info = RepeaterInfo::decode(&buf).unwrap();
        assert_eq!(info.channels[0].name, "A");
        assert_eq!(info.channels[1].name, "B");
        assert_eq!(info.users[0].name, "U1");
        assert_eq!(info.users[1].name, "U2");
    }

    #[test]
    fn default_valued_entries_survive() {
        // Root channel with every field at its default still encodes as an entry.
        let info = RepeaterInfo::new(vec![Channel::default()], vec![User::default()]);
        assert_eq!(&info.to_bytes()[..], &[0x0A, 0x00, 0x12, 0x00]);
        let decoded = RepeaterInfo::decode(&info.to_bytes()).unwrap();
        assert_eq!(decoded.channels.len(), 1);
        assert_eq!(decoded.users.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let info = RepeaterInfo::new(
            vec![Channel::new(1, 0, "A", ""), Channel::new(1, 0, "A", "")],
            vec![],
        );
        let decoded = RepeaterInfo::decode(&info.to_bytes()).unwrap();
        assert_eq!(decoded.channels.len(), 2);
    }

    #[test]
    fn negative_ids_roundtrip() {
        let channel = Channel::new(-1, i32::MIN, "odd", "");
        let bytes = channel.to_bytes();
        // int32 negatives are sign-extended to ten-byte varints
        assert_eq!(bytes.len(), 1 + 10 + 1 + 10 + 1 + 1 + 3);
        assert_eq!(Channel::decode(&bytes).unwrap(), channel);
    }

    #[test]
    fn empty_info() {
        let info = RepeaterInfo::default();
        assert!(info.is_empty());
        assert!(info.to_bytes().is_empty());
        assert!(RepeaterInfo::decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn malformed_nested_entry_fails_whole_record() {
        // channels entry of 2 bytes holding a truncated varint
        let bytes = [0x0A, 0x02, 0x08, 0x80];
        assert!(matches!(
            RepeaterInfo::decode(&bytes),
            Err(RecordError::Decode(_))
        ));
    }

    #[test]
    fn directory_json_shape() {
        let json = r#"{
            "channels": [{"channel_id": 1, "parent_id": 0, "name": "Lobby"}],
            "users": [{"user_id": 5, "channel_id": 1, "name": "EF2GH"}]
        }"#;
        let info: RepeaterInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.channels[0].description, "");
        assert_eq!(info.users[0].name, "EF2GH");
    }
}
