//! Built-in message type codes.
//!
//! Codes are a compatibility contract with deployed peers. Anything not
//! listed here is carried through as [`MessageType::Unknown`] so newer
//! message types can be logged and skipped.

/// Paging request from one station to another.
pub const PAGE_MESSAGE: i32 = 1;

/// Repeater channel and user directory.
pub const REPEATER_INFO: i32 = 2;

/// Typed view over a raw message type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    PageMessage,
    RepeaterInfo,
    Unknown(i32),
}

impl MessageType {
    pub fn from_code(code: i32) -> Self {
        match code {
            PAGE_MESSAGE => Self::PageMessage,
            REPEATER_INFO => Self::RepeaterInfo,
            other => Self::Unknown(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::PageMessage => PAGE_MESSAGE,
            Self::RepeaterInfo => REPEATER_INFO,
            Self::Unknown(code) => code,
        }
    }

    /// Returns true for codes this crate does not define.
    pub fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<i32> for MessageType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<MessageType> for i32 {
    fn from(kind: MessageType) -> Self {
        kind.code()
    }
}

/// Returns a human-readable name for a message type code.
pub fn message_type_name(code: i32) -> &'static str {
    match MessageType::from_code(code) {
        MessageType::PageMessage => "PAGE_MESSAGE",
        MessageType::RepeaterInfo => "REPEATER_INFO",
        MessageType::Unknown(_) => "UNKNOWN",
    }
}
