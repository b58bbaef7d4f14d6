/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The buffer ended before a declared field or the declared payload.
    #[error("truncated frame (needed {needed} bytes, have {available})")]
    TruncatedFrame { needed: usize, available: usize },

    /// The declared payload length exceeds the safety bound.
    #[error("declared payload too large ({size} bytes, max {max})")]
    OversizedPayload { size: usize, max: usize },

    /// The payload handed to the encoder exceeds the configured maximum size.
    #[error("payload too large to encode ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The payload CRC32 does not match the checksum carried in the header.
    #[error("payload CRC32 mismatch (header {expected:#010x}, computed {actual:#010x})")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, FrameError>;
