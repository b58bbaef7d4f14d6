/// Errors raised while decoding a payload record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The payload is not a valid protobuf encoding of the record.
    #[error("malformed record: {0}")]
    Decode(#[from] prost::DecodeError),
}

pub type Result<T> = std::result::Result<T, RecordError>;
