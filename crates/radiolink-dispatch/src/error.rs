use radiolink_frame::FrameError;

/// Errors raised while building frames or loading directory data.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Frame encoding failed.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// The directory file could not be loaded.
    #[error("failed to load directory: {0}")]
    DirectoryLoad(String),

    /// The directory file is not valid JSON for a snapshot.
    #[error("directory is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
