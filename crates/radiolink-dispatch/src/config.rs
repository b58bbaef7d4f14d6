use radiolink_frame::{FrameConfig, MAX_PAYLOAD};

/// Controls dispatcher and directory loading behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Maximum frame payload accepted or produced. Clamped to 1 MiB.
    pub max_payload_size: usize,
    /// Maximum bytes allowed for a directory file loaded from disk.
    pub max_directory_file_size: usize,
}

impl DispatchConfig {
    pub fn frame_config(&self) -> FrameConfig {
        FrameConfig {
            max_payload_size: self.max_payload_size,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_payload_size: MAX_PAYLOAD,
            max_directory_file_size: 4 * 1024 * 1024,
        }
    }
}
