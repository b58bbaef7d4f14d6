use std::io::Read;
use std::path::Path;

use radiolink_records::{Channel, RepeaterInfo, User};
use serde::{Deserialize, Serialize};

use crate::config::DispatchConfig;
use crate::error::{DispatchError, Result};

/// Point-in-time copy of the channel and user directory.
///
/// Owned by value: callers take a fresh snapshot from whatever registry
/// they keep and hand it over for each repeater info build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl DirectorySnapshot {
    pub fn new(channels: Vec<Channel>, users: Vec<User>) -> Self {
        Self { channels, users }
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty() && self.users.is_empty()
    }

    /// Copy the snapshot into a repeater info record, preserving order.
    pub fn to_repeater_info(&self) -> RepeaterInfo {
        RepeaterInfo::new(self.channels.clone(), self.users.clone())
    }

    /// Parse a snapshot from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file with default limits.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        Self::from_json_file_with_config(path, &DispatchConfig::default())
    }

    /// Load a snapshot from a JSON file.
    ///
    /// Symlinks are refused and the file may not exceed
    /// `config.max_directory_file_size` bytes.
    pub fn from_json_file_with_config(path: &Path, config: &DispatchConfig) -> Result<Self> {
        let path_metadata = std::fs::symlink_metadata(path)
            .map_err(|err| DispatchError::DirectoryLoad(format!("{}: {err}", path.display())))?;
        if path_metadata.file_type().is_symlink() {
            return Err(DispatchError::DirectoryLoad(format!(
                "refusing to load directory symlink: {}",
                path.display()
            )));
        }
        if !path_metadata.is_file() {
            return Err(DispatchError::DirectoryLoad(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let max_bytes = config.max_directory_file_size;
        if path_metadata.len() > max_bytes as u64 {
            return Err(DispatchError::DirectoryLoad(format!(
                "directory file too large ({} bytes): {}",
                path_metadata.len(),
                path.display()
            )));
        }

        let file = std::fs::File::open(path).map_err(|err| {
            DispatchError::DirectoryLoad(format!("failed opening {}: {err}", path.display()))
        })?;
        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|err| {
                DispatchError::DirectoryLoad(format!("failed reading {}: {err}", path.display()))
            })?;
        if content.len() > max_bytes {
            return Err(DispatchError::DirectoryLoad(format!(
                "directory file too large while reading: {}",
                path.display()
            )));
        }

        let snapshot = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            channels = snapshot.channels.len(),
            users = snapshot.users.len(),
            "loaded directory snapshot"
        );
        Ok(snapshot)
    }
}

impl From<RepeaterInfo> for DirectorySnapshot {
    fn from(info: RepeaterInfo) -> Self {
        Self::new(info.channels, info.users)
    }
}
