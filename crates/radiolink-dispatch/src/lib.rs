//! Message dispatch and frame building for the radiolink protocol.
//!
//! Inbound: raw transport buffer → [`Dispatcher::process`] → frame decode
//! and CRC check → record decode → [`MessageHandler`]. Every failure drops
//! exactly one frame and is reported as an [`Outcome`], never an error.
//!
//! Outbound: [`build_page_message`] and [`build_repeater_info`] encode a
//! record and wrap it in a frame.

pub mod builder;
pub mod config;
pub mod directory;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod legacy;

pub use builder::{build_frame, build_page_message, build_repeater_info};
pub use config::DispatchConfig;
pub use directory::DirectorySnapshot;
pub use dispatcher::{DispatchStats, Dispatcher, DropReason, Outcome, Route};
pub use error::{DispatchError, Result};
pub use handler::{MessageHandler, NoopHandler, RecordingHandler};
