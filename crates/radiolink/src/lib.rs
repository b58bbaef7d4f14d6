//! Integrity-checked control message framing for radio links.
//!
//! radiolink moves paging requests and repeater channel/user directories
//! between repeaters and client stations over noisy narrowband channels.
//!
//! # Crate Structure
//!
//! - [`frame`]: CRC32-checked, length-prefixed frame codec
//! - [`records`]: Payload records and their byte encoding
//! - [`dispatch`]: Message dispatch, frame building, directory snapshots

/// Re-export frame types.
pub mod frame {
    pub use radiolink_frame::*;
}

/// Re-export payload record types.
pub mod records {
    pub use radiolink_records::*;
}

/// Re-export dispatch types.
pub mod dispatch {
    pub use radiolink_dispatch::*;
}
