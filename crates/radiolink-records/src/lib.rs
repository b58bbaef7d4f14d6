//! Payload records carried inside radiolink frames.
//!
//! Records are `prost` messages (proto3 rules: default values are omitted,
//! unknown fields are skipped) so peers running generated protobuf code
//! interoperate with this crate.
//!
//! | Record | Fields |
//! |---|---|
//! | [`PageMessage`] | 1 calling_user, 2 called_user, 3 retransmit, 4 via_node |
//! | [`RepeaterInfo`] | 1 repeated [`Channel`], 2 repeated [`User`] |
//! | [`Channel`] | 1 channel_id, 2 parent_id, 3 name, 4 description |
//! | [`User`] | 1 user_id, 2 channel_id, 3 name |

pub mod error;
pub mod page;
pub mod record;
pub mod repeater;

pub use error::{RecordError, Result};
pub use page::PageMessage;
pub use record::PayloadRecord;
pub use repeater::{Channel, RepeaterInfo, User};
