use std::collections::HashMap;

use radiolink_frame::{
    message_type_name, Frame, FrameConfig, FrameError, PAGE_MESSAGE, REPEATER_INFO,
};
use radiolink_records::{PageMessage, PayloadRecord, RecordError, RepeaterInfo};

use crate::config::DispatchConfig;
use crate::handler::MessageHandler;

/// Decodes a CRC-valid payload and notifies the handler.
///
/// Routes are plain function pointers so the table can be extended with
/// new message types without touching the receive path.
pub type Route<H> = fn(&[u8], &mut H) -> Result<Outcome, RecordError>;

/// Why a frame was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The buffer was shorter than a header field or the declared payload.
    Truncated,
    /// The declared payload length exceeded the safety bound.
    Oversized,
    /// The payload failed CRC32 verification.
    Checksum,
    /// The frame was valid but its payload record was malformed.
    PayloadDecode { message_type: i32 },
}

impl DropReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truncated => "truncated",
            Self::Oversized => "oversized",
            Self::Checksum => "checksum",
            Self::PayloadDecode { .. } => "payload_decode",
        }
    }
}

/// Result of one receive cycle. Never an error: bad frames are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Page(PageMessage),
    RepeaterInfo(RepeaterInfo),
    /// Handled by a route registered with [`Dispatcher::register`].
    Handled(i32),
    /// CRC-valid frame with no registered route.
    Unknown(i32),
    Dropped(DropReason),
}

impl Outcome {
    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped(_))
    }
}

/// Per-dispatcher frame counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub accepted: u64,
    pub unknown: u64,
    pub truncated: u64,
    pub oversized: u64,
    pub checksum_failures: u64,
    pub decode_failures: u64,
}

impl DispatchStats {
    /// Total frames discarded for any reason.
    pub fn dropped(&self) -> u64 {
        self.truncated + self.oversized + self.checksum_failures + self.decode_failures
    }

    fn record_drop(&mut self, reason: DropReason) {
        let counter = match reason {
            DropReason::Truncated => &mut self.truncated,
            DropReason::Oversized => &mut self.oversized,
            DropReason::Checksum => &mut self.checksum_failures,
            DropReason::PayloadDecode { .. } => &mut self.decode_failures,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Routes decoded frames to type-specific record decoders and a handler.
pub struct Dispatcher<H> {
    handler: H,
    routes: HashMap<i32, Route<H>>,
    frame_config: FrameConfig,
    stats: DispatchStats,
}

impl<H: MessageHandler> Dispatcher<H> {
    /// Create a dispatcher with the built-in routes and default config.
    pub fn new(handler: H) -> Self {
        Self::with_config(handler, DispatchConfig::default())
    }

    /// Create a dispatcher with the built-in routes and explicit config.
    pub fn with_config(handler: H, config: DispatchConfig) -> Self {
        let mut routes: HashMap<i32, Route<H>> = HashMap::new();
        routes.insert(PAGE_MESSAGE, route_page::<H>);
        routes.insert(REPEATER_INFO, route_repeater_info::<H>);
        Self {
            handler,
            routes,
            frame_config: config.frame_config(),
            stats: DispatchStats::default(),
        }
    }

    /// Register (or replace) the route for a message type code.
    pub fn register(&mut self, message_type: i32, route: Route<H>) -> Option<Route<H>> {
        self.routes.insert(message_type, route)
    }

    /// Check if a message type code has a route.
    pub fn has_route(&self, message_type: i32) -> bool {
        self.routes.contains_key(&message_type)
    }

    /// Decode one raw buffer from the transport and dispatch it.
    pub fn process(&mut self, raw: &[u8]) -> Outcome {
        match self.frame_config.decode(raw) {
            Ok(frame) => self.dispatch(&frame),
            Err(err) => {
                let reason = match err {
                    FrameError::ChecksumMismatch { .. } => {
                        tracing::error!(error = %err, "radio packet CRC32 failed, dropping packet");
                        DropReason::Checksum
                    }
                    FrameError::TruncatedFrame { .. } => {
                        tracing::warn!(error = %err, "truncated radio packet, dropping packet");
                        DropReason::Truncated
                    }
                    FrameError::OversizedPayload { .. } | FrameError::PayloadTooLarge { .. } => {
                        tracing::warn!(error = %err, "oversized radio packet, dropping packet");
                        DropReason::Oversized
                    }
                };
                self.stats.record_drop(reason);
                Outcome::Dropped(reason)
            }
        }
    }

    /// Dispatch an already verified frame.
    pub fn dispatch(&mut self, frame: &Frame) -> Outcome {
        let message_type = frame.message_type;
        let Some(route) = self.routes.get(&message_type).copied() else {
            tracing::debug!(message_type, "radio message type {message_type} not implemented");
            self.handler.on_unknown(message_type, &frame.payload);
            self.stats.unknown = self.stats.unknown.saturating_add(1);
            return Outcome::Unknown(message_type);
        };

        match route(&frame.payload, &mut self.handler) {
            Ok(outcome) => {
                self.stats.accepted = self.stats.accepted.saturating_add(1);
                outcome
            }
            Err(err) => {
                tracing::warn!(
                    message_type,
                    kind = message_type_name(message_type),
                    error = %err,
                    "malformed payload record, dropping packet"
                );
                let reason = DropReason::PayloadDecode { message_type };
                self.stats.record_drop(reason);
                Outcome::Dropped(reason)
            }
        }
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }
}

fn route_page<H: MessageHandler>(
    payload: &[u8],
    handler: &mut H,
) -> Result<Outcome, RecordError> {
    let page = PageMessage::decode(payload)?;
    tracing::debug!(
        calling = %page.calling_user,
        called = %page.called_user,
        via = %page.via_node,
        retransmit = page.retransmit,
        "paging message from {} to {} via {}",
        page.calling_user,
        page.called_user,
        page.via_node
    );
    handler.on_page(&page);
    Ok(Outcome::Page(page))
}

fn route_repeater_info<H: MessageHandler>(
    payload: &[u8],
    handler: &mut H,
) -> Result<Outcome, RecordError> {
    let info = RepeaterInfo::decode(payload)?;
    tracing::debug!(
        channels = info.channels.len(),
        users = info.users.len(),
        "repeater info received"
    );
    for channel in &info.channels {
        tracing::debug!(id = channel.channel_id, name = %channel.name, "repeater channel");
        handler.on_channel(channel);
    }
    for user in &info.users {
        tracing::debug!(id = user.user_id, name = %user.name, "repeater user");
        handler.on_user(user);
    }
    Ok(Outcome::RepeaterInfo(info))
}
