use radiolink_records::{Channel, PageMessage, User};

/// Downstream collaborator notified of decoded messages.
///
/// Every method defaults to a no-op so implementors only override what
/// they consume.
pub trait MessageHandler {
    /// A page addressed through this node.
    fn on_page(&mut self, _page: &PageMessage) {}

    /// One channel entry from a repeater directory, in wire order.
    fn on_channel(&mut self, _channel: &Channel) {}

    /// One user entry from a repeater directory, in wire order.
    fn on_user(&mut self, _user: &User) {}

    /// A CRC-valid frame with a type code no route is registered for.
    fn on_unknown(&mut self, _message_type: i32, _payload: &[u8]) {}
}

/// Handler that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl MessageHandler for NoopHandler {}

/// Handler that keeps every event it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHandler {
    pub pages: Vec<PageMessage>,
    pub channels: Vec<Channel>,
    pub users: Vec<User>,
    pub unknown: Vec<i32>,
}

impl MessageHandler for RecordingHandler {
    fn on_page(&mut self, page: &PageMessage) {
        self.pages.push(page.clone());
    }

    fn on_channel(&mut self, channel: &Channel) {
        self.channels.push(channel.clone());
    }

    fn on_user(&mut self, user: &User) {
        self.users.push(user.clone());
    }

    fn on_unknown(&mut self, message_type: i32, _payload: &[u8]) {
        self.unknown.push(message_type);
    }
}

impl<H: MessageHandler + ?Sized> MessageHandler for &mut H {
    fn on_page(&mut self, page: &PageMessage) {
        (**self).on_page(page);
    }

    fn on_channel(&mut self, channel: &Channel) {
        (**self).on_channel(channel);
    }

    fn on_user(&mut self, user: &User) {
        (**self).on_user(user);
    }

    fn on_unknown(&mut self, message_type: i32, payload: &[u8]) {
        (**self).on_unknown(message_type, payload);
    }
}
