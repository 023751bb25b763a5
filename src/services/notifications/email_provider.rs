//! Email notifier implementation.

use super::provider::{ChannelType, Delivery, Notifier};
use super::sink::DeliverySink;
use std::sync::Arc;
use tracing::debug;

/// Email notifier
///
/// Hands every message to its sink tagged as an email delivery. No
/// transport is involved.
pub struct EmailNotifier {
    sink: Arc<dyn DeliverySink>,
}

impl EmailNotifier {
    /// Creates a new email notifier emitting into `sink`
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }
}

impl Notifier for EmailNotifier {
    fn deliver(&self, recipient: &str, message: &str) {
        debug!(channel = "email", recipient, "Delivering notification");
        self.sink
            .record(&Delivery::new(ChannelType::Email, recipient, message));
    }

    fn channel(&self) -> ChannelType {
        ChannelType::Email
    }
}
