//! SMS notifier implementation.

use super::provider::{ChannelType, Delivery, Notifier};
use super::sink::DeliverySink;
use std::sync::Arc;
use tracing::debug;

/// SMS notifier
pub struct SmsNotifier {
    sink: Arc<dyn DeliverySink>,
}

impl SmsNotifier {
    /// Creates a new SMS notifier emitting into `sink`
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }
}

impl Notifier for SmsNotifier {
    fn deliver(&self, recipient: &str, message: &str) {
        debug!(channel = "sms", recipient, "Delivering notification");
        self.sink
            .record(&Delivery::new(ChannelType::Sms, recipient, message));
    }

    fn channel(&self) -> ChannelType {
        ChannelType::Sms
    }
}
