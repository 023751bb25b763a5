//! Send command handler
//!
//! Delivers one message through a single channel.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::notifications::{ChannelType, DeliverySink, create_notifier};
use std::sync::Arc;
use tracing::info;

/// Handler for the send command
pub struct SendCommandHandler {
    sink: Arc<dyn DeliverySink>,
}

impl SendCommandHandler {
    /// Create a handler emitting into `sink`
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }

    /// Create a handler emitting into the sink configured in `settings`
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let sink = settings.notifications.sink_kind()?.build();
        Ok(Self::new(sink))
    }

    /// Deliver `message` to `recipient` over `channel`
    pub fn execute(&self, channel: ChannelType, recipient: &str, message: &str) -> AppResult<()> {
        let notifier = create_notifier(channel, self.sink.clone());
        notifier.deliver(recipient, message);
        info!(channel = %channel, recipient, "Message sent");
        Ok(())
    }
}
