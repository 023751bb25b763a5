//! Broadcast command handler
//!
//! Registers the configured channels and fans one message out over all of them.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::services::notifications::{DeliverySink, NotificationManager};
use std::io::Write;
use std::sync::Arc;

/// Handler for the broadcast command
pub struct BroadcastCommandHandler {
    channels: Vec<String>,
    sink: Arc<dyn DeliverySink>,
}

impl BroadcastCommandHandler {
    /// Create a handler registering `channels` (by name) in order
    pub fn new(channels: Vec<String>, sink: Arc<dyn DeliverySink>) -> Self {
        Self { channels, sink }
    }

    /// Create a handler from the configured channel list and sink
    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let sink = settings.notifications.sink_kind()?.build();
        Ok(Self::new(settings.notifications.channels.clone(), sink))
    }

    /// Broadcast `message` to `recipient`, writing the banner lines to `out`
    ///
    /// # Returns
    /// Number of channels the message went through
    ///
    /// # Errors
    /// `AppError::InvalidArgument` if a channel name is unknown; nothing is
    /// delivered in that case.
    pub fn execute<W: Write>(&self, out: &mut W, recipient: &str, message: &str) -> AppResult<usize> {
        let mut manager = NotificationManager::new();
        for channel in &self.channels {
            manager.register_channel(channel, self.sink.clone())?;
        }

        broadcast(&manager, out, recipient, message)
    }
}

/// Run a broadcast on `manager` framed by the banner lines
pub(crate) fn broadcast<W: Write>(
    manager: &NotificationManager,
    out: &mut W,
    recipient: &str,
    message: &str,
) -> AppResult<usize> {
    writeln!(out)?;
    writeln!(out, "Broadcasting message to {}...", recipient)?;
    writeln!(out)?;
    out.flush()?;

    let delivered = manager.deliver_all(recipient, message);

    writeln!(out, "Message delivered through {} channels!", delivered)?;
    out.flush()?;
    Ok(delivered)
}
