//! Broadcast of one message over every registered channel.

use super::email_provider::EmailNotifier;
use super::provider::{ChannelType, Notifier};
use super::sink::DeliverySink;
use super::sms_provider::SmsNotifier;
use crate::error::AppResult;
use std::sync::Arc;
use tracing::{debug, info};

/// Fans a single message out to every registered notifier
///
/// Notifiers are kept in registration order. Duplicates are allowed and the
/// collection never shrinks.
#[derive(Default, Clone)]
pub struct NotificationManager {
    notifiers: Vec<Arc<dyn Notifier>>,
}

impl NotificationManager {
    /// Creates an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a notifier at the end of the broadcast order
    pub fn register(&mut self, notifier: Arc<dyn Notifier>) {
        debug!(
            channel = %notifier.channel(),
            position = self.notifiers.len(),
            "Registering notifier"
        );
        self.notifiers.push(notifier);
    }

    /// Resolves a channel by name and registers a new notifier for it
    ///
    /// # Arguments
    /// * `channel` - Channel name ("email", "sms")
    /// * `sink` - Sink the new notifier emits into
    ///
    /// # Errors
    /// `AppError::InvalidArgument` if the name matches no channel. Nothing is
    /// registered in that case.
    pub fn register_channel(&mut self, channel: &str, sink: Arc<dyn DeliverySink>) -> AppResult<()> {
        let channel: ChannelType = channel.parse()?;
        self.register(create_notifier(channel, sink));
        Ok(())
    }

    /// Delivers `message` to `recipient` through every registered notifier
    ///
    /// # Returns
    /// Number of notifiers invoked. Zero when nothing is registered.
    pub fn deliver_all(&self, recipient: &str, message: &str) -> usize {
        info!(
            recipient,
            channels = self.notifiers.len(),
            "Broadcasting notification"
        );

        for notifier in &self.notifiers {
            notifier.deliver(recipient, message);
        }

        self.notifiers.len()
    }

    /// Number of registered notifiers
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Channels of the registered notifiers, in registration order
    pub fn channels(&self) -> Vec<ChannelType> {
        self.notifiers.iter().map(|n| n.channel()).collect()
    }
}

/// Creates a notifier for `channel` emitting into `sink`
///
/// Factory method pattern - returns `Arc<dyn Notifier>` for dynamic dispatch.
pub fn create_notifier(channel: ChannelType, sink: Arc<dyn DeliverySink>) -> Arc<dyn Notifier> {
    match channel {
        ChannelType::Email => Arc::new(EmailNotifier::new(sink)),
        ChannelType::Sms => Arc::new(SmsNotifier::new(sink)),
    }
}
