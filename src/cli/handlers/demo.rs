//! Demo command handler
//!
//! Runs the fixed demonstration: standalone deliveries, per-user
//! notifications, then a broadcast over email and SMS.

use super::broadcast::broadcast;
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::models::User;
use crate::services::notifications::{
    DeliverySink, EmailNotifier, Notifier, NotificationManager, SmsNotifier,
};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

const ALICE_EMAIL: &str = "alice.green@example.com";
const BOB_PHONE: &str = "+37398672145";
const ADMIN_EMAIL: &str = "admin@example.com";
const MAINTENANCE_NOTICE: &str = "System maintenance scheduled at midnight!";

/// Handler for the demo command
pub struct DemoCommandHandler {
    sink: Arc<dyn DeliverySink>,
}

impl DemoCommandHandler {
    pub fn new(sink: Arc<dyn DeliverySink>) -> Self {
        Self { sink }
    }

    pub fn from_settings(settings: &Settings) -> AppResult<Self> {
        let sink = settings.notifications.sink_kind()?.build();
        Ok(Self::new(sink))
    }

    /// Run the demonstration, writing the broadcast banner to `out`
    pub fn execute<W: Write>(&self, out: &mut W) -> AppResult<()> {
        info!("Running notification demo");

        let email = EmailNotifier::new(self.sink.clone());
        email.deliver(ALICE_EMAIL, "Hello Alice, this is a test email!");

        let sms = SmsNotifier::new(self.sink.clone());
        sms.deliver(BOB_PHONE, "Hello Bob, this is a test SMS!");

        let users = [
            User::new("Alice", ALICE_EMAIL, &email),
            User::new("Bob", BOB_PHONE, &sms),
        ];
        for user in &users {
            user.notify(&format!("Hi {}, your account settings were updated.", user.name()));
        }

        // The broadcast gets its own notifier instances
        let mut manager = NotificationManager::new();
        manager.register(Arc::new(EmailNotifier::new(self.sink.clone())));
        manager.register(Arc::new(SmsNotifier::new(self.sink.clone())));
        broadcast(&manager, out, ADMIN_EMAIL, MAINTENANCE_NOTICE)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::notifications::{ChannelType, Delivery, MemorySink};

    #[test]
    fn test_demo_sequence() {
        let sink = Arc::new(MemorySink::new());
        let mut out = Vec::new();

        DemoCommandHandler::new(sink.clone()).execute(&mut out).unwrap();

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 6);
        assert_eq!(
            deliveries[0],
            Delivery::new(ChannelType::Email, ALICE_EMAIL, "Hello Alice, this is a test email!")
        );
        assert_eq!(
            deliveries[1],
            Delivery::new(ChannelType::Sms, BOB_PHONE, "Hello Bob, this is a test SMS!")
        );
        assert_eq!(deliveries[2].recipient, ALICE_EMAIL);
        assert_eq!(deliveries[3].recipient, BOB_PHONE);
        assert_eq!(
            &deliveries[4..],
            &[
                Delivery::new(ChannelType::Email, ADMIN_EMAIL, MAINTENANCE_NOTICE),
                Delivery::new(ChannelType::Sms, ADMIN_EMAIL, MAINTENANCE_NOTICE),
            ]
        );

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Preparing notification"));
        assert!(output.contains("Message delivered through 2 channels!"));
    }
}
