//! Notification system with pluggable channels.
//!
//! The core trait `Notifier` lets email, SMS and any future channel be used
//! interchangeably. `NotificationManager` broadcasts one message through all
//! registered notifiers, and every delivery is emitted into a `DeliverySink`.

mod email_provider;
mod provider;
mod sink;
mod sms_provider;

pub mod notification_manager;


pub use email_provider::EmailNotifier;
pub use notification_manager::{NotificationManager, create_notifier};
pub use provider::{ChannelType, Delivery, Notifier};
pub use sink::{ConsoleSink, DeliverySink, JsonSink, LogSink, MemorySink, SinkKind};
pub use sms_provider::SmsNotifier;
