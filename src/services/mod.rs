//! Service layer for notification delivery.

pub mod notifications;

pub use notifications::NotificationManager;
