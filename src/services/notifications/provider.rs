//! Core notifier trait and types.
//!
//! This module provides the abstraction for notification channels,
//! allowing email, SMS and future channels to be used interchangeably.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel a notifier delivers through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Sms,
}

impl ChannelType {
    /// Label used in emitted records ("email", "SMS")
    pub fn label(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Sms => "SMS",
        }
    }

    /// Capitalized label for the start of a line ("Email", "SMS")
    pub fn title(&self) -> &'static str {
        match self {
            ChannelType::Email => "Email",
            ChannelType::Sms => "SMS",
        }
    }

    /// Configuration name of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Sms => "sms",
        }
    }
}

impl FromStr for ChannelType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(ChannelType::Email),
            "sms" => Ok(ChannelType::Sms),
            "" => Err(AppError::invalid_argument(
                "channel",
                "channel name cannot be empty",
            )),
            other => Err(AppError::invalid_argument(
                "channel",
                format!("unknown channel '{}'. Valid channels are: email, sms", other),
            )),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record emitted for every delivered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Channel the message went through
    pub channel: ChannelType,
    /// Opaque recipient identifier (email address, phone number, ...)
    pub recipient: String,
    /// Message content
    pub message: String,
}

impl Delivery {
    pub fn new(channel: ChannelType, recipient: &str, message: &str) -> Self {
        Self {
            channel,
            recipient: recipient.to_string(),
            message: message.to_string(),
        }
    }
}

/// Trait for notification channels (email, SMS, ...)
///
/// Delivery is synchronous and never fails from the caller's perspective.
/// Every call produces exactly one [`Delivery`] on the notifier's sink.
/// All notifiers must be Send + Sync so they can be shared through `Arc`.
///
/// # Example Implementation
/// ```ignore
/// pub struct PagerNotifier {
///     sink: Arc<dyn DeliverySink>,
/// }
///
/// impl Notifier for PagerNotifier {
///     fn deliver(&self, recipient: &str, message: &str) {
///         self.sink.record(&Delivery::new(self.channel(), recipient, message));
///     }
///
///     fn channel(&self) -> ChannelType {
///         ChannelType::Email
///     }
/// }
/// ```
pub trait Notifier: Send + Sync {
    /// Delivers a message to a recipient
    ///
    /// # Arguments
    /// * `recipient` - Where the message goes; not validated
    /// * `message` - The message content; not validated
    fn deliver(&self, recipient: &str, message: &str);

    /// Returns the channel this notifier delivers through
    fn channel(&self) -> ChannelType;
}
