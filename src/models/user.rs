use crate::services::notifications::Notifier;
use std::fmt;
use tracing::info;

/// A named recipient paired with the notifier that reaches them
///
/// The notifier is borrowed, not owned: several users can share one
/// notifier instance and the user never outlives it.
#[derive(Clone, Copy)]
pub struct User<'a> {
    name: &'a str,
    recipient: &'a str,
    notifier: &'a dyn Notifier,
}

impl<'a> User<'a> {
    pub fn new(name: &'a str, recipient: &'a str, notifier: &'a dyn Notifier) -> Self {
        Self {
            name,
            recipient,
            notifier,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn recipient(&self) -> &str {
        self.recipient
    }

    /// Delivers `message` to this user's recipient through their notifier
    ///
    /// Every call announces itself with one `info` event carrying the user
    /// name, whoever the caller is.
    pub fn notify(&self, message: &str) {
        info!(user = self.name, channel = %self.notifier.channel(), "Preparing notification");
        self.notifier.deliver(self.recipient, message);
    }
}

impl fmt::Debug for User<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("recipient", &self.recipient)
            .field("channel", &self.notifier.channel())
            .finish()
    }
}
