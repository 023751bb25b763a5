//! Delivery sinks.
//!
//! A sink is where a notifier's emissions go. Notifiers own an
//! `Arc<dyn DeliverySink>` so the output target can be swapped without
//! touching the channel implementations.

use super::provider::Delivery;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

/// Receives one record per delivered message
pub trait DeliverySink: Send + Sync {
    fn record(&self, delivery: &Delivery);
}

/// Output target selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Human-readable lines on stdout
    #[default]
    Console,
    /// Structured tracing events
    Log,
    /// One JSON object per line on stdout
    Json,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::Log => "log",
            SinkKind::Json => "json",
        }
    }

    /// Builds the sink for this kind writing to the process stdout
    pub fn build(self) -> Arc<dyn DeliverySink> {
        match self {
            SinkKind::Console => Arc::new(ConsoleSink::new(io::stdout())),
            SinkKind::Log => Arc::new(LogSink),
            SinkKind::Json => Arc::new(JsonSink::new(io::stdout())),
        }
    }
}

impl FromStr for SinkKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "log" => Ok(SinkKind::Log),
            "json" => Ok(SinkKind::Json),
            _ => Err(AppError::invalid_argument(
                "sink",
                format!("unknown sink '{}'. Valid sinks are: console, log, json", s),
            )),
        }
    }
}

fn lock<W>(writer: &Mutex<W>) -> MutexGuard<'_, W> {
    writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Writes human-readable delivery lines
pub struct ConsoleSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_delivery(writer: &mut W, delivery: &Delivery) -> io::Result<()> {
        let channel = delivery.channel;
        writeln!(writer, "Sending {} to {}", channel.label(), delivery.recipient)?;
        writeln!(writer, "{} message: {}", channel.title(), delivery.message)?;
        writeln!(writer, "{} sent successfully!", channel.title())?;
        writeln!(writer)?;
        writer.flush()
    }
}

impl<W: Write + Send> DeliverySink for ConsoleSink<W> {
    fn record(&self, delivery: &Delivery) {
        let mut writer = lock(&self.writer);
        if let Err(e) = Self::write_delivery(&mut writer, delivery) {
            warn!(error = %e, channel = %delivery.channel, "Failed to write delivery to console");
        }
    }
}

/// Emits each delivery as a structured tracing event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DeliverySink for LogSink {
    fn record(&self, delivery: &Delivery) {
        info!(
            channel = %delivery.channel,
            recipient = %delivery.recipient,
            body = %delivery.message,
            "Notification delivered"
        );
    }
}

/// Writes one JSON object per delivery, newline separated
pub struct JsonSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> DeliverySink for JsonSink<W> {
    fn record(&self, delivery: &Delivery) {
        let mut writer = lock(&self.writer);
        let result = serde_json::to_writer(&mut *writer, delivery)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(writer))
            .and_then(|_| writer.flush());
        if let Err(e) = result {
            warn!(error = %e, channel = %delivery.channel, "Failed to write delivery as JSON");
        }
    }
}

/// Keeps every delivery in memory, in the order recorded
#[derive(Debug, Default)]
pub struct MemorySink {
    deliveries: Mutex<Vec<Delivery>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded deliveries
    pub fn deliveries(&self) -> Vec<Delivery> {
        lock(&self.deliveries).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.deliveries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.deliveries).is_empty()
    }
}

impl DeliverySink for MemorySink {
    fn record(&self, delivery: &Delivery) {
        lock(&self.deliveries).push(delivery.clone());
    }
}
