//! Collaborators that receive a successful submission.
//!
//! A [`Notifier`] tells the user the reservation went through; a
//! [`BookingSink`] gets the structured record.

use std::io::Write;

use tracing::info;

use crate::booking::BookingData;
use crate::error::Result;

/// Message shown to the user after a successful submission.
pub const CONFIRMATION: &str = "Reservation submitted!";

/// Surfaces a user-visible confirmation.
pub trait Notifier {
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Receives every accepted booking.
pub trait BookingSink {
    fn forward(&mut self, booking: &BookingData) -> Result<()>;
}

/// Emits the confirmation as an info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) -> Result<()> {
        info!("{message}");
        Ok(())
    }
}

/// Writes the confirmation as a line to any writer.
#[derive(Debug)]
pub struct WriterNotifier<W> {
    writer: W,
}

impl<W: Write> WriterNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for WriterNotifier<W> {
    fn notify(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every message it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) -> Result<()> {
        self.messages.push(message.to_string());
        Ok(())
    }
}

/// Logs `Booking data:` followed by the JSON record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl BookingSink for TracingSink {
    fn forward(&mut self, booking: &BookingData) -> Result<()> {
        let json = serde_json::to_string(booking)?;
        info!("Booking data: {json}");
        Ok(())
    }
}

/// Writes one JSON object per booking.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BookingSink for JsonLinesSink<W> {
    fn forward(&mut self, booking: &BookingData) -> Result<()> {
        serde_json::to_writer(&mut self.writer, booking)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every booking it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub bookings: Vec<BookingData>,
}

impl BookingSink for RecordingSink {
    fn forward(&mut self, booking: &BookingData) -> Result<()> {
        self.bookings.push(booking.clone());
        Ok(())
    }
}
