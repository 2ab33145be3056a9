//! # Console Notifier
//!
//! Writes each notification as one line to a `Write` (stdout in the binary).

use std::io::Write;

use brew_core::Notifier;
use tracing::warn;

/// Prints notifications, one per line.
///
/// A failed write is logged and dropped: the order has already been stored
/// by the time a notification is sent.
#[derive(Debug)]
pub struct ConsoleNotifier<W> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    /// Creates a notifier writing to `out`.
    pub fn new(out: W) -> Self {
        ConsoleNotifier { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}").and_then(|_| self.out.flush()) {
            warn!(error = %e, "Failed to write notification");
        }
    }
}
