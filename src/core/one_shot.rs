//! Single user-authored chatbox messages.

use std::sync::Arc;
use std::time::Duration;

use crate::core::chatbox::{ChatboxSink, SendRequest};

pub const DEFAULT_DURATION_SECS: u64 = 5;

/// Parse a display duration in whole seconds; anything invalid gives the default.
pub fn parse_duration(input: &str) -> Duration {
    let secs = input.trim().parse::<u64>().unwrap_or_else(|_| {
        log::debug!(
            "Invalid duration {:?}, using {}s",
            input,
            DEFAULT_DURATION_SECS
        );
        DEFAULT_DURATION_SECS
    });
    Duration::from_secs(secs)
}

/// What happened to a one-shot message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotOutcome {
    /// Blank input; nothing sent, no pause
    Skipped,
    /// A send was attempted and the caller was held for `held_for`
    Sent { delivered: bool, held_for: Duration },
}

/// Sends free text once and then holds the caller.
///
/// The pause only throttles the input side. The duration is never sent, the
/// chatbox decides on its own how long a message stays visible.
pub struct OneShotSender {
    sink: Arc<dyn ChatboxSink>,
}

impl OneShotSender {
    pub fn new(sink: Arc<dyn ChatboxSink>) -> Self {
        Self { sink }
    }

    pub fn send(&self, text: &str, duration_input: &str) -> OneShotOutcome {
        let message = text.trim();
        if message.is_empty() {
            return OneShotOutcome::Skipped;
        }

        let duration = parse_duration(duration_input);

        let delivered = match self.sink.send(&SendRequest::new(message)) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error sending chat message: {}", e);
                false
            }
        };

        std::thread::sleep(duration);

        OneShotOutcome::Sent {
            delivered,
            held_for: duration,
        }
    }
}
