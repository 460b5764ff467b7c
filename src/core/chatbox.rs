//! The outbound chatbox contract.

use crate::error::Result;

/// Upper bound on a chatbox message, in UTF-16 code units.
///
/// Truncated messages hit the bound exactly, except when the last character
/// is a surrogate pair straddling it: that character is dropped whole and the
/// message ends one unit short, since a `String` cannot hold half a pair.
pub const MAX_MESSAGE_LENGTH: usize = 144;

/// Payload for the chatbox input endpoint.
///
/// Messages always go straight into the chatbox history without the
/// notification sound, so both flags are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    text: String,
    save_to_history: bool,
    play_notification: bool,
}

impl SendRequest {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            save_to_history: true,
            play_notification: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn save_to_history(&self) -> bool {
        self.save_to_history
    }

    pub fn play_notification(&self) -> bool {
        self.play_notification
    }
}

/// Anything that can deliver a [`SendRequest`] to the chatbox.
///
/// Delivery is fire-and-forget: `Ok` means the datagram left the socket.
pub trait ChatboxSink: Send + Sync {
    fn send(&self, request: &SendRequest) -> Result<()>;
}
