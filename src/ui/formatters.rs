use colored::{ColoredString, Colorize};

use crate::core::composer::message_length;
use crate::core::toggles::Source;
use crate::core::transmitter::LoopState;
use crate::core::MAX_MESSAGE_LENGTH;

/// `Status: Sending` in green or `Status: Not Sending` in red
pub fn format_status(state: LoopState) -> ColoredString {
    match state {
        LoopState::Active => "Status: Sending".green().bold(),
        LoopState::Idle => "Status: Not Sending".red().bold(),
    }
}

/// One checkbox-style line for a source toggle
pub fn format_toggle(source: Source, enabled: bool) -> String {
    let mark = if enabled {
        "[x]".green().to_string()
    } else {
        "[ ]".dimmed().to_string()
    };
    format!("{} {:<6} Send {} Info", mark, source.name(), source.label())
}

/// Message framed for the terminal, with its length against the cap
pub fn format_message_preview(message: &str) -> String {
    let length = message_length(message);
    let counter = format!("({}/{} units)", length, MAX_MESSAGE_LENGTH);
    let counter = if length >= MAX_MESSAGE_LENGTH {
        counter.yellow()
    } else {
        counter.dimmed()
    };

    let mut out = String::new();
    for line in message.split('\n') {
        out.push_str("  │ ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("  {}", counter));
    out
}
