use anyhow::{Context, Result};
use clap::ArgMatches;
use std::sync::Arc;

use crate::core::{Config, OneShotOutcome, OneShotSender};
use crate::platform::OscChatboxClient;
use crate::ui;

/// Send one free-text message, then hold for the display duration.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    super::apply_overrides(&mut config, matches)?;

    let text = matches
        .get_many::<String>("text")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    // Raw user input; the sender falls back to its default on garbage
    let duration = matches
        .get_one::<String>("duration")
        .cloned()
        .unwrap_or_else(|| config.message_duration_secs.to_string());

    let endpoint = config.endpoint()?;
    let client = OscChatboxClient::connect(endpoint).context("Failed to open OSC socket")?;
    let sender = OneShotSender::new(Arc::new(client));

    match sender.send(&text, &duration) {
        OneShotOutcome::Skipped => {
            ui::warn("Message is empty, nothing was sent");
        }
        OneShotOutcome::Sent {
            delivered: true,
            held_for,
        } => {
            ui::success(&format!(
                "Message sent to {} (held for {}s)",
                endpoint,
                held_for.as_secs()
            ));
        }
        OneShotOutcome::Sent {
            delivered: false, ..
        } => {
            ui::error("Error sending chat message (see log for details)");
        }
    }

    Ok(())
}
