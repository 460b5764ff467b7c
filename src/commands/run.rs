//! `run` command: start the transmission loop until Ctrl+C.

use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use crate::core::toggles::Source;
use crate::core::transmitter::{run_tick, LoopState};
use crate::core::{Config, LiveSensors, Transmitter};
use crate::platform::OscChatboxClient;
use crate::ui::{self, format_message_preview, format_status, format_toggle};

/// Longest we wait for an in-flight tick after Ctrl+C
const STOP_GRACE: Duration = Duration::from_secs(10);

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    super::apply_overrides(&mut config, matches)?;

    let endpoint = config.endpoint()?;
    let client = OscChatboxClient::connect(endpoint).context("Failed to open OSC socket")?;
    let sensors = LiveSensors::from_config(&config);

    println!("{} {}", "Chatbox endpoint:".white().bold(), endpoint.to_string().cyan());
    for source in Source::ALL {
        println!("  {}", format_toggle(source, config.toggles.is_enabled(source)));
    }
    println!();

    if matches.get_flag("once") {
        let outcome = run_tick(&config.toggles, &sensors, &client);
        println!("{}", format_message_preview(&outcome.message));
        if !outcome.delivered {
            ui::warn("Message could not be sent");
        }
        return Ok(());
    }

    let transmitter = Transmitter::new(
        Arc::new(sensors),
        Arc::new(client),
        config.toggles.clone(),
        config.interval(),
    )?;

    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("Failed to install Ctrl+C handler")?;

    transmitter.start();
    println!("{}", format_status(transmitter.state()));
    ui::dimmed("Press Ctrl+C to stop sending.");

    // Blocks until Ctrl+C
    let _ = stop_rx.recv();

    println!();
    ui::info("Stopping after the current tick...");
    if !transmitter.stop_and_wait(STOP_GRACE) {
        ui::warn("Transmission loop did not finish in time");
    }
    println!("{}", format_status(LoopState::Idle));

    Ok(())
}
