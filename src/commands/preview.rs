use anyhow::Result;
use clap::ArgMatches;

use crate::core::{compose, sample, Config, LiveSensors};
use crate::ui::{self, format_message_preview};

/// Sample once and print the message that would be sent.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    super::apply_overrides(&mut config, matches)?;

    ui::info("Sampling sensors...");

    let sensors = LiveSensors::from_config(&config);
    let readings = sample(&config.toggles, &sensors);
    let message = compose(&config.toggles, &readings);

    if message.is_empty() {
        ui::warn("No sources enabled, an empty message would be sent");
    }
    println!("{}", format_message_preview(&message));

    Ok(())
}
