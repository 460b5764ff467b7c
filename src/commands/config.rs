use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{Config, Source};
use crate::ui::{self, format_toggle};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => show(),
        Some(("set", sub_matches)) => set_source(sub_matches),
        Some(("clock", sub_matches)) => set_clock(sub_matches),
        Some(("endpoint", sub_matches)) => set_endpoint(sub_matches),
        Some(("interval", sub_matches)) => set_interval(sub_matches),
        Some(("duration", sub_matches)) => set_duration(sub_matches),
        Some(("reset", _)) => reset(),
        _ => {
            println!("Use 'chatbox-stats config --help' for more information.");
            Ok(())
        }
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Chatbox endpoint:".white().bold());
    println!("  {}", format!("{}:{}", config.host, config.port).cyan().bold());
    println!();
    println!("{}", "Sources:".white().bold());
    for source in Source::ALL {
        println!("  {}", format_toggle(source, config.toggles.is_enabled(source)));
    }
    println!();
    println!(
        "{} {}",
        "Clock format:".white().bold(),
        if config.toggles.use_24h_clock { "24h" } else { "12h" }
    );
    println!("{} {}ms", "Interval:".white().bold(), config.interval_ms);
    println!(
        "{} {}s",
        "Message duration:".white().bold(),
        config.message_duration_secs
    );
    println!();
    if let Ok(path) = Config::get_config_path() {
        ui::dimmed(&format!("Stored in {}", path.display()));
    }

    Ok(())
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => bail!("Expected on/off, got '{}'", other),
    }
}

fn set_source(matches: &ArgMatches) -> Result<()> {
    let source: Source = matches
        .get_one::<String>("source")
        .context("Source argument is required")?
        .parse()?;
    let on = parse_switch(
        matches
            .get_one::<String>("state")
            .context("State argument is required")?,
    )?;

    let mut config = Config::load()?;
    config.set_toggle(source, on);
    config.save()?;

    ui::success(&format!(
        "{} {}",
        source.label(),
        if on { "enabled" } else { "disabled" }
    ));
    Ok(())
}

fn set_clock(matches: &ArgMatches) -> Result<()> {
    let format = matches
        .get_one::<String>("format")
        .context("Format argument is required")?;

    let use_24h = match format.trim().to_lowercase().as_str() {
        "24" | "24h" => true,
        "12" | "12h" => false,
        other => bail!("Expected 12h or 24h, got '{}'", other),
    };

    let mut config = Config::load()?;
    config.toggles.use_24h_clock = use_24h;
    config.save()?;

    ui::success(&format!("Clock format set to {}", format));
    Ok(())
}

fn set_endpoint(matches: &ArgMatches) -> Result<()> {
    let host = matches
        .get_one::<String>("host")
        .context("Host argument is required")?
        .clone();
    let port = *matches
        .get_one::<u16>("port")
        .context("Port argument is required")?;

    let mut config = Config::load()?;
    config.set_endpoint(host, port);
    // Fail before saving an endpoint that cannot be resolved
    config.endpoint()?;
    config.save()?;

    ui::success(&format!("Chatbox endpoint set to {}:{}", config.host, config.port));
    Ok(())
}

fn set_interval(matches: &ArgMatches) -> Result<()> {
    let interval = *matches
        .get_one::<u64>("ms")
        .context("Interval argument is required")?;

    let mut config = Config::load()?;
    config.interval_ms = interval;
    config.save()?;

    ui::success(&format!("Interval set to {}ms", interval));
    Ok(())
}

fn set_duration(matches: &ArgMatches) -> Result<()> {
    let secs = *matches
        .get_one::<u64>("secs")
        .context("Duration argument is required")?;

    let mut config = Config::load()?;
    config.message_duration_secs = secs;
    config.save()?;

    ui::success(&format!("Message duration set to {}s", secs));
    Ok(())
}

fn reset() -> Result<()> {
    let mut config = Config::load()?;
    config.reset_to_defaults();
    config.save()?;

    ui::success("Configuration reset to defaults");
    Ok(())
}
