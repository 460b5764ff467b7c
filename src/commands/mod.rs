// Command handlers module
pub mod config;
pub mod preview;
pub mod run;
pub mod send;
pub mod version;

// Re-exports for cleaner imports
pub use preview::execute as preview;
pub use run::execute as run;
pub use send::execute as send;
pub use version::execute as version;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::{Config, Source};

/// Apply per-invocation flags (`--host`, `--enable cpu`, `--12h`, ...) on top
/// of the stored configuration. Nothing is written back to disk.
pub fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> Result<()> {
    if let Some(host) = matches.try_get_one::<String>("host").ok().flatten() {
        config.host = host.clone();
    }
    if let Some(port) = matches.try_get_one::<u16>("port").ok().flatten() {
        config.port = *port;
    }
    if let Some(interval) = matches.try_get_one::<u64>("interval").ok().flatten() {
        config.interval_ms = *interval;
    }

    for (arg, on) in [("enable", true), ("disable", false)] {
        if let Some(values) = matches.try_get_many::<String>(arg).ok().flatten() {
            for value in values {
                let source: Source = value
                    .parse()
                    .with_context(|| format!("Invalid --{} value", arg))?;
                config.set_toggle(source, on);
            }
        }
    }

    if matches.try_get_one::<bool>("12h").ok().flatten() == Some(&true) {
        config.toggles.use_24h_clock = false;
    }
    if matches.try_get_one::<bool>("24h").ok().flatten() == Some(&true) {
        config.toggles.use_24h_clock = true;
    }

    Ok(())
}
