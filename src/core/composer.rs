//! Turns one tick's readings into a chatbox message.

use crate::core::chatbox::MAX_MESSAGE_LENGTH;
use crate::core::sensors::format::{ICON_CPU, ICON_RAM};
use crate::core::sensors::{Sensors, SystemUsage};
use crate::core::toggles::Toggles;

/// Outputs of the readers sampled during one tick.
///
/// `None` means the source was not sampled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readings {
    pub os: Option<String>,
    pub clock: Option<String>,
    pub media: Option<String>,
    pub system: Option<SystemUsage>,
    pub nvidia_gpu: Option<String>,
    pub amd_gpu: Option<String>,
}

/// Run the readers whose toggle is on.
///
/// CPU and RAM share a single blocking sample.
pub fn sample(toggles: &Toggles, sensors: &dyn Sensors) -> Readings {
    Readings {
        os: toggles.os.then(|| sensors.os_identity()),
        clock: toggles
            .clock
            .then(|| sensors.clock(toggles.use_24h_clock)),
        media: toggles.media.then(|| sensors.media()),
        system: toggles
            .needs_system_usage()
            .then(|| sensors.system_usage()),
        nvidia_gpu: toggles.nvidia_gpu.then(|| sensors.nvidia_gpu()),
        amd_gpu: toggles.amd_gpu.then(|| sensors.amd_gpu()),
    }
}

pub fn render_cpu(usage: &SystemUsage) -> String {
    format!("{} {}% @ {}GHz", ICON_CPU, usage.cpu_percent, usage.cpu_ghz)
}

pub fn render_ram(usage: &SystemUsage) -> String {
    format!("{} {}GB / {}GB", ICON_RAM, usage.ram_used_gb, usage.ram_total_gb)
}

/// Assemble the message and cut it to [`MAX_MESSAGE_LENGTH`] code units.
pub fn compose(toggles: &Toggles, readings: &Readings) -> String {
    truncate_message(assemble(toggles, readings))
}

/// Assemble without the length cap.
///
/// Line-based sources end with a break; GPU fragments do not.
pub fn assemble(toggles: &Toggles, readings: &Readings) -> String {
    let usage = readings
        .system
        .clone()
        .unwrap_or_else(SystemUsage::unavailable);

    let entries: [(bool, Option<String>, &str); 7] = [
        (toggles.os, readings.os.clone(), "\n"),
        (toggles.clock, readings.clock.clone(), "\n"),
        (toggles.media, readings.media.clone(), "\n"),
        (toggles.cpu, Some(render_cpu(&usage)), "\n"),
        (toggles.ram, Some(render_ram(&usage)), "\n"),
        (toggles.nvidia_gpu, readings.nvidia_gpu.clone(), ""),
        (toggles.amd_gpu, readings.amd_gpu.clone(), ""),
    ];

    let mut message = String::new();
    for (enabled, fragment, terminator) in entries {
        match fragment {
            Some(fragment) if enabled && !fragment.is_empty() => {
                message.push_str(&fragment);
                message.push_str(terminator);
            }
            _ => {}
        }
    }

    message
}

/// Length as the chatbox counts it: UTF-16 code units.
pub fn message_length(message: &str) -> usize {
    message.encode_utf16().count()
}

/// Keep the first [`MAX_MESSAGE_LENGTH`] code units; may cut mid-word.
///
/// A character whose surrogate pair would straddle the limit is dropped
/// whole, leaving the message one unit short.
pub fn truncate_message(message: String) -> String {
    if message_length(&message) <= MAX_MESSAGE_LENGTH {
        return message;
    }

    let mut units = 0;
    let mut end = 0;
    for (idx, ch) in message.char_indices() {
        units += ch.len_utf16();
        if units > MAX_MESSAGE_LENGTH {
            break;
        }
        end = idx + ch.len_utf8();
    }

    message[..end].to_string()
}
