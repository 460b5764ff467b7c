//! CPU load/frequency and RAM usage.

use std::time::Duration;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use super::format::{format_rounded, BYTES_PER_GB};
use crate::error::{ChatboxError, Result};

/// Literal placed in every field when sampling fails
pub const USAGE_ERROR: &str = "Error";

pub const DEFAULT_CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// CPU and RAM figures, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemUsage {
    pub cpu_percent: String,
    pub cpu_ghz: String,
    pub ram_used_gb: String,
    pub ram_total_gb: String,
}

impl SystemUsage {
    pub fn new<S: Into<String>>(cpu_percent: S, cpu_ghz: S, ram_used_gb: S, ram_total_gb: S) -> Self {
        Self {
            cpu_percent: cpu_percent.into(),
            cpu_ghz: cpu_ghz.into(),
            ram_used_gb: ram_used_gb.into(),
            ram_total_gb: ram_total_gb.into(),
        }
    }

    /// All four values replaced by `"Error"`.
    pub fn unavailable() -> Self {
        Self::new(USAGE_ERROR, USAGE_ERROR, USAGE_ERROR, USAGE_ERROR)
    }

    /// Convert raw readings: percent, MHz and bytes.
    pub fn from_raw(cpu_percent: f64, cpu_mhz: u64, ram_used_bytes: u64, ram_total_bytes: u64) -> Self {
        Self {
            cpu_percent: format_rounded(cpu_percent, 1),
            cpu_ghz: format_rounded(cpu_mhz as f64 / 1000.0, 2),
            ram_used_gb: format_rounded(ram_used_bytes as f64 / BYTES_PER_GB, 1),
            ram_total_gb: format_rounded(ram_total_bytes as f64 / BYTES_PER_GB, 1),
        }
    }
}

/// Sample CPU usage over `window` (blocking) and read memory.
pub fn read_system_usage(window: Duration) -> SystemUsage {
    match sample_system(window) {
        Ok(usage) => usage,
        Err(e) => {
            log::warn!("Error getting system usage: {}", e);
            SystemUsage::unavailable()
        }
    }
}

fn sample_system(window: Duration) -> Result<SystemUsage> {
    let refresh_kind = RefreshKind::nothing()
        .with_cpu(CpuRefreshKind::everything())
        .with_memory(MemoryRefreshKind::everything());

    let mut system = System::new_with_specifics(refresh_kind);

    // Usage is the delta between two refreshes
    std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
    system.refresh_cpu_all();
    system.refresh_memory();

    let frequency = system
        .cpus()
        .first()
        .map(|cpu| cpu.frequency())
        .ok_or_else(|| ChatboxError::sensor("no CPUs reported"))?;

    let total_memory = system.total_memory();
    if total_memory == 0 {
        return Err(ChatboxError::sensor("total memory reported as zero"));
    }

    Ok(SystemUsage::from_raw(
        system.global_cpu_usage() as f64,
        frequency,
        system.used_memory(),
        total_memory,
    ))
}
