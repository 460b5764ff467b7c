//! Telemetry readers.
//!
//! Each reader turns one source into a text fragment carrying the source's
//! icon. Failures never escape a reader: they are logged and replaced with a
//! placeholder fragment, so the composer needs no failure handling.

pub mod amd;
pub mod clock;
pub mod format;
pub mod media;
pub mod nvidia;
pub mod os;
pub mod system;

pub use amd::AmdGpuReader;
pub use media::{MediaBus, SessionMediaBus, TrackInfo};
pub use nvidia::NvidiaGpuReader;
pub use system::SystemUsage;

use std::path::PathBuf;
use std::time::Duration;

use crate::core::config::Config;
use crate::error::{ChatboxError, Result};

/// A reader that can fail internally but always yields a fragment.
///
/// GPU readers sit behind this trait so a native vendor binding can replace
/// the subprocess implementation without touching the composer.
pub trait SensorReader: Send + Sync {
    /// Human readable source name for diagnostics
    fn name(&self) -> &'static str;

    /// Read the source, reporting failures as errors
    fn read(&self) -> Result<String>;

    /// Placeholder fragment for a failed read
    fn fallback(&self, error: &ChatboxError) -> String;

    /// Read the source, logging and replacing failures
    fn sample(&self) -> String {
        match self.read() {
            Ok(fragment) => fragment,
            Err(e) => {
                log::warn!("Error getting {} stats: {}", self.name(), e);
                self.fallback(&e)
            }
        }
    }
}

/// One method per telemetry source
pub trait Sensors: Send + Sync {
    fn os_identity(&self) -> String;
    fn clock(&self, use_24h: bool) -> String;
    fn media(&self) -> String;
    fn system_usage(&self) -> SystemUsage;
    fn nvidia_gpu(&self) -> String;
    fn amd_gpu(&self) -> String;
}

/// Readers backed by the real machine
#[derive(Debug, Clone)]
pub struct LiveSensors {
    os_release_path: PathBuf,
    cpu_sample_window: Duration,
    nvidia: NvidiaGpuReader,
    amd: AmdGpuReader,
}

impl LiveSensors {
    pub fn from_config(config: &Config) -> Self {
        Self {
            os_release_path: config.os_release_path.clone(),
            cpu_sample_window: system::DEFAULT_CPU_SAMPLE_WINDOW,
            nvidia: NvidiaGpuReader::new(),
            amd: AmdGpuReader::new(config.vram_total_path.clone(), config.amd_timeout()),
        }
    }
}

impl Sensors for LiveSensors {
    fn os_identity(&self) -> String {
        os::read_os_identity(&self.os_release_path)
    }

    fn clock(&self, use_24h: bool) -> String {
        clock::read_clock(use_24h)
    }

    fn media(&self) -> String {
        media::read_media()
    }

    fn system_usage(&self) -> SystemUsage {
        system::read_system_usage(self.cpu_sample_window)
    }

    fn nvidia_gpu(&self) -> String {
        self.nvidia.sample()
    }

    fn amd_gpu(&self) -> String {
        self.amd.sample()
    }
}
