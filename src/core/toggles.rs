//! Per-source enable flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ChatboxError, Result};

/// A telemetry source that can be switched on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Os,
    Clock,
    Media,
    Cpu,
    Ram,
    NvidiaGpu,
    AmdGpu,
}

impl Source {
    /// All sources in message order
    pub const ALL: [Source; 7] = [
        Source::Os,
        Source::Clock,
        Source::Media,
        Source::Cpu,
        Source::Ram,
        Source::NvidiaGpu,
        Source::AmdGpu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Source::Os => "os",
            Source::Clock => "clock",
            Source::Media => "media",
            Source::Cpu => "cpu",
            Source::Ram => "ram",
            Source::NvidiaGpu => "gpu",
            Source::AmdGpu => "amd",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Source::Os => "Linux Distro",
            Source::Clock => "Time",
            Source::Media => "Media",
            Source::Cpu => "CPU",
            Source::Ram => "RAM",
            Source::NvidiaGpu => "NVIDIA GPU",
            Source::AmdGpu => "AMD GPU",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = ChatboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "os" | "distro" | "linux" => Ok(Source::Os),
            "clock" | "time" => Ok(Source::Clock),
            "media" | "music" => Ok(Source::Media),
            "cpu" => Ok(Source::Cpu),
            "ram" | "memory" => Ok(Source::Ram),
            "gpu" | "nvidia" => Ok(Source::NvidiaGpu),
            "amd" | "amdgpu" => Ok(Source::AmdGpu),
            other => Err(ChatboxError::config(format!(
                "Unknown source '{}' (expected one of: os, clock, media, cpu, ram, gpu, amd)",
                other
            ))),
        }
    }
}

/// Which sources are sampled each tick, plus the clock format.
///
/// NVIDIA and AMD are independent; enabling both appends both fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggles {
    #[serde(default = "enabled")]
    pub os: bool,
    #[serde(default = "enabled")]
    pub clock: bool,
    #[serde(default = "enabled")]
    pub media: bool,
    #[serde(default = "enabled")]
    pub cpu: bool,
    #[serde(default = "enabled")]
    pub ram: bool,
    #[serde(default = "enabled")]
    pub nvidia_gpu: bool,
    #[serde(default)]
    pub amd_gpu: bool,
    #[serde(default = "enabled")]
    pub use_24h_clock: bool,
}

fn enabled() -> bool {
    true
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            os: true,
            clock: true,
            media: true,
            cpu: true,
            ram: true,
            nvidia_gpu: true,
            amd_gpu: false,
            use_24h_clock: true,
        }
    }
}

impl Toggles {
    /// Every source disabled (24h clock kept)
    pub fn none() -> Self {
        Self {
            os: false,
            clock: false,
            media: false,
            cpu: false,
            ram: false,
            nvidia_gpu: false,
            amd_gpu: false,
            use_24h_clock: true,
        }
    }

    /// Only the given sources enabled
    pub fn only(sources: &[Source]) -> Self {
        let mut toggles = Self::none();
        for source in sources {
            toggles.set(*source, true);
        }
        toggles
    }

    pub fn is_enabled(&self, source: Source) -> bool {
        match source {
            Source::Os => self.os,
            Source::Clock => self.clock,
            Source::Media => self.media,
            Source::Cpu => self.cpu,
            Source::Ram => self.ram,
            Source::NvidiaGpu => self.nvidia_gpu,
            Source::AmdGpu => self.amd_gpu,
        }
    }

    pub fn set(&mut self, source: Source, on: bool) {
        let flag = match source {
            Source::Os => &mut self.os,
            Source::Clock => &mut self.clock,
            Source::Media => &mut self.media,
            Source::Cpu => &mut self.cpu,
            Source::Ram => &mut self.ram,
            Source::NvidiaGpu => &mut self.nvidia_gpu,
            Source::AmdGpu => &mut self.amd_gpu,
        };
        *flag = on;
    }

    /// CPU and RAM share one reader
    pub fn needs_system_usage(&self) -> bool {
        self.cpu || self.ram
    }

    pub fn enabled_sources(&self) -> Vec<Source> {
        Source::ALL
            .iter()
            .copied()
            .filter(|s| self.is_enabled(*s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_amd_off() {
        let toggles = Toggles::default();
        assert!(toggles.nvidia_gpu);
        assert!(!toggles.amd_gpu);
        assert!(toggles.use_24h_clock);
    }

    #[test]
    fn test_both_gpus_can_be_enabled() {
        let toggles = Toggles::only(&[Source::NvidiaGpu, Source::AmdGpu]);
        assert_eq!(
            toggles.enabled_sources(),
            vec![Source::NvidiaGpu, Source::AmdGpu]
        );
    }

    #[test]
    fn test_source_names_parse() {
        for source in Source::ALL {
            assert_eq!(source.name().parse::<Source>().unwrap(), source);
        }
        assert_eq!("Nvidia".parse::<Source>().unwrap(), Source::NvidiaGpu);
        assert!("disk".parse::<Source>().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let toggles: Toggles = serde_json::from_str(r#"{"cpu": false}"#).unwrap();
        assert!(!toggles.cpu);
        assert!(toggles.ram);
        assert!(!toggles.amd_gpu);
    }
}
