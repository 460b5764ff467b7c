use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::one_shot::DEFAULT_DURATION_SECS;
use crate::core::sensors::amd::{DEFAULT_AMD_TIMEOUT, DEFAULT_VRAM_TOTAL_PATH};
use crate::core::sensors::os::DEFAULT_OS_RELEASE_PATH;
use crate::core::toggles::{Source, Toggles};
use crate::platform::osc::{DEFAULT_HOST, DEFAULT_PORT};

pub const DEFAULT_INTERVAL_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pause between two ticks of the transmission loop
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// How long the one-shot sender holds the caller after a message
    #[serde(default = "default_duration_secs")]
    pub message_duration_secs: u64,
    #[serde(default)]
    pub toggles: Toggles,
    #[serde(default = "default_os_release_path")]
    pub os_release_path: PathBuf,
    #[serde(default = "default_vram_total_path")]
    pub vram_total_path: PathBuf,
    #[serde(default = "default_amd_timeout_ms")]
    pub amd_timeout_ms: u64,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

fn default_duration_secs() -> u64 {
    DEFAULT_DURATION_SECS
}

fn default_os_release_path() -> PathBuf {
    PathBuf::from(DEFAULT_OS_RELEASE_PATH)
}

fn default_vram_total_path() -> PathBuf {
    PathBuf::from(DEFAULT_VRAM_TOTAL_PATH)
}

fn default_amd_timeout_ms() -> u64 {
    DEFAULT_AMD_TIMEOUT.as_millis() as u64
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            interval_ms: default_interval_ms(),
            message_duration_secs: default_duration_secs(),
            toggles: Toggles::default(),
            os_release_path: default_os_release_path(),
            vram_total_path: default_vram_total_path(),
            amd_timeout_ms: default_amd_timeout_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit file; missing, empty or unreadable JSON gives defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!(
                "Ignoring unreadable config file {:?} ({}), using defaults",
                config_path,
                e
            );
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("chatbox-stats").join("config.json"))
    }

    /// Resolve `host:port` to a socket address
    pub fn endpoint(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("Could not resolve {}:{}", self.host, self.port))?
            .next()
            .with_context(|| format!("No address found for {}:{}", self.host, self.port))
    }

    pub fn set_endpoint(&mut self, host: String, port: u16) {
        self.host = host;
        self.port = port;
    }

    pub fn set_toggle(&mut self, source: Source, on: bool) {
        self.toggles.set(source, on);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn amd_timeout(&self) -> Duration {
        Duration::from_millis(self.amd_timeout_ms)
    }

    /// Forget every customisation
    pub fn reset_to_defaults(&mut self) {
        *self = Config::default();
    }
}
