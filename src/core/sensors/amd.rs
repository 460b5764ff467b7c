//! AMD GPU stats via `radeontop` plus the DRM sysfs VRAM total.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::format::{
    format_rounded, fragment, BYTES_PER_GB, GPU_PARSE_ERROR, GPU_UNAVAILABLE, ICON_GPU,
};
use super::SensorReader;
use crate::error::{ChatboxError, Result};
use crate::platform::process::run_capture;

pub const RADEONTOP: &str = "radeontop";
pub const RADEONTOP_ARGS: [&str; 4] = ["-d", "-", "-l", "1"];
pub const DEFAULT_VRAM_TOTAL_PATH: &str = "/sys/class/drm/card0/device/mem_info_vram_total";
pub const DEFAULT_AMD_TIMEOUT: Duration = Duration::from_secs(3);

/// One parsed radeontop dump line
#[derive(Debug, Clone, PartialEq)]
pub struct RadeontopSample {
    /// GPU busy percentage exactly as printed, without `%`
    pub gpu_percent: String,
    pub vram_used_mb: f64,
}

/// Reads GPU load and sampled VRAM usage of an AMD card.
#[derive(Debug, Clone)]
pub struct AmdGpuReader {
    vram_total_path: PathBuf,
    timeout: Duration,
}

impl AmdGpuReader {
    pub fn new(vram_total_path: PathBuf, timeout: Duration) -> Self {
        Self {
            vram_total_path,
            timeout,
        }
    }

    /// Build the fragment from already captured radeontop output.
    pub fn fragment_from_output(&self, output: &str) -> Result<String> {
        let sample = parse_radeontop(output)?;
        let total_bytes = read_vram_total_bytes(&self.vram_total_path)?;
        Ok(format_amd_fragment(&sample, total_bytes))
    }
}

/// Drop the leading `<timestamp>: ` segment of a dump line.
fn strip_timestamp(output: &str) -> &str {
    if let Some(idx) = output.find(": ") {
        output[idx + 2..].trim()
    } else if let Some(idx) = output.find(':') {
        output[idx + 1..].trim()
    } else {
        output
    }
}

/// Parse `gpu <pct>%` and `vram ... <n>mb` tokens out of a radeontop line.
pub fn parse_radeontop(output: &str) -> Result<RadeontopSample> {
    let body = strip_timestamp(output.trim());

    let mut gpu_percent = None;
    let mut vram_used_mb = None;

    for part in body.split(',') {
        let tokens: Vec<&str> = part.split_whitespace().collect();
        let Some(key) = tokens.first() else {
            continue;
        };

        match key.to_lowercase().as_str() {
            "gpu" if tokens.len() >= 2 => {
                gpu_percent = Some(tokens[1].replace('%', ""));
            }
            "vram" if tokens.len() >= 3 => {
                vram_used_mb = Some(parse_vram_tokens(&tokens[1..])?);
            }
            _ => {}
        }
    }

    match (gpu_percent, vram_used_mb) {
        (Some(gpu_percent), Some(vram_used_mb)) => Ok(RadeontopSample {
            gpu_percent,
            vram_used_mb,
        }),
        _ => Err(ChatboxError::parse(format!(
            "missing gpu or vram token in {:?}",
            body
        ))),
    }
}

/// Pick the memory-with-unit value out of the tokens following `vram`.
///
/// The first token carrying an `mb` suffix wins; otherwise the second value
/// token is taken as a bare MB figure.
fn parse_vram_tokens(values: &[&str]) -> Result<f64> {
    let raw = values
        .iter()
        .find(|t| t.to_lowercase().ends_with("mb"))
        .or_else(|| values.get(1))
        .ok_or_else(|| ChatboxError::parse("vram token has no memory value"))?;

    let lowered = raw.to_lowercase();
    let number = lowered.trim_end_matches("mb");
    number
        .parse::<f64>()
        .map_err(|e| ChatboxError::parse(format!("invalid vram value {:?}: {}", raw, e)))
}

/// Total VRAM in bytes from the DRM sysfs node.
pub fn read_vram_total_bytes(path: &Path) -> Result<u64> {
    let contents = fs::read_to_string(path)?;
    contents.trim().parse::<u64>().map_err(|e| {
        ChatboxError::sensor(format!(
            "invalid VRAM total in {}: {}",
            path.display(),
            e
        ))
    })
}

pub fn format_amd_fragment(sample: &RadeontopSample, vram_total_bytes: u64) -> String {
    let total_gb = vram_total_bytes as f64 / BYTES_PER_GB;
    let used_gb = sample.vram_used_mb / 1024.0;

    fragment(
        ICON_GPU,
        &format!(
            "{}% | {}GB / {}GB",
            sample.gpu_percent,
            format_rounded(used_gb, 2),
            format_rounded(total_gb, 2)
        ),
    )
}

impl SensorReader for AmdGpuReader {
    fn name(&self) -> &'static str {
        "AMD GPU"
    }

    fn read(&self) -> Result<String> {
        let output = run_capture(RADEONTOP, &RADEONTOP_ARGS, Some(self.timeout))?;
        self.fragment_from_output(&output)
    }

    fn fallback(&self, error: &ChatboxError) -> String {
        if error.is_parse() {
            fragment(ICON_GPU, GPU_PARSE_ERROR)
        } else {
            fragment(ICON_GPU, GPU_UNAVAILABLE)
        }
    }
}
