//! NVIDIA GPU stats via `nvidia-smi`.

use super::format::{format_rounded, fragment, round_to, GPU_PARSE_ERROR, GPU_UNAVAILABLE, ICON_GPU};
use super::SensorReader;
use crate::error::{ChatboxError, Result};
use crate::platform::process::run_capture;

pub const NVIDIA_SMI: &str = "nvidia-smi";
pub const NVIDIA_SMI_ARGS: [&str; 2] = [
    "--query-gpu=utilization.gpu,memory.free,memory.total",
    "--format=csv,noheader,nounits",
];

/// Reads utilization and VRAM of the first NVIDIA GPU.
///
/// The utility is called without a timeout.
#[derive(Debug, Clone, Default)]
pub struct NvidiaGpuReader;

impl NvidiaGpuReader {
    pub fn new() -> Self {
        Self
    }
}

/// Parse one `utilization, free, total` row (memory in MiB).
pub fn parse_nvidia_smi(output: &str) -> Result<String> {
    let row = output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ChatboxError::parse(format!(
            "expected 3 fields from {}, got {}: {:?}",
            NVIDIA_SMI,
            fields.len(),
            row
        )));
    }

    let utilization = fields[0];
    let free_mb = parse_mib(fields[1])?;
    let total_mb = parse_mib(fields[2])?;

    let free_gb = round_to(free_mb / 1024.0, 1);
    let total_gb = round_to(total_mb / 1024.0, 1);
    let used_gb = total_gb - free_gb;

    Ok(fragment(
        ICON_GPU,
        &format!(
            "{}% | {}GB / {}GB",
            utilization,
            format_rounded(used_gb, 1),
            format_rounded(total_gb, 1)
        ),
    ))
}

fn parse_mib(field: &str) -> Result<f64> {
    field
        .parse::<u64>()
        .map(|v| v as f64)
        .map_err(|e| ChatboxError::parse(format!("invalid memory value {:?}: {}", field, e)))
}

impl SensorReader for NvidiaGpuReader {
    fn name(&self) -> &'static str {
        "NVIDIA GPU"
    }

    fn read(&self) -> Result<String> {
        let output = run_capture(NVIDIA_SMI, &NVIDIA_SMI_ARGS, None)?;
        parse_nvidia_smi(&output)
    }

    fn fallback(&self, error: &ChatboxError) -> String {
        if error.is_parse() {
            fragment(ICON_GPU, GPU_PARSE_ERROR)
        } else {
            fragment(ICON_GPU, GPU_UNAVAILABLE)
        }
    }
}
