//! Subprocess helpers for vendor command-line utilities.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::error::{ChatboxError, Result};

/// Locate a utility on PATH.
pub fn find_utility(program: &str) -> Result<PathBuf> {
    which::which(program)
        .map_err(|e| ChatboxError::sensor(format!("{} not found: {}", program, e)))
}

/// Run `program` with `args` and return its standard output as text.
///
/// Stdout is drained while the child runs, so large outputs never stall it.
/// With `timeout` set the child is killed once the deadline passes and a
/// `Timeout` error is returned. Without it the call waits for the child.
pub fn run_capture(program: &str, args: &[&str], timeout: Option<Duration>) -> Result<String> {
    let binary = find_utility(program)?;

    let mut command = Command::new(&binary);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let Some(limit) = timeout else {
        let output = command.output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::trace!("{} output: {:?}", program, stdout);
        return Ok(stdout);
    };

    let mut child = command.spawn()?;
    let mut pipe = child
        .stdout
        .take()
        .ok_or_else(|| ChatboxError::sensor(format!("{} has no stdout pipe", program)))?;

    let reader = thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    });

    if child.wait_timeout(limit)?.is_none() {
        // Reap the child so it does not linger as a zombie. The reader thread
        // ends on its own once the pipe closes.
        let _ = child.kill();
        let _ = child.wait();
        return Err(ChatboxError::timeout(format!(
            "{} did not finish within {:?}",
            program, limit
        )));
    }

    let bytes = reader
        .join()
        .map_err(|_| ChatboxError::sensor(format!("{} output reader panicked", program)))??;
    let stdout = String::from_utf8_lossy(&bytes).into_owned();

    log::trace!("{} output: {:?}", program, stdout);
    Ok(stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_utility_is_sensor_error() {
        let err = run_capture("definitely-not-a-real-gpu-tool", &[], None).unwrap_err();
        assert!(matches!(err, ChatboxError::Sensor(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let out = run_capture("echo", &["gpu 12%"], Some(Duration::from_secs(3))).unwrap();
        assert_eq!(out.trim(), "gpu 12%");
    }

    #[cfg(unix)]
    #[test]
    fn test_large_output_is_not_a_timeout() {
        let script = "head -c 200000 /dev/zero | tr '\\0' x";
        let out = run_capture("sh", &["-c", script], Some(Duration::from_secs(3))).unwrap();
        assert_eq!(out.len(), 200_000);
        assert!(out.bytes().all(|b| b == b'x'));
    }

    #[cfg(unix)]
    #[test]
    fn test_large_output_without_timeout() {
        let script = "head -c 200000 /dev/zero | tr '\\0' x";
        let out = run_capture("sh", &["-c", script], None).unwrap();
        assert_eq!(out.len(), 200_000);
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_child() {
        let err = run_capture("sleep", &["5"], Some(Duration::from_millis(100))).unwrap_err();
        assert!(matches!(err, ChatboxError::Timeout(_)));
    }
}
