//! OS identity from an os-release style key/value file.

use std::fs;
use std::path::Path;

use super::format::{fragment, ICON_OS};

pub const DEFAULT_OS_RELEASE_PATH: &str = "/etc/os-release";
pub const UNKNOWN_DISTRO: &str = "Unknown Linux Distro";

/// Name and version as found in the file; missing keys stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsIdentity {
    pub name: String,
    pub version: String,
}

pub fn parse_os_release(contents: &str) -> OsIdentity {
    let mut identity = OsIdentity::default();

    for line in contents.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("NAME=") {
            identity.name = unquote(value);
        } else if let Some(value) = line.strip_prefix("VERSION=") {
            identity.version = unquote(value);
        }
    }

    identity
}

fn unquote(value: &str) -> String {
    value.replace('"', "")
}

/// Read the identity fragment, e.g. `🐧 Arch Linux rolling`.
pub fn read_os_identity(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let identity = parse_os_release(&contents);
            fragment(ICON_OS, &format!("{} {}", identity.name, identity.version))
        }
        Err(e) => {
            log::debug!("Could not read {}: {}", path.display(), e);
            fragment(ICON_OS, UNKNOWN_DISTRO)
        }
    }
}
