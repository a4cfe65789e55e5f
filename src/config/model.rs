//! Config struct definition and built-in command defaults.

use crate::template::ArgvTemplate;
use serde::{Deserialize, Serialize};

/// Command templates for device property probes.
///
/// Each entry is optional in the config document; absent entries fall back to
/// the debug-bridge defaults below. Keys are matched exactly (`UUID`,
/// `Resolution`, `Orientation`); anything else, including other spellings of
/// those keys, is ignored so this section can live inside a larger controller
/// config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfoConfig {
    /// Prints a stable device identifier.
    #[serde(rename = "UUID")]
    pub uuid: ArgvTemplate,

    /// Prints the raw display buffer size as two integers.
    #[serde(rename = "Resolution")]
    pub resolution: ArgvTemplate,

    /// Prints the current rotation as a leading digit.
    #[serde(rename = "Orientation")]
    pub orientation: ArgvTemplate,

    /// Kill a probe command after this many seconds (no limit when unset).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for DeviceInfoConfig {
    fn default() -> Self {
        Self {
            uuid: default_uuid_argv(),
            resolution: default_resolution_argv(),
            orientation: default_orientation_argv(),
            timeout_seconds: None,
        }
    }
}

fn adb_shell(command: &str) -> ArgvTemplate {
    ArgvTemplate::new(["{ADB}", "-s", "{ADB_SERIAL}", "shell", command])
}

pub fn default_uuid_argv() -> ArgvTemplate {
    adb_shell("settings get secure android_id")
}

pub fn default_resolution_argv() -> ArgvTemplate {
    adb_shell("dumpsys window displays | grep -o -E cur=+[^\\ ]+ | grep -o -E [0-9]+")
}

pub fn default_orientation_argv() -> ArgvTemplate {
    adb_shell("dumpsys input | grep SurfaceOrientation | grep -m 1 -o -E [0-9]")
}
