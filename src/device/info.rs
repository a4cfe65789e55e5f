//! The device property extractor.

use super::parse::{parse_orientation, parse_resolution, sanitize_uuid};
use super::types::{DisplayInfo, Orientation, Resolution};
use crate::config::DeviceInfoConfig;
use crate::exec::CommandRunner;
use crate::template::{ArgvTemplate, Placeholders, TemplateError};
use std::fmt;
use tracing::{debug, info, warn};

/// Which property a probe asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Uuid,
    Resolution,
    Orientation,
}

impl ProbeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Uuid => "uuid",
            ProbeKind::Resolution => "resolution",
            ProbeKind::Orientation => "orientation",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a probe produced no value. Only used for diagnostics: every failure
/// surfaces to callers as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeFailure {
    /// A placeholder could not be filled; the config is wrong.
    Template(TemplateError),
    /// The command produced no output.
    Execution,
    /// Output was present but not in the expected shape.
    Parse(String),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::Template(e) => write!(f, "template generation failed: {}", e),
            ProbeFailure::Execution => write!(f, "command produced no output"),
            ProbeFailure::Parse(output) => write!(f, "unparseable output {:?}", output),
        }
    }
}

/// Queries identity and display geometry from one device.
///
/// Each query renders its command template against the session's
/// placeholders, runs it through the [`CommandRunner`], and parses the text.
/// Queries hold no lock; changing placeholders needs `&mut self`, so a
/// session that shares an extractor across threads must wrap it itself.
#[derive(Debug, Clone)]
pub struct DeviceInfo<R> {
    uuid_argv: ArgvTemplate,
    resolution_argv: ArgvTemplate,
    orientation_argv: ArgvTemplate,
    placeholders: Placeholders,
    runner: R,
}

impl<R: CommandRunner> DeviceInfo<R> {
    pub fn new(config: &DeviceInfoConfig, placeholders: Placeholders, runner: R) -> Self {
        Self {
            uuid_argv: config.uuid.clone(),
            resolution_argv: config.resolution.clone(),
            orientation_argv: config.orientation.clone(),
            placeholders,
            runner,
        }
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Set one placeholder, e.g. after the device reconnects under a new serial.
    pub fn set_placeholder(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.placeholders.insert(name.into(), value.into());
    }

    /// Replace the whole placeholder map.
    pub fn set_placeholders(&mut self, placeholders: Placeholders) {
        self.placeholders = placeholders;
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The device's stable identifier, with everything but ASCII letters and
    /// digits removed. An empty identifier is still returned.
    pub fn request_uuid(&self) -> Option<String> {
        let output = self.probe(ProbeKind::Uuid).ok()?;
        let uuid = sanitize_uuid(&output);
        debug!(%uuid, "device uuid");
        Some(uuid)
    }

    /// Current rotation, read from the first character of the probe output.
    pub fn request_orientation(&self) -> Option<Orientation> {
        self.probe_parsed(ProbeKind::Orientation, parse_orientation)
    }

    /// Display size normalized for the current rotation.
    ///
    /// If the rotation cannot be determined the raw pair is returned as is;
    /// use [`DeviceInfo::request_display`] to tell the two cases apart.
    pub fn request_resolution(&self) -> Option<Resolution> {
        self.request_display().map(|display| display.resolution)
    }

    /// Display size plus the orientation used to normalize it.
    pub fn request_display(&self) -> Option<DisplayInfo> {
        let raw = self.probe_parsed(ProbeKind::Resolution, parse_resolution)?;

        let Some(orientation) = self.request_orientation() else {
            warn!(
                width = raw.width,
                height = raw.height,
                "orientation unavailable, reporting raw resolution"
            );
            return Some(DisplayInfo {
                resolution: raw,
                orientation: None,
            });
        };

        let resolution = raw.oriented(orientation);
        let shape = if orientation.is_portrait() {
            "portrait"
        } else {
            "landscape"
        };
        info!(
            orientation = orientation.code(),
            shape,
            width = resolution.width,
            height = resolution.height,
            "display resolution"
        );
        Some(DisplayInfo {
            resolution,
            orientation: Some(orientation),
        })
    }

    fn probe_parsed<T>(&self, kind: ProbeKind, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let output = self.probe(kind).ok()?;
        match parse(&output) {
            Some(value) => Some(value),
            None => {
                let failure = ProbeFailure::Parse(output);
                warn!(probe = %kind, %failure, "probe failed");
                None
            }
        }
    }

    /// Render and run the command for `kind`, returning its raw output.
    pub fn probe(&self, kind: ProbeKind) -> Result<String, ProbeFailure> {
        let template = match kind {
            ProbeKind::Uuid => &self.uuid_argv,
            ProbeKind::Resolution => &self.resolution_argv,
            ProbeKind::Orientation => &self.orientation_argv,
        };

        let result = template
            .generate(&self.placeholders)
            .map_err(ProbeFailure::Template)
            .and_then(|argv| {
                debug!(probe = %kind, argv = ?argv, "running probe");
                self.runner.run(&argv).ok_or(ProbeFailure::Execution)
            });

        if let Err(failure) = &result {
            warn!(probe = %kind, %failure, "probe failed");
        }
        result
    }
}
