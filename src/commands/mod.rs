//! Command implementations for devctl.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the shared setup every command needs: loading the
//! template config, assembling placeholders, and building the runner.

mod probe;
mod query;

use crate::cli::{Cli, Command, DeviceArgs};
use crate::config::DeviceInfoConfig;
use crate::device::{DeviceInfo, Orientation, Resolution};
use crate::error::Result;
use crate::exec::{CommandRunner, ProcessRunner};
use crate::template::{ADB, ADB_SERIAL, Placeholders};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let setup = Setup::from_args(&cli.device)?;

    match cli.command {
        Command::Uuid => query::cmd_uuid(&setup),
        Command::Resolution => query::cmd_resolution(&setup),
        Command::Orientation => query::cmd_orientation(&setup),
        Command::Info => query::cmd_info(&setup),
        Command::Probe(args) => probe::cmd_probe(&setup, &args.serials),
    }
}

/// Everything needed to open a device session.
#[derive(Debug, Clone)]
pub(crate) struct Setup {
    pub config: DeviceInfoConfig,
    pub placeholders: Placeholders,
    pub runner: ProcessRunner,
}

impl Setup {
    pub fn from_args(args: &DeviceArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => {
                debug!(path = %path.display(), "loading device config");
                DeviceInfoConfig::load(path)?
            }
            None => DeviceInfoConfig::default(),
        };

        let runner = match args.timeout.map(Duration::from_secs).or(config.timeout()) {
            Some(timeout) => ProcessRunner::with_timeout(timeout),
            None => ProcessRunner::new(),
        };

        Ok(Self {
            placeholders: placeholders_from_args(args),
            config,
            runner,
        })
    }

    /// A session for the serial given on the command line (if any).
    pub fn session(&self) -> DeviceInfo<ProcessRunner> {
        DeviceInfo::new(&self.config, self.placeholders.clone(), self.runner.clone())
    }
}

/// `{ADB}`, `{ADB_SERIAL}` and any `--set` values; later `--set` entries win.
fn placeholders_from_args(args: &DeviceArgs) -> Placeholders {
    let mut values = Placeholders::new();
    values.insert(ADB.to_string(), args.adb.clone());
    if let Some(serial) = &args.serial {
        values.insert(ADB_SERIAL.to_string(), serial.clone());
    }
    for (name, value) in &args.placeholders {
        values.insert(name.clone(), value.clone());
    }
    values
}

/// Everything known about one device, as printed by `info` and `probe`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DeviceReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    pub uuid: Option<String>,
    pub resolution: Option<Resolution>,
    pub orientation: Option<Orientation>,
}

impl DeviceReport {
    pub fn collect<R: CommandRunner>(serial: Option<String>, info: &DeviceInfo<R>) -> Self {
        let uuid = info.request_uuid();
        let display = info.request_display();
        // A failed resolution probe skips the rotation probe; ask separately.
        let orientation = match display {
            Some(display) => display.orientation,
            None => info.request_orientation(),
        };

        Self {
            serial,
            uuid,
            resolution: display.map(|d| d.resolution),
            orientation,
        }
    }
}
