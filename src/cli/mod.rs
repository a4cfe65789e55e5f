//! CLI argument parsing for devctl.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// devctl: query identity and display geometry from debug-bridge devices.
///
/// Each query renders a configurable command template (by default an
/// `adb -s <serial> shell ...` invocation), runs it, and parses its output.
#[derive(Parser, Debug)]
#[command(name = "devctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Increase log verbosity (-v for info, -vv for debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Options describing how to reach the device.
#[derive(Args, Debug, Clone)]
pub struct DeviceArgs {
    /// JSON or YAML file with command templates (UUID, Resolution, Orientation).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Debug bridge executable, substituted for `{ADB}`.
    #[arg(long, global = true, default_value = "adb")]
    pub adb: String,

    /// Device serial, substituted for `{ADB_SERIAL}`.
    #[arg(short, long, global = true)]
    pub serial: Option<String>,

    /// Extra placeholder values as NAME=VALUE.
    #[arg(long = "set", global = true, value_name = "NAME=VALUE", value_parser = parse_placeholder)]
    pub placeholders: Vec<(String, String)>,

    /// Kill probe commands after this many seconds (overrides the config).
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

/// Available commands for devctl.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the device's stable identifier.
    Uuid,

    /// Print the display resolution, normalized for the current rotation.
    Resolution,

    /// Print the current rotation code (0-3).
    Orientation,

    /// Print uuid, resolution and orientation as one JSON object.
    Info,

    /// Probe several devices in parallel, one JSON line per device.
    Probe(ProbeArgs),
}

/// Arguments for the `probe` command.
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Serials of the devices to probe.
    #[arg(required = true, num_args = 1..)]
    pub serials: Vec<String>,
}

fn parse_placeholder(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("placeholder name is empty in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
