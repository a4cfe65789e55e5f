//! Command templates.
//!
//! Every device-facing capability is a templated argv such as
//! `["{ADB}", "-s", "{ADB_SERIAL}", "shell", "wm size"]`. Templates are parsed
//! once from configuration and rendered against the current session's
//! placeholder map each time a command runs.

mod argv;
mod render;

pub use argv::ArgvTemplate;
pub use render::{Placeholders, TemplateError, placeholders, render_token};

/// Placeholder for the debug bridge executable.
pub const ADB: &str = "ADB";

/// Placeholder for the target device serial.
pub const ADB_SERIAL: &str = "ADB_SERIAL";
