//! Device property extraction.
//!
//! Identity and display geometry are read by running configured commands
//! on the host (normally `adb -s <serial> shell ...`) and parsing what they
//! print. Queries degrade to `None` instead of failing loudly, since devices
//! drop off the bus all the time.

mod info;
mod parse;
mod types;


pub use info::{DeviceInfo, ProbeFailure, ProbeKind};
pub use parse::{parse_orientation, parse_resolution, sanitize_uuid};
pub use types::{DisplayInfo, Orientation, Resolution};
