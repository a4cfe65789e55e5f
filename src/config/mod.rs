//! Configuration for device probes.
//!
//! Supplies the command templates used by the device property extractor.
//! Parsing is forward compatible (unknown fields are ignored) and every
//! template has a built-in default, so an empty document is a valid config.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{
    DeviceInfoConfig, default_orientation_argv, default_resolution_argv, default_uuid_argv,
};
