//! devctl: device property probing and a concurrent handle registry.
//!
//! - [`template`]: argv templates with `{NAME}` placeholders
//! - [`exec`]: the [`exec::CommandRunner`] seam and a child-process runner
//! - [`device`]: uuid, resolution and orientation queries built on templates
//! - [`registry`]: a mutex-guarded id to handle map for request handlers
//! - [`config`]: command templates loaded from JSON or YAML

pub mod cli;
pub mod commands;
pub mod config;
pub mod device;
pub mod error;
pub mod exec;
pub mod exit_codes;
pub mod registry;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;
