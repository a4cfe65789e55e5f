//! Process execution for device commands.
//!
//! The extractor only builds argument vectors and interprets text; anything
//! that actually launches a process sits behind [`CommandRunner`] so probes
//! can be exercised against scripted output.

mod runner;

pub use runner::{CommandRunner, ProcessRunner};
