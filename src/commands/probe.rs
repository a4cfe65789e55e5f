//! Parallel probing of several devices.
//!
//! Each serial gets its own worker thread and its own session. Sessions are
//! published in a [`HandleRegistry`] keyed by serial and stay registered
//! until every worker has finished, so a serial listed twice is probed once.

use super::{DeviceReport, Setup};
use crate::config::DeviceInfoConfig;
use crate::device::DeviceInfo;
use crate::error::{DevctlError, Result};
use crate::exec::CommandRunner;
use crate::registry::HandleRegistry;
use crate::template::{ADB_SERIAL, Placeholders};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

type Sessions<R> = HandleRegistry<Arc<DeviceInfo<R>>>;

pub(crate) fn cmd_probe(setup: &Setup, serials: &[String]) -> Result<()> {
    let reports = probe_all(&setup.config, &setup.placeholders, &setup.runner, serials);

    for report in reports.into_iter().flatten() {
        let line = serde_json::to_string(&report)
            .map_err(|e| DevctlError::UserError(format!("failed to serialize report: {}", e)))?;
        println!("{}", line);
    }
    Ok(())
}

/// Probe every serial concurrently; results are returned in input order.
///
/// A worker whose serial was already registered by another worker yields
/// `None` instead of probing the same device again.
pub(crate) fn probe_all<R>(
    config: &DeviceInfoConfig,
    placeholders: &Placeholders,
    runner: &R,
    serials: &[String],
) -> Vec<Option<DeviceReport>>
where
    R: CommandRunner + Clone + Send + Sync,
{
    let sessions: Sessions<R> = HandleRegistry::new();

    let reports = thread::scope(|scope| {
        let workers: Vec<_> = serials
            .iter()
            .map(|serial| {
                let sessions = &sessions;
                scope.spawn(move || {
                    let mut values = placeholders.clone();
                    values.insert(ADB_SERIAL.to_string(), serial.clone());
                    let session = DeviceInfo::new(config, values, runner.clone());
                    probe_session(sessions, serial, session)
                })
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| worker.join().unwrap_or_else(|_| None))
            .collect()
    });

    close_sessions(&sessions, serials);
    reports
}

fn probe_session<R: CommandRunner>(
    sessions: &Sessions<R>,
    serial: &str,
    session: DeviceInfo<R>,
) -> Option<DeviceReport> {
    if !sessions.add(serial, Arc::new(session)) {
        warn!(%serial, "device is already being probed, skipping duplicate");
        return None;
    }
    debug!(%serial, "session opened");

    sessions
        .get(serial)
        .map(|info| DeviceReport::collect(Some(serial.to_string()), &info))
}

/// Retire every session opened by [`probe_all`]; repeated serials close once.
fn close_sessions<R: CommandRunner>(sessions: &Sessions<R>, serials: &[String]) {
    for serial in serials {
        if sessions.del(serial).is_some() {
            debug!(%serial, "session closed");
        }
    }
}
