//! Single-device queries: `uuid`, `resolution`, `orientation`, `info`.

use super::{DeviceReport, Setup};
use crate::error::{DevctlError, Result};

pub(crate) fn cmd_uuid(setup: &Setup) -> Result<()> {
    let uuid = setup
        .session()
        .request_uuid()
        .ok_or_else(|| unavailable("uuid"))?;
    println!("{}", uuid);
    Ok(())
}

pub(crate) fn cmd_resolution(setup: &Setup) -> Result<()> {
    let resolution = setup
        .session()
        .request_resolution()
        .ok_or_else(|| unavailable("resolution"))?;
    println!("{} {}", resolution.width, resolution.height);
    Ok(())
}

pub(crate) fn cmd_orientation(setup: &Setup) -> Result<()> {
    let orientation = setup
        .session()
        .request_orientation()
        .ok_or_else(|| unavailable("orientation"))?;
    println!("{}", orientation);
    Ok(())
}

/// Print everything as JSON; missing values are `null` rather than an error.
pub(crate) fn cmd_info(setup: &Setup) -> Result<()> {
    let serial = setup
        .placeholders
        .get(crate::template::ADB_SERIAL)
        .cloned();
    let report = DeviceReport::collect(serial, &setup.session());

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| DevctlError::UserError(format!("failed to serialize report: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn unavailable(property: &str) -> DevctlError {
    DevctlError::ProbeError(format!(
        "{} unavailable (is the device connected and --serial correct? run with -vv for details)",
        property
    ))
}
