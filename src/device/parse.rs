//! Lenient parsers for probe output.
//!
//! Device shells append prompts, carriage returns and other noise, so these
//! parsers pick out the expected value and ignore the rest.

use super::types::{Orientation, Resolution};
use regex::Regex;
use std::sync::LazyLock;

static INTEGER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid integer regex"));

/// Keep only the ASCII letters and digits of `output`, in order.
pub fn sanitize_uuid(output: &str) -> String {
    output
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Read the rotation code from the first character of `output`.
pub fn parse_orientation(output: &str) -> Option<Orientation> {
    let first = output.chars().next()?;
    let code = first.to_digit(10)?;
    Orientation::from_code(u8::try_from(code).ok()?)
}

/// Take the first two integers in `output` as `(width, height)`.
///
/// Returns `None` when fewer than two integers are present, one does not
/// fit in a `u32`, or either side is zero.
pub fn parse_resolution(output: &str) -> Option<Resolution> {
    let mut numbers = INTEGER_REGEX
        .find_iter(output)
        .map(|m| m.as_str().parse::<u32>());

    let width = numbers.next()?.ok()?;
    let height = numbers.next()?.ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some(Resolution::new(width, height))
}
