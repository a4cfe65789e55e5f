//! Exit code constants for the devctl CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad placeholder syntax)
//! - 2: Configuration error (unreadable or invalid config file)
//! - 3: Probe failure (device returned no usable value)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid placeholder assignments.
pub const USER_ERROR: i32 = 1;

/// Configuration error: config file missing, unparseable, or invalid.
pub const CONFIG_ERROR: i32 = 2;

/// Probe failure: the device query produced no value.
pub const PROBE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_ERROR, PROBE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
