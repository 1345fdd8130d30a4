//! Exit code constants for the draft CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state)
//! - 2: Configuration failure (invalid draftrc, missing header)
//! - 3: Template failure (unknown template, bad placeholder syntax)
//! - 4: Output failure (supplement file could not be written)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unusable working directory.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: unparseable draftrc, invalid values, or a
/// missing/null header at pipeline construction.
pub const CONFIG_FAILURE: i32 = 2;

/// Template failure: template not found or invalid placeholder syntax.
pub const TEMPLATE_FAILURE: i32 = 3;

/// Output failure: a resolved supplement could not be written.
pub const OUTPUT_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            CONFIG_FAILURE,
            TEMPLATE_FAILURE,
            OUTPUT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(CONFIG_FAILURE, 2);
        assert_eq!(TEMPLATE_FAILURE, 3);
        assert_eq!(OUTPUT_FAILURE, 4);
    }
}
