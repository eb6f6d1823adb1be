//! Error types for the worktime workspace.
//!
//! The engine distinguishes exactly two failure classes: configuration
//! errors, raised once at construction and fatal to startup, and
//! invalid-argument errors, raised per call and recoverable by the caller.
//! The `ensure!` and `ensure_config!` macros cover the common
//! check-and-return pattern for each class.

use thiserror::Error;

/// The top-level error type used throughout the worktime workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration: overlapping work intervals, a schedule with no
    /// working time anywhere, or an out-of-range value object. An engine must
    /// not be constructed from such input.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Invalid argument to an engine operation, e.g. a negative duration.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout the worktime workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wt_core::{ensure, errors::Error};
/// fn non_negative(x: i64) -> wt_core::errors::Result<i64> {
///     ensure!(x >= 0, "value must not be negative, got {x}");
///     Ok(x)
/// }
/// assert!(non_negative(1).is_ok());
/// assert!(non_negative(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wt_core::{ensure_config, errors::Error};
/// fn hour(h: u8) -> wt_core::errors::Result<u8> {
///     ensure_config!(h < 24, "hour {h} out of range [0, 24)");
///     Ok(h)
/// }
/// assert!(hour(8).is_ok());
/// assert!(hour(24).is_err());
/// ```
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = Error::Configuration("overlapping intervals on Monday".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: overlapping intervals on Monday"
        );
        let err = Error::InvalidArgument("duration must not be negative".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: duration must not be negative"
        );
    }

    #[test]
    fn ensure_macros_pick_the_right_variant() {
        fn call_site(x: i32) -> Result<()> {
            ensure!(x > 0, "x must be positive, got {x}");
            Ok(())
        }
        fn config_site(x: i32) -> Result<()> {
            ensure_config!(x > 0, "x must be positive, got {x}");
            Ok(())
        }
        assert_eq!(
            call_site(-1),
            Err(Error::InvalidArgument("x must be positive, got -1".into()))
        );
        assert_eq!(
            config_site(-1),
            Err(Error::Configuration("x must be positive, got -1".into()))
        );
        assert!(call_site(1).is_ok());
        assert!(config_site(1).is_ok());
    }
}
