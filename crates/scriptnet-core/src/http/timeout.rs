//! Request timeout option
//!
//! Scripts express timeouts as a number of seconds. The resolved value also
//! bounds how long an idle pooled connection is kept.

use std::time::Duration;

use crate::{Error, Result, Value};

/// Configuration key for the request timeout
pub const TIMEOUT_KEY: &str = "timeout";

/// Timeout used when the script does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Validate a `timeout` option and convert it to a duration
///
/// Fractional seconds are kept. Zero means "no deadline", and so does any
/// negative number.
pub fn parse_timeout(value: &Value) -> Result<Duration> {
    let seconds = value
        .as_number()
        .ok_or_else(|| Error::invalid_type(TIMEOUT_KEY, "number", value))?;

    if seconds <= 0.0 {
        return Ok(Duration::ZERO);
    }

    Duration::try_from_secs_f64(seconds).map_err(|e| Error::InvalidValue {
        field: TIMEOUT_KEY,
        message: format!("{} is not a usable number of seconds", seconds),
        source: Some(e.into()),
    })
}

/// A zero duration disables the deadline instead of expiring immediately
pub(crate) fn as_deadline(timeout: Duration) -> Option<Duration> {
    (!timeout.is_zero()).then_some(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_seconds() {
        assert_eq!(parse_timeout(&Value::from(5)).unwrap(), Duration::from_secs(5));
        assert_eq!(parse_timeout(&Value::from(0)).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_fractional_seconds() {
        assert_eq!(
            parse_timeout(&Value::from(1.5)).unwrap(),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_wrong_type() {
        for value in [Value::from("10"), Value::from(true), Value::Nil] {
            let err = parse_timeout(&value).unwrap_err();
            assert!(matches!(err, Error::InvalidType { field: TIMEOUT_KEY, expected: "number", .. }));
        }
    }

    #[test]
    fn test_unusable_numbers() {
        for seconds in [f64::NAN, f64::INFINITY] {
            let err = parse_timeout(&Value::from(seconds)).unwrap_err();
            assert!(matches!(err, Error::InvalidValue { field: TIMEOUT_KEY, .. }));
        }
    }

    #[test]
    fn test_negative_numbers_clamp_to_zero() {
        for seconds in [-1.0, -0.25, -0.0, f64::NEG_INFINITY] {
            let timeout = parse_timeout(&Value::from(seconds)).unwrap();
            assert_eq!(timeout, Duration::ZERO);
            assert_eq!(as_deadline(timeout), None);
        }
    }

    #[test]
    fn test_zero_disables_deadline() {
        assert_eq!(as_deadline(Duration::ZERO), None);
        assert_eq!(as_deadline(DEFAULT_TIMEOUT), Some(DEFAULT_TIMEOUT));
    }
}
