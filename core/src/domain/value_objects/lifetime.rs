//! Token lifetimes.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::DomainError;

static TIME_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(-?(?:\d+)?\.?\d+) *(milliseconds?|msecs?|ms|seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y)?$",
    )
    .expect("time span pattern is valid")
});

const MINUTE: f64 = 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;
const YEAR: f64 = DAY * 365.25;

/// How long an issued token stays valid, in whole seconds
///
/// Parses either a bare number of seconds (`"3600"`) or a time span with a
/// unit (`"1d"`, `"10h"`, `"2 days"`, `"1.5h"`). Negative spans yield tokens
/// that are already expired. Spans beyond `±MAX_SECONDS` are rejected and the
/// `from_*` constructors saturate at that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenLifetime {
    seconds: i64,
}

impl TokenLifetime {
    /// Longest representable span, about ten thousand years
    pub const MAX_SECONDS: i64 = 10_000 * 31_557_600;

    pub const fn from_seconds(seconds: i64) -> Self {
        let seconds = if seconds > Self::MAX_SECONDS {
            Self::MAX_SECONDS
        } else if seconds < -Self::MAX_SECONDS {
            -Self::MAX_SECONDS
        } else {
            seconds
        };
        Self { seconds }
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Self::from_seconds(minutes.saturating_mul(60))
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self::from_seconds(hours.saturating_mul(3600))
    }

    pub const fn from_days(days: i64) -> Self {
        Self::from_seconds(days.saturating_mul(86400))
    }

    pub const fn as_seconds(&self) -> i64 {
        self.seconds
    }
}

impl Default for TokenLifetime {
    /// One day
    fn default() -> Self {
        Self::from_days(1)
    }
}

impl From<chrono::Duration> for TokenLifetime {
    fn from(duration: chrono::Duration) -> Self {
        Self::from_seconds(duration.num_seconds())
    }
}

impl From<std::time::Duration> for TokenLifetime {
    fn from(duration: std::time::Duration) -> Self {
        Self::from_seconds(i64::try_from(duration.as_secs()).unwrap_or(Self::MAX_SECONDS))
    }
}

impl fmt::Display for TokenLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}

impl FromStr for TokenLifetime {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::Validation {
            message: format!("Invalid token lifetime: {:?}", s),
        };

        let input = s.trim();
        if input.is_empty() || input.len() > 100 {
            return Err(invalid());
        }

        let captures = TIME_SPAN_REGEX.captures(input).ok_or_else(invalid)?;
        let value: f64 = captures[1].parse().map_err(|_| invalid())?;
        let unit = captures
            .get(2)
            .map(|unit| unit.as_str().to_lowercase())
            .unwrap_or_else(|| String::from("s"));

        let multiplier = match unit.as_str() {
            "years" | "year" | "yrs" | "yr" | "y" => YEAR,
            "weeks" | "week" | "w" => WEEK,
            "days" | "day" | "d" => DAY,
            "hours" | "hour" | "hrs" | "hr" | "h" => HOUR,
            "minutes" | "minute" | "mins" | "min" | "m" => MINUTE,
            "seconds" | "second" | "secs" | "sec" | "s" => 1.0,
            "milliseconds" | "millisecond" | "msecs" | "msec" | "ms" => 0.001,
            _ => return Err(invalid()),
        };

        let seconds = (value * multiplier).floor();
        if !seconds.is_finite() || seconds.abs() > Self::MAX_SECONDS as f64 {
            return Err(invalid());
        }

        Ok(Self::from_seconds(seconds as i64))
    }
}
