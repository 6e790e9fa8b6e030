//! Minute-of-day helpers for element start/end times.

use crate::error::{NapchartError, NapchartResult};

/// Collapses an hour/minute pair into minutes since midnight.
///
/// Purely arithmetic: negative or out-of-day inputs pass through unchecked,
/// matching how element times themselves are unvalidated.
#[must_use]
pub fn minutes_of_day(hours: i32, minutes: i32) -> i32 {
    hours * 60 + minutes
}

/// Parses an `HH:MM` clock string into minutes since midnight.
pub fn parse_clock(text: &str) -> NapchartResult<i32> {
    let invalid = || NapchartError::InvalidTimeFormat {
        input: text.to_owned(),
    };
    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    if minutes.contains(':') {
        return Err(invalid());
    }
    let hours: i32 = hours.trim().parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.trim().parse().map_err(|_| invalid())?;
    Ok(minutes_of_day(hours, minutes))
}
