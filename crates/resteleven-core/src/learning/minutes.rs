//! Minutes-of-day arithmetic.
//!
//! All learning math works on same-day minutes since midnight. Results are
//! clamped into the day and never roll over past midnight, so overnight
//! shifts are not representable.

use chrono::{Duration, NaiveTime, Timelike};

/// Last representable minute of a day (23:59).
pub const LAST_MINUTE: f64 = 1439.0;

const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_DAY: i64 = 86_400_000;

/// Minutes since midnight, including fractional seconds.
pub fn to_minutes(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) / 60.0
        + f64::from(time.nanosecond()) / 60_000_000_000.0
}

/// Time of day for `minutes` since midnight, with millisecond precision.
///
/// Values outside the day are pinned to midnight or the last millisecond.
pub fn from_minutes(minutes: f64) -> NaiveTime {
    let ms = if minutes.is_nan() {
        0
    } else {
        ((minutes * MS_PER_MINUTE).round() as i64).clamp(0, MS_PER_DAY - 1)
    };
    let secs = (ms / 1_000) as u32;
    let nanos = (ms % 1_000) as u32 * 1_000_000;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos).unwrap_or(NaiveTime::MIN)
}

/// `time + delta`, clamped into `[00:00, 23:59]`.
pub fn add_clamped(time: NaiveTime, delta: Duration) -> NaiveTime {
    let minutes = to_minutes(time) + delta.num_milliseconds() as f64 / MS_PER_MINUTE;
    from_minutes(minutes.clamp(0.0, LAST_MINUTE))
}

/// Exponential blend of `current` towards `sample` with weight `alpha`.
pub fn blend(current: NaiveTime, sample: NaiveTime, alpha: f64) -> NaiveTime {
    from_minutes(to_minutes(current) * (1.0 - alpha) + to_minutes(sample) * alpha)
}
