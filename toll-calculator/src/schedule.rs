//! The fixed congestion fee schedule.
//!
//! Fees depend only on the time of day. Exemptions for toll-free dates and
//! vehicle classes are applied on top of this table by
//! [`crate::calculator::fee_for_passage`].

use chrono::{NaiveTime, Timelike};

/// Highest total a single vehicle pays for one day.
pub const DAILY_FEE_CAP: u64 = 60;

/// Length of the rolling window in which passages are charged once.
///
/// A passage belongs to the window while fewer than `WINDOW_MINUTES` whole
/// minutes have elapsed since the window anchor, i.e. up to 59.
pub const WINDOW_MINUTES: i64 = 60;

/// A contiguous time-of-day range charged at a single rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBand {
    /// First minute of the day (inclusive) covered by the band.
    pub start_minute: u32,
    /// Minute of the day (exclusive) at which the band ends.
    pub end_minute: u32,
    pub fee: u64,
}

const fn band(start: (u32, u32), end: (u32, u32), fee: u64) -> FeeBand {
    FeeBand {
        start_minute: start.0.saturating_mul(60).saturating_add(start.1),
        end_minute: end.0.saturating_mul(60).saturating_add(end.1),
        fee,
    }
}

/// Charged bands in chronological order. Times outside every band are free.
pub const FEE_BANDS: [FeeBand; 9] = [
    band((6, 0), (6, 30), 8),
    band((6, 30), (7, 0), 13),
    band((7, 0), (8, 0), 18),
    band((8, 0), (8, 30), 13),
    band((8, 30), (15, 0), 8),
    band((15, 0), (15, 30), 13),
    band((15, 30), (17, 0), 18),
    band((17, 0), (18, 0), 13),
    band((18, 0), (18, 30), 8),
];

/// Fee for a passage at `time`, ignoring every exemption.
///
/// Only the hour and minute are considered; seconds never move a passage into
/// another band.
pub fn fee_at(time: NaiveTime) -> u64 {
    let minute_of_day = time.hour().saturating_mul(60).saturating_add(time.minute());
    FEE_BANDS
        .iter()
        .find(|band| (band.start_minute..band.end_minute).contains(&minute_of_day))
        .map_or(0, |band| band.fee)
}
