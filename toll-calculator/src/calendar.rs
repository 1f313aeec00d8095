//! Toll-free dates.
//!
//! Weekends are always free. Public holidays and the July holiday month are
//! only known for [`HOLIDAY_CALENDAR_YEAR`]; for any other year only the
//! weekend rule applies.

use chrono::{Datelike, NaiveDate, Weekday};

/// The only year whose public holidays are known.
pub const HOLIDAY_CALENDAR_YEAR: i32 = 2023;

/// Month during which every day of [`HOLIDAY_CALENDAR_YEAR`] is toll-free.
pub const TOLL_FREE_MONTH: u32 = 7;

/// `(month, day)` pairs of the toll-free public holidays.
pub const TOLL_FREE_DAYS: [(u32, u32); 16] = [
    (1, 1),
    (3, 28),
    (3, 29),
    (4, 1),
    (4, 30),
    (5, 1),
    (5, 8),
    (5, 9),
    (6, 5),
    (6, 6),
    (6, 21),
    (11, 1),
    (12, 24),
    (12, 25),
    (12, 26),
    (12, 31),
];

/// Whether passages on `date` are free of charge.
pub fn is_toll_free_date(date: NaiveDate) -> bool {
    is_weekend(date) || is_holiday(date)
}

#[inline]
fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn is_holiday(date: NaiveDate) -> bool {
    if date.year() != HOLIDAY_CALENDAR_YEAR {
        return false;
    }
    date.month() == TOLL_FREE_MONTH || TOLL_FREE_DAYS.contains(&(date.month(), date.day()))
}
