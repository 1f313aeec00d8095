//! # Congestion Toll
//!
//! Computes the **daily congestion toll** owed by a vehicle from the times it
//! passed a toll station during one day.
//!
//! Each passage is priced from a fixed time-of-day table. Passages within
//! 60 minutes of the day's first passage are charged once, at the highest fee
//! among them, and the day's total is capped at [`schedule::DAILY_FEE_CAP`].
//! Weekends, the public holidays of [`calendar::HOLIDAY_CALENDAR_YEAR`] and
//! exempt vehicle classes are free.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use congestion_toll::{calculator, VehicleClass};
//!
//! // Thursday 2023-06-22 is a regular weekday.
//! let day = NaiveDate::from_ymd_opt(2023, 6, 22).unwrap();
//! let passages = [
//!     day.and_hms_opt(6, 0, 0).unwrap(),
//!     day.and_hms_opt(7, 0, 0).unwrap(),
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//! ];
//!
//! let fee = calculator::calculate_daily_fee(VehicleClass::Car, &passages).unwrap();
//! assert_eq!(fee, 8 + 18 + 8);
//!
//! let fee = calculator::calculate_daily_fee(VehicleClass::Motorbike, &passages).unwrap();
//! assert_eq!(fee, 0);
//! ```
//!
//! See [`calculator`] for the window rule, [`schedule`] for the fee table and
//! [`calendar`] for toll-free dates.

pub mod calculator;
pub mod calendar;
pub mod error;
pub mod report;
pub mod schedule;
pub mod vehicle;


// Re-exports for convenience.
pub use error::TollError;
pub use report::DailyToll;
pub use vehicle::VehicleClass;
