//! Gregorian Date Calculations
//!
//! All functions operate on the proleptic Gregorian calendar with
//! 1-based months and days.
//!
//! ## Supported window
//!
//! The epoch day conversions shift the computational calendar forward by
//! 680 cycles of 400 years, so any year in
//! [`MIN_YEAR`, `MAX_YEAR`] stays within unsigned 32-bit arithmetic.
//!
//! | Significant Date | Epoch Days |
//! | -----------------|------------|
//! | April 19, -271_821 | -100_000_001 |
//! | January 1, 1970 | 0 |
//! | September 14, 275_760 | 100_000_001 |

pub mod neri_schneider;

pub use neri_schneider::{epoch_days_from_ymd, ymd_from_epoch_days};

/// The earliest year the epoch day conversions support.
pub const MIN_YEAR: i32 = -271_821;
/// The latest year the epoch day conversions support.
pub const MAX_YEAR: i32 = 275_760;

// Days elapsed before the first of each month in a common year.
const CUMULATIVE_DAYS: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns whether `year` is a leap year.
///
/// A year is a leap year when it is divisible by 4 and not by 100,
/// or when it is divisible by 400.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year`, either 365 or 366.
#[inline]
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in `month` of `year`.
///
/// A month outside of `1..=12` has no days.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns whether the year, month, and day form a real calendar date.
#[inline]
pub const fn is_valid_ymd(year: i32, month: u8, day: u8) -> bool {
    day >= 1 && day <= days_in_month(year, month)
}

/// Returns the 1-based ordinal day of the date within its year.
///
/// January 1st is day 1 and December 31st is day 365 or 366. The
/// date is assumed to be valid.
pub const fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
    let index = (month.saturating_sub(1) % 12) as usize;
    let leap_day = (month > 2 && is_leap_year(year)) as u16;
    CUMULATIVE_DAYS[index] + leap_day + day as u16
}
