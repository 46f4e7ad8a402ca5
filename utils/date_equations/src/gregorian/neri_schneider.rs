//! Epoch day conversions using Neri-Schneider Euclidean affine functions.
//!
//! The computational calendar starts on March 1st of year 0 so that the
//! leap day is the last day of a computational year.

use super::{MAX_YEAR, MIN_YEAR};

// Rata die of 1970-01-01 in the computational calendar.
const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;
const DAYS_IN_A_400Y_CYCLE: i32 = 146_097;

// Number of 400 year cycles the calendar is shifted by to stay unsigned.
const SHIFTS: i32 = 680;
const YEAR_SHIFT: i32 = 400 * SHIFTS;
const RATA_DIE_SHIFT: i32 = EPOCH_COMPUTATIONAL_RATA_DIE + DAYS_IN_A_400Y_CYCLE * SHIFTS;

const TWO_POWER_SIXTEEN: u32 = 65_536;
const TWO_POWER_THIRTY_TWO: u64 = 4_294_967_296;
const YEAR_OF_CENTURY_MULTIPLIER: u64 = 2_939_745;

/// Returns the days since 1970-01-01 for the given date.
///
/// Years are clamped into [`MIN_YEAR`, `MAX_YEAR`].
pub const fn epoch_days_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let year = if year < MIN_YEAR {
        MIN_YEAR
    } else if year > MAX_YEAR {
        MAX_YEAR
    } else {
        year
    };
    let j = (month <= 2) as i32;
    let comp_year = year + YEAR_SHIFT - j;
    let comp_month = month as i32 + 12 * j;
    let comp_day = day as i32 - 1;
    let century = comp_year / 100;

    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day - RATA_DIE_SHIFT
}

/// Returns the year, month, and day for the days since 1970-01-01.
pub const fn ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    let rata_die = (epoch_days + RATA_DIE_SHIFT) as u32;

    // Century and day of century.
    let n_one = 4 * rata_die + 3;
    let century = n_one / DAYS_IN_A_400Y_CYCLE as u32;
    let day_of_century = (n_one % DAYS_IN_A_400Y_CYCLE as u32) / 4;

    // Year of century and day of year.
    let n_two = (4 * day_of_century + 3) as u64;
    let p_two = YEAR_OF_CENTURY_MULTIPLIER * n_two;
    let year_of_century = (p_two / TWO_POWER_THIRTY_TWO) as u32;
    let day_of_year = ((p_two % TWO_POWER_THIRTY_TWO) / YEAR_OF_CENTURY_MULTIPLIER / 4) as u32;

    // Month and day.
    let n_three = 2141 * day_of_year + 197_913;
    let month = n_three / TWO_POWER_SIXTEEN;
    let day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    // Move January and February into the following gregorian year.
    let j = (day_of_year >= 306) as u32;
    let year = (100 * century + year_of_century + j) as i32 - YEAR_SHIFT;
    (year, (month - 12 * j) as u8, (day + 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(epoch_days_from_ymd(1970, 1, 1), 0);
        assert_eq!(ymd_from_epoch_days(0), (1970, 1, 1));
        assert_eq!(ymd_from_epoch_days(-1), (1969, 12, 31));
    }

    #[test]
    fn known_dates() {
        assert_eq!(epoch_days_from_ymd(2000, 1, 1), 10_957);
        assert_eq!(epoch_days_from_ymd(2000, 3, 1), 11_017);
        assert_eq!(epoch_days_from_ymd(2024, 1, 1), 19_723);
        assert_eq!(epoch_days_from_ymd(1900, 1, 1), -25_567);
        assert_eq!(ymd_from_epoch_days(11_016), (2000, 2, 29));
        assert_eq!(ymd_from_epoch_days(19_723), (2024, 1, 1));
        assert_eq!(ymd_from_epoch_days(-25_567), (1900, 1, 1));
    }

    #[test]
    fn window_limits() {
        assert_eq!(ymd_from_epoch_days(100_000_001), (275_760, 9, 14));
        assert_eq!(ymd_from_epoch_days(-100_000_001), (-271_821, 4, 19));
        assert_eq!(epoch_days_from_ymd(275_760, 9, 14), 100_000_001);
        assert_eq!(epoch_days_from_ymd(-271_821, 4, 19), -100_000_001);
    }

    #[test]
    fn round_trip_across_leap_boundaries() {
        for epoch_days in -800..800 {
            let (y, m, d) = ymd_from_epoch_days(epoch_days);
            assert_eq!(epoch_days_from_ymd(y, m, d), epoch_days);
        }
        for epoch_days in 10_900..11_100 {
            let (y, m, d) = ymd_from_epoch_days(epoch_days);
            assert_eq!(epoch_days_from_ymd(y, m, d), epoch_days);
        }
    }
}
