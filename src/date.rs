//! This module implements `CalendarDate` and its day arithmetic.

use core::str::FromStr;

use date_equations::gregorian;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    codec_assert,
    options::DayOverflow,
    parsers::{parse_calendar_date, FormattableDate},
    CodecError, CodecResult,
};

/// The greatest absolute epoch day value a `CalendarDate` may hold.
pub(crate) const MAX_EPOCH_DAYS: i32 = 100_000_001;

/// A proleptic Gregorian calendar day, normalized to UTC midnight.
///
/// A `CalendarDate` is always a real calendar date.
///
/// ```rust
/// use jde_julian::CalendarDate;
///
/// let date = CalendarDate::try_new(2024, 2, 29).unwrap();
/// assert_eq!(date.day_of_year(), 60);
/// assert!(date.in_leap_year());
/// assert_eq!(date.to_string(), "2024-02-29");
///
/// assert!(CalendarDate::try_new(2023, 2, 29).is_err());
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

// ==== Private API ====

impl CalendarDate {
    /// Creates a new `CalendarDate` without determining the validity.
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the date `day_of_year - 1` days after January 1st of `year`.
    pub(crate) fn from_ordinal(
        year: i32,
        day_of_year: i32,
        overflow: DayOverflow,
    ) -> CodecResult<Self> {
        if !(gregorian::MIN_YEAR..=gregorian::MAX_YEAR).contains(&year) {
            return Err(CodecError::range().with_message("year is outside of the supported range."));
        }
        let days_in_year = i32::from(gregorian::days_in_year(year));
        if overflow == DayOverflow::Reject && !(1..=days_in_year).contains(&day_of_year) {
            return Err(CodecError::invalid_code()
                .with_message("day of year is outside of the year's length."));
        }

        let jan_first = gregorian::epoch_days_from_ymd(year, 1, 1);
        let epoch_days = jan_first
            .checked_add(day_of_year - 1)
            .ok_or(CodecError::range().with_message("day of year exceeds a valid range."))?;
        let date = Self::from_epoch_days(epoch_days)?;

        codec_assert!(
            overflow == DayOverflow::Balance || date.year == year,
            "ordinal day {day_of_year} left year {year}"
        );
        Ok(date)
    }
}

// ==== Public API ====

impl CalendarDate {
    /// Creates a new `CalendarDate`, rejecting any date that is not a real
    /// calendar date.
    pub fn try_new(year: i32, month: u8, day: u8) -> CodecResult<Self> {
        if !gregorian::is_valid_ymd(year, month, day) {
            return Err(CodecError::invalid_date().with_message("not a valid calendar date."));
        }
        let date = Self::new_unchecked(year, month, day);
        if date.to_epoch_days().abs() > MAX_EPOCH_DAYS
            || !(gregorian::MIN_YEAR..=gregorian::MAX_YEAR).contains(&year)
        {
            return Err(
                CodecError::range().with_message("date is outside of the supported range.")
            );
        }
        Ok(date)
    }

    /// Creates a `CalendarDate` from the number of days since 1970-01-01.
    pub fn from_epoch_days(epoch_days: i32) -> CodecResult<Self> {
        if epoch_days.abs() > MAX_EPOCH_DAYS {
            return Err(
                CodecError::range().with_message("epoch days are outside of the supported range.")
            );
        }
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days since 1970-01-01.
    #[inline]
    #[must_use]
    pub fn to_epoch_days(&self) -> i32 {
        gregorian::epoch_days_from_ymd(self.year, self.month, self.day)
    }

    /// Returns the Gregorian year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based month.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the 1-based day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the 1-based ordinal day within this date's year.
    #[inline]
    #[must_use]
    pub const fn day_of_year(&self) -> u16 {
        gregorian::day_of_year(self.year, self.month, self.day)
    }

    /// Returns 366 in a leap year and 365 otherwise.
    #[inline]
    #[must_use]
    pub const fn days_in_year(&self) -> u16 {
        gregorian::days_in_year(self.year)
    }

    /// Returns whether this date's year is a leap year.
    #[inline]
    #[must_use]
    pub const fn in_leap_year(&self) -> bool {
        gregorian::is_leap_year(self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_calendar_date(s.as_bytes())
    }
}

impl Writeable for CalendarDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDate(self.year, self.month, self.day).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDate(self.year, self.month, self.day).writeable_length_hint()
    }
}

impl_display_with_writeable!(CalendarDate);
