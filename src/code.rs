//! This module implements `CompactCode`, the `CYYDDD` business date code.
//!
//! A code is made of three fields:
//!
//!   - `C`: the century offset, where the full year is `(C + 19) * 100 + YY`
//!   - `YY`: the two digit year within the century
//!   - `DDD`: the 1-based day of the year
//!
//! Codes are read by one of two [`ValidationPolicy`] values and always
//! written in canonical form, with `YY` padded to two digits and `DDD`
//! padded to three.

use core::str::FromStr;

use date_equations::gregorian;
use tinystr::TinyAsciiStr;
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    options::{DayOverflow, ValidationPolicy},
    parsers::{digit_count, write_padded},
    CalendarDate, CodecError, CodecResult,
};

/// The shortest code accepted by either policy.
pub const MIN_CODE_LEN: usize = 5;
/// The longest code accepted by either policy.
pub const MAX_CODE_LEN: usize = 6;

/// The offset between the century offset and the century of the full year.
const CENTURY_BASE: i32 = 19;

/// A compact `CYYDDD` date code whose day lies within its year.
///
/// ```rust
/// use jde_julian::{CalendarDate, CompactCode};
///
/// let code: CompactCode = "124001".parse().unwrap();
/// assert_eq!(code.full_year(), 2024);
/// assert_eq!(code.day_of_year(), 1);
///
/// let date = CalendarDate::try_new(2023, 12, 31).unwrap();
/// assert_eq!(CompactCode::from(date).to_string(), "123365");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompactCode {
    century: i32,
    year_of_century: u8,
    day_of_year: u16,
}

impl CompactCode {
    /// Creates a new `CompactCode`, rejecting a year of century above 99 or a
    /// day of year outside of the full year's length.
    pub fn try_new(century: i32, year_of_century: u8, day_of_year: u16) -> CodecResult<Self> {
        if year_of_century > 99 {
            return Err(CodecError::invalid_code().with_message("year of century exceeds 99."));
        }
        let full_year = full_year(century, i32::from(year_of_century))?;
        if !(gregorian::MIN_YEAR..=gregorian::MAX_YEAR).contains(&full_year) {
            return Err(CodecError::range().with_message("year is outside of the supported range."));
        }
        if !(1..=gregorian::days_in_year(full_year)).contains(&day_of_year) {
            return Err(CodecError::invalid_code()
                .with_message("day of year is outside of the year's length."));
        }
        Ok(Self {
            century,
            year_of_century,
            day_of_year,
        })
    }

    /// Returns the century offset, `C`.
    #[inline]
    #[must_use]
    pub const fn century(&self) -> i32 {
        self.century
    }

    /// Returns the year within the century, `YY`.
    #[inline]
    #[must_use]
    pub const fn year_of_century(&self) -> u8 {
        self.year_of_century
    }

    /// Returns the day of the year, `DDD`.
    #[inline]
    #[must_use]
    pub const fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Returns the Gregorian year this code refers to.
    #[inline]
    #[must_use]
    pub const fn full_year(&self) -> i32 {
        (self.century + CENTURY_BASE) * 100 + self.year_of_century as i32
    }

    /// Returns the canonical code as a stack allocated ASCII string.
    pub fn to_ascii(&self) -> CodecResult<TinyAsciiStr<16>> {
        let mut buffer = [0u8; 16];
        let mut sink = AsciiSink {
            buffer: &mut buffer,
            len: 0,
        };
        self.write_to(&mut sink)
            .map_err(|_| CodecError::assert())?;
        let len = sink.len;
        TinyAsciiStr::try_from_utf8(&buffer[..len]).map_err(|_| CodecError::assert())
    }

    /// Returns the calendar date this code refers to.
    pub fn to_calendar_date(&self) -> CodecResult<CalendarDate> {
        CalendarDate::from_ordinal(
            self.full_year(),
            i32::from(self.day_of_year),
            DayOverflow::Reject,
        )
    }
}

impl From<CalendarDate> for CompactCode {
    fn from(date: CalendarDate) -> Self {
        let year = date.year();
        Self {
            century: year.div_euclid(100) - CENTURY_BASE,
            // NOTE: `rem_euclid(100)` always fits in a `u8`.
            year_of_century: year.rem_euclid(100) as u8,
            day_of_year: date.day_of_year(),
        }
    }
}

impl FromStr for CompactCode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodeComponents::parse(s, ValidationPolicy::default())?.into_code()
    }
}

impl Writeable for CompactCode {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.century.write_to(sink)?;
        write_padded(u32::from(self.year_of_century), 2, sink)?;
        write_padded(u32::from(self.day_of_year), 3, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let sign = usize::from(self.century < 0);
        let century = digit_count(self.century.unsigned_abs());
        let day = digit_count(u32::from(self.day_of_year)).max(3);
        LengthHint::exact(sign + century + 2 + day)
    }
}

impl_display_with_writeable!(CompactCode);

// A fixed buffer sink used to build a `TinyAsciiStr`.
struct AsciiSink<'a> {
    buffer: &'a mut [u8; 16],
    len: usize,
}

impl core::fmt::Write for AsciiSink<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let end = self.len + s.len();
        if end > self.buffer.len() {
            return Err(core::fmt::Error);
        }
        self.buffer[self.len..end].copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

// ==== Code parsing ====

/// The numeric fields read from a code string before range checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CodeComponents {
    pub(crate) century: i32,
    pub(crate) year_of_century: i32,
    pub(crate) day_of_year: i32,
}

impl CodeComponents {
    /// Reads the code's fields according to `policy`.
    pub(crate) fn parse(code: &str, policy: ValidationPolicy) -> CodecResult<Self> {
        match policy {
            ValidationPolicy::Permissive => Self::parse_permissive(code),
            ValidationPolicy::Strict => Self::parse_strict(code),
        }
    }

    /// Five or six ASCII digits: `C`, `YY`, then a two or three digit day.
    fn parse_permissive(code: &str) -> CodecResult<Self> {
        let bytes = code.as_bytes();
        if !(MIN_CODE_LEN..=MAX_CODE_LEN).contains(&bytes.len()) {
            return Err(CodecError::invalid_code().with_message("code must be 5 or 6 digits."));
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(CodecError::invalid_code().with_message("code must only contain digits."));
        }

        Ok(Self {
            century: ascii_digits_value(&bytes[..1]),
            year_of_century: ascii_digits_value(&bytes[1..3]),
            day_of_year: ascii_digits_value(&bytes[3..]),
        })
    }

    /// At most six characters, sliced at fixed character offsets.
    fn parse_strict(code: &str) -> CodecResult<Self> {
        let len = code.chars().count();
        if len > MAX_CODE_LEN {
            return Err(
                CodecError::invalid_code().with_message("code must not exceed 6 characters.")
            );
        }
        if len < MIN_CODE_LEN {
            return Err(CodecError::invalid_code().with_message("day of year field is truncated."));
        }

        let century = leading_integer(char_slice(code, 0, 1))
            .ok_or(CodecError::invalid_code().with_message("century is not a number."))?;
        let year_of_century = leading_integer(char_slice(code, 1, 3))
            .ok_or(CodecError::invalid_code().with_message("year of century is not a number."))?;
        let day_of_year = leading_integer(char_slice(code, 3, 6))
            .ok_or(CodecError::invalid_code().with_message("day of year is not a number."))?;

        if century < 0 || year_of_century < 0 {
            return Err(CodecError::invalid_code().with_message("code fields must not be negative."));
        }

        Ok(Self {
            century,
            year_of_century,
            day_of_year,
        })
    }

    /// Returns the Gregorian year of these components.
    pub(crate) fn full_year(&self) -> CodecResult<i32> {
        full_year(self.century, self.year_of_century)
    }

    /// Range checks the components into a `CompactCode`.
    pub(crate) fn into_code(self) -> CodecResult<CompactCode> {
        let year_of_century = u8::try_from(self.year_of_century)
            .map_err(|_| CodecError::invalid_code().with_message("year of century exceeds 99."))?;
        let day_of_year = u16::try_from(self.day_of_year).map_err(|_| {
            CodecError::invalid_code().with_message("day of year is outside of the year's length.")
        })?;
        CompactCode::try_new(self.century, year_of_century, day_of_year)
    }
}

fn full_year(century: i32, year_of_century: i32) -> CodecResult<i32> {
    century
        .checked_add(CENTURY_BASE)
        .and_then(|c| c.checked_mul(100))
        .and_then(|c| c.checked_add(year_of_century))
        .ok_or(CodecError::range().with_message("year exceeds a valid range."))
}

/// Returns the value of a short run of ASCII digits.
fn ascii_digits_value(digits: &[u8]) -> i32 {
    digits
        .iter()
        .fold(0, |acc, d| acc * 10 + i32::from(d - b'0'))
}

/// Returns the characters of `source` in `[start, end)`, clipped to its length.
fn char_slice(source: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| source.char_indices().nth(n).map_or(source.len(), |(i, _)| i);
    &source[byte_at(start)..byte_at(end)]
}

/// Reads an integer from the start of `source`.
///
/// Leading whitespace and a single sign are skipped, then digits are read
/// until the first non-digit. Returns `None` when no digit is found.
fn leading_integer(source: &str) -> Option<i32> {
    let trimmed = source.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = ascii_digits_value(&rest.as_bytes()[..digits]);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn permissive_components() {
        let parsed = CodeComponents::parse("124001", ValidationPolicy::Permissive).unwrap();
        assert_eq!(
            parsed,
            CodeComponents {
                century: 1,
                year_of_century: 24,
                day_of_year: 1,
            }
        );

        let parsed = CodeComponents::parse("12345", ValidationPolicy::Permissive).unwrap();
        assert_eq!(parsed.day_of_year, 45);
        assert_eq!(parsed.full_year().unwrap(), 2023);

        for code in ["1234", "1234567", "12a456", " 12345", "-12345", ""] {
            assert!(
                CodeComponents::parse(code, ValidationPolicy::Permissive).is_err(),
                "{code}"
            );
        }
    }

    #[test]
    fn strict_components() {
        let parsed = CodeComponents::parse("123365", ValidationPolicy::Strict).unwrap();
        assert_eq!(parsed.day_of_year, 365);

        // Each slice is read up to its first non-digit.
        let parsed = CodeComponents::parse("12a4x5", ValidationPolicy::Strict).unwrap();
        assert_eq!(
            parsed,
            CodeComponents {
                century: 1,
                year_of_century: 2,
                day_of_year: 4,
            }
        );

        let parsed = CodeComponents::parse("1 5 45", ValidationPolicy::Strict).unwrap();
        assert_eq!(parsed.year_of_century, 5);
        assert_eq!(parsed.day_of_year, 45);

        for code in ["1234567", "0231", "", "a23001", "1ab001", "123abc", "-23001", "1-1001"] {
            let err = CodeComponents::parse(code, ValidationPolicy::Strict).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidCompactCode, "{code}");
        }
    }

    #[test]
    fn strict_slices_by_character() {
        // `é` takes the first position of the year field.
        let err = CodeComponents::parse("1é3456", ValidationPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCompactCode);

        let parsed = CodeComponents::parse("12é456", ValidationPolicy::Strict).unwrap();
        assert_eq!(parsed.year_of_century, 2);
        assert_eq!(parsed.day_of_year, 456);

        // Length is counted in characters, not bytes.
        assert_eq!("12345é".len(), 7);
        let parsed = CodeComponents::parse("12345é", ValidationPolicy::Strict).unwrap();
        assert_eq!(parsed.into_code().unwrap().to_string(), "123045");

        let err = CodeComponents::parse("1234é56", ValidationPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCompactCode);

        // Four characters in six bytes still truncate the day field.
        assert_eq!("12éé".len(), 6);
        let err = CodeComponents::parse("12éé", ValidationPolicy::Strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCompactCode);
    }

    #[test]
    fn range_checked_codes() {
        assert!(CompactCode::try_new(0, 23, 365).is_ok());
        assert!(CompactCode::try_new(0, 23, 366).is_err());
        assert!(CompactCode::try_new(1, 24, 366).is_ok());
        assert!(CompactCode::try_new(1, 24, 367).is_err());
        assert!(CompactCode::try_new(1, 24, 0).is_err());
        assert!(CompactCode::try_new(1, 100, 1).is_err());
    }

    #[test]
    fn code_to_date() {
        let code = CompactCode::try_new(1, 24, 60).unwrap();
        let date = code.to_calendar_date().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
        assert_eq!(CompactCode::from(date), code);
    }

    #[test]
    fn encodes_dates() {
        let code = CompactCode::from(CalendarDate::try_new(2024, 1, 1).unwrap());
        assert_eq!(code.to_string(), "124001");

        let code = CompactCode::from(CalendarDate::try_new(2023, 12, 31).unwrap());
        assert_eq!(code.to_string(), "123365");

        let code = CompactCode::from(CalendarDate::try_new(1900, 2, 1).unwrap());
        assert_eq!(code.to_string(), "000032");
    }

    #[test]
    fn encodes_extreme_years() {
        let code = CompactCode::from(CalendarDate::try_new(1850, 1, 10).unwrap());
        assert_eq!(code.century(), -1);
        assert_eq!(code.to_string(), "-150010");
        assert_eq!(code.full_year(), 1850);

        let code = CompactCode::from(CalendarDate::try_new(3099, 12, 31).unwrap());
        assert_eq!(code.to_string(), "1199365");

        let code = CompactCode::from(CalendarDate::try_new(-5, 3, 1).unwrap());
        assert_eq!(code.century(), -20);
        assert_eq!(code.year_of_century(), 95);
        assert_eq!(code.full_year(), -5);
    }

    #[test]
    fn ascii_and_length_hint() {
        let code = CompactCode::try_new(1, 5, 9).unwrap();
        assert_eq!(code.to_ascii().unwrap().as_str(), "105009");
        assert_eq!(code.writeable_length_hint(), LengthHint::exact(6));

        let code = CompactCode::from(CalendarDate::try_new(-271_821, 4, 19).unwrap());
        let ascii = code.to_ascii().unwrap();
        assert_eq!(ascii.as_str(), code.to_string());
        assert_eq!(code.writeable_length_hint(), LengthHint::exact(ascii.len()));
    }

    #[test]
    fn from_str_uses_permissive_policy() {
        let code: CompactCode = "12345".parse().unwrap();
        assert_eq!(code.to_string(), "123045");
        assert!("123366".parse::<CompactCode>().is_err());
        assert!("12a4x5".parse::<CompactCode>().is_err());
    }
}
