//! This module implements parsing and formatting of calendar field text.

use alloc::{format, string::String};

use ixdtf::{encoding::Utf8, parsers::IxdtfParser, records::IxdtfParseRecord, ParseError};
use writeable::{LengthHint, Writeable};

use crate::{CalendarDate, CodecError, CodecResult};

/// Maps an ixdtf `ParseError` onto a readable message.
fn map_parse_error(err: ParseError) -> CodecError {
    use ParseError::*;
    let message: String = match err {
        InvalidMonthRange => "Month is outside valid range (1-12)".into(),
        InvalidDayRange => "Day is outside valid range for the given month/year".into(),
        DateYear => "Invalid year format".into(),
        DateMonth => "Invalid month format".into(),
        DateDay => "Invalid day format".into(),
        AbruptEnd { location } => format!("Unexpected end while parsing {location}"),
        InvalidEnd => "Unexpected character at end of input".into(),
        _ => format!("Parse error: {err:?}"),
    };
    CodecError::invalid_date().with_message(message)
}

/// Checks that a parse record holds a bare calendar date.
fn date_only(record: IxdtfParseRecord<'_, Utf8>) -> CodecResult<CalendarDate> {
    if record.time.is_some() || record.offset.is_some() {
        return Err(CodecError::invalid_date()
            .with_message("calendar dates must not contain a time or offset."));
    }
    if record.tz.is_some() || record.calendar.is_some() {
        return Err(
            CodecError::invalid_date().with_message("calendar dates must not contain annotations.")
        );
    }
    let date = record
        .date
        .ok_or(CodecError::invalid_date().with_message("calendar field must contain a date."))?;
    CalendarDate::try_new(date.year, date.month, date.day)
        .map_err(|e| CodecError::invalid_date().with_message(e.into_message()))
}

/// A utility function for parsing calendar field text such as `2024-01-01`.
#[inline]
pub(crate) fn parse_calendar_date(source: &[u8]) -> CodecResult<CalendarDate> {
    let record = IxdtfParser::from_utf8(source)
        .parse()
        .map_err(map_parse_error)?;
    date_only(record)
}

// ==== Formatting ====

#[derive(Debug)]
pub(crate) struct FormattableDate(pub i32, pub u8, pub u8);

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded(u32::from(self.1), 2, sink)?;
        sink.write_char('-')?;
        write_padded(u32::from(self.2), 2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.0) { 4 } else { 7 };

        LengthHint::exact(6 + year_length)
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_padded(year.unsigned_abs(), 4, sink)
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        sink.write_char(sign)?;
        write_padded(year.unsigned_abs(), 6, sink)
    }
}

/// Returns the count of decimal digits in `value`.
pub(crate) const fn digit_count(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// Writes `value` left padded with zeros to at least `width` digits.
pub(crate) fn write_padded<W: core::fmt::Write + ?Sized>(
    value: u32,
    width: usize,
    sink: &mut W,
) -> core::fmt::Result {
    for _ in digit_count(value)..width {
        sink.write_char('0')?;
    }
    value.write_to(sink)
}
