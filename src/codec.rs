//! This module implements `DateCodec`, the conversion between calendar
//! dates and compact codes.

use crate::{
    code::CodeComponents,
    options::{CodecOptions, DayOverflow},
    CalendarDate, CodecResult, CompactCode,
};

/// Converts between [`CalendarDate`] and [`CompactCode`] under a set of
/// [`CodecOptions`].
///
/// Every operation is a pure function of its input.
///
/// ```rust
/// use jde_julian::{options::CodecOptions, CalendarDate, DateCodec};
///
/// let codec = DateCodec::new(CodecOptions::STRICT);
///
/// let date = CalendarDate::try_new(2024, 1, 1).unwrap();
/// assert_eq!(codec.encode(date).to_string(), "124001");
/// assert_eq!(codec.decode("124001").unwrap(), date);
///
/// assert!(codec.validate("124366"));
/// assert!(!codec.validate("124367"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateCodec {
    options: CodecOptions,
}

impl DateCodec {
    /// Creates a new `DateCodec` with the provided options.
    #[inline]
    #[must_use]
    pub const fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[inline]
    #[must_use]
    pub const fn options(&self) -> CodecOptions {
        self.options
    }

    /// Encodes a calendar date into its canonical compact code.
    ///
    /// Encoding never fails. The century offset is written without padding
    /// and may be negative or longer than one digit for years outside of
    /// 1900 to 2899.
    #[inline]
    #[must_use]
    pub fn encode(&self, date: CalendarDate) -> CompactCode {
        CompactCode::from(date)
    }

    /// Returns whether `code` is accepted by the configured validation policy.
    #[must_use]
    pub fn validate(&self, code: &str) -> bool {
        self.parse(code).is_ok()
    }

    /// Parses and range checks `code` with the configured validation policy.
    pub fn parse(&self, code: &str) -> CodecResult<CompactCode> {
        let result = CodeComponents::parse(code, self.options.validation_policy())
            .and_then(CodeComponents::into_code);

        #[cfg(feature = "log")]
        if let Err(ref err) = result {
            log::debug!(
                "{} policy rejected code {code:?}: {err}",
                self.options.validation_policy()
            );
        }

        result
    }

    /// Decodes `code` into the calendar date it refers to.
    ///
    /// Malformed codes are always an error. A day of year outside of the
    /// year's length is an error under [`DayOverflow::Reject`] and carried
    /// into the adjacent year under [`DayOverflow::Balance`].
    pub fn decode(&self, code: &str) -> CodecResult<CalendarDate> {
        match self.options.overflow {
            DayOverflow::Reject => self.parse(code)?.to_calendar_date(),
            DayOverflow::Balance => {
                let components = CodeComponents::parse(code, self.options.validation_policy())?;
                CalendarDate::from_ordinal(
                    components.full_year()?,
                    components.day_of_year,
                    DayOverflow::Balance,
                )
            }
        }
    }
}

/// Encodes `date` into its canonical compact code.
///
/// ```rust
/// use jde_julian::CalendarDate;
///
/// let date = CalendarDate::try_new(2023, 12, 31).unwrap();
/// assert_eq!(jde_julian::encode(date).to_string(), "123365");
/// ```
#[inline]
#[must_use]
pub fn encode(date: CalendarDate) -> CompactCode {
    DateCodec::default().encode(date)
}

/// Decodes `code` with the default options.
#[inline]
pub fn decode(code: &str) -> CodecResult<CalendarDate> {
    DateCodec::default().decode(code)
}

/// Validates `code` with the default options.
#[inline]
#[must_use]
pub fn validate(code: &str) -> bool {
    DateCodec::default().validate(code)
}
