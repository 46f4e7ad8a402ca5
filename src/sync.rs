//! Two form fields, one calendar date and one compact code, kept in sync.
//!
//! `DateFieldPair` holds the text and validation state of both fields. A
//! UI layer forwards each input event to it and renders the resulting
//! state; nothing here reaches into a document or reads global state.
//!
//! ```rust
//! use jde_julian::{options::CodecOptions, sync::{DateFieldPair, FieldUpdate}};
//!
//! let mut fields = DateFieldPair::new(CodecOptions::STRICT);
//!
//! fields.set_code_input("124060");
//! assert_eq!(fields.calendar().value(), "2024-02-29");
//!
//! let update = fields.set_code_input("123366");
//! assert_eq!(update, FieldUpdate::Rejected { cleared_paired: true });
//! assert!(fields.code().is_invalid());
//! assert_eq!(fields.calendar().value(), "");
//! ```

use alloc::string::{String, ToString};

use crate::{
    options::{CodecOptions, PairedFieldPolicy},
    CalendarDate, CodecResult, CompactCode, DateCodec,
};

/// The text and validation state of a single field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Field {
    value: String,
    invalid: bool,
}

impl Field {
    /// Returns the field's current text.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the field is marked invalid.
    #[inline]
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    fn set(&mut self, value: String) {
        self.value = value;
    }
}

/// The outcome of forwarding an input event to a [`DateFieldPair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Both fields now describe the same day.
    Synced {
        /// The date shown in the calendar field.
        date: CalendarDate,
        /// The canonical form of the code shown in the code field.
        code: CompactCode,
    },
    /// The edited field was marked invalid.
    Rejected {
        /// Whether the paired field was emptied.
        cleared_paired: bool,
    },
}

/// A calendar date field and a compact code field kept in sync.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DateFieldPair {
    calendar: Field,
    code: Field,
    codec: DateCodec,
}

impl DateFieldPair {
    /// Creates a new pair of empty fields.
    #[must_use]
    pub fn new(options: CodecOptions) -> Self {
        Self {
            calendar: Field::default(),
            code: Field::default(),
            codec: DateCodec::new(options),
        }
    }

    /// Creates a new pair of fields both describing `date`.
    #[must_use]
    pub fn with_date(date: CalendarDate, options: CodecOptions) -> Self {
        let mut fields = Self::new(options);
        fields.show(date, fields.codec.encode(date));
        fields
    }

    /// Creates a new pair of fields describing the current UTC date.
    #[cfg(feature = "sys")]
    pub fn today(options: CodecOptions) -> CodecResult<Self> {
        let date = crate::sys::current_utc_date()?;
        Ok(Self::with_date(date, options))
    }

    /// Returns the calendar date field.
    #[inline]
    #[must_use]
    pub fn calendar(&self) -> &Field {
        &self.calendar
    }

    /// Returns the compact code field.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &Field {
        &self.code
    }

    /// Returns the codec both fields are converted with.
    #[inline]
    #[must_use]
    pub fn codec(&self) -> &DateCodec {
        &self.codec
    }

    /// Returns the options in force for this pair.
    #[inline]
    #[must_use]
    pub fn options(&self) -> CodecOptions {
        self.codec.options()
    }

    /// Handles new text in the calendar field.
    ///
    /// A real calendar date refreshes the code field. Anything else marks
    /// the calendar field invalid.
    pub fn set_calendar_input(&mut self, input: &str) -> FieldUpdate {
        self.calendar.set(input.to_string());
        match input.parse::<CalendarDate>() {
            Ok(date) => {
                let code = self.codec.encode(date);
                self.code.set(code.to_string());
                self.mark_valid();
                FieldUpdate::Synced { date, code }
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("calendar field rejected {input:?}: {_err}");
                self.reject(Edited::Calendar)
            }
        }
    }

    /// Handles new text in the code field.
    ///
    /// Surrounding whitespace is ignored. A code accepted by the codec
    /// refreshes the calendar field. Anything else marks the code field
    /// invalid.
    pub fn set_code_input(&mut self, input: &str) -> FieldUpdate {
        self.code.set(input.to_string());
        match self.decode_code(input.trim()) {
            Ok((date, code)) => {
                self.calendar.set(date.to_string());
                self.mark_valid();
                FieldUpdate::Synced { date, code }
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                log::debug!("code field rejected {input:?}: {_err}");
                self.reject(Edited::Code)
            }
        }
    }

    fn decode_code(&self, input: &str) -> CodecResult<(CalendarDate, CompactCode)> {
        let date = self.codec.decode(input)?;
        Ok((date, self.codec.encode(date)))
    }

    fn show(&mut self, date: CalendarDate, code: CompactCode) {
        self.calendar.set(date.to_string());
        self.code.set(code.to_string());
        self.mark_valid();
    }

    fn mark_valid(&mut self) {
        self.calendar.invalid = false;
        self.code.invalid = false;
    }

    fn reject(&mut self, edited: Edited) -> FieldUpdate {
        let (field, paired) = match edited {
            Edited::Calendar => (&mut self.calendar, &mut self.code),
            Edited::Code => (&mut self.code, &mut self.calendar),
        };
        field.invalid = true;

        let cleared_paired =
            self.codec.options().paired_field_policy() == PairedFieldPolicy::Clear;
        if cleared_paired {
            paired.value.clear();
        }
        FieldUpdate::Rejected { cleared_paired }
    }
}

#[derive(Debug, Clone, Copy)]
enum Edited {
    Calendar,
    Code,
}
