//! This module implements `CodecError`.

use alloc::borrow::Cow;
use core::fmt;

/// The kind of a [`CodecError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The calendar field does not hold a real calendar date.
    #[default]
    InvalidCalendarDate,
    /// The code failed structural or range validation.
    InvalidCompactCode,
    /// The result would leave the supported date window.
    Range,
    /// An internal invariant did not hold.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidCalendarDate => "InvalidCalendarDate",
            Self::InvalidCompactCode => "InvalidCompactCode",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type returned by `jde_julian`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl CodecError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create an invalid calendar date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidCalendarDate)
    }

    /// Create an invalid compact code error.
    #[inline]
    #[must_use]
    pub const fn invalid_code() -> Self {
        Self::new(ErrorKind::InvalidCompactCode)
    }

    /// Create a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an implementation error.
    #[inline]
    #[must_use]
    pub(crate) const fn assert() -> Self {
        Self {
            kind: ErrorKind::Assert,
            msg: Cow::Borrowed("implementation error occurred."),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}
