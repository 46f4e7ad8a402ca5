//! Configuration options for decoding, validation, and field syncing.

use core::{fmt, str::FromStr};

/// The full set of options for a [`DateCodec`][crate::DateCodec].
///
/// The two presets mirror the two field behaviors that are in use:
///
/// ```rust
/// use jde_julian::options::{CodecOptions, PairedFieldPolicy, ValidationPolicy};
///
/// let strict = CodecOptions::STRICT;
/// assert_eq!(strict.validation_policy(), ValidationPolicy::Strict);
/// assert_eq!(strict.paired_field_policy(), PairedFieldPolicy::Clear);
///
/// assert_eq!(CodecOptions::default(), CodecOptions::PERMISSIVE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Use fixed-width slicing with a maximum length instead of the
    /// five-or-six digit pattern.
    pub strict_length: bool,
    /// Clear the paired field when a field fails validation.
    pub clear_paired_field_on_error: bool,
    /// How `decode` treats a day of year past the end of the year.
    pub overflow: DayOverflow,
}

impl CodecOptions {
    /// Five or six digit codes; the paired field keeps its value on error.
    pub const PERMISSIVE: Self = Self {
        strict_length: false,
        clear_paired_field_on_error: false,
        overflow: DayOverflow::Reject,
    };

    /// At most six characters sliced at fixed offsets; the paired field is
    /// cleared on error.
    pub const STRICT: Self = Self {
        strict_length: true,
        clear_paired_field_on_error: true,
        overflow: DayOverflow::Reject,
    };

    /// Returns these options with the provided `DayOverflow`.
    #[inline]
    #[must_use]
    pub const fn with_overflow(mut self, overflow: DayOverflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Returns these options with the provided `ValidationPolicy`.
    #[inline]
    #[must_use]
    pub const fn with_validation_policy(mut self, policy: ValidationPolicy) -> Self {
        self.strict_length = matches!(policy, ValidationPolicy::Strict);
        self
    }

    /// Returns these options with the provided `PairedFieldPolicy`.
    #[inline]
    #[must_use]
    pub const fn with_paired_field_policy(mut self, policy: PairedFieldPolicy) -> Self {
        self.clear_paired_field_on_error = matches!(policy, PairedFieldPolicy::Clear);
        self
    }

    #[inline]
    pub const fn validation_policy(&self) -> ValidationPolicy {
        if self.strict_length {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Permissive
        }
    }

    #[inline]
    pub const fn paired_field_policy(&self) -> PairedFieldPolicy {
        if self.clear_paired_field_on_error {
            PairedFieldPolicy::Clear
        } else {
            PairedFieldPolicy::Retain
        }
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::PERMISSIVE
    }
}

/// How a code string is sliced and checked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Exactly five or six ASCII digits; the day of year is everything
    /// after the third digit.
    #[default]
    Permissive,
    /// At most six characters sliced at `[0, 1)`, `[1, 3)`, and `[3, 6)`,
    /// each read as a leading integer.
    Strict,
}

/// A parsing error for `ValidationPolicy`.
#[derive(Debug, Clone, Copy)]
pub struct ParseValidationPolicyError;

impl fmt::Display for ParseValidationPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid validation policy")
    }
}

impl FromStr for ValidationPolicy {
    type Err = ParseValidationPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            _ => Err(ParseValidationPolicyError),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        })
    }
}

/// What happens to the paired field when a field fails validation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PairedFieldPolicy {
    /// The paired field keeps its last value.
    #[default]
    Retain,
    /// The paired field is emptied.
    Clear,
}

/// A parsing error for `PairedFieldPolicy`.
#[derive(Debug, Clone, Copy)]
pub struct ParsePairedFieldPolicyError;

impl fmt::Display for ParsePairedFieldPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid paired field policy")
    }
}

impl FromStr for PairedFieldPolicy {
    type Err = ParsePairedFieldPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retain" => Ok(Self::Retain),
            "clear" => Ok(Self::Clear),
            _ => Err(ParsePairedFieldPolicyError),
        }
    }
}

impl fmt::Display for PairedFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Retain => "retain",
            Self::Clear => "clear",
        })
    }
}

/// `DayOverflow` decides what a day of year outside of the year's
/// length decodes to, and consists of the "reject" and "balance" options.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DayOverflow {
    /// Reject option
    #[default]
    Reject,
    /// Balance option
    ///
    /// Day `n` is `n - 1` days after January 1st, carrying into the
    /// following or previous year as needed.
    Balance,
}

/// A parsing error for `DayOverflow`
#[derive(Debug, Clone, Copy)]
pub struct ParseDayOverflowError;

impl fmt::Display for ParseDayOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid overflow value")
    }
}

impl FromStr for DayOverflow {
    type Err = ParseDayOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(Self::Reject),
            "balance" => Ok(Self::Balance),
            _ => Err(ParseDayOverflowError),
        }
    }
}

impl fmt::Display for DayOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reject => "reject",
            Self::Balance => "balance",
        })
    }
}
