//! The `jde_julian` crate converts between Gregorian calendar dates and
//! compact "JDE Julian" business date codes.
//!
//! ```rust
//! use jde_julian::{CalendarDate, DateCodec};
//!
//! let codec = DateCodec::default();
//!
//! let date = CalendarDate::try_new(2024, 1, 1).unwrap();
//! let code = codec.encode(date);
//! assert_eq!(code.to_string(), "124001");
//!
//! assert!(codec.validate("124001"));
//! assert_eq!(codec.decode("124001").unwrap(), date);
//! ```
//!
//! A compact code has the shape `CYYDDD`: a century offset `C` counted
//! from the 1900s, the year within the century `YY`, and the 1-based day
//! of the year `DDD`. `123365` is December 31st, 2023 and `124001` is
//! January 1st, 2024. Despite the name, the code has no relation to the
//! Julian calendar or to Julian day numbers.
//!
//! Two form fields holding a calendar date and a compact code can be kept
//! in sync with [`sync::DateFieldPair`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod code;
pub mod codec;
pub mod date;
pub mod error;
pub mod options;
pub mod sync;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod parsers;

#[doc(inline)]
pub use error::{CodecError, ErrorKind};

/// The `jde_julian` result type
pub type CodecResult<T> = Result<T, CodecError>;

pub use crate::{
    code::CompactCode,
    codec::{decode, encode, validate, DateCodec},
    date::CalendarDate,
};

pub use date_equations::gregorian::is_leap_year;

#[doc(hidden)]
#[macro_export]
macro_rules! codec_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CodecError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CodecError::assert());
        }
    };
}
