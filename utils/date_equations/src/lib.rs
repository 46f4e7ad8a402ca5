//! # Date Equations
//!
//! Small, allocation-free Gregorian calendar equations used by
//! `jde_julian` to move between calendar dates, ordinal days and
//! epoch days.
//!
//! The epoch day conversions follow the Euclidean affine functions
//! described by Cassio Neri and Lorenz Schneider.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! assert_eq!(gregorian::ymd_from_epoch_days(0), (1970, 1, 1));
//! assert_eq!(gregorian::day_of_year(2024, 12, 31), 366);
//! ```
#![no_std]

pub mod gregorian;
