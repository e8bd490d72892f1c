#![crate_name = "jalali"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [Jalali](https://en.wikipedia.org/wiki/Solar_Hijri_calendar)
//! (Persian) calendar conversion, formatting, and arithmetic.
//!
//! Every calendar here goes through the Astronomical Julian Day Number, a
//! plain count of days, so conversions are exact integer arithmetic.
//!
//! # Examples
//!
//! ```
//! use jalali::{JalaliDate, JalaliDateTime, GregorianDate, Weekday, DatePiece};
//!
//! let nowruz = JalaliDate::of(1403, 1, 1).unwrap();
//! assert_eq!(nowruz.to_gregorian(), GregorianDate::ymd(2024, 3, 20).unwrap());
//! assert_eq!(nowruz.weekday(), Weekday::Wednesday);
//! assert!(nowruz.is_leap_year());
//!
//! let then: JalaliDateTime = "1404-08-19T13:05:09".parse().unwrap();
//! assert_eq!(then.to_string(), "1404-08-19T13:05:09");
//!
//! let _ = JalaliDateTime::now();
//! ```

mod cal;
pub use crate::cal::{DatePiece, TimePiece};
pub use crate::cal::datetime::{JalaliDate, TimeOfDay, JalaliDateTime, Month, Weekday, Error};
pub use crate::cal::gregorian::{GregorianDate, GregorianDateTime};
pub use crate::cal::range::{DateRange, Bound, Days};
pub use crate::cal::period::Period;
pub use crate::cal::{convenience, iter, julian, rule};

#[cfg(feature="format")]
pub use crate::cal::fmt::custom as format;

#[cfg(feature="parse")]
pub use crate::cal::parse::Error as ParseError;

#[cfg(feature="serde")]
pub use crate::cal::serial;

mod duration;
pub use crate::duration::Duration;

mod instant;
pub use crate::instant::Instant;

mod system;
mod util;
