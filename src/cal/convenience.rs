//! Adds convenience functions to some structs.
//!
//! # Example
//! ```
//! use jalali::JalaliDate;
//! use jalali::convenience::Today;
//!
//! let today: JalaliDate = JalaliDate::today();
//! ```

use crate::cal::datetime::{JalaliDate, JalaliDateTime};
use crate::cal::gregorian::GregorianDate;

/// Adds `today()` to the date types, using the current date in UTC.
pub trait Today {
    fn today() -> Self;
}

impl Today for JalaliDate {
    fn today() -> Self {
        JalaliDateTime::now().date()
    }
}

impl Today for GregorianDate {
    fn today() -> Self {
        JalaliDate::today().to_gregorian()
    }
}
