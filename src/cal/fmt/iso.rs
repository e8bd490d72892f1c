//! ISO 8601 renderings, used for both `Display` and `Debug`.

use std::fmt;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::datetime::{JalaliDate, TimeOfDay, JalaliDateTime};
use crate::cal::gregorian::{GregorianDate, GregorianDateTime};
use crate::util::RangeExt;


/// Writes a year-month-day triple, with four-digit years as they are and
/// anything else signed.
fn write_ymd(f: &mut fmt::Formatter, year: i32, month: i8, day: i8) -> fmt::Result {
    if year.is_within(0 .. 10000) {
        write!(f, "{:04}-{:02}-{:02}", year, month, day)
    }
    else {
        write!(f, "{:+05}-{:02}-{:02}", year, month, day)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_ymd(f, self.year(), self.month() as i8, self.day())
    }
}

impl fmt::Debug for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "JalaliDate({})", self)
    }
}

/// The fraction of a second is left off when it’s zero.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;

        match self.nanosecond() {
            0  => Ok(()),
            ns => write!(f, ".{:09}", ns),
        }
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02}:{:02}.{:09})", self.hour(), self.minute(), self.second(), self.nanosecond())
    }
}

impl fmt::Display for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

impl fmt::Debug for JalaliDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "JalaliDateTime({}T{:?})", self.date(), self.time())
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_ymd(f, self.year(), self.month(), self.day())
    }
}

impl fmt::Debug for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GregorianDate({})", self)
    }
}

impl fmt::Display for GregorianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{}", self.date(), self.time())
    }
}

impl fmt::Debug for GregorianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GregorianDateTime({}T{:?})", self.date(), self.time())
    }
}
