//! Reading Jalali dates and times from ISO 8601 strings.
//!
//! The digits are read as they are written, so `1403-01-01` is the 1st of
//! Farvardin 1403, not a Gregorian date. Week dates have no meaning in the
//! Jalali calendar and are rejected, and any time zone offset is ignored.
//!
//! Fractions of a second are only kept to the millisecond, so a time
//! written with nine fractional digits reads back with the last six as
//! zeros.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::cal::datetime::{JalaliDate, TimeOfDay, JalaliDateTime, Error as DateTimeError};


impl FromStr for JalaliDate {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::date(input) {
            Ok(fields)  => fields_to_date(fields),
            Err(e)      => Err(Error::syntax(input, e)),
        }
    }
}

/// Reads `HH:MM:SS`, with an optional fraction kept to the millisecond.
impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match iso8601::time(input) {
            Ok(fields)  => fields_to_time(fields),
            Err(e)      => Err(Error::syntax(input, e)),
        }
    }
}

impl FromStr for JalaliDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fields = match iso8601::datetime(input) {
            Ok(fields)  => fields,
            Err(e)      => return Err(Error::syntax(input, e)),
        };

        let date = fields_to_date(fields.date)?;
        let time = fields_to_time(fields.time)?;
        Ok(Self::new(date, time))
    }
}


fn fields_to_date(fields: iso8601::Date) -> Result<JalaliDate, Error> {
    match fields {
        iso8601::Date::YMD { year, month, day } => {
            let month = narrow(month)?;
            let day = narrow(day)?;
            Ok(JalaliDate::of(year, month, day)?)
        }
        iso8601::Date::Ordinal { year, ddd } => {
            let yearday = narrow(ddd)?;
            Ok(JalaliDate::yd(year, yearday)?)
        }
        iso8601::Date::Week { .. } => {
            Err(Error::WeekDate)
        }
    }
}

fn fields_to_time(fields: iso8601::Time) -> Result<TimeOfDay, Error> {
    let h  = narrow(fields.hour)?;
    let m  = narrow(fields.minute)?;
    let s  = narrow(fields.second)?;
    let ns = fields.millisecond as i32 * 1_000_000;

    Ok(TimeOfDay::hms_nano(h, m, s, ns)?)
}

/// Shrinks a parsed field down to the width a date stores, treating
/// anything too large as out of range.
fn narrow<N: std::convert::TryFrom<u32>>(field: u32) -> Result<N, Error> {
    N::try_from(field).map_err(|_| Error::Date(DateTimeError::InvalidDate))
}


/// An error from reading a date or time out of a string.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The string was well-formed, but the fields don’t make a real date
    /// or time.
    Date(DateTimeError),

    /// The string was a week date, which has no Jalali equivalent.
    WeekDate,

    /// The string isn’t ISO 8601 at all.
    Parse(String),
}

impl Error {
    fn syntax(input: &str, message: String) -> Self {
        debug!("Failed to parse {:?} as ISO 8601: {}", input, message);
        Error::Parse(message)
    }
}

impl From<DateTimeError> for Error {
    fn from(error: DateTimeError) -> Self {
        Error::Date(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Date(ref error)    => write!(f, "parsing resulted in an invalid date: {}", error),
            Error::WeekDate           => write!(f, "week dates are not supported"),
            Error::Parse(ref string)  => write!(f, "parse error: {}", string),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::Date(ref error)  => Some(error),
            _                       => None,
        }
    }
}
