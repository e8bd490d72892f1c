//! Proleptic Gregorian dates, used as the bridge to the rest of the world.
//!
//! These are deliberately plain: a validated year-month-day triple that can
//! be turned into a Julian Day Number and back. All the interesting
//! arithmetic lives on the Jalali types.

use std::convert::TryFrom;

use crate::cal::datetime::{Error, TimeOfDay, Weekday};
use crate::cal::julian::{gregorian_to_jdn, jdn_to_gregorian, jdn_to_days_from_monday};
use crate::cal::TimePiece;
use crate::util::RangeExt;


/// A date in the proleptic Gregorian calendar, with astronomical year
/// numbering, so 1 BCE is year 0.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct GregorianDate {
    year:  i32,
    month: i8,
    day:   i8,
}

/// A Gregorian date paired with a time of day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct GregorianDateTime {
    date: GregorianDate,
    time: TimeOfDay,
}


/// Returns whether the given Gregorian year is a leap year.
pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in a Gregorian month, with January as 1.
fn days_in_month(year: i64, month: i8) -> i8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}


impl GregorianDate {

    /// Creates a new Gregorian date, failing with `InvalidDate` if the
    /// month or day is out of range.
    ///
    /// ```rust
    /// use jalali::GregorianDate;
    ///
    /// assert!(GregorianDate::ymd(2024, 2, 29).is_ok());
    /// assert!(GregorianDate::ymd(2023, 2, 29).is_err());
    /// assert!(GregorianDate::ymd(1900, 2, 29).is_err());
    /// ```
    pub fn ymd(year: i32, month: i8, day: i8) -> Result<Self, Error> {
        if month.is_within(1..13) && day.is_within(1 .. days_in_month(year.into(), month) + 1) {
            Ok(Self { year, month, day })
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Computes the date on the given Julian Day Number.
    ///
    /// ### Panics
    ///
    /// Panics if the resulting year does not fit in an `i32`.
    pub fn from_julian_day(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        let year = match i32::try_from(year) {
            Ok(year) => year,
            Err(_)   => panic!("Gregorian year {} is out of range", year),
        };

        Self { year, month: month as i8, day: day as i8 }
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_julian_day(self) -> i64 {
        gregorian_to_jdn(self.year.into(), self.month.into(), self.day.into())
    }

    pub fn year(self) -> i32 { self.year }

    /// The month, from January as 1 to December as 12.
    pub fn month(self) -> i8 { self.month }

    pub fn day(self) -> i8 { self.day }

    /// Returns the day of the week this date falls on.
    ///
    /// ```rust
    /// use jalali::{GregorianDate, Weekday};
    ///
    /// let date = GregorianDate::ymd(2024, 3, 20).unwrap();
    /// assert_eq!(date.weekday(), Weekday::Wednesday);
    /// ```
    pub fn weekday(self) -> Weekday {
        Weekday::from_days_after_monday(jdn_to_days_from_monday(self.to_julian_day()))
    }

    /// Returns whether this date is in a leap year.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year.into())
    }
}


impl GregorianDateTime {

    /// Creates a new date-time from a date and a time of day.
    pub fn new(date: GregorianDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Returns the date portion of this date-time.
    pub fn date(self) -> GregorianDate {
        self.date
    }

    /// Returns the time portion of this date-time.
    pub fn time(self) -> TimeOfDay {
        self.time
    }
}

impl TimePiece for GregorianDateTime {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn nanosecond(&self) -> i32 { self.time.nanosecond() }
}
