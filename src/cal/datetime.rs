//! Dates, times, datetimes, months, and weekdays.

use std::cmp;
use std::convert::TryFrom;
use std::error::Error as ErrorTrait;
use std::fmt;
use std::ops::{Add, Sub};

use log::trace;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::gregorian::{GregorianDate, GregorianDateTime};
use crate::cal::julian::{jdn_to_gregorian, UNIX_EPOCH_JDN};
use crate::cal::rule;
use crate::duration::Duration;
use crate::instant::Instant;
use crate::system::sys_time;
use crate::util::RangeExt;

use self::Month::*;
use self::Weekday::*;


/// Number of nanoseconds in a second.
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Number of nanoseconds in a minute.
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;

/// Number of nanoseconds in an hour.
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Number of nanoseconds in a day. As everywhere in this library, leap
/// seconds are simply ignored.
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;

/// Number of seconds in a day.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days in the first half of every year: six months of 31 days.
const DAYS_IN_FIRST_HALF: i64 = 6 * 31;


/// Every month, in order, so a month can be looked up by its index.
pub(crate) static MONTHS: &[Month; 12] = &[
    Farvardin,  Ordibehesht,  Khordad,
    Tir,        Mordad,       Shahrivar,
    Mehr,       Aban,         Azar,
    Dey,        Bahman,       Esfand,
];

/// Every weekday, starting from Monday, as the Gregorian bridge numbers them.
static WEEKDAYS_FROM_MONDAY: &[Weekday; 7] = &[
    Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday,
];


/// A **Jalali date** is a day-long span on the timeline in the Persian
/// civil calendar, *without a time zone*.
///
/// Dates compare by year, then month, then day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct JalaliDate {
    year:  i32,
    month: Month,
    day:   i8,
}

/// A **time of day** is a time on the timeline that recurs once a day,
/// *without a time zone*, with nanosecond precision.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct TimeOfDay {
    nano_of_day: i64,
}

/// A **Jalali date-time** is an exact instant on the timeline, *without a
/// time zone*.
///
/// Date-times compare by date first, then by time of day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct JalaliDateTime {
    date: JalaliDate,
    time: TimeOfDay,
}


impl JalaliDate {

    /// Creates a new date instance from the given year, month, and day
    /// fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an error.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use jalali::{JalaliDate, Month, DatePiece};
    ///
    /// let date = JalaliDate::ymd(1403, Month::Farvardin, 1).unwrap();
    /// assert_eq!(date.year(), 1403);
    /// assert_eq!(date.month(), Month::Farvardin);
    /// assert_eq!(date.day(), 1);
    ///
    /// assert!(JalaliDate::ymd(1402, Month::Esfand, 30).is_err());
    /// ```
    pub fn ymd(year: i32, month: Month, day: i8) -> Result<Self, Error> {
        let length = rule::days_in_month(year.into(), month as i64);

        if day.is_within(1 .. length + 1) {
            Ok(Self { year, month, day })
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Creates a new date instance from numeric year, month, and day
    /// fields, with Farvardin as month 1.
    ///
    /// ```rust
    /// use jalali::JalaliDate;
    ///
    /// assert!(JalaliDate::of(1402, 8, 30).is_ok());
    /// assert!(JalaliDate::of(1402, 8, 31).is_err());
    /// assert!(JalaliDate::of(1402, 13, 1).is_err());
    /// ```
    pub fn of(year: i32, month: i8, day: i8) -> Result<Self, Error> {
        Self::ymd(year, Month::from_one(month)?, day)
    }

    /// Creates a new date instance from the given year and day-of-year
    /// values, where the first day of Farvardin is day 1.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use jalali::{JalaliDate, Month, DatePiece};
    ///
    /// let date = JalaliDate::yd(1403, 187).unwrap();
    /// assert_eq!(date.month(), Month::Mehr);
    /// assert_eq!(date.day(), 1);
    ///
    /// assert!(JalaliDate::yd(1403, 366).is_ok());
    /// assert!(JalaliDate::yd(1404, 366).is_err());
    /// ```
    pub fn yd(year: i32, yearday: i16) -> Result<Self, Error> {
        if yearday.is_within(1 .. rule::days_in_year(year.into()) + 1) {
            Ok(Self::from_day_index(year.into(), i64::from(yearday) - 1))
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Computes the date that falls on the given Astronomical Julian Day
    /// Number.
    ///
    /// ### Panics
    ///
    /// Panics if the resulting year does not fit in an `i32`.
    ///
    /// ### Examples
    ///
    /// ```rust
    /// use jalali::JalaliDate;
    ///
    /// let date = JalaliDate::from_julian_day(2_460_390);
    /// assert_eq!(date, JalaliDate::of(1403, 1, 1).unwrap());
    /// ```
    pub fn from_julian_day(jdn: i64) -> Self {
        let (gregorian_year, _, _) = jdn_to_gregorian(jdn);
        let mut year = gregorian_year - rule::GREGORIAN_YEAR_OFFSET;
        let mut new_year = rule::farvardin_first_jdn(year);

        // The Gregorian year starts before Nowruz, so the first few months
        // of it belong to the previous Jalali year.
        while jdn < new_year {
            year -= 1;
            new_year = rule::farvardin_first_jdn(year);
            trace!("JDN {} precedes Nowruz, stepping back to year {}", jdn, year);
        }

        // Only reachable once the extrapolated cycle has drifted a long way
        // from the table.
        loop {
            let next_new_year = rule::farvardin_first_jdn(year + 1);
            if jdn < next_new_year {
                break;
            }

            year += 1;
            new_year = next_new_year;
        }

        Self::from_day_index(year, jdn - new_year)
    }

    /// Returns the Astronomical Julian Day Number of this date.
    pub fn to_julian_day(self) -> i64 {
        rule::farvardin_first_jdn(self.year.into()) + self.day_index()
    }

    /// Computes the date from a year and a zero-based index into that year,
    /// which must already be known to fit.
    fn from_day_index(year: i64, index: i64) -> Self {
        let (month_index, day) =
            if index < DAYS_IN_FIRST_HALF {
                (index / 31, index % 31 + 1)
            }
            else {
                let rest = index - DAYS_IN_FIRST_HALF;
                (rest / 30 + 6, rest % 30 + 1)
            };

        Self {
            year:  narrow_year(year),
            month: MONTHS[month_index as usize],
            day:   day as i8,
        }
    }

    /// Returns the zero-based index of this date into its year.
    fn day_index(self) -> i64 {
        i64::from(self.month.days_before_start()) + i64::from(self.day) - 1
    }

    /// Converts this date to the proleptic Gregorian calendar.
    ///
    /// ```rust
    /// use jalali::JalaliDate;
    ///
    /// let nowruz = JalaliDate::of(1403, 1, 1).unwrap().to_gregorian();
    /// assert_eq!((nowruz.year(), nowruz.month(), nowruz.day()), (2024, 3, 20));
    /// ```
    pub fn to_gregorian(self) -> GregorianDate {
        GregorianDate::from_julian_day(self.to_julian_day())
    }

    /// Converts a proleptic Gregorian date to the Jalali calendar.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_julian_day(date.to_julian_day())
    }

    /// Returns the number of days since **1st January, 1970**.
    pub fn to_epoch_day(self) -> i64 {
        self.to_julian_day() - UNIX_EPOCH_JDN
    }

    /// Computes the date that lies the given number of days after
    /// **1st January, 1970**.
    pub fn from_epoch_day(days: i64) -> Self {
        Self::from_julian_day(days + UNIX_EPOCH_JDN)
    }

    /// Returns the number of days from this date until the given one,
    /// which is negative if the other date comes first.
    pub fn days_until(self, other: Self) -> i64 {
        other.to_julian_day() - self.to_julian_day()
    }

    /// Returns the number of days in this date’s month.
    pub fn length_of_month(self) -> i8 {
        rule::days_in_month(self.year.into(), self.month as i64)
    }

    /// Returns the number of days in this date’s year.
    pub fn length_of_year(self) -> i16 {
        rule::days_in_year(self.year.into())
    }

    /// Returns whether this date’s year is a leap year.
    pub fn is_leap_year(self) -> bool {
        rule::is_leap_year(self.year.into())
    }

    /// Returns the date the given number of days later. Negative numbers
    /// move backwards.
    pub fn plus_days(self, days: i64) -> Self {
        if days == 0 {
            return self;
        }

        Self::from_julian_day(self.to_julian_day() + days)
    }

    /// Returns the date the given number of days earlier.
    pub fn minus_days(self, days: i64) -> Self {
        self.plus_days(-days)
    }

    /// Returns the date the given number of months later, keeping the day
    /// of the month if it exists. When the new month is too short, the day
    /// gets clamped to its last day rather than spilling over.
    ///
    /// ```rust
    /// use jalali::JalaliDate;
    ///
    /// let date = JalaliDate::of(1402, 1, 31).unwrap();
    /// assert_eq!(date.plus_months(7), JalaliDate::of(1402, 8, 30).unwrap());
    /// assert_eq!(date.plus_months(-1), JalaliDate::of(1401, 12, 29).unwrap());
    /// ```
    pub fn plus_months(self, months: i64) -> Self {
        if months == 0 {
            return self;
        }

        let index = i64::from(self.year) * 12 + self.month.months_from_farvardin() as i64 + months;
        let year  = narrow_year(index.div_euclid(12));
        let month = MONTHS[index.rem_euclid(12) as usize];
        self.with_clamped_day(year, month)
    }

    /// Returns the date the given number of months earlier, clamping the
    /// day as `plus_months` does.
    pub fn minus_months(self, months: i64) -> Self {
        self.plus_months(-months)
    }

    /// Returns the same month and day the given number of years later,
    /// clamping the 30th of Esfand to the 29th if the new year is not a
    /// leap year.
    pub fn plus_years(self, years: i64) -> Self {
        if years == 0 {
            return self;
        }

        let year = narrow_year(i64::from(self.year) + years);
        self.with_clamped_day(year, self.month)
    }

    /// Returns the same month and day the given number of years earlier.
    pub fn minus_years(self, years: i64) -> Self {
        self.plus_years(-years)
    }

    fn with_clamped_day(self, year: i32, month: Month) -> Self {
        let length = rule::days_in_month(year.into(), month as i64);
        let day = cmp::min(self.day, length);

        if day != self.day {
            trace!("Clamping day {} to {} in {}-{:02}", self.day, day, year, month as i8);
        }

        Self { year, month, day }
    }
}

impl DatePiece for JalaliDate {
    fn year(&self) -> i32 { self.year }
    fn month(&self) -> Month { self.month }
    fn day(&self) -> i8 { self.day }
    fn yearday(&self) -> i16 { self.month.days_before_start() + i16::from(self.day) }
    fn weekday(&self) -> Weekday { self.to_gregorian().weekday() }
}

/// Converts a year that has been computed in 64 bits back down to the
/// 32 bits a date stores.
fn narrow_year(year: i64) -> i32 {
    match i32::try_from(year) {
        Ok(year) => year,
        Err(_)   => panic!("Jalali year {} is out of range", year),
    }
}


impl TimeOfDay {

    /// Returns the time at midnight, with all fields initialised to 0.
    pub fn midnight() -> Self {
        Self { nano_of_day: 0 }
    }

    /// Creates a new time from the number of nanoseconds that have elapsed
    /// since midnight.
    ///
    /// The value must be less than the number of nanoseconds in a day,
    /// otherwise an `Err` is returned.
    pub fn from_nano_of_day(nano_of_day: i64) -> Result<Self, Error> {
        if nano_of_day.is_within(0 .. NANOS_PER_DAY) {
            Ok(Self { nano_of_day })
        }
        else {
            Err(Error::InvalidTime)
        }
    }

    /// Creates a new time with the given hour and minute fields. The
    /// second and nanosecond fields are set to 0.
    pub fn hm(hour: i8, minute: i8) -> Result<Self, Error> {
        Self::hms_nano(hour, minute, 0, 0)
    }

    /// Creates a new time with the given hour, minute, and second fields.
    /// The nanosecond field is set to 0.
    pub fn hms(hour: i8, minute: i8, second: i8) -> Result<Self, Error> {
        Self::hms_nano(hour, minute, second, 0)
    }

    /// Creates a new time with the given hour, minute, second, and
    /// nanosecond fields.
    ///
    /// The values are checked for validity before instantiation, and
    /// passing in values out of range will return an `Err`.
    ///
    /// ```rust
    /// use jalali::{TimeOfDay, TimePiece};
    ///
    /// let time = TimeOfDay::hms_nano(13, 5, 9, 123_456_789).unwrap();
    /// assert_eq!(time.hour(), 13);
    /// assert_eq!(time.nanosecond(), 123_456_789);
    ///
    /// assert!(TimeOfDay::hms_nano(24, 0, 0, 0).is_err());
    /// ```
    pub fn hms_nano(hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<Self, Error> {
        if hour.is_within(0..24)   && minute.is_within(0..60)
        && second.is_within(0..60) && nanosecond.is_within(0..1_000_000_000)
        {
            let nano_of_day = i64::from(hour)   * NANOS_PER_HOUR
                            + i64::from(minute) * NANOS_PER_MINUTE
                            + i64::from(second) * NANOS_PER_SECOND
                            + i64::from(nanosecond);
            Ok(Self { nano_of_day })
        }
        else {
            Err(Error::InvalidTime)
        }
    }

    /// Returns the number of nanoseconds since midnight.
    pub fn nano_of_day(self) -> i64 {
        self.nano_of_day
    }

    /// Calculate the number of seconds since midnight this time is at,
    /// ignoring the fraction of a second.
    pub fn to_seconds(self) -> i64 {
        self.nano_of_day / NANOS_PER_SECOND
    }
}

impl TimePiece for TimeOfDay {
    fn hour(&self) -> i8 { (self.nano_of_day / NANOS_PER_HOUR) as i8 }
    fn minute(&self) -> i8 { (self.nano_of_day % NANOS_PER_HOUR / NANOS_PER_MINUTE) as i8 }
    fn second(&self) -> i8 { (self.nano_of_day % NANOS_PER_MINUTE / NANOS_PER_SECOND) as i8 }
    fn nanosecond(&self) -> i32 { (self.nano_of_day % NANOS_PER_SECOND) as i32 }
}


impl JalaliDateTime {

    /// Creates a new date-time from a date and a time of day.
    pub fn new(date: JalaliDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Creates a new date-time from a date and the hour, minute, second,
    /// and nanosecond fields of its time.
    ///
    /// ```rust
    /// use jalali::{JalaliDate, JalaliDateTime, TimePiece};
    ///
    /// let date = JalaliDate::of(1404, 8, 19).unwrap();
    /// let then = JalaliDateTime::of(date, 13, 5, 9, 0).unwrap();
    /// assert_eq!(then.minute(), 5);
    ///
    /// assert!(JalaliDateTime::of(date, 13, 60, 9, 0).is_err());
    /// ```
    pub fn of(date: JalaliDate, hour: i8, minute: i8, second: i8, nanosecond: i32) -> Result<Self, Error> {
        TimeOfDay::hms_nano(hour, minute, second, nanosecond).map(|time| Self::new(date, time))
    }

    /// Creates a new date-time from a date and the number of nanoseconds
    /// into that day.
    pub fn of_nano_of_day(date: JalaliDate, nano_of_day: i64) -> Result<Self, Error> {
        TimeOfDay::from_nano_of_day(nano_of_day).map(|time| Self::new(date, time))
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, setting the
    /// number of nanoseconds to 0.
    pub fn at(seconds_since_1970_epoch: i64) -> Self {
        Self::at_ns(seconds_since_1970_epoch, 0)
    }

    /// Computes a complete date-time based on the number of seconds that
    /// have elapsed since **midnight, 1st January, 1970**, along with the
    /// nanosecond of that second.
    pub fn at_ns(seconds_since_1970_epoch: i64, nanosecond_of_second: i32) -> Self {
        let days = seconds_since_1970_epoch.div_euclid(SECONDS_IN_DAY);
        let secs = seconds_since_1970_epoch.rem_euclid(SECONDS_IN_DAY);

        Self::new(JalaliDate::from_epoch_day(days), TimeOfDay::midnight())
            .plus_nanos(secs * NANOS_PER_SECOND + i64::from(nanosecond_of_second))
    }

    /// Computes a complete date-time based on the values in the given
    /// Instant parameter.
    pub fn from_instant(instant: Instant) -> Self {
        Self::at_ns(instant.seconds(), instant.nanoseconds())
    }

    /// Returns the instant this date-time is at, treating it as UTC.
    pub fn to_instant(self) -> Instant {
        let seconds = self.date.to_epoch_day() * SECONDS_IN_DAY + self.time.to_seconds();
        Instant::at_ns(seconds, self.time.nanosecond())
    }

    /// Creates a new date-time set to the current time in UTC.
    #[cfg_attr(not(unix), allow(unused_unsafe))]
    pub fn now() -> Self {
        let (s, ns) = unsafe { sys_time() };
        Self::at_ns(s, ns)
    }

    /// Returns the date portion of this date-time stamp.
    pub fn date(self) -> JalaliDate {
        self.date
    }

    /// Returns the time portion of this date-time stamp.
    pub fn time(self) -> TimeOfDay {
        self.time
    }

    /// Returns the number of nanoseconds into the day.
    pub fn nano_of_day(self) -> i64 {
        self.time.nano_of_day
    }

    /// Returns the Astronomical Julian Day Number of the date portion.
    pub fn to_julian_day(self) -> i64 {
        self.date.to_julian_day()
    }

    /// Converts this date-time to the proleptic Gregorian calendar,
    /// keeping the time of day.
    pub fn to_gregorian(self) -> GregorianDateTime {
        GregorianDateTime::new(self.date.to_gregorian(), self.time)
    }

    /// Converts a proleptic Gregorian date-time to the Jalali calendar.
    pub fn from_gregorian(datetime: GregorianDateTime) -> Self {
        Self::new(JalaliDate::from_gregorian(datetime.date()), datetime.time())
    }

    /// Returns the date-time the given number of nanoseconds later.
    ///
    /// Any whole days gained or lost get carried over to the date, so
    /// going back from midnight borrows a day:
    ///
    /// ```rust
    /// use jalali::{JalaliDate, JalaliDateTime};
    ///
    /// let date = JalaliDate::of(1403, 1, 1).unwrap();
    /// let midnight = JalaliDateTime::of_nano_of_day(date, 0).unwrap();
    /// let before = midnight.plus_nanos(-1);
    ///
    /// assert_eq!(before.date(), JalaliDate::of(1402, 12, 29).unwrap());
    /// assert_eq!(before.nano_of_day(), 86_400_000_000_000 - 1);
    /// ```
    pub fn plus_nanos(self, nanos: i64) -> Self {
        if nanos == 0 {
            return self;
        }

        let sum  = self.time.nano_of_day + nanos;
        let days = sum.div_euclid(NANOS_PER_DAY);
        let time = TimeOfDay { nano_of_day: sum.rem_euclid(NANOS_PER_DAY) };

        Self::new(self.date.plus_days(days), time)
    }

    /// Returns the date-time the given number of seconds later.
    pub fn plus_seconds(self, seconds: i64) -> Self {
        self.plus_units(seconds, SECONDS_IN_DAY, NANOS_PER_SECOND)
    }

    /// Returns the date-time the given number of minutes later.
    pub fn plus_minutes(self, minutes: i64) -> Self {
        self.plus_units(minutes, 24 * 60, NANOS_PER_MINUTE)
    }

    /// Returns the date-time the given number of hours later.
    pub fn plus_hours(self, hours: i64) -> Self {
        self.plus_units(hours, 24, NANOS_PER_HOUR)
    }

    // Whole days go to the date first, so only less than a day of units
    // ever gets scaled to nanoseconds.
    fn plus_units(self, count: i64, per_day: i64, nanos_per_unit: i64) -> Self {
        let days = count.div_euclid(per_day);
        let rest = count.rem_euclid(per_day) * nanos_per_unit;
        self.plus_days(days).plus_nanos(rest)
    }

    /// Returns the date-time the given number of days later, at the same
    /// time of day.
    pub fn plus_days(self, days: i64) -> Self {
        Self::new(self.date.plus_days(days), self.time)
    }

    pub fn minus_nanos(self, nanos: i64) -> Self { self.plus_nanos(-nanos) }
    pub fn minus_seconds(self, seconds: i64) -> Self { self.plus_seconds(-seconds) }
    pub fn minus_minutes(self, minutes: i64) -> Self { self.plus_minutes(-minutes) }
    pub fn minus_hours(self, hours: i64) -> Self { self.plus_hours(-hours) }
    pub fn minus_days(self, days: i64) -> Self { self.plus_days(-days) }
}

impl DatePiece for JalaliDateTime {
    fn year(&self) -> i32 { self.date.year }
    fn month(&self) -> Month { self.date.month }
    fn day(&self) -> i8 { self.date.day }
    fn yearday(&self) -> i16 { self.date.yearday() }
    fn weekday(&self) -> Weekday { self.date.weekday() }
}

impl TimePiece for JalaliDateTime {
    fn hour(&self) -> i8 { self.time.hour() }
    fn minute(&self) -> i8 { self.time.minute() }
    fn second(&self) -> i8 { self.time.second() }
    fn nanosecond(&self) -> i32 { self.time.nanosecond() }
}

impl Add<Duration> for JalaliDateTime {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = duration.lengths();
        self.plus_seconds(seconds).plus_nanos(i64::from(nanoseconds))
    }
}

impl Sub<Duration> for JalaliDateTime {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = duration.lengths();
        self.minus_seconds(seconds).minus_nanos(i64::from(nanoseconds))
    }
}

impl Sub<JalaliDateTime> for JalaliDateTime {
    type Output = Duration;

    /// Returns the length of time between two date-times, which is negative
    /// if the right-hand side is later.
    fn sub(self, other: Self) -> Duration {
        let days  = other.date.days_until(self.date);
        let nanos = self.time.nano_of_day - other.time.nano_of_day;
        let within_day = Duration::of_ns(nanos.div_euclid(NANOS_PER_SECOND), nanos.rem_euclid(NANOS_PER_SECOND) as i32);
        Duration::of(days * SECONDS_IN_DAY) + within_day
    }
}


/// An error from constructing a date or time out of fields that do not
/// describe one.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Error {

    /// The month, or the day for that month and year, is out of range.
    InvalidDate,

    /// The hour, minute, second, nanosecond, or nanosecond of the day is
    /// out of range.
    InvalidTime,

    /// A date range was given a start that comes after its end.
    InvertedRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidDate    => write!(f, "date field out of range"),
            Error::InvalidTime    => write!(f, "time field out of range"),
            Error::InvertedRange  => write!(f, "range starts after it ends"),
        }
    }
}

impl ErrorTrait for Error {
}


/// A month of the Jalali year, starting with Farvardin, and ending with
/// Esfand.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors. It’s 1-indexed, so Farvardin becomes 1 when you use
/// `as i8` in code.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub enum Month {
    Farvardin =  1, Ordibehesht =  2, Khordad   =  3,
    Tir       =  4, Mordad      =  5, Shahrivar =  6,
    Mehr      =  7, Aban        =  8, Azar      =  9,
    Dey       = 10, Bahman      = 11, Esfand    = 12,
}

#[allow(clippy::match_same_arms)]
impl Month {

    /// Returns the number of days in this month, depending on whether it’s
    /// a leap year or not.
    pub fn days_in_month(self, leap_year: bool) -> i8 {
        match self {
            Farvardin => 31, Ordibehesht => 31, Khordad   => 31,
            Tir       => 31, Mordad      => 31, Shahrivar => 31,
            Mehr      => 30, Aban        => 30, Azar      => 30,
            Dey       => 30, Bahman      => 30,
            Esfand    => if leap_year { 30 } else { 29 },
        }
    }

    /// Returns the number of days that have elapsed in a year *before* this
    /// month begins. Only Esfand is affected by leap years, so no check is
    /// needed.
    pub(crate) fn days_before_start(self) -> i16 {
        match self {
            Farvardin =>   0, Ordibehesht =>  31, Khordad   =>  62,
            Tir       =>  93, Mordad      => 124, Shahrivar => 155,
            Mehr      => 186, Aban        => 216, Azar      => 246,
            Dey       => 276, Bahman      => 306, Esfand    => 336,
        }
    }

    /// Returns the number of months before this one in the year, so
    /// Farvardin is 0 and Esfand is 11.
    pub fn months_from_farvardin(self) -> usize {
        self as usize - 1
    }

    /// Returns the month based on a number, with Farvardin as **Month 1**,
    /// Ordibehesht as **Month 2**, and so on.
    ///
    /// ```rust
    /// use jalali::Month;
    /// assert_eq!(Month::from_one(7), Ok(Month::Mehr));
    /// assert!(Month::from_one(0).is_err());
    /// ```
    pub fn from_one(month: i8) -> Result<Self, Error> {
        if month.is_within(1..13) {
            Ok(MONTHS[month as usize - 1])
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Returns the month based on a number, with Farvardin as **Month 0**,
    /// Ordibehesht as **Month 1**, and so on.
    ///
    /// ```rust
    /// use jalali::Month;
    /// assert_eq!(Month::from_zero(11), Ok(Month::Esfand));
    /// assert!(Month::from_zero(12).is_err());
    /// ```
    pub fn from_zero(month: i8) -> Result<Self, Error> {
        if month.is_within(0..12) {
            Ok(MONTHS[month as usize])
        }
        else {
            Err(Error::InvalidDate)
        }
    }
}


/// A named day of the week.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

// Weekdays come from the Gregorian bridge, so their numbering follows
// ISO-8601 with Monday as day 1, even though the Iranian civil week starts
// on Saturday. Code that wants a Saturday-first week passes the start day
// in explicitly (see `JalaliDate::start_of_week`).

impl Weekday {

    /// Returns the ISO-8601 number of this weekday, from Monday as 1 to
    /// Sunday as 7.
    pub fn days_from_monday_as_one(self) -> i8 {
        match self {
            Sunday   => 7,  Monday    => 1,
            Tuesday  => 2,  Wednesday => 3,
            Thursday => 4,  Friday    => 5,
            Saturday => 6,
        }
    }

    /// Return the weekday based on a number, with Sunday as Day 0, Monday as
    /// Day 1, and so on.
    ///
    /// ```rust
    /// use jalali::Weekday;
    /// assert_eq!(Weekday::from_zero(6), Ok(Weekday::Saturday));
    /// assert!(Weekday::from_zero(7).is_err());
    /// ```
    pub fn from_zero(weekday: i8) -> Result<Self, Error> {
        Ok(match weekday {
            0 => Sunday,     1 => Monday,    2 => Tuesday,
            3 => Wednesday,  4 => Thursday,  5 => Friday,
            6 => Saturday,   _ => return Err(Error::InvalidDate),
        })
    }

    /// Return the weekday based on its ISO-8601 number, with Monday as
    /// Day 1 and Sunday as Day 7.
    pub fn from_one(weekday: i8) -> Result<Self, Error> {
        if weekday.is_within(1..8) {
            Ok(WEEKDAYS_FROM_MONDAY[weekday as usize - 1])
        }
        else {
            Err(Error::InvalidDate)
        }
    }

    /// Returns the weekday a number of days after a Monday, wrapping
    /// around every week.
    pub(crate) fn from_days_after_monday(days: i64) -> Self {
        WEEKDAYS_FROM_MONDAY[days.rem_euclid(7) as usize]
    }
}


/// Misc tests that don’t seem to fit anywhere.
#[cfg(test)]
mod test {
    pub(crate) use super::*;
    pub(crate) use crate::cal::{DatePiece, TimePiece};

    #[test]
    fn some_leap_years() {
        for year in [1391, 1395, 1399, 1403, 1408].iter() {
            assert!(JalaliDate::ymd(*year, Esfand, 30).is_ok());
            assert!(JalaliDate::ymd(*year + 1, Esfand, 30).is_err());
        }
    }

    #[test]
    fn new() {
        for year in 1..3000 {
            for month in 1 ..= 6 {
                assert!(JalaliDate::of(year, month, 31).is_ok());
                assert!(JalaliDate::of(year, month, 32).is_err());
            }
            for month in 7 ..= 11 {
                assert!(JalaliDate::of(year, month, 30).is_ok());
                assert!(JalaliDate::of(year, month, 31).is_err());
            }
            assert!(JalaliDate::of(year, 12, 29).is_ok());
            assert!(JalaliDate::of(year, 12, 31).is_err());
            assert!(JalaliDate::of(year, 1, 0).is_err());
        }
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(JalaliDate::of(1403, 0, 1), Err(Error::InvalidDate));
        assert_eq!(JalaliDate::of(1403, 13, 1), Err(Error::InvalidDate));
        assert_eq!(JalaliDate::of(1403, -1, 1), Err(Error::InvalidDate));
    }

    #[test]
    fn to_from_julian_day() {
        for date in vec![
            JalaliDate::of(1403,  1,  1).unwrap(),
            JalaliDate::of(   1,  1,  1).unwrap(),
            JalaliDate::of(   0, 12, 30).unwrap(),
            JalaliDate::of(1348, 10, 11).unwrap(),
            JalaliDate::of(1357, 11, 22).unwrap(),
            JalaliDate::of(1402,  6, 31).unwrap(),
            JalaliDate::of(1402,  7,  1).unwrap(),
            JalaliDate::of(-500,  3, 15).unwrap(),
        ]{
            assert_eq!(date, JalaliDate::from_julian_day(date.to_julian_day()));
        }
    }

    #[test]
    fn days_before_start_matches_lengths() {
        let mut elapsed = 0;
        for month in MONTHS.iter() {
            assert_eq!(month.days_before_start(), elapsed);
            elapsed += i16::from(month.days_in_month(false));
        }
    }

    #[test]
    fn yeardays() {
        assert_eq!(JalaliDate::of(1403, 1, 1).unwrap().yearday(), 1);
        assert_eq!(JalaliDate::of(1403, 7, 1).unwrap().yearday(), 187);
        assert_eq!(JalaliDate::of(1403, 12, 30).unwrap().yearday(), 366);
        assert_eq!(JalaliDate::of(1404, 12, 29).unwrap().yearday(), 365);
    }

    #[test]
    fn far_years_round_trip() {
        for year in &[ -100_000, -10_000, 10_000, 100_000, 500_000 ] {
            let first = JalaliDate::of(*year, 12, 1).unwrap();
            let date = first.plus_days(i64::from(first.length_of_month()) - 1);
            assert_eq!(date, JalaliDate::from_julian_day(date.to_julian_day()));
            assert_eq!(date.month(), Esfand);
            assert_eq!(date.plus_days(1).month(), Farvardin);
        }
    }

    mod time {
        use super::*;

        #[test]
        fn pieces() {
            let time = TimeOfDay::hms_nano(23, 59, 58, 999_999_999).unwrap();
            assert_eq!(time.hour(), 23);
            assert_eq!(time.minute(), 59);
            assert_eq!(time.second(), 58);
            assert_eq!(time.millisecond(), 999);
            assert_eq!(time.nano_of_day(), NANOS_PER_DAY - NANOS_PER_SECOND - 1);
        }

        #[test]
        fn out_of_range() {
            assert_eq!(TimeOfDay::hms(-1, 0, 0), Err(Error::InvalidTime));
            assert_eq!(TimeOfDay::hms(0, 60, 0), Err(Error::InvalidTime));
            assert_eq!(TimeOfDay::hms(0, 0, 60), Err(Error::InvalidTime));
            assert_eq!(TimeOfDay::hms_nano(0, 0, 0, 1_000_000_000), Err(Error::InvalidTime));
            assert_eq!(TimeOfDay::from_nano_of_day(NANOS_PER_DAY), Err(Error::InvalidTime));
            assert_eq!(TimeOfDay::from_nano_of_day(-1), Err(Error::InvalidTime));
        }

        #[test]
        fn ordering() {
            let date = JalaliDate::of(1403, 1, 1).unwrap();
            let early = JalaliDateTime::of(date, 23, 0, 0, 0).unwrap();
            let late  = JalaliDateTime::of(date.plus_days(1), 1, 0, 0, 0).unwrap();
            assert!(early < late);
            assert!(early.time() > late.time());
        }
    }

    mod weekdays {
        use super::*;

        #[test]
        fn nowruz_1403() {
            assert_eq!(JalaliDate::of(1403, 1, 1).unwrap().weekday(), Wednesday);
        }

        #[test]
        fn iso_numbers() {
            for number in 1 .. 8 {
                assert_eq!(Weekday::from_one(number).unwrap().days_from_monday_as_one(), number);
            }
            assert!(Weekday::from_one(0).is_err());
            assert!(Weekday::from_one(8).is_err());
        }
    }
}
