//! Jalali calendar calculations, which use years, months, days, hours,
//! minutes, seconds, and nanoseconds.

pub mod julian;
pub mod rule;
pub(crate) mod datetime;
pub(crate) mod gregorian;
pub mod iter;
pub(crate) mod range;
pub(crate) mod period;
pub(crate) mod fmt;
#[cfg(feature="parse")] pub(crate) mod parse;
#[cfg(feature="serde")] pub mod serial;
pub mod convenience;
mod adjust;

use self::datetime::{Month, Weekday};


/// The **date piece** trait is used for date and time values that have
/// date components of years, months, and days.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is the Jalali year as it is written, so the year 1403 has a
    /// year value of 1403.
    fn year(&self) -> i32;

    /// The month of the year.
    fn month(&self) -> Month;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i8;

    /// The day of the year, from 1 to 366.
    fn yearday(&self) -> i16;

    /// The day of the week.
    fn weekday(&self) -> Weekday;

    /// The number of years into the century.
    /// This is the same as the last two digits of the year, and is never
    /// negative.
    fn year_of_century(&self) -> i32 { self.year().rem_euclid(100) }
}


/// The **time piece** trait is used for date and time values that have
/// time components of hours, minutes, and seconds.
pub trait TimePiece {

    /// The hour of the day.
    fn hour(&self) -> i8;

    /// The minute of the hour.
    fn minute(&self) -> i8;

    /// The second of the minute.
    fn second(&self) -> i8;

    /// The nanosecond of the second.
    fn nanosecond(&self) -> i32;

    /// The millisecond of the second.
    fn millisecond(&self) -> i16 { (self.nanosecond() / 1_000_000) as i16 }
}
