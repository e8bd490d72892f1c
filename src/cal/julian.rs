//! Conversions between the proleptic Gregorian calendar and Astronomical
//! Julian Day Numbers.
//!
//! A **Julian Day Number** (JDN) is a plain count of days. Day 0 is Monday,
//! the 24th of November, 4714 BCE in the proleptic Gregorian calendar, which
//! is year -4713 in astronomical numbering (there *is* a year 0 here). Every
//! other calendar in this library gets converted to and from this count, so
//! it has to be exact: adjacent days always differ by one, in both directions,
//! all the way out.
//!
//! These functions do no validation. They trust that the year-month-day
//! triples they are handed are real Gregorian dates.


/// The JDN of **1st January, 1970**, the Unix epoch.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;


/// Returns the Julian Day Number of the given proleptic Gregorian date.
///
/// ### Examples
///
/// ```
/// use jalali::julian::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
/// assert_eq!(gregorian_to_jdn(-4713, 11, 24), 0);
/// ```
pub fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {

    // Shift the year so it starts in March: January and February count
    // as months 10 and 11 of the previous year, which puts the leap day at
    // the very end.
    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2) / 5
        + 365 * y
        + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Returns the proleptic Gregorian `(year, month, day)` that falls on the
/// given Julian Day Number.
///
/// ### Examples
///
/// ```
/// use jalali::julian::jdn_to_gregorian;
///
/// assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
/// assert_eq!(jdn_to_gregorian(0), (-4713, 11, 24));
/// ```
pub fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;

    let day   = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year  = 100 * b + d - 4800 + m / 10;
    (year, month, day)
}

/// Returns the day of the week for the given Julian Day Number, counting
/// Monday as 0 and Sunday as 6.
pub(crate) fn jdn_to_days_from_monday(jdn: i64) -> i64 {
    jdn.rem_euclid(7)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unix_epoch() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1), UNIX_EPOCH_JDN);
        assert_eq!(jdn_to_gregorian(UNIX_EPOCH_JDN), (1970, 1, 1));
    }

    #[test]
    fn leap_day() {
        let feb_29 = gregorian_to_jdn(2024, 2, 29);
        assert_eq!(jdn_to_gregorian(feb_29 + 1), (2024, 3, 1));
        assert_eq!(gregorian_to_jdn(2023, 3, 1) - gregorian_to_jdn(2023, 2, 28), 1);
        assert_eq!(gregorian_to_jdn(1900, 3, 1) - gregorian_to_jdn(1900, 2, 28), 1);
        assert_eq!(gregorian_to_jdn(2000, 3, 1) - gregorian_to_jdn(2000, 2, 28), 2);
    }

    #[test]
    fn year_zero_exists() {
        assert_eq!(jdn_to_gregorian(gregorian_to_jdn(0, 12, 31) + 1), (1, 1, 1));
        assert_eq!(jdn_to_gregorian(gregorian_to_jdn(-1, 12, 31) + 1), (0, 1, 1));
    }

    #[test]
    fn round_trip_both_ways() {
        for jdn in -1_000_000 .. 1_000_000 {
            let (y, m, d) = jdn_to_gregorian(jdn * 7);
            assert_eq!(gregorian_to_jdn(y, m, d), jdn * 7);
        }
    }

    #[test]
    fn consecutive_days() {
        let mut previous = jdn_to_gregorian(-2_000_000);
        for jdn in -1_999_999 .. -1_900_000 {
            let current = jdn_to_gregorian(jdn);
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn weekdays() {
        // 20th March 2024 was a Wednesday.
        assert_eq!(jdn_to_days_from_monday(gregorian_to_jdn(2024, 3, 20)), 2);
        assert_eq!(jdn_to_days_from_monday(0), 0);
        assert_eq!(jdn_to_days_from_monday(-1), 6);
    }
}
