//! The leap-year rule of the Jalali calendar.
//!
//! Jalali years begin at the spring equinox, and the arithmetic calendar
//! approximates that with a cycle of 8 leap years every 33 years. The
//! approximation doesn’t hold forever, so the cycle gets re-anchored at a
//! fixed list of **break years**. Between two breaks the 33-year pattern is
//! exact; crossing a break shifts where the leap years fall. Skipping or
//! misplacing one of these entries makes every date after it drift by a day.
//!
//! Everything in here works in terms of the day in March on which a Jalali
//! year’s first day (the 1st of Farvardin) falls in the Gregorian calendar.

use crate::cal::julian::gregorian_to_jdn;


/// The Jalali years at which the 33-year leap cycle is re-anchored.
///
/// Years inside the first and last entries are converted exactly. Years
/// outside of them extrapolate the 33-year cycle from the nearest block.
pub const BREAKS: [i64; 20] = [
      -61,     9,    38,   199,   426,   686,   756,   818,  1111,  1181,
     1210,  1635,  2060,  2097,  2192,  2262,  2324,  2394,  2456,  3178,
];

/// The Jalali calendar is 621 years behind the Gregorian one at Nowruz.
pub(crate) const GREGORIAN_YEAR_OFFSET: i64 = 621;

/// Leap days the Gregorian count carries at the 1600 anchor, relative to
/// the same reference point as the Jalali count.
const GREGORIAN_LEAPS_AT_1600: i64 = 238;

/// Leap days the Jalali count carries at the first break year.
const JALALI_LEAPS_AT_FIRST_BREAK: i64 = -14;


/// Returns the number of leap years in the first `years` years of a
/// 33-year-cycle block.
fn leaps_in_partial_block(years: i64) -> i64 {
    years.div_euclid(33) * 8 + (years.rem_euclid(33) + 3).div_euclid(4)
}

/// Returns the number of leap days in a complete block between two break
/// years that are `jump` years apart.
fn leaps_in_complete_block(jump: i64) -> i64 {
    jump.div_euclid(33) * 8 + jump.rem_euclid(33).div_euclid(4)
}

/// Returns the number of Gregorian leap days between 1600 and the start
/// of the given Gregorian year.
fn gregorian_leaps_since_1600(gregorian_year: i64) -> i64 {
    let years = gregorian_year - 1600;
    years.div_euclid(4) - years.div_euclid(100) + years.div_euclid(400)
}

/// Returns the Gregorian year and the day in March on which the first day
/// of the given Jalali year falls.
///
/// The March day is allowed to stray outside of `1..=31` for years far
/// outside the break table: the result is still a valid offset from the
/// start of March, and `gregorian_to_jdn` treats it that way.
///
/// ### Examples
///
/// ```
/// use jalali::rule::farvardin_first;
///
/// assert_eq!(farvardin_first(1403), (2024, 20));
/// assert_eq!(farvardin_first(1404), (2025, 21));
/// ```
pub fn farvardin_first(year: i64) -> (i64, i64) {
    let gregorian_year = year + GREGORIAN_YEAR_OFFSET;

    let mut leap_jalali = JALALI_LEAPS_AT_FIRST_BREAK;
    let mut previous_break = BREAKS[0];
    let mut jump = 0;

    // Add up the leap days of every complete block before the one that
    // contains this year.
    for &next_break in &BREAKS[1..] {
        jump = next_break - previous_break;
        if year < next_break {
            break;
        }

        leap_jalali += leaps_in_complete_block(jump);
        previous_break = next_break;
    }

    let years_into_block = year - previous_break;
    leap_jalali += leaps_in_partial_block(years_into_block);

    // A block whose length leaves four years over has its last leap year
    // pushed to its final year.
    if jump.rem_euclid(33) == 4 && jump - years_into_block == 4 {
        leap_jalali += 1;
    }

    let leap_gregorian = gregorian_leaps_since_1600(gregorian_year) + GREGORIAN_LEAPS_AT_1600;
    (gregorian_year, 20 + leap_jalali - leap_gregorian)
}

/// Returns the Julian Day Number of the first day of the given Jalali year.
pub fn farvardin_first_jdn(year: i64) -> i64 {
    let (gregorian_year, march_day) = farvardin_first(year);
    gregorian_to_jdn(gregorian_year, 3, march_day)
}

/// Returns whether the given Jalali year is a leap year, which is whether
/// 366 days pass before the next year begins.
///
/// ### Examples
///
/// ```
/// use jalali::rule::is_leap_year;
///
/// assert!(is_leap_year(1403));
/// assert!(!is_leap_year(1404));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    days_in_year(year) == 366
}

/// Returns the number of days in the given Jalali year.
pub fn days_in_year(year: i64) -> i16 {
    (farvardin_first_jdn(year + 1) - farvardin_first_jdn(year)) as i16
}

/// Returns the number of days in a month of the given Jalali year, with
/// months numbered from 1. The first six months have 31 days, the next
/// five have 30, and Esfand has 30 in leap years and 29 otherwise.
///
/// Month numbers outside `1..=12` are treated as Esfand.
pub fn days_in_month(year: i64, month: i64) -> i8 {
    match month {
        1 ..= 6   => 31,
        7 ..= 11  => 30,
        _ if is_leap_year(year) => 30,
        _ => 29,
    }
}
