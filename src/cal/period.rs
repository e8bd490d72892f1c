//! Calendar-aware differences between dates, in years, months, and days.

use std::fmt;
use std::ops::{Add, Sub};

use crate::cal::DatePiece;
use crate::cal::datetime::JalaliDate;


/// A **period** is an amount of calendar time made up of years, months,
/// and days. Unlike a `Duration`, it has no fixed length: one month after
/// the 1st of Shahrivar is 31 days away, and one month after the 1st of
/// Mehr is 30.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {

    pub fn of(years: i32, months: i32, days: i32) -> Self {
        Self { years, months, days }
    }

    /// Computes the period from `start` up to, but not including, `end`.
    ///
    /// The result is normalised so the months are below 12 and the days
    /// are below the length of the month before `end`, with every field
    /// negated if `end` comes first.
    ///
    /// ### Examples
    ///
    /// ```
    /// use jalali::{JalaliDate, Period};
    ///
    /// let start = JalaliDate::of(1357, 11, 22).unwrap();
    /// let end = JalaliDate::of(1403, 1, 1).unwrap();
    ///
    /// let period = Period::between(start, end);
    /// assert_eq!(period, Period::of(45, 1, 8));
    /// assert_eq!(period.add_to(start), end);
    /// assert_eq!(Period::between(end, start), Period::of(-45, -1, -8));
    /// ```
    pub fn between(start: JalaliDate, end: JalaliDate) -> Self {
        let (earlier, later, negative) =
            if start <= end { (start, end, false) }
                       else { (end, start, true) };

        let mut years  = later.year() - earlier.year();
        let mut months = later.month() as i32 - earlier.month() as i32;
        let mut days   = i32::from(later.day()) - i32::from(earlier.day());

        if days < 0 {
            days += i32::from(later.minus_months(1).length_of_month());
            months -= 1;
        }

        if months < 0 {
            months += 12;
            years -= 1;
        }

        let period = Self { years, months, days };
        if negative { -period } else { period }
    }

    /// Returns the date this period after the given one, applying the
    /// years, then the months, then the days.
    pub fn add_to(self, date: JalaliDate) -> JalaliDate {
        date.plus_years(self.years.into())
            .plus_months(self.months.into())
            .plus_days(self.days.into())
    }

    /// Returns the date this period before the given one.
    pub fn subtract_from(self, date: JalaliDate) -> JalaliDate {
        (-self).add_to(date)
    }

    pub fn is_zero(self) -> bool {
        self == Self::default()
    }

    /// Returns whether the first non-zero field, from years down to days,
    /// is negative.
    pub fn is_negative(self) -> bool {
        (self.years, self.months, self.days) < (0, 0, 0)
    }
}

impl std::ops::Neg for Period {
    type Output = Self;

    fn neg(self) -> Self {
        Self { years: -self.years, months: -self.months, days: -self.days }
    }
}

impl Add<Period> for Period {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::of(self.years + rhs.years, self.months + rhs.months, self.days + rhs.days)
    }
}

impl Sub<Period> for Period {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Add<Period> for JalaliDate {
    type Output = Self;

    fn add(self, period: Period) -> Self {
        period.add_to(self)
    }
}

impl Sub<Period> for JalaliDate {
    type Output = Self;

    fn sub(self, period: Period) -> Self {
        period.subtract_from(self)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "P{}Y{}M{}D", self.years, self.months, self.days)
    }
}
