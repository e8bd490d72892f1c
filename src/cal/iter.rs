//! Iterators through the months of a Jalali year and the days of a month.

use std::fmt;
use std::ops::{Range, RangeFrom, RangeTo, RangeFull};
use std::slice::Iter as SliceIter;

use crate::cal::datetime::{JalaliDate, Month, MONTHS};
use crate::cal::datetime::Error as DateTimeError;
use crate::cal::rule;


/// A Jalali year, used as the starting point to iterate over its months.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Year(pub i32);

impl Year {

    /// Returns whether this year is a leap year.
    ///
    /// ### Examples
    ///
    /// ```
    /// use jalali::iter::Year;
    ///
    /// assert_eq!(Year(1403).is_leap_year(), true);
    /// assert_eq!(Year(1404).is_leap_year(), false);
    /// ```
    pub fn is_leap_year(&self) -> bool {
        rule::is_leap_year(self.0.into())
    }

    /// Returns the number of days in this year.
    pub fn day_count(&self) -> i16 {
        rule::days_in_year(self.0.into())
    }

    /// Returns an iterator over a continuous span of months in this year,
    /// returning year-month pairs.
    ///
    /// ### Examples
    ///
    /// ```
    /// use jalali::iter::Year;
    /// use jalali::Month::{Tir, Mehr};
    ///
    /// let year = Year(1402);
    /// assert_eq!(year.months(..).count(), 12);
    /// assert_eq!(year.months(Tir ..).count(), 9);
    /// assert_eq!(year.months(Tir .. Mehr).count(), 3);
    /// assert_eq!(year.months(.. Mehr).count(), 6);
    /// ```
    pub fn months<S: MonthSpan>(&self, span: S) -> YearMonths {
        YearMonths {
            year: *self,
            iter: span.get_slice().iter(),
        }
    }

    /// Returns a year-month, pairing this year with the given month.
    pub fn month(&self, month: Month) -> YearMonth {
        YearMonth { year: *self, month }
    }
}


/// A span of months, which gets used to construct a `YearMonths` iterator.
pub trait MonthSpan {

    /// Returns a static slice of `Month` values contained by this span.
    fn get_slice(&self) -> &'static [Month];
}

impl MonthSpan for RangeFull {
    fn get_slice(&self) -> &'static [Month] {
        MONTHS
    }
}

impl MonthSpan for RangeFrom<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[self.start.months_from_farvardin() ..]
    }
}

impl MonthSpan for RangeTo<Month> {
    fn get_slice(&self) -> &'static [Month] {
        &MONTHS[.. self.end.months_from_farvardin()]
    }
}

impl MonthSpan for Range<Month> {
    fn get_slice(&self) -> &'static [Month] {
        let start = self.start.months_from_farvardin();
        let end = self.end.months_from_farvardin();
        if start < end { &MONTHS[start .. end] } else { &[] }
    }
}


/// An iterator over a continuous span of months in a year.
///
/// Use the `months` method on `Year` to create instances of this iterator.
pub struct YearMonths {
    year: Year,
    iter: SliceIter<'static, Month>,
}

impl Iterator for YearMonths {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        let year = self.year;
        self.iter.next().map(|m| year.month(*m))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for YearMonths {
    fn next_back(&mut self) -> Option<Self::Item> {
        let year = self.year;
        self.iter.next_back().map(|m| year.month(*m))
    }
}

impl ExactSizeIterator for YearMonths {}

impl fmt::Debug for YearMonths {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "YearMonths({}, {:?})", self.year.0, self.iter.as_slice())
    }
}

/// A month-year pair.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {

    /// Returns the number of days in this month. This can be definitely
    /// known, as the paired year determines whether it’s a leap year, so
    /// there’s no chance of being caught out by Esfand.
    ///
    /// ### Examples
    ///
    /// ```
    /// use jalali::iter::Year;
    /// use jalali::Month::Esfand;
    ///
    /// assert_eq!(Year(1403).month(Esfand).day_count(), 30);
    /// assert_eq!(Year(1404).month(Esfand).day_count(), 29);
    /// ```
    pub fn day_count(&self) -> i8 {
        self.month.days_in_month(self.year.is_leap_year())
    }

    /// Returns an iterator over a continuous span of days in this month,
    /// returning `JalaliDate` values.
    ///
    /// ### Examples
    ///
    /// ```
    /// use jalali::iter::Year;
    /// use jalali::Month::Mehr;
    ///
    /// let ym = Year(1402).month(Mehr);
    /// assert_eq!(ym.days(..).count(), 30);
    /// assert_eq!(ym.days(10 ..).count(), 21);
    /// assert_eq!(ym.days(10 .. 20).count(), 10);
    /// assert_eq!(ym.days(.. 20).count(), 19);
    /// ```
    pub fn days<S: DaySpan>(&self, span: S) -> MonthDays {
        MonthDays {
            ym: *self,
            range: span.get_range(self)
        }
    }

    /// Returns a `JalaliDate` based on the day of this month.
    ///
    /// This is just a short-cut for the `JalaliDate::ymd` constructor.
    pub fn day(&self, day: i8) -> Result<JalaliDate, DateTimeError> {
        JalaliDate::ymd(self.year.0, self.month, day)
    }
}


/// A span of days, which gets used to construct a `MonthDays` iterator.
pub trait DaySpan {

    /// Returns a `Range` of the day numbers specified for the given year-month pair.
    fn get_range(&self, ym: &YearMonth) -> Range<i8>;
}

impl DaySpan for RangeFull {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        1 .. ym.day_count() + 1
    }
}

impl DaySpan for RangeFrom<i8> {
    fn get_range(&self, ym: &YearMonth) -> Range<i8> {
        self.start .. ym.day_count() + 1
    }
}

impl DaySpan for RangeTo<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        1 .. self.end
    }
}

impl DaySpan for Range<i8> {
    fn get_range(&self, _ym: &YearMonth) -> Range<i8> {
        self.clone()
    }
}


/// An iterator over a continuous span of days in a month. Day numbers that
/// the month doesn’t have are skipped.
///
/// Use the `days` method on `YearMonth` to create instances of this iterator.
#[derive(PartialEq, Debug)]
pub struct MonthDays {
    ym: YearMonth,
    range: Range<i8>,
}

impl Iterator for MonthDays {
    type Item = JalaliDate;

    fn next(&mut self) -> Option<Self::Item> {
        let ym = self.ym;
        self.range.by_ref().filter_map(|d| ym.day(d).ok()).next()
    }
}

impl DoubleEndedIterator for MonthDays {
    fn next_back(&mut self) -> Option<Self::Item> {
        let ym = self.ym;
        self.range.by_ref().rev().filter_map(|d| ym.day(d).ok()).next()
    }
}


#[cfg(test)]
mod test {
    pub use super::*;

    mod months {
        use super::*;
        use crate::cal::datetime::Month::*;

        #[test]
        fn range_full() {
            let year = Year(1402);
            let months: Vec<_> = year.months(..).collect();
            assert_eq!(months, vec![
                year.month(Farvardin),  year.month(Ordibehesht),  year.month(Khordad),
                year.month(Tir),        year.month(Mordad),       year.month(Shahrivar),
                year.month(Mehr),       year.month(Aban),         year.month(Azar),
                year.month(Dey),        year.month(Bahman),       year.month(Esfand),
            ]);
        }

        #[test]
        fn range_from() {
            let year = Year(1402);
            let months: Vec<_> = year.months(Azar..).collect();
            assert_eq!(months, vec![
                YearMonth { year, month: Azar },
                YearMonth { year, month: Dey },
                YearMonth { year, month: Bahman },
                YearMonth { year, month: Esfand },
            ]);
        }

        #[test]
        fn range_backwards() {
            let year = Year(1402);
            let months: Vec<_> = year.months(Mordad..Mehr).rev().collect();
            assert_eq!(months, vec![
                YearMonth { year, month: Shahrivar },
                YearMonth { year, month: Mordad },
            ]);
        }

        #[test]
        fn range_empty() {
            assert_eq!(Year(1402).months(Aban..Aban).count(), 0);
            assert_eq!(Year(1402).months(Aban..Tir).count(), 0);
        }
    }

    mod days {
        use super::*;
        use crate::cal::datetime::Month::*;

        #[test]
        fn range_full() {
            let days: Vec<_> = Year(1402).month(Esfand).days(..).collect();
            let results: Vec<_> = (1..30).map(|d| JalaliDate::ymd(1402, Esfand, d).unwrap()).collect();
            assert_eq!(days, results);
        }

        #[test]
        fn range_full_leap_year() {
            let days: Vec<_> = Year(1403).month(Esfand).days(..).collect();
            assert_eq!(days.len(), 30);
        }

        #[test]
        fn past_the_end() {
            let days: Vec<_> = Year(1402).month(Esfand).days(28..35).rev().collect();
            assert_eq!(days, vec![
                JalaliDate::ymd(1402, Esfand, 29).unwrap(),
                JalaliDate::ymd(1402, Esfand, 28).unwrap(),
            ]);
        }

        #[test]
        fn just_for_one_day() {
            let day = Year(1357).month(Bahman).day(22);
            assert_eq!(day, JalaliDate::ymd(1357, Bahman, 22));
        }
    }

    #[test]
    fn entire_year() {
        let count = Year(1402).months(..).flat_map(|m| m.days(..)).count();
        assert_eq!(count, 365);
        assert_eq!(Year(1402).day_count(), 365);
    }

    #[test]
    fn entire_leap_year() {
        let count = Year(1403).months(..).flat_map(|m| m.days(..)).count();
        assert_eq!(count, 366);
    }
}
