//! Spans of dates with open or closed ends.

use std::cmp;
use std::fmt;
use std::iter::FusedIterator;

use crate::cal::datetime::{Error, JalaliDate};


/// Whether the date at one end of a range is part of it.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Bound {
    Open,
    Closed,
}

/// A **date range** is a span of whole days between two dates, where each
/// end is either included (closed) or left out (open).
///
/// The start never comes after the end. A range can still be empty when
/// both ends are the same date and at least one of them is open.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct DateRange {
    start: JalaliDate,
    start_bound: Bound,
    end: JalaliDate,
    end_bound: Bound,
}

impl DateRange {

    fn new(start: JalaliDate, start_bound: Bound, end: JalaliDate, end_bound: Bound) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvertedRange);
        }

        Ok(Self { start, start_bound, end, end_bound })
    }

    /// Creates the range `[start, end]`, including both dates.
    ///
    /// ```rust
    /// use jalali::{JalaliDate, DateRange};
    ///
    /// let start = JalaliDate::of(1403, 1, 1).unwrap();
    /// let end = JalaliDate::of(1403, 1, 13).unwrap();
    ///
    /// let nowruz = DateRange::closed(start, end).unwrap();
    /// assert_eq!(nowruz.len_days(), 13);
    /// assert_eq!(nowruz.to_string(), "[1403-01-01 .. 1403-01-13]");
    ///
    /// assert!(DateRange::closed(end, start).is_err());
    /// ```
    pub fn closed(start: JalaliDate, end: JalaliDate) -> Result<Self, Error> {
        Self::new(start, Bound::Closed, end, Bound::Closed)
    }

    /// Creates the range `[start, end)`, including the start but not the end.
    pub fn half_open(start: JalaliDate, end: JalaliDate) -> Result<Self, Error> {
        Self::new(start, Bound::Closed, end, Bound::Open)
    }

    /// Creates the range `(start, end]`, including the end but not the start.
    pub fn open_closed(start: JalaliDate, end: JalaliDate) -> Result<Self, Error> {
        Self::new(start, Bound::Open, end, Bound::Closed)
    }

    /// Creates the range `(start, end)`, including neither date.
    pub fn open(start: JalaliDate, end: JalaliDate) -> Result<Self, Error> {
        Self::new(start, Bound::Open, end, Bound::Open)
    }

    pub fn start(&self) -> JalaliDate { self.start }
    pub fn end(&self) -> JalaliDate { self.end }
    pub fn start_bound(&self) -> Bound { self.start_bound }
    pub fn end_bound(&self) -> Bound { self.end_bound }

    /// Returns whether this range contains no dates at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end && (self.start_bound == Bound::Open || self.end_bound == Bound::Open)
    }

    /// Returns the first and last dates in the range, both included, or
    /// `None` for an empty range.
    fn inclusive_ends(&self) -> Option<(JalaliDate, JalaliDate)> {
        if self.is_empty() {
            return None;
        }

        let first = match self.start_bound {
            Bound::Closed => self.start,
            Bound::Open   => self.start.plus_days(1),
        };

        let last = match self.end_bound {
            Bound::Closed => self.end,
            Bound::Open   => self.end.minus_days(1),
        };

        // (d, d+1) has nothing between its ends.
        if first > last { None } else { Some((first, last)) }
    }

    /// Returns the number of dates in this range.
    pub fn len_days(&self) -> i64 {
        match self.inclusive_ends() {
            Some((first, last)) => first.days_until(last) + 1,
            None                => 0,
        }
    }

    /// Returns whether the given date is inside this range, honouring
    /// which ends are open.
    pub fn contains(&self, date: JalaliDate) -> bool {
        let after_start = match self.start_bound {
            Bound::Closed => date >= self.start,
            Bound::Open   => date > self.start,
        };

        let before_end = match self.end_bound {
            Bound::Closed => date <= self.end,
            Bound::Open   => date < self.end,
        };

        after_start && before_end
    }

    /// Returns whether the two ranges have at least one date in common.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns the closed range of the dates both ranges share, or `None`
    /// if they are disjoint.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let (first_a, last_a) = self.inclusive_ends()?;
        let (first_b, last_b) = other.inclusive_ends()?;

        let first = cmp::max(first_a, first_b);
        let last  = cmp::min(last_a, last_b);
        Self::closed(first, last).ok()
    }

    /// Returns the closed range covering both ranges when they overlap or
    /// touch with no day between them, or `None` when there is a gap.
    /// An empty range joins with anything to give the other range.
    ///
    /// ```rust
    /// use jalali::{JalaliDate, DateRange};
    ///
    /// let date = |m, d| JalaliDate::of(1403, m, d).unwrap();
    ///
    /// let spring = DateRange::closed(date(1, 1), date(3, 31)).unwrap();
    /// let summer = DateRange::closed(date(4, 1), date(6, 31)).unwrap();
    /// let autumn = DateRange::closed(date(7, 1), date(9, 30)).unwrap();
    ///
    /// assert_eq!(spring.union_if_contiguous(&summer), DateRange::closed(date(1, 1), date(6, 31)).ok());
    /// assert_eq!(spring.union_if_contiguous(&autumn), None);
    /// ```
    pub fn union_if_contiguous(&self, other: &Self) -> Option<Self> {
        let (first_a, last_a) = match self.inclusive_ends() {
            Some(ends) => ends,
            None       => return Some(*other),
        };

        let (first_b, last_b) = match other.inclusive_ends() {
            Some(ends) => ends,
            None       => return Some(*self),
        };

        let ((_, left_last), (right_first, _)) =
            if first_a <= first_b { ((first_a, last_a), (first_b, last_b)) }
                             else { ((first_b, last_b), (first_a, last_a)) };

        if left_last.days_until(right_first) > 1 {
            return None;
        }

        Self::closed(cmp::min(first_a, first_b), cmp::max(last_a, last_b)).ok()
    }

    /// Returns an iterator over every date in this range, in order.
    ///
    /// ```rust
    /// use jalali::{JalaliDate, DateRange};
    ///
    /// let start = JalaliDate::of(1402, 12, 28).unwrap();
    /// let end = JalaliDate::of(1403, 1, 2).unwrap();
    ///
    /// let days: Vec<_> = DateRange::open(start, end).unwrap().days().map(|d| d.to_string()).collect();
    /// assert_eq!(days, vec![ "1402-12-29", "1403-01-01" ]);
    /// ```
    pub fn days(&self) -> Days {
        match self.inclusive_ends() {
            Some((first, last)) => Days { front: first.to_julian_day(), back: last.to_julian_day() },
            None                => Days { front: 1, back: 0 },
        }
    }
}

impl<'a> IntoIterator for &'a DateRange {
    type Item = JalaliDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let open_char = match self.start_bound { Bound::Closed => '[', Bound::Open => '(' };
        let close_char = match self.end_bound { Bound::Closed => ']', Bound::Open => ')' };
        write!(f, "{}{} .. {}{}", open_char, self.start, self.end, close_char)
    }
}


/// An iterator over the dates of a `DateRange`, from either end.
///
/// Use the `days` method on `DateRange` to create instances of this iterator.
#[derive(PartialEq, Debug, Clone)]
pub struct Days {
    front: i64,
    back: i64,
}

impl Iterator for Days {
    type Item = JalaliDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }

        self.front += 1;
        Some(JalaliDate::from_julian_day(self.front - 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = cmp::max(0, self.back - self.front + 1) as usize;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }

        self.back -= 1;
        Some(JalaliDate::from_julian_day(self.back + 1))
    }
}

impl ExactSizeIterator for Days {}
impl FusedIterator for Days {}


#[cfg(test)]
mod test {
    use super::*;

    fn date(year: i32, month: i8, day: i8) -> JalaliDate {
        JalaliDate::of(year, month, day).unwrap()
    }

    mod bounds {
        use super::*;

        #[test]
        fn single_day() {
            let day = date(1403, 7, 1);
            assert_eq!(DateRange::closed(day, day).unwrap().len_days(), 1);
            assert!(DateRange::half_open(day, day).unwrap().is_empty());
            assert!(DateRange::open_closed(day, day).unwrap().is_empty());
            assert!(DateRange::open(day, day).unwrap().is_empty());
        }

        #[test]
        fn adjacent_open() {
            let range = DateRange::open(date(1403, 7, 1), date(1403, 7, 2)).unwrap();
            assert!(!range.is_empty());
            assert_eq!(range.len_days(), 0);
            assert_eq!(range.days().count(), 0);
        }

        #[test]
        fn contains() {
            let range = DateRange::open_closed(date(1403, 7, 1), date(1403, 7, 10)).unwrap();
            assert!(!range.contains(date(1403, 7, 1)));
            assert!(range.contains(date(1403, 7, 2)));
            assert!(range.contains(date(1403, 7, 10)));
            assert!(!range.contains(date(1403, 7, 11)));
        }

        #[test]
        fn inverted() {
            assert_eq!(DateRange::open(date(1403, 1, 2), date(1403, 1, 1)), Err(Error::InvertedRange));
        }

        #[test]
        fn display() {
            let range = DateRange::half_open(date(1403, 1, 1), date(1404, 1, 1)).unwrap();
            assert_eq!(range.to_string(), "[1403-01-01 .. 1404-01-01)");
            assert_eq!(range.len_days(), 366);
        }
    }

    mod combining {
        use super::*;

        #[test]
        fn intersection() {
            let a = DateRange::closed(date(1403, 1, 1), date(1403, 1, 20)).unwrap();
            let b = DateRange::half_open(date(1403, 1, 10), date(1403, 2, 1)).unwrap();
            assert_eq!(a.intersection(&b), DateRange::closed(date(1403, 1, 10), date(1403, 1, 20)).ok());
            assert!(a.overlaps(&b));
        }

        #[test]
        fn disjoint() {
            let a = DateRange::half_open(date(1403, 1, 1), date(1403, 1, 10)).unwrap();
            let b = DateRange::closed(date(1403, 1, 10), date(1403, 1, 20)).unwrap();
            assert_eq!(a.intersection(&b), None);
            assert!(!a.overlaps(&b));
            assert_eq!(a.union_if_contiguous(&b), DateRange::closed(date(1403, 1, 1), date(1403, 1, 20)).ok());
        }

        #[test]
        fn union_with_gap() {
            let a = DateRange::closed(date(1403, 1, 1), date(1403, 1, 10)).unwrap();
            let b = DateRange::closed(date(1403, 1, 12), date(1403, 1, 20)).unwrap();
            assert_eq!(b.union_if_contiguous(&a), None);
        }

        #[test]
        fn union_with_empty() {
            let a = DateRange::closed(date(1403, 1, 1), date(1403, 1, 10)).unwrap();
            let empty = DateRange::open(date(1400, 1, 1), date(1400, 1, 1)).unwrap();
            assert_eq!(a.union_if_contiguous(&empty), Some(a));
            assert_eq!(empty.union_if_contiguous(&a), Some(a));
        }
    }

    mod iteration {
        use super::*;

        #[test]
        fn across_year_end() {
            let range = DateRange::closed(date(1403, 12, 29), date(1404, 1, 2)).unwrap();
            let days: Vec<_> = range.days().collect();
            assert_eq!(days, vec![
                date(1403, 12, 29), date(1403, 12, 30),
                date(1404, 1, 1), date(1404, 1, 2),
            ]);
            assert_eq!(range.days().len(), 4);
        }

        #[test]
        fn from_both_ends() {
            let range = DateRange::closed(date(1403, 6, 30), date(1403, 7, 2)).unwrap();
            let mut days = range.days();
            assert_eq!(days.next_back(), Some(date(1403, 7, 2)));
            assert_eq!(days.next(), Some(date(1403, 6, 30)));
            assert_eq!(days.next_back(), Some(date(1403, 6, 31)));
            assert_eq!(days.next(), None);
            assert_eq!(days.next_back(), None);
        }

        #[test]
        fn for_loop() {
            let range = DateRange::half_open(date(1403, 1, 1), date(1403, 2, 1)).unwrap();
            let mut count = 0;
            for _ in &range {
                count += 1;
            }
            assert_eq!(count, 31);
        }
    }
}
