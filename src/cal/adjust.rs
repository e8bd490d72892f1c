//! Adjusters that move a date to a nearby boundary: the edges of its
//! month, year, or week, or the closest date on a given weekday.

use crate::cal::DatePiece;
use crate::cal::datetime::{JalaliDate, Month, Weekday};


/// Returns how many days forward it is from one weekday to another, from
/// 0 to 6.
fn days_forward(from: Weekday, to: Weekday) -> i64 {
    i64::from(to.days_from_monday_as_one() - from.days_from_monday_as_one()).rem_euclid(7)
}

impl JalaliDate {

    /// Returns the first day of this date’s month.
    pub fn first_day_of_month(self) -> Self {
        self.plus_days(1 - i64::from(self.day()))
    }

    /// Returns the last day of this date’s month.
    pub fn last_day_of_month(self) -> Self {
        self.plus_days(i64::from(self.length_of_month() - self.day()))
    }

    /// Returns the first day of the month after this date’s.
    pub fn first_day_of_next_month(self) -> Self {
        self.last_day_of_month().plus_days(1)
    }

    /// Returns the last day of the month before this date’s.
    pub fn last_day_of_previous_month(self) -> Self {
        self.first_day_of_month().minus_days(1)
    }

    /// Returns Nowruz, the 1st of Farvardin, of this date’s year.
    pub fn first_day_of_year(self) -> Self {
        self.plus_days(1 - i64::from(self.yearday()))
    }

    /// Returns the last day of Esfand in this date’s year.
    pub fn last_day_of_year(self) -> Self {
        self.with_month_end(Month::Esfand)
    }

    fn with_month_end(self, month: Month) -> Self {
        self.plus_months(month as i64 - self.month() as i64).last_day_of_month()
    }

    /// Returns the first day of the week containing this date, for a week
    /// that begins on `week_start`. Iranian calendars start the week on a
    /// Saturday; ISO weeks start on a Monday.
    ///
    /// ```rust
    /// use jalali::{JalaliDate, Weekday};
    ///
    /// let nowruz = JalaliDate::of(1403, 1, 1).unwrap();
    /// assert_eq!(nowruz.start_of_week(Weekday::Saturday), JalaliDate::of(1402, 12, 26).unwrap());
    /// assert_eq!(nowruz.end_of_week(Weekday::Saturday), JalaliDate::of(1403, 1, 3).unwrap());
    /// ```
    pub fn start_of_week(self, week_start: Weekday) -> Self {
        self.minus_days(days_forward(week_start, self.weekday()))
    }

    /// Returns the last day of the week containing this date, for a week
    /// that begins on `week_start`.
    pub fn end_of_week(self, week_start: Weekday) -> Self {
        self.start_of_week(week_start).plus_days(6)
    }

    /// Returns the first date strictly after this one that falls on the
    /// given weekday.
    pub fn next(self, weekday: Weekday) -> Self {
        match days_forward(self.weekday(), weekday) {
            0 => self.plus_days(7),
            n => self.plus_days(n),
        }
    }

    /// Returns this date if it falls on the given weekday, or the next one
    /// that does.
    pub fn next_or_same(self, weekday: Weekday) -> Self {
        self.plus_days(days_forward(self.weekday(), weekday))
    }

    /// Returns the last date strictly before this one that falls on the
    /// given weekday.
    pub fn previous(self, weekday: Weekday) -> Self {
        match days_forward(weekday, self.weekday()) {
            0 => self.minus_days(7),
            n => self.minus_days(n),
        }
    }

    /// Returns this date if it falls on the given weekday, or the last one
    /// before it that does.
    pub fn previous_or_same(self, weekday: Weekday) -> Self {
        self.minus_days(days_forward(weekday, self.weekday()))
    }

    /// Returns the first date in this date’s month on the given weekday.
    pub fn first_in_month(self, weekday: Weekday) -> Self {
        self.first_day_of_month().next_or_same(weekday)
    }

    /// Returns the last date in this date’s month on the given weekday.
    pub fn last_in_month(self, weekday: Weekday) -> Self {
        self.last_day_of_month().previous_or_same(weekday)
    }

    /// Returns the `n`th date in this date’s month on the given weekday,
    /// counting from 1, or `None` if the month doesn’t have that many.
    ///
    /// ```rust
    /// use jalali::{JalaliDate, Weekday};
    ///
    /// let date = JalaliDate::of(1403, 1, 15).unwrap();
    /// assert_eq!(date.nth_in_month(Weekday::Friday, 5), JalaliDate::of(1403, 1, 31).ok());
    /// assert_eq!(date.nth_in_month(Weekday::Friday, 6), None);
    /// assert_eq!(date.nth_in_month(Weekday::Friday, 0), None);
    /// ```
    pub fn nth_in_month(self, weekday: Weekday, n: u8) -> Option<Self> {
        if n == 0 {
            return None;
        }

        let nth = self.first_in_month(weekday).plus_days(7 * (i64::from(n) - 1));
        if nth.year() == self.year() && nth.month() == self.month() {
            Some(nth)
        }
        else {
            None
        }
    }
}
