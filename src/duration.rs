//! Lengths of time on the timeline.

use std::ops::{Add, Sub, Mul, Neg};

use crate::cal::datetime::NANOS_PER_SECOND;


/// A **duration** is a length of time on the timeline, irrespective of
/// time zone or calendar format, with nanosecond precision.
///
/// The nanosecond portion is always kept within `0 .. 1_000_000_000`, so a
/// negative duration of half a second is stored as minus one second plus
/// half a second.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Copy)]
pub struct Duration {
    seconds: i64,
    nanoseconds: i32,
}

impl Duration {

    /// Create a new zero-length duration.
    pub fn zero() -> Self {
        Self { seconds: 0, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds long.
    pub fn of(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Create a new duration that’s the given number of seconds and
    /// nanoseconds long. Nanoseconds outside of a single second get carried
    /// over into the seconds.
    ///
    /// ```rust
    /// use jalali::Duration;
    ///
    /// assert_eq!(Duration::of_ns(0, 1_500_000_000), Duration::of_ns(1, 500_000_000));
    /// assert_eq!(Duration::of_ns(0, -1).lengths(), (-1, 999_999_999));
    /// ```
    pub fn of_ns(seconds: i64, nanoseconds: i32) -> Self {
        Self::from_total(seconds, i64::from(nanoseconds))
    }

    /// Create a new duration that’s the given number of seconds and
    /// milliseconds long.
    pub fn of_ms(seconds: i64, milliseconds: i16) -> Self {
        Self::from_total(seconds, i64::from(milliseconds) * 1_000_000)
    }

    fn from_total(seconds: i64, nanoseconds: i64) -> Self {
        Self {
            seconds:     seconds + nanoseconds.div_euclid(NANOS_PER_SECOND),
            nanoseconds: nanoseconds.rem_euclid(NANOS_PER_SECOND) as i32,
        }
    }

    /// Return the seconds and nanoseconds portions of the duration as
    /// a 2-element tuple.
    pub fn lengths(&self) -> (i64, i32) {
        (self.seconds, self.nanoseconds)
    }

    // Returned as a pair rather than two methods, so nobody mistakes the
    // nanosecond portion for the total length in nanoseconds.

    /// Returns the whole length of this duration in nanoseconds, or `None`
    /// if that doesn’t fit in 64 bits.
    pub fn total_nanos(&self) -> Option<i64> {
        self.seconds.checked_mul(NANOS_PER_SECOND)?
            .checked_add(i64::from(self.nanoseconds))
    }
}

impl Add<Duration> for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_total(self.seconds + rhs.seconds, i64::from(self.nanoseconds) + i64::from(rhs.nanoseconds))
    }
}

impl Sub<Duration> for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_total(self.seconds - rhs.seconds, i64::from(self.nanoseconds) - i64::from(rhs.nanoseconds))
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, amount: i64) -> Self {
        Self::from_total(self.seconds * amount, i64::from(self.nanoseconds) * amount)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_total(-self.seconds, -i64::from(self.nanoseconds))
    }
}
