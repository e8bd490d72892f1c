//! Exact points on a timeline.

use std::fmt;
use std::ops::{Add, Sub};

use crate::duration::Duration;
use crate::system::sys_time;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and a 32-bit integer of nanoseconds into that second, which
/// is never negative.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: i32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self::at_ns(seconds, 0)
    }

    /// Creates a new Instant set to the number of seconds since the
    /// Unix epoch, along with the number of nanoseconds so far this
    /// second. Nanoseconds outside of one second carry into the seconds.
    pub fn at_ns(seconds: i64, nanoseconds: i32) -> Self {
        let (seconds, nanoseconds) = Duration::of_ns(seconds, nanoseconds).lengths();
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the computer’s current time.
    #[cfg_attr(not(unix), allow(unused_unsafe))]
    pub fn now() -> Self {
        let (seconds, nanoseconds) = unsafe { sys_time() };
        Self::at_ns(seconds, nanoseconds)
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of seconds at this instant
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the number of nanoseconds into the second at this instant
    pub fn nanoseconds(&self) -> i32 {
        self.nanoseconds
    }

    /// Returns the length of time since the Unix epoch.
    fn since_epoch(self) -> Duration {
        Duration::of_ns(self.seconds, self.nanoseconds)
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    fn add(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = (self.since_epoch() + duration).lengths();
        Self { seconds, nanoseconds }
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    fn sub(self, duration: Duration) -> Self {
        let (seconds, nanoseconds) = (self.since_epoch() - duration).lengths();
        Self { seconds, nanoseconds }
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    fn sub(self, other: Self) -> Duration {
        self.since_epoch() - other.since_epoch()
    }
}
