extern crate jalali;
use jalali::{Instant, Duration};


#[test]
fn seconds() {
    assert_eq!(Instant::at(3), Instant::at_ns(3, 0))
}

#[test]
fn nanoseconds() {
    assert_eq!(Instant::at_ns(3, 333_000_001).nanoseconds(), 333_000_001)
}

#[test]
fn carried_nanoseconds() {
    assert_eq!(Instant::at_ns(3, -1), Instant::at_ns(2, 999_999_999))
}

#[test]
fn epoch() {
    assert_eq!(Instant::at_epoch().seconds(), 0)
}

#[test]
fn difference() {
    assert_eq!(Instant::at_ns(5, 250_000_000) - Instant::at(7), Duration::of_ms(-2, 250))
}

#[test]
fn sanity() {
    // Test that the system call has worked at all.
    // If this fails then you have gone back in time, or something?
    assert!(Instant::now().seconds() != 0)
}
