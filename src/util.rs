//! Misc stuff.

use std::ops::Range;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given half-open range
    /// of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Only ever used for the numeric fields of dates and times, but any
// comparable type works.

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}
