//! Turning dates and times into text.

mod iso;
#[cfg(feature="format")] pub mod custom;
