//! Source of the current calendar year.

use chrono::{Datelike, Local};

/// Supplies the year the copyright fixer brings ranges up to.
pub trait Clock {
    /// Returns the current calendar year.
    fn current_year(&self) -> i32;
}

/// Wall-clock year in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock frozen at a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
