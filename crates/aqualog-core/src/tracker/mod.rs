//! Day state: drink entries, target, reminder interval.

mod day;
mod entry;

pub use day::{
    DayTracker, ProgressLevel, DEFAULT_REMINDER_INTERVAL_MIN, DEFAULT_TARGET_ML,
    INTERVAL_RANGE_MIN, TARGET_RANGE_ML,
};
pub use entry::DrinkEntry;
