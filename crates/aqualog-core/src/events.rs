use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reminder::Urgency;
use crate::tracker::ProgressLevel;

/// Every state change in the system produces an Event.
/// The CLI prints them as JSON; a GUI would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    DrinkAdded {
        id: String,
        amount_ml: u32,
        total_ml: u32,
        at: DateTime<Utc>,
    },
    EntryDeleted {
        id: String,
        total_ml: u32,
        at: DateTime<Utc>,
    },
    /// Today's entries were cleared; target and interval are untouched.
    DayReset {
        at: DateTime<Utc>,
    },
    TargetChanged {
        target_ml: u32,
        at: DateTime<Utc>,
    },
    ReminderIntervalChanged {
        interval_min: u32,
        at: DateTime<Utc>,
    },
    /// The elapsed time crossed the reminder interval and a notification
    /// is due for the current overdue episode.
    ReminderDue {
        elapsed_min: u64,
        interval_min: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        date: String,
        entry_count: usize,
        total_ml: u32,
        target_ml: u32,
        progress_pct: f64,
        progress: ProgressLevel,
        interval_min: u32,
        last_drink_at: Option<DateTime<Utc>>,
        elapsed_min: Option<u64>,
        urgency: Urgency,
        at: DateTime<Utc>,
    },
}
