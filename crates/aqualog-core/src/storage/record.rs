//! Persisted form of the day state.
//!
//! One JSON document under a fixed kv key:
//!
//! ```json
//! {
//!   "entries": [{"id": "...", "amount": 250, "time": "2026-08-04T09:12:00Z"}],
//!   "target": 2000,
//!   "reminderInterval": 60,
//!   "date": "2026-08-04"
//! }
//! ```
//!
//! The `date` stamp comes from the local clock. A record whose date is
//! not today loses its entries on load but keeps target and interval.

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::database::Database;
use crate::error::StorageError;
use crate::tracker::{
    DayTracker, DrinkEntry, DEFAULT_REMINDER_INTERVAL_MIN, DEFAULT_TARGET_ML,
};

/// Fixed kv key for the day state blob.
pub const DAY_STATE_KEY: &str = "water_day";

/// Calendar day of the local clock, `YYYY-MM-DD`.
pub fn today_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Day state as serialized to storage.
///
/// Each field defaults independently, so a record written by an older
/// build (or hand-edited) still loads with sensible values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(default)]
    pub entries: Vec<DrinkEntry>,
    #[serde(default = "default_target")]
    pub target: u32,
    #[serde(default = "default_interval")]
    pub reminder_interval: u32,
    #[serde(default)]
    pub date: String,
}

fn default_target() -> u32 {
    DEFAULT_TARGET_ML
}

fn default_interval() -> u32 {
    DEFAULT_REMINDER_INTERVAL_MIN
}

impl DayRecord {
    /// Snapshot a tracker into its persisted form, stamped with today.
    pub fn of(tracker: &DayTracker) -> Self {
        Self {
            entries: tracker.entries().to_vec(),
            target: tracker.target_ml(),
            reminder_interval: tracker.reminder_interval_min(),
            date: today_key(),
        }
    }

    /// Project the record into live state for the given calendar day.
    ///
    /// A stale date discards the entries; settings always survive and
    /// are clamped back into their valid ranges.
    pub fn into_tracker(self, today: &str) -> DayTracker {
        let entries = if self.date == today {
            self.entries
        } else {
            Vec::new()
        };
        DayTracker::from_parts(entries, self.target, self.reminder_interval)
    }

    /// Read the record from storage.
    ///
    /// Missing key, parse failure, and storage failure all read as
    /// `None`: no prior state.
    pub fn read(db: &Database) -> Option<Self> {
        let raw = match db.kv_get(DAY_STATE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!("day state unreadable, starting fresh: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("day state malformed, starting fresh: {e}");
                None
            }
        }
    }

    /// Write the record to storage.
    pub fn write(&self, db: &Database) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        db.kv_set(DAY_STATE_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_for(date: &str) -> DayRecord {
        let mut tracker = DayTracker::new();
        tracker.add_drink(250);
        tracker.add_drink(500);
        tracker.set_target(2500);
        tracker.set_reminder_interval(90);
        DayRecord {
            date: date.to_string(),
            ..DayRecord::of(&tracker)
        }
    }

    #[test]
    fn same_day_load_keeps_entries() {
        let tracker = record_for("2026-08-04").into_tracker("2026-08-04");
        assert_eq!(tracker.total_consumed_ml(), 750);
        assert_eq!(tracker.target_ml(), 2500);
        assert_eq!(tracker.reminder_interval_min(), 90);
    }

    #[test]
    fn stale_date_drops_entries_but_keeps_settings() {
        let tracker = record_for("2026-08-03").into_tracker("2026-08-04");
        assert!(tracker.entries().is_empty());
        assert_eq!(tracker.target_ml(), 2500);
        assert_eq!(tracker.reminder_interval_min(), 90);
    }

    #[test]
    fn persisted_json_matches_wire_format() {
        let record = record_for("2026-08-04");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["target"], 2500);
        assert_eq!(json["reminderInterval"], 90);
        assert_eq!(json["date"], "2026-08-04");
        assert_eq!(json["entries"][0]["amount"], 250);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let record: DayRecord = serde_json::from_str(r#"{"date": "2026-08-04"}"#).unwrap();
        assert_eq!(record.target, DEFAULT_TARGET_ML);
        assert_eq!(record.reminder_interval, DEFAULT_REMINDER_INTERVAL_MIN);
        assert!(record.entries.is_empty());
    }

    #[test]
    fn malformed_blob_reads_as_absent() {
        let db = Database::open_memory().unwrap();
        db.kv_set(DAY_STATE_KEY, "{not json").unwrap();
        assert!(DayRecord::read(&db).is_none());
    }

    #[test]
    fn storage_roundtrip() {
        let db = Database::open_memory().unwrap();
        let record = record_for("2026-08-04");
        record.write(&db).unwrap();
        let loaded = DayRecord::read(&db).unwrap();
        assert_eq!(loaded.entries, record.entries);
        assert_eq!(loaded.target, record.target);
        assert_eq!(loaded.reminder_interval, record.reminder_interval);
        assert_eq!(loaded.date, record.date);
    }

    #[test]
    fn out_of_range_settings_are_clamped_on_load() {
        let record: DayRecord = serde_json::from_str(
            r#"{"target": 50, "reminderInterval": 999, "date": "2026-08-04"}"#,
        )
        .unwrap();
        let tracker = record.into_tracker("2026-08-04");
        assert_eq!(tracker.target_ml(), 500);
        assert_eq!(tracker.reminder_interval_min(), 180);
    }
}
