//! Day tracker implementation.
//!
//! The tracker is a plain in-memory state container. It does not touch
//! storage - persistence is layered on top by [`crate::store::TrackerStore`],
//! which saves after every mutation.
//!
//! Entries are append-ordered, so insertion order is chronological order
//! and the last entry holds the most recent drink time.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use super::entry::DrinkEntry;
use crate::events::Event;
use crate::reminder;

/// Default daily target in milliliters.
pub const DEFAULT_TARGET_ML: u32 = 2000;
/// Default reminder interval in minutes.
pub const DEFAULT_REMINDER_INTERVAL_MIN: u32 = 60;
/// Valid daily target range in milliliters.
pub const TARGET_RANGE_ML: RangeInclusive<u32> = 500..=5000;
/// Valid reminder interval range in minutes.
pub const INTERVAL_RANGE_MIN: RangeInclusive<u32> = 15..=180;

/// Coarse progress bands toward the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressLevel {
    /// Target reached (>= 100%).
    Complete,
    /// At least half way (>= 50%).
    OnTrack,
    /// Some progress (>= 25%).
    Behind,
    /// Barely started (< 25%).
    FarBehind,
}

impl fmt::Display for ProgressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProgressLevel::Complete => "complete",
            ProgressLevel::OnTrack => "on-track",
            ProgressLevel::Behind => "behind",
            ProgressLevel::FarBehind => "far-behind",
        };
        f.write_str(s)
    }
}

/// In-memory state for the current day.
///
/// Holds the append-ordered drink entries plus the two user settings.
/// Mutations return the [`Event`] they produced, or `None` when the call
/// was a no-op (zero amount, unknown id).
#[derive(Debug, Clone)]
pub struct DayTracker {
    entries: Vec<DrinkEntry>,
    target_ml: u32,
    reminder_interval_min: u32,
}

impl Default for DayTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DayTracker {
    /// Fresh state: no entries, default target and interval.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            target_ml: DEFAULT_TARGET_ML,
            reminder_interval_min: DEFAULT_REMINDER_INTERVAL_MIN,
        }
    }

    /// Rebuild state from persisted parts, clamping settings into their
    /// valid ranges.
    pub fn from_parts(entries: Vec<DrinkEntry>, target_ml: u32, reminder_interval_min: u32) -> Self {
        Self {
            entries,
            target_ml: clamp_to(target_ml, TARGET_RANGE_ML),
            reminder_interval_min: clamp_to(reminder_interval_min, INTERVAL_RANGE_MIN),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn entries(&self) -> &[DrinkEntry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn target_ml(&self) -> u32 {
        self.target_ml
    }

    pub fn reminder_interval_min(&self) -> u32 {
        self.reminder_interval_min
    }

    /// Sum of all entry amounts.
    pub fn total_consumed_ml(&self) -> u32 {
        self.entries.iter().map(|e| e.amount_ml).sum()
    }

    /// Time of the most recent drink, if any.
    pub fn last_drink_time(&self) -> Option<DateTime<Utc>> {
        self.entries.last().map(|e| e.time)
    }

    /// 0.0 .. 100.0 progress toward the daily target, capped for display.
    pub fn progress_pct(&self) -> f64 {
        if self.target_ml == 0 {
            return 0.0;
        }
        (f64::from(self.total_consumed_ml()) / f64::from(self.target_ml) * 100.0).min(100.0)
    }

    pub fn progress_level(&self) -> ProgressLevel {
        let pct = self.progress_pct();
        if pct >= 100.0 {
            ProgressLevel::Complete
        } else if pct >= 50.0 {
            ProgressLevel::OnTrack
        } else if pct >= 25.0 {
            ProgressLevel::Behind
        } else {
            ProgressLevel::FarBehind
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let now = Utc::now();
        let elapsed_min = reminder::elapsed_minutes(self.last_drink_time(), now);
        Event::StateSnapshot {
            date: Local::now().format("%Y-%m-%d").to_string(),
            entry_count: self.entry_count(),
            total_ml: self.total_consumed_ml(),
            target_ml: self.target_ml,
            progress_pct: self.progress_pct(),
            progress: self.progress_level(),
            interval_min: self.reminder_interval_min,
            last_drink_at: self.last_drink_time(),
            elapsed_min,
            urgency: reminder::classify(elapsed_min, self.reminder_interval_min),
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Append a new entry stamped with the current time.
    ///
    /// A zero amount is silently ignored, matching the permissive
    /// clamping at the input boundary.
    pub fn add_drink(&mut self, amount_ml: u32) -> Option<Event> {
        if amount_ml == 0 {
            return None;
        }
        let entry = DrinkEntry::new(amount_ml);
        let id = entry.id.clone();
        self.entries.push(entry);
        Some(Event::DrinkAdded {
            id,
            amount_ml,
            total_ml: self.total_consumed_ml(),
            at: Utc::now(),
        })
    }

    /// Remove the entry with the given id. No-op when absent.
    pub fn delete_entry(&mut self, id: &str) -> Option<Event> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        self.entries.remove(index);
        Some(Event::EntryDeleted {
            id: id.to_string(),
            total_ml: self.total_consumed_ml(),
            at: Utc::now(),
        })
    }

    /// Clear today's entries. Target and interval are untouched.
    pub fn reset_today(&mut self) -> Event {
        self.entries.clear();
        Event::DayReset { at: Utc::now() }
    }

    /// Set the daily target, clamped to [`TARGET_RANGE_ML`].
    pub fn set_target(&mut self, target_ml: u32) -> Event {
        self.target_ml = clamp_to(target_ml, TARGET_RANGE_ML);
        Event::TargetChanged {
            target_ml: self.target_ml,
            at: Utc::now(),
        }
    }

    /// Set the reminder interval, clamped to [`INTERVAL_RANGE_MIN`].
    pub fn set_reminder_interval(&mut self, interval_min: u32) -> Event {
        self.reminder_interval_min = clamp_to(interval_min, INTERVAL_RANGE_MIN);
        Event::ReminderIntervalChanged {
            interval_min: self.reminder_interval_min,
            at: Utc::now(),
        }
    }
}

fn clamp_to(value: u32, range: RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
