//! The application state container.
//!
//! [`TrackerStore`] owns the storage handle and the live [`DayTracker`],
//! and funnels every mutation through the tracker's operation set,
//! persisting after each one. Persistence is best-effort: a failed write
//! is logged and swallowed, the in-memory state stays correct, and the
//! next successful write catches up.

use tracing::{debug, warn};

use crate::error::CoreError;
use crate::events::Event;
use crate::storage::{today_key, Database, DayRecord};
use crate::tracker::DayTracker;

pub struct TrackerStore {
    db: Database,
    tracker: DayTracker,
}

impl TrackerStore {
    /// Open the default database and load today's state.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened. Missing or
    /// malformed day state is not an error; it loads as defaults.
    pub fn open() -> Result<Self, CoreError> {
        let db = Database::open()?;
        Ok(Self::load(db))
    }

    /// Load today's state from an already-open database.
    ///
    /// A record stamped with an earlier calendar day loses its entries;
    /// target and reminder interval survive the rollover.
    pub fn load(db: Database) -> Self {
        let tracker = match DayRecord::read(&db) {
            Some(record) => record.into_tracker(&today_key()),
            None => {
                debug!("no prior day state, starting with defaults");
                DayTracker::new()
            }
        };
        Self { db, tracker }
    }

    pub fn tracker(&self) -> &DayTracker {
        &self.tracker
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        self.tracker.snapshot()
    }

    // ── Mutations (each persists on success) ─────────────────────────

    pub fn add_drink(&mut self, amount_ml: u32) -> Option<Event> {
        let event = self.tracker.add_drink(amount_ml);
        if event.is_some() {
            self.persist();
        }
        event
    }

    pub fn delete_entry(&mut self, id: &str) -> Option<Event> {
        let event = self.tracker.delete_entry(id);
        if event.is_some() {
            self.persist();
        }
        event
    }

    pub fn reset_today(&mut self) -> Event {
        let event = self.tracker.reset_today();
        self.persist();
        event
    }

    pub fn set_target(&mut self, target_ml: u32) -> Event {
        let event = self.tracker.set_target(target_ml);
        self.persist();
        event
    }

    pub fn set_reminder_interval(&mut self, interval_min: u32) -> Event {
        let event = self.tracker.set_reminder_interval(interval_min);
        self.persist();
        event
    }

    fn persist(&self) {
        if let Err(e) = DayRecord::of(&self.tracker).write(&self.db) {
            warn!("failed to persist day state: {e}");
        }
    }
}
