//! # Aqualog Core Library
//!
//! Core logic for Aqualog, a single-user daily water-intake tracker:
//! timestamped drink entries, local persistence with a daily rollover,
//! progress against a daily volume target, and a reminder when too much
//! time has passed since the last drink.
//!
//! ## Architecture
//!
//! - **Tracker**: in-memory day state with the full operation set;
//!   derives totals, progress, and last-drink time
//! - **Store**: the state container that funnels every mutation through
//!   the tracker and persists after each one
//! - **Storage**: SQLite key-value persistence and TOML configuration
//! - **Reminder**: wall-clock urgency classification and the
//!   once-per-overdue-episode notification decision; the caller drives
//!   the periodic check, there are no internal threads
//! - **Notify**: capability trait standing in for a platform
//!   notification system
//!
//! All operations are available through the `aqualog` CLI binary; a GUI
//! would be a thin layer over this crate.

pub mod error;
pub mod events;
pub mod notify;
pub mod reminder;
pub mod storage;
pub mod store;
pub mod tracker;

pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use notify::{ConsoleNotifier, Notifier, NullNotifier, Permission};
pub use reminder::{ReminderCheck, ReminderEvaluator, Urgency};
pub use storage::{Config, Database, DayRecord};
pub use store::TrackerStore;
pub use tracker::{DayTracker, DrinkEntry, ProgressLevel};
