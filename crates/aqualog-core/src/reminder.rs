//! Elapsed-time reminder evaluation.
//!
//! The evaluator is wall-clock based and caller-driven: no internal
//! threads or timers. The presentation layer calls [`ReminderEvaluator::check`]
//! once per minute while a view is active and acts on the result. If
//! nothing calls it, no reminder fires; there is no delivery guarantee.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fraction of the reminder interval after which urgency becomes Warning.
pub const WARNING_RATIO: f64 = 0.7;

/// Urgency derived from elapsed time versus the reminder interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    /// No drink recorded yet (first-run state).
    NoData,
    Ok,
    Warning,
    Overdue,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::NoData => "no-data",
            Urgency::Ok => "ok",
            Urgency::Warning => "warning",
            Urgency::Overdue => "overdue",
        };
        f.write_str(s)
    }
}

/// Whole minutes since the last drink, or `None` when there is none.
/// Clock skew that would make the delta negative clamps to zero.
pub fn elapsed_minutes(last_drink: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<u64> {
    last_drink.map(|t| (now - t).num_minutes().max(0) as u64)
}

/// Classify elapsed minutes against the reminder interval.
pub fn classify(elapsed_min: Option<u64>, interval_min: u32) -> Urgency {
    let Some(elapsed) = elapsed_min else {
        return Urgency::NoData;
    };
    if elapsed >= u64::from(interval_min) {
        Urgency::Overdue
    } else if elapsed as f64 >= f64::from(interval_min) * WARNING_RATIO {
        Urgency::Warning
    } else {
        Urgency::Ok
    }
}

/// Result of one reminder check.
#[derive(Debug, Clone, Copy)]
pub struct ReminderCheck {
    pub urgency: Urgency,
    pub elapsed_min: Option<u64>,
    /// Whether a notification should fire for this check.
    pub notify_due: bool,
}

/// Stateful reminder evaluator.
///
/// Tracks the current overdue episode so that a notification fires once
/// when the interval threshold is crossed, not on every periodic check.
/// The episode ends when urgency drops below Overdue (a new drink).
/// `repeat_when_overdue` restores per-check re-firing for users who want
/// to be nagged.
#[derive(Debug, Clone)]
pub struct ReminderEvaluator {
    interval_min: u32,
    repeat_when_overdue: bool,
    notified_this_episode: bool,
}

impl ReminderEvaluator {
    pub fn new(interval_min: u32) -> Self {
        Self {
            interval_min,
            repeat_when_overdue: false,
            notified_this_episode: false,
        }
    }

    pub fn with_repeat(mut self, repeat_when_overdue: bool) -> Self {
        self.repeat_when_overdue = repeat_when_overdue;
        self
    }

    pub fn interval_min(&self) -> u32 {
        self.interval_min
    }

    /// Follow a settings change. The episode marker is kept: a shorter
    /// interval must not re-fire for an episode already notified.
    pub fn set_interval(&mut self, interval_min: u32) {
        self.interval_min = interval_min;
    }

    /// Evaluate the reminder state at `now` and decide whether to notify.
    pub fn check(&mut self, last_drink: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ReminderCheck {
        let elapsed_min = elapsed_minutes(last_drink, now);
        let urgency = classify(elapsed_min, self.interval_min);

        let notify_due = if urgency == Urgency::Overdue {
            if self.repeat_when_overdue {
                true
            } else if self.notified_this_episode {
                false
            } else {
                self.notified_this_episode = true;
                true
            }
        } else {
            self.notified_this_episode = false;
            false
        };

        ReminderCheck {
            urgency,
            elapsed_min,
            notify_due,
        }
    }
}

/// Human-readable elapsed time: "45 min", "2 h", "2 h 5 min".
pub fn format_elapsed(minutes: u64) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours} h {mins} min")
    } else {
        format!("{hours} h")
    }
}
