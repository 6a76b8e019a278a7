//! The periodic reminder loop.
//!
//! Reloads the day state on every tick so drinks recorded by other
//! invocations (and the daily rollover) are picked up, then lets the
//! evaluator decide whether a notification is due.

use std::time::Duration;

use aqualog_core::notify::{ConsoleNotifier, Notifier, NullNotifier, Permission};
use aqualog_core::reminder::{format_elapsed, ReminderEvaluator};
use aqualog_core::storage::Config;
use aqualog_core::store::TrackerStore;
use chrono::Utc;
use tracing::warn;

const TICK: Duration = Duration::from_secs(60);

pub fn run(once: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let notifier: Box<dyn Notifier> = if config.notifications.enabled {
        Box::new(ConsoleNotifier::new(true))
    } else {
        Box::new(NullNotifier)
    };

    let store = TrackerStore::open()?;
    let mut evaluator = ReminderEvaluator::new(store.tracker().reminder_interval_min())
        .with_repeat(config.notifications.repeat_when_overdue);
    drop(store);

    if once {
        return check(&mut evaluator, notifier.as_ref());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async {
        let mut ticker = tokio::time::interval(TICK);
        loop {
            // The first tick completes immediately.
            ticker.tick().await;
            if let Err(e) = check(&mut evaluator, notifier.as_ref()) {
                warn!("reminder check failed: {e}");
            }
        }
    })
}

fn check(
    evaluator: &mut ReminderEvaluator,
    notifier: &dyn Notifier,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = TrackerStore::open()?;
    evaluator.set_interval(store.tracker().reminder_interval_min());

    let result = evaluator.check(store.tracker().last_drink_time(), Utc::now());
    match result.elapsed_min {
        Some(elapsed) => println!(
            "last drink {} ago ({})",
            format_elapsed(elapsed),
            result.urgency
        ),
        None => println!("no drinks yet today"),
    }

    if result.notify_due && notifier.permission() == Permission::Granted {
        let elapsed = result.elapsed_min.unwrap_or(0);
        notifier.notify(
            "Time to drink water!",
            &format!(
                "It's been {} since your last drink. Stay hydrated!",
                format_elapsed(elapsed)
            ),
        );
    }

    Ok(())
}
