use aqualog_core::reminder::{self, format_elapsed};
use aqualog_core::store::TrackerStore;
use chrono::Utc;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = TrackerStore::open()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
        return Ok(());
    }

    let tracker = store.tracker();
    println!(
        "{} ml / {} ml ({:.0}%, {}) in {} drinks",
        tracker.total_consumed_ml(),
        tracker.target_ml(),
        tracker.progress_pct(),
        tracker.progress_level(),
        tracker.entry_count(),
    );

    let elapsed_min = reminder::elapsed_minutes(tracker.last_drink_time(), Utc::now());
    match elapsed_min {
        Some(elapsed) => {
            let urgency = reminder::classify(elapsed_min, tracker.reminder_interval_min());
            println!("last drink {} ago ({urgency})", format_elapsed(elapsed));
        }
        None => println!("no drinks recorded yet, start with your first glass of the day"),
    }

    Ok(())
}
