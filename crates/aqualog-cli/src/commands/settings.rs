use aqualog_core::store::TrackerStore;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the current target and reminder interval
    Show,
    /// Set the daily target in milliliters (clamped to 500-5000)
    Target { ml: u32 },
    /// Set the reminder interval in minutes (clamped to 15-180)
    Interval { minutes: u32 },
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TrackerStore::open()?;

    match action {
        SettingsAction::Show => {
            println!("target: {} ml", store.tracker().target_ml());
            println!(
                "reminder interval: {} min",
                store.tracker().reminder_interval_min()
            );
        }
        SettingsAction::Target { ml } => {
            let event = store.set_target(ml);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        SettingsAction::Interval { minutes } => {
            let event = store.set_reminder_interval(minutes);
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
