use aqualog_core::storage::Config;
use aqualog_core::store::TrackerStore;
use chrono::Local;
use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum DrinkAction {
    /// Record a drink of the given volume in milliliters
    Add {
        /// Volume in milliliters; zero is ignored
        amount_ml: u32,
    },
    /// Record a preset drink
    Quick {
        /// Preset name; volumes come from the quick_add config section
        preset: Preset,
    },
    /// List today's entries
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete an entry by id
    Delete { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Preset {
    /// A cup (150 ml by default)
    Cup,
    /// A glass (250 ml by default)
    Glass,
    /// A bottle (500 ml by default)
    Bottle,
}

pub fn run(action: DrinkAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TrackerStore::open()?;

    match action {
        DrinkAction::Add { amount_ml } => add(&mut store, amount_ml)?,
        DrinkAction::Quick { preset } => {
            let config = Config::load_or_default();
            let amount_ml = match preset {
                Preset::Cup => config.quick_add.cup_ml,
                Preset::Glass => config.quick_add.glass_ml,
                Preset::Bottle => config.quick_add.bottle_ml,
            };
            add(&mut store, amount_ml)?;
        }
        DrinkAction::List { json } => {
            let entries = store.tracker().entries();
            if json {
                println!("{}", serde_json::to_string_pretty(entries)?);
            } else if entries.is_empty() {
                println!("no drinks recorded today");
            } else {
                for entry in entries {
                    let time = entry.time.with_timezone(&Local).format("%H:%M");
                    println!("{time}  {:>5} ml  {}", entry.amount_ml, entry.id);
                }
                println!("total: {} ml", store.tracker().total_consumed_ml());
            }
        }
        DrinkAction::Delete { id } => match store.delete_entry(&id) {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("{{\"type\": \"noop\"}}"),
        },
    }

    Ok(())
}

fn add(store: &mut TrackerStore, amount_ml: u32) -> Result<(), Box<dyn std::error::Error>> {
    match store.add_drink(amount_ml) {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => println!("{{\"type\": \"noop\"}}"),
    }
    Ok(())
}
