use aqualog_core::notify::{ConsoleNotifier, Notifier, Permission};
use aqualog_core::storage::Config;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the full configuration as TOML
    Show,
    /// Get a value by dot-separated key
    Get { key: String },
    /// Set a value by dot-separated key
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown config key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            println!("{key} = {value}");

            // Enabling notifications mirrors the permission grant flow:
            // confirm with a notification the user can see.
            if key == "notifications.enabled" && config.notifications.enabled {
                let mut notifier = ConsoleNotifier::new(false);
                if notifier.request_permission() == Permission::Granted {
                    notifier.notify("Water reminder", "Notifications enabled!");
                }
            }
        }
    }

    Ok(())
}
