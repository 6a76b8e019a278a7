use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "aqualog", version, about = "Aqualog CLI -- daily water intake tracker")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and manage today's drinks
    Drink {
        #[command(subcommand)]
        action: commands::drink::DrinkAction,
    },
    /// Show today's intake and reminder state
    Status {
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear today's entries
    Reset,
    /// Daily target and reminder interval
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Application configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Re-check the reminder once per minute and notify when due
    Watch {
        /// Perform a single check and exit
        #[arg(long)]
        once: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Drink { action } => commands::drink::run(action),
        Commands::Status { json } => commands::status::run(json),
        Commands::Reset => commands::reset::run(),
        Commands::Settings { action } => commands::settings::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch { once } => commands::watch::run(once),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
