use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dawam-cli", version, about = "Dawam work-calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify today under the stored configuration
    Today,
    /// Classify an arbitrary date (YYYY-MM-DD)
    Classify {
        date: String,
    },
    /// Shift pattern management
    Shift {
        #[command(subcommand)]
        action: commands::shift::ShiftAction,
    },
    /// Period statistics
    Stats {
        #[command(flatten)]
        args: commands::stats::StatsArgs,
    },
    /// Notes and reminders
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Today => commands::classify::run_today(),
        Commands::Classify { date } => commands::classify::run_date(&date),
        Commands::Shift { action } => commands::shift::run(action),
        Commands::Stats { args } => commands::stats::run(args),
        Commands::Note { action } => commands::note::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
