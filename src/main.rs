use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tripbudget::cli::{
    handle_export_command, handle_report_command, handle_stats_command, handle_step_command,
    resolve_today, ExportArgs, ReportCommands, StatsArgs, StepArgs, TripContext,
};
use tripbudget::config::{Settings, TripBudgetPaths};
use tripbudget::storage::initialize_trip_file;

#[derive(Parser)]
#[command(
    name = "tripbudget",
    author = "Kaylee Beyene",
    version,
    about = "Daily budget statistics for trips",
    long_about = "tripbudget shows how a trip's spending tracks against its budget, \
                  day by day. Multi-day expenses are spread over the days they cover, \
                  and savings or overspending from earlier days roll into an adjusted \
                  daily budget for the rest of the trip."
)]
struct Cli {
    /// Trip file to use instead of the configured one
    #[arg(long, global = true, env = "TRIPBUDGET_TRIP")]
    trip: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter trip file with the default categories
    Init {
        /// Overwrite an existing trip file
        #[arg(long)]
        force: bool,
    },

    /// Show statistics for one day of the trip
    Stats(StatsArgs),

    /// Move the selected day forward or back
    Step(StepArgs),

    /// Trip reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the trip as JSON or CSV
    Export(ExportArgs),

    /// Browse the trip day by day
    #[command(alias = "tui")]
    Browse,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tripbudget::init_tracing();
    let cli = Cli::parse();

    let paths = TripBudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let today = resolve_today(cli.today.as_deref())?;

    let load = || TripContext::load(&paths, &settings, cli.trip.clone(), today);

    match cli.command {
        Some(Commands::Init { force }) => {
            let trip_file = settings.trip_file(&paths, cli.trip.clone());
            paths.ensure_directories()?;
            let bundle = initialize_trip_file(&trip_file, today, force)?;
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Created trip file: {}", trip_file.display());
            println!(
                "  {} from {} to {}, budget {:.2} {}",
                bundle.trip.name,
                bundle.trip.start_date,
                bundle.trip.end_date,
                bundle.trip.total_budget.unwrap_or(0.0),
                bundle.trip.currency_code
            );
            println!("  {} categories, {} sample expenses", bundle.categories.len(), bundle.expenses.len());
            println!();
            println!("Run 'tripbudget stats' to see today's numbers.");
        }
        Some(Commands::Stats(args)) => handle_stats_command(&load()?, args)?,
        Some(Commands::Step(args)) => handle_step_command(&load()?, args)?,
        Some(Commands::Report(cmd)) => handle_report_command(&load()?, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&load()?, args)?,
        Some(Commands::Browse) => tripbudget::tui::run_tui(load()?)?,
        Some(Commands::Config) => {
            println!("tripbudget Configuration");
            println!("========================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!(
                "Trip file:       {}",
                settings.trip_file(&paths, cli.trip.clone()).display()
            );
            println!("Exports:         {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!("  Warning threshold: {}%", settings.warning_threshold_percent);
            println!("  Step debounce:     {} ms", settings.step_debounce_ms);
            println!("  Date format:       {}", settings.date_format);
            println!("  Amount decimals:   {}", settings.amount_decimals);
        }
        None => {
            println!("tripbudget - daily budget statistics for trips");
            println!();
            println!("Run 'tripbudget --help' for usage information.");
            println!("Run 'tripbudget browse' to step through your trip day by day.");
        }
    }

    Ok(())
}
