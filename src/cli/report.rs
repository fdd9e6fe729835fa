//! CLI commands for reports

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use super::TripContext;
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::reports::{export_summary_csv, format_summary_terminal, TripTimeline};
use crate::services::TripSummary;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Day-by-day statistics for the whole trip
    Timeline {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Whole-trip spending summary by category and payment method
    Summary {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(ctx: &TripContext, cmd: ReportCommands) -> TripBudgetResult<()> {
    match cmd {
        ReportCommands::Timeline { output } => {
            let timeline = TripTimeline::generate(
                &ctx.trip,
                &ctx.categories,
                &ctx.expenses,
                &ctx.classifier(),
                ctx.today,
            )?;
            print!(
                "{}",
                timeline.format_terminal(ctx.decimals(), ctx.date_format())
            );

            if let Some(path) = output {
                timeline.export_csv(create_output(&path)?)?;
                println!("\nReport exported to: {}", path.display());
            }
        }
        ReportCommands::Summary { output } => {
            let summary = TripSummary::generate(&ctx.trip, &ctx.categories, &ctx.expenses)?;
            print!("{}", format_summary_terminal(&summary, ctx.decimals()));

            if let Some(path) = output {
                export_summary_csv(&summary, create_output(&path)?)?;
                println!("\nReport exported to: {}", path.display());
            }
        }
    }

    Ok(())
}

pub(crate) fn create_output(path: &Path) -> TripBudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        TripBudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
