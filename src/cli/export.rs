//! CLI command for data export

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::report::create_output;
use super::TripContext;
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::export::{export_expenses_csv, export_timeline_csv, export_trip_json, TripExport};
use crate::reports::TripTimeline;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Trip data, summary and every day's statistics
    Json,
    /// Day-by-day timeline, or the expense list with --expenses
    Csv,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSV only: export the raw expense list instead of the timeline
    #[arg(long)]
    pub expenses: bool,

    /// JSON only: pretty-print
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(ctx: &TripContext, args: ExportArgs) -> TripBudgetResult<()> {
    match &args.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_export(ctx, &args, &mut writer)?;
            writer
                .flush()
                .map_err(|e| TripBudgetError::Export(e.to_string()))?;
            eprintln!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(ctx, &args, &mut handle)?;
            if args.format == ExportFormat::Json {
                writeln!(handle).map_err(|e| TripBudgetError::Export(e.to_string()))?;
            }
        }
    }
    Ok(())
}

fn write_export<W: Write>(ctx: &TripContext, args: &ExportArgs, writer: &mut W) -> TripBudgetResult<()> {
    match args.format {
        ExportFormat::Json => {
            let export = TripExport::build(
                &ctx.trip,
                &ctx.categories,
                &ctx.expenses,
                &ctx.classifier(),
                ctx.today,
            )?;
            export_trip_json(&export, writer, args.pretty)
        }
        ExportFormat::Csv if args.expenses => {
            export_expenses_csv(&ctx.categories, &ctx.expenses, writer)
        }
        ExportFormat::Csv => {
            let timeline = TripTimeline::generate(
                &ctx.trip,
                &ctx.categories,
                &ctx.expenses,
                &ctx.classifier(),
                ctx.today,
            )?;
            export_timeline_csv(&timeline, writer)
        }
    }
}
