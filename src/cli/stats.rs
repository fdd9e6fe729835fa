//! CLI command for the daily statistics snapshot

use clap::Args;
use tracing::warn;

use super::{parse_date, TripContext};
use crate::error::{TripBudgetError, TripBudgetResult};
use crate::export::ExportedDay;
use crate::reports::{format_hints, DailyReport};
use crate::services::DateCursor;

#[derive(Args, Debug, Default)]
pub struct StatsArgs {
    /// Date to show (YYYY-MM-DD); defaults to today, clamped into the trip
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the stats command
pub fn handle_stats_command(ctx: &TripContext, args: StatsArgs) -> TripBudgetResult<()> {
    let mut cursor = DateCursor::initialize(&ctx.trip, ctx.today);
    if let Some(value) = args.date.as_deref() {
        let requested = parse_date(value)?;
        let selected = cursor.go_to(requested);
        if selected != requested {
            warn!(%requested, %selected, "date is outside the trip, showing nearest trip day");
            if !args.json {
                eprintln!(
                    "{} is outside the trip; showing {} instead.",
                    requested, selected
                );
            }
        }
    }

    let report = DailyReport::generate(
        &ctx.trip,
        &ctx.categories,
        &ctx.expenses,
        cursor.selected(),
        &ctx.classifier(),
        ctx.today,
    )?;

    if args.json {
        let day = ExportedDay {
            status: report.status,
            statistics: report.statistics,
        };
        let json = serde_json::to_string_pretty(&day)
            .map_err(|e| TripBudgetError::Json(e.to_string()))?;
        println!("{}", json);
    } else {
        print!("{}", report.format_terminal(ctx.decimals(), ctx.date_format()));
        println!();
        println!("{}", format_hints(cursor.hints()));
    }

    Ok(())
}
