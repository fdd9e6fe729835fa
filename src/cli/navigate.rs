//! CLI command for moving the date cursor

use clap::Args;

use super::{parse_date, TripContext};
use crate::error::TripBudgetResult;
use crate::reports::format_hints;
use crate::services::DateCursor;

#[derive(Args, Debug)]
pub struct StepArgs {
    /// Number of days to move; negative moves back
    #[arg(allow_negative_numbers = true)]
    pub delta: i64,

    /// Day to start from (YYYY-MM-DD); defaults to today, clamped into the trip
    #[arg(short, long)]
    pub from: Option<String>,
}

/// Handle the step command
pub fn handle_step_command(ctx: &TripContext, args: StepArgs) -> TripBudgetResult<()> {
    let mut cursor = DateCursor::initialize(&ctx.trip, ctx.today);
    if let Some(value) = args.from.as_deref() {
        cursor.go_to(parse_date(value)?);
    }

    let from = cursor.selected();
    if cursor.step(args.delta) {
        println!(
            "{} -> {}",
            from.format(ctx.date_format()),
            cursor.selected().format(ctx.date_format())
        );
    } else {
        println!(
            "{} (cannot move {} day(s) without leaving the trip)",
            from.format(ctx.date_format()),
            args.delta
        );
    }
    println!("{}", format_hints(cursor.hints()));

    Ok(())
}
