//! Application state for the TUI
//!
//! The App holds the loaded trip, the date cursor, and the snapshot for the
//! selected day. Every date change goes through the cursor and is followed
//! by a recompute.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cli::TripContext;
use crate::models::{BudgetStatus, DailyBudgetStatistics};
use crate::services::{
    DailyStatisticsCalculator, DateCursor, NavigationGesture, NavigationHints, StatusClassifier,
};

/// Drops single-day steps that arrive faster than the configured interval
#[derive(Debug, Clone)]
pub struct StepDebouncer {
    interval: Duration,
    last_step: Option<Instant>,
}

impl StepDebouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_step: None,
        }
    }

    /// Whether a step arriving at `now` should be applied
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.last_step {
            Some(last) if now.saturating_duration_since(last) < self.interval => false,
            _ => {
                self.last_step = Some(now);
                true
            }
        }
    }
}

/// Main application state
pub struct App {
    pub ctx: TripContext,
    pub cursor: DateCursor,
    classifier: StatusClassifier,
    debouncer: StepDebouncer,

    /// Snapshot for the selected day, absent if computing it failed
    pub statistics: Option<DailyBudgetStatistics>,
    pub status: Option<BudgetStatus>,

    /// Error from the last recompute
    pub error_message: Option<String>,

    pub should_quit: bool,
}

impl App {
    pub fn new(ctx: TripContext) -> Self {
        let cursor = DateCursor::initialize(&ctx.trip, ctx.today);
        let classifier = ctx.classifier();
        let debouncer =
            StepDebouncer::new(Duration::from_millis(ctx.settings.step_debounce_ms));

        let mut app = Self {
            ctx,
            cursor,
            classifier,
            debouncer,
            statistics: None,
            status: None,
            error_message: None,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Recompute the snapshot for the selected day
    pub fn refresh(&mut self) {
        let calculator =
            DailyStatisticsCalculator::new(&self.ctx.trip, &self.ctx.categories, &self.ctx.expenses);
        match calculator.compute(self.cursor.selected()) {
            Ok(stats) => {
                self.status = Some(self.classifier.classify(&stats, self.ctx.today));
                self.statistics = Some(stats);
                self.error_message = None;
            }
            Err(e) => {
                self.statistics = None;
                self.status = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Apply a navigation gesture received at `now`.
    ///
    /// Steps inside the debounce window are dropped; jumps always apply.
    /// Returns whether the selected day changed.
    pub fn navigate(&mut self, gesture: NavigationGesture, now: Instant) -> bool {
        if gesture.is_step() && !self.debouncer.allow(now) {
            debug!(?gesture, "dropped step inside debounce window");
            return false;
        }

        let moved = self.cursor.apply(gesture, self.ctx.today);
        if moved {
            self.refresh();
        }
        moved
    }

    pub fn hints(&self) -> NavigationHints {
        self.cursor.hints()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
