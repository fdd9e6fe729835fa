//! Bounded date cursor over a trip
//!
//! The selected day can only ever be a day of the trip. Stepping past either
//! end is refused rather than clamped; explicit jumps clamp.

use chrono::{Days, NaiveDate};

use super::calendar;
use crate::models::Trip;

/// Which directions the cursor can still move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationHints {
    pub can_step_back: bool,
    pub can_step_forward: bool,
}

/// User intents translated into cursor moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationGesture {
    Previous,
    Next,
    Today,
    TripStart,
    TripEnd,
}

impl NavigationGesture {
    /// Single-day steps, as opposed to jumps
    pub fn is_step(&self) -> bool {
        matches!(self, Self::Previous | Self::Next)
    }
}

/// Selected date within `[trip_start, trip_end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCursor {
    selected: NaiveDate,
    trip_start: NaiveDate,
    trip_end: NaiveDate,
}

impl DateCursor {
    /// Start on `today` if it falls within the trip, otherwise on the nearest end
    pub fn initialize(trip: &Trip, today: NaiveDate) -> Self {
        Self {
            selected: calendar::clamp(today, trip.start_date, trip.end_date),
            trip_start: trip.start_date,
            trip_end: trip.end_date,
        }
    }

    /// Cursor positioned on `date`, clamped into the trip
    pub fn at(trip: &Trip, date: NaiveDate) -> Self {
        Self::initialize(trip, date)
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn trip_start(&self) -> NaiveDate {
        self.trip_start
    }

    pub fn trip_end(&self) -> NaiveDate {
        self.trip_end
    }

    /// Move by `delta` days. Returns whether the cursor moved; a step that
    /// would leave the trip leaves the selection unchanged.
    pub fn step(&mut self, delta: i64) -> bool {
        if delta == 0 {
            return false;
        }

        let target = if delta > 0 {
            self.selected.checked_add_days(Days::new(delta.unsigned_abs()))
        } else {
            self.selected.checked_sub_days(Days::new(delta.unsigned_abs()))
        };

        match target {
            Some(date) if calendar::contains(date, self.trip_start, self.trip_end) => {
                self.selected = date;
                true
            }
            _ => false,
        }
    }

    /// Jump to `date`, clamped into the trip. Returns the new selection.
    pub fn go_to(&mut self, date: NaiveDate) -> NaiveDate {
        self.selected = calendar::clamp(date, self.trip_start, self.trip_end);
        self.selected
    }

    pub fn at_start(&self) -> bool {
        self.selected == self.trip_start
    }

    pub fn at_end(&self) -> bool {
        self.selected == self.trip_end
    }

    pub fn hints(&self) -> NavigationHints {
        NavigationHints {
            can_step_back: !self.at_start(),
            can_step_forward: !self.at_end(),
        }
    }

    /// Apply a gesture. Returns whether the selection changed.
    pub fn apply(&mut self, gesture: NavigationGesture, today: NaiveDate) -> bool {
        let before = self.selected;
        match gesture {
            NavigationGesture::Previous => {
                self.step(-1);
            }
            NavigationGesture::Next => {
                self.step(1);
            }
            NavigationGesture::Today => {
                self.go_to(today);
            }
            NavigationGesture::TripStart => {
                self.go_to(self.trip_start);
            }
            NavigationGesture::TripEnd => {
                self.go_to(self.trip_end);
            }
        }
        self.selected != before
    }
}
