//! Navigation and theme state driven by discrete user actions.

use crate::domain::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    CycleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    date: CalendarDate,
    theme_index: usize,
    theme_count: usize,
}

impl CalendarState {
    /// `theme_count` of zero is treated as one so cycling stays total.
    pub fn new(date: CalendarDate, theme_index: usize, theme_count: usize) -> Self {
        let theme_count = theme_count.max(1);
        Self {
            date,
            theme_index: theme_index % theme_count,
            theme_count,
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    /// Moves the displayed month by `step`, rolling over year boundaries.
    pub fn advance_month(&mut self, step: i64) {
        self.date = self.date.shifted(step);
    }

    pub fn cycle_theme(&mut self) {
        self.theme_index = (self.theme_index + 1) % self.theme_count;
    }

    pub fn apply(&mut self, action: CalendarAction) {
        match action {
            CalendarAction::PreviousMonth => self.advance_month(-1),
            CalendarAction::NextMonth => self.advance_month(1),
            CalendarAction::CycleTheme => self.cycle_theme(),
        }
    }
}
