use crate::{
    domain::{CalendarDate, TodayMarker},
    layout::{LayoutGeometry, MonthGrid},
    state::CalendarState,
    theme::{Theme, ThemeKind, ThemeSet},
};

/// Everything a frame needs that does not change while the program runs.
#[derive(Debug, Clone)]
pub struct CalendarContext {
    pub today: TodayMarker,
    pub themes: ThemeSet,
    pub geometry: LayoutGeometry,
}

impl CalendarContext {
    pub fn new(today: TodayMarker, themes: ThemeSet, geometry: LayoutGeometry) -> Self {
        Self {
            today,
            themes,
            geometry,
        }
    }

    /// State opened on today's month with the requested theme selected.
    pub fn initial_state(&self, theme: ThemeKind) -> CalendarState {
        let theme_index = self.themes.index_of(theme).unwrap_or(0);
        CalendarState::new(CalendarDate::from(self.today), theme_index, self.themes.len())
    }

    pub fn theme(&self, state: &CalendarState) -> &Theme {
        self.themes.get(state.theme_index())
    }

    pub fn grid(&self, state: &CalendarState) -> MonthGrid {
        MonthGrid::new(state.date(), Some(&self.today))
    }
}
