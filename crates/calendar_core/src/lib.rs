//! Calendar model for the month viewer: Gregorian arithmetic, navigation
//! state, themes and grid layout. Nothing here touches a window.

pub mod calendar;
pub mod context;
pub mod domain;
pub mod error;
pub mod layout;
pub mod state;
pub mod theme;

pub use calendar::{days_in_month, first_weekday_offset, is_leap_year, normalize, MAX_YEAR};
pub use context::CalendarContext;
pub use domain::{CalendarDate, TodayMarker, WEEKDAY_LABELS};
pub use error::CalendarError;
pub use layout::{DayCell, LayoutGeometry, MonthGrid, Point};
pub use state::{CalendarAction, CalendarState};
pub use theme::{Rgb, Theme, ThemeKind, ThemeSet};
