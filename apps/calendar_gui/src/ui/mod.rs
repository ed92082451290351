//! UI layer: app shell, frame planning/painting and theme colors.

pub mod app;
pub mod render;
pub mod theme;

pub use app::CalendarApp;
