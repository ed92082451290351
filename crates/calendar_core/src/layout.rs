//! Month grid placement and the fixed pixel geometry it is drawn with.
//!
//! Row 0 holds the weekday labels; day rows are 1..=6. Columns run
//! Sunday (0) to Saturday (6).

use crate::{
    calendar::first_weekday_offset,
    domain::{CalendarDate, TodayMarker},
};

/// One column per weekday.
pub const GRID_COLUMNS: u32 = 7;
/// The weekday label row plus at most six day rows.
pub const GRID_ROWS: u32 = 7;

/// Offset of text inside its cell.
pub const CELL_TEXT_INSET: f32 = 10.0;
pub const HIGHLIGHT_RADIUS: f32 = 20.0;
/// The highlight circle's bounding box starts this far up and left of the day text.
pub const HIGHLIGHT_LEAD: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    pub origin: Point,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            origin: Point::new(50.0, 50.0),
            cell_width: 100.0,
            cell_height: 70.0,
        }
    }
}

impl LayoutGeometry {
    pub fn weekday_label_position(&self, column: u32) -> Point {
        Point::new(
            self.origin.x + column as f32 * self.cell_width + CELL_TEXT_INSET,
            self.origin.y,
        )
    }

    pub fn day_text_position(&self, row: u32, column: u32) -> Point {
        Point::new(
            self.origin.x + column as f32 * self.cell_width + CELL_TEXT_INSET,
            self.origin.y + row as f32 * self.cell_height + CELL_TEXT_INSET,
        )
    }

    pub fn highlight_center(&self, row: u32, column: u32) -> Point {
        let text = self.day_text_position(row, column);
        Point::new(
            text.x - HIGHLIGHT_LEAD + HIGHLIGHT_RADIUS,
            text.y - HIGHLIGHT_LEAD + HIGHLIGHT_RADIUS,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub row: u32,
    pub column: u32,
    pub is_today: bool,
}

/// Day cells of one month in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    date: CalendarDate,
    offset: u32,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn new(date: CalendarDate, today: Option<&TodayMarker>) -> Self {
        let offset = first_weekday_offset(date.year(), i64::from(date.month()));
        let cells = (1..=date.days())
            .map(|day| {
                let index = offset + day - 1;
                DayCell {
                    day,
                    row: 1 + index / GRID_COLUMNS,
                    column: index % GRID_COLUMNS,
                    is_today: today.is_some_and(|today| today.matches(date, day)),
                }
            })
            .collect();

        Self {
            date,
            offset,
            cells,
        }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn cell_at(&self, row: u32, column: u32) -> Option<&DayCell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.column == column)
    }

    pub fn today_cell(&self) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }

    pub fn row_count(&self) -> u32 {
        self.cells.last().map_or(0, |cell| cell.row)
    }
}
