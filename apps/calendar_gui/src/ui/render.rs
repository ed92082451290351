//! Frame rendering.
//!
//! A frame is first planned as a flat list of draw commands from the
//! calendar state, then painted. Planning is pure and carries all layout
//! decisions; painting only forwards commands to the egui painter.

use calendar_core::{
    layout::HIGHLIGHT_RADIUS, CalendarContext, CalendarState, Point, WEEKDAY_LABELS,
};
use eframe::egui;

use crate::ui::theme::color32;

pub const HEADER_TEXT_SIZE: f32 = 30.0;
pub const WEEKDAY_TEXT_SIZE: f32 = 20.0;
pub const DAY_TEXT_SIZE: f32 = 24.0;
pub const HEADER_TOP: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(egui::Color32),
    Text {
        pos: Point,
        anchor: egui::Align2,
        text: String,
        size: f32,
        color: egui::Color32,
    },
    Circle {
        center: Point,
        radius: f32,
        color: egui::Color32,
    },
}

pub fn plan_frame(
    ctx: &CalendarContext,
    state: &CalendarState,
    window_width: f32,
) -> Vec<DrawCommand> {
    let theme = ctx.theme(state);
    let geometry = &ctx.geometry;
    let text = color32(theme.text);
    let grid = ctx.grid(state);

    let mut commands = Vec::with_capacity(2 + WEEKDAY_LABELS.len() + grid.cells().len() + 1);
    commands.push(DrawCommand::Clear(color32(theme.background)));
    commands.push(DrawCommand::Text {
        pos: Point::new(window_width / 2.0, HEADER_TOP),
        anchor: egui::Align2::CENTER_TOP,
        text: state.date().header_label(),
        size: HEADER_TEXT_SIZE,
        color: text,
    });

    for (column, label) in WEEKDAY_LABELS.iter().enumerate() {
        commands.push(DrawCommand::Text {
            pos: geometry.weekday_label_position(column as u32),
            anchor: egui::Align2::LEFT_TOP,
            text: (*label).to_string(),
            size: WEEKDAY_TEXT_SIZE,
            color: text,
        });
    }

    for cell in grid.cells() {
        let color = if cell.is_today {
            commands.push(DrawCommand::Circle {
                center: geometry.highlight_center(cell.row, cell.column),
                radius: HIGHLIGHT_RADIUS,
                color: color32(theme.highlight),
            });
            color32(theme.highlight_text)
        } else {
            text
        };
        commands.push(DrawCommand::Text {
            pos: geometry.day_text_position(cell.row, cell.column),
            anchor: egui::Align2::LEFT_TOP,
            text: cell.day.to_string(),
            size: DAY_TEXT_SIZE,
            color,
        });
    }

    commands
}

pub fn paint(painter: &egui::Painter, frame_rect: egui::Rect, commands: &[DrawCommand]) {
    let to_screen = |p: Point| frame_rect.min + egui::vec2(p.x, p.y);
    for command in commands {
        match command {
            DrawCommand::Clear(color) => {
                painter.rect_filled(frame_rect, 0.0, *color);
            }
            DrawCommand::Text {
                pos,
                anchor,
                text,
                size,
                color,
            } => {
                painter.text(
                    to_screen(*pos),
                    *anchor,
                    text,
                    egui::FontId::proportional(*size),
                    *color,
                );
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(to_screen(*center), *radius, *color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use calendar_core::{CalendarAction, LayoutGeometry, Theme, ThemeKind, ThemeSet, TodayMarker};

    use super::*;

    fn context() -> CalendarContext {
        CalendarContext::new(
            TodayMarker::new(2020, 3, 15).expect("today"),
            ThemeSet::default(),
            LayoutGeometry::default(),
        )
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn circles(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
            .count()
    }

    #[test]
    fn frame_starts_with_background_then_centered_header() {
        let ctx = context();
        let state = ctx.initial_state(ThemeKind::Light);
        let commands = plan_frame(&ctx, &state, 800.0);

        assert_eq!(
            commands[0],
            DrawCommand::Clear(egui::Color32::from_rgb(250, 250, 250))
        );
        match &commands[1] {
            DrawCommand::Text {
                pos, anchor, text, ..
            } => {
                assert_eq!(*pos, Point::new(400.0, 10.0));
                assert_eq!(*anchor, egui::Align2::CENTER_TOP);
                assert_eq!(text, "2020 - 4");
            }
            other => panic!("expected header text, got {other:?}"),
        }
    }

    #[test]
    fn frame_lists_weekdays_then_every_day_once() {
        let ctx = context();
        let state = ctx.initial_state(ThemeKind::Light);
        let commands = plan_frame(&ctx, &state, 800.0);
        let texts = texts(&commands);

        assert_eq!(&texts[1..8], &WEEKDAY_LABELS);
        let days: Vec<String> = texts[8..].iter().map(|text| text.to_string()).collect();
        let expected: Vec<String> = (1..=30u32).map(|day| day.to_string()).collect();
        assert_eq!(days, expected);
    }

    #[test]
    fn today_gets_one_circle_and_contrasting_text() {
        let ctx = context();
        let state = ctx.initial_state(ThemeKind::Dark);
        let commands = plan_frame(&ctx, &state, 800.0);
        assert_eq!(circles(&commands), 1);

        let circle_index = commands
            .iter()
            .position(|command| matches!(command, DrawCommand::Circle { .. }))
            .expect("circle");
        match (&commands[circle_index], &commands[circle_index + 1]) {
            (
                DrawCommand::Circle { color, radius, .. },
                DrawCommand::Text {
                    text,
                    color: text_color,
                    ..
                },
            ) => {
                assert_eq!(*color, egui::Color32::from_rgb(255, 165, 0));
                assert_eq!(*radius, 20.0);
                assert_eq!(text, "15");
                assert_eq!(*text_color, egui::Color32::WHITE);
            }
            other => panic!("expected circle followed by today's text, got {other:?}"),
        }
    }

    #[test]
    fn other_months_have_no_highlight() {
        let ctx = context();
        let mut state = ctx.initial_state(ThemeKind::Light);
        state.apply(CalendarAction::NextMonth);
        assert_eq!(circles(&plan_frame(&ctx, &state, 800.0)), 0);
    }

    #[test]
    fn theme_switch_recolors_the_frame() {
        let ctx = context();
        let mut state = ctx.initial_state(ThemeKind::Light);
        state.apply(CalendarAction::CycleTheme);
        let commands = plan_frame(&ctx, &state, 800.0);
        assert_eq!(commands[0], DrawCommand::Clear(color32(Theme::dark().background)));
    }
}
