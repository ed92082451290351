use calendar_core::{Rgb, Theme};
use eframe::egui;

pub fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Base egui visuals for a calendar theme so stray widgets match the frame.
pub fn visuals_for_theme(theme: &Theme) -> egui::Visuals {
    let mut visuals = match theme.kind {
        calendar_core::ThemeKind::Light => egui::Visuals::light(),
        calendar_core::ThemeKind::Dark => egui::Visuals::dark(),
    };
    visuals.override_text_color = Some(color32(theme.text));
    visuals.window_fill = color32(theme.background);
    visuals.panel_fill = color32(theme.background);
    visuals.selection.bg_fill = color32(theme.highlight);
    visuals
}
