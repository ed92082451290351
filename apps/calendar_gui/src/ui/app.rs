use std::time::Duration;

use calendar_core::{CalendarContext, CalendarState, ThemeKind};
use eframe::egui;

use crate::{
    config::Settings,
    controller::{events::KeyMap, orchestration::dispatch_actions},
    font::FontResource,
    ui::{
        render::{paint, plan_frame},
        theme::visuals_for_theme,
    },
};

pub struct CalendarApp {
    context: CalendarContext,
    state: CalendarState,
    keys: KeyMap,
    frame_interval: Duration,
    applied_theme: Option<usize>,
}

impl CalendarApp {
    pub fn new(context: CalendarContext, theme: ThemeKind, frame_interval: Duration) -> Self {
        let state = context.initial_state(theme);
        Self {
            context,
            state,
            keys: KeyMap::default(),
            frame_interval,
            applied_theme: None,
        }
    }

    /// Installs the startup font into the egui context and builds the app.
    pub fn from_creation_context(
        cc: &eframe::CreationContext<'_>,
        context: CalendarContext,
        font: &FontResource,
        settings: &Settings,
    ) -> Self {
        font.install(&cc.egui_ctx);
        Self::new(context, settings.theme, settings.frame_interval())
    }

    fn process_input(&mut self, ctx: &egui::Context) {
        let actions = ctx.input(|i| self.keys.actions_from_events(&i.events));
        if !actions.is_empty() {
            dispatch_actions(&self.context, &mut self.state, actions);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        let index = self.state.theme_index();
        if self.applied_theme == Some(index) {
            return;
        }
        ctx.set_visuals(visuals_for_theme(self.context.theme(&self.state)));
        self.applied_theme = Some(index);
    }

    fn show_calendar(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let commands = plan_frame(&self.context, &self.state, rect.width());
                paint(ui.painter(), rect, &commands);
            });
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_input(ctx);
        self.apply_theme_if_needed(ctx);
        self.show_calendar(ctx);

        ctx.request_repaint_after(self.frame_interval);
    }
}
