//! Translation of raw egui input into discrete calendar actions.

use std::collections::HashMap;

use calendar_core::CalendarAction;
use eframe::egui;

#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<egui::Key, CalendarAction>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: HashMap::from([
                (egui::Key::T, CalendarAction::CycleTheme),
                (egui::Key::ArrowLeft, CalendarAction::PreviousMonth),
                (egui::Key::ArrowRight, CalendarAction::NextMonth),
            ]),
        }
    }
}

impl KeyMap {
    pub fn action_for(&self, key: egui::Key) -> Option<CalendarAction> {
        self.bindings.get(&key).copied()
    }

    /// Actions for this frame's key-down edges, in arrival order.
    ///
    /// Releases and auto-repeat presses are dropped, so holding a key
    /// yields one action per physical press.
    pub fn actions_from_events(&self, events: &[egui::Event]) -> Vec<CalendarAction> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => self.action_for(*key),
                _ => None,
            })
            .collect()
    }
}
