//! Applies controller actions to calendar state and logs the transitions.

use calendar_core::{CalendarAction, CalendarContext, CalendarState};

pub fn dispatch_actions(
    ctx: &CalendarContext,
    state: &mut CalendarState,
    actions: impl IntoIterator<Item = CalendarAction>,
) {
    for action in actions {
        state.apply(action);
        match action {
            CalendarAction::PreviousMonth | CalendarAction::NextMonth => {
                let date = state.date();
                tracing::debug!(
                    ?action,
                    year = date.year(),
                    month = date.month() + 1,
                    "navigated"
                );
            }
            CalendarAction::CycleTheme => {
                tracing::info!(theme = ctx.theme(state).kind.label(), "switched theme");
            }
        }
    }
}
