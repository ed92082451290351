//! Controller layer: key events to calendar actions, and action dispatch.

pub mod events;
pub mod orchestration;
