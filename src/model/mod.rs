//! Application state for the panel controller

mod content;
mod panel;

pub use content::{ContentSnapshot, MutationTarget};
pub use panel::{OffsetX, PanelModel, Placement, ScrollState};
