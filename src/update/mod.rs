//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each one
//! mutates the model and returns the side effects to perform as an
//! optional `Cmd`.

mod gesture;
mod panel;
mod structure;

use crate::commands::Cmd;
use crate::messages::{Msg, TimerMsg};
use crate::model::PanelModel;

pub use gesture::{update_gesture, SCROLL_QUIET_MS};
pub use panel::update_panel;
pub use structure::update_structure;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut PanelModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Structure(m) => structure::update_structure(model, m),
        Msg::Timer(m) => update_timer(model, m),
    }
}

/// Handle deferred callbacks scheduled by earlier updates
///
/// The settle timers are fire-and-forget; a rapid open/close/open
/// sequence can race them and the class state converges to whatever
/// the most recent operation intended.
fn update_timer(model: &mut PanelModel, msg: TimerMsg) -> Option<Cmd> {
    match msg {
        TimerMsg::OpenSettled => Some(Cmd::ClearTransition),
        TimerMsg::CloseSettled => {
            model.marker = false;
            Some(Cmd::Batch(vec![Cmd::RemoveOpenMarker, Cmd::ClearTransition]))
        }
        TimerMsg::ScrollSettled { generation } => gesture::scroll_settled(model, generation),
    }
}
