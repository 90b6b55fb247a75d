//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. The runtime controller executes them against the `Host`
//! trait; the update functions stay free of DOM access.

use crate::messages::TimerMsg;

/// Side effects produced by the update functions
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Add the open marker class to the root element
    AddOpenMarker,
    /// Remove the open marker class from the root element
    RemoveOpenMarker,
    /// Apply a transform transition to the panel element
    SetTransition { duration_ms: u64, effect: String },
    /// Clear any lingering transition style from the panel element
    ClearTransition,
    /// Set the panel's horizontal translation in pixels (no transition
    /// is implied; pair with `SetTransition` for animated moves)
    Translate { x: f64 },
    /// Set the overlay element's opacity, in `[0, 1]`
    SetOverlayOpacity(f64),
    /// Suppress the triggering event's default action
    SuppressDefault,
    /// Fire-and-forget timer; delivers `msg` after `delay_ms`
    Schedule { delay_ms: u64, msg: TimerMsg },
    /// Add or remove the hidden marker on all toggler elements
    SetTogglersHidden(bool),
    /// Bind all listeners, create the overlay, recheck togglers
    Attach,
    /// Unbind all listeners and remove the overlay
    Detach,
    /// (Re)bind only the content mutation observer
    ObserveContent,
    /// Tear down the content mutation observer
    UnobserveContent,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Collapse a list of commands into a single command
    pub fn batch(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        cmds.retain(|c| !matches!(c, Cmd::None));
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Iterate the command tree in execution order
    pub fn flatten(&self) -> Vec<&Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.flatten()).collect(),
            Cmd::None => Vec::new(),
            other => vec![other],
        }
    }
}
