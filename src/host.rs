//! The seam between the state machine and the DOM/style substrate
//!
//! The controller talks to the page exclusively through the [`Host`]
//! trait: element probes, style writes, listener bookkeeping, and timer
//! scheduling. Host glue is expected to wire delegated click/tap
//! listeners for elements carrying toggle/open/close trigger markers to
//! [`PanelController::on_trigger`](crate::PanelController::on_trigger),
//! and activation of the generated overlay (which doubles as a close
//! trigger) to the same entry point with `TriggerMode::Close`.

use crate::messages::TimerMsg;
use crate::model::{ContentSnapshot, Placement};

/// Outcome of an event entry point, surfaced back to host glue so it
/// can forward default-suppression decisions synchronously
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event was ignored; let it propagate
    Bubble,
    /// The event drove a state change
    Consumed {
        /// The event's default action (scrolling, link navigation)
        /// must be suppressed
        prevent_default: bool,
    },
}

impl EventResult {
    pub fn prevent_default(&self) -> bool {
        matches!(
            self,
            EventResult::Consumed {
                prevent_default: true
            }
        )
    }
}

/// DOM, style, and timer substrate consumed by the controller
///
/// Single-threaded and cooperative: every method runs to completion
/// before the next event is processed, and `schedule` delivers its
/// message back through the controller on the same event loop.
pub trait Host {
    // === Probes ===

    /// Both the panel container and the offcanvas content element are
    /// present in the document. When false the controller stays inert,
    /// a normal layout condition rather than an error.
    fn has_panel_elements(&self) -> bool;

    /// Placement derived from the marker class on the document body
    fn placement(&self) -> Placement;

    /// Touch input is available on this device
    fn touch_supported(&self) -> bool;

    /// Measure the offcanvas content's natural width by temporarily
    /// forcing it visible, reading the rendered width, and restoring
    /// its prior visibility. May cause a single reflow.
    fn measure_offcanvas_width(&mut self) -> f64;

    /// The offcanvas content's current client width, nonzero when the
    /// viewport already renders it inline
    fn offcanvas_inline_width(&self) -> f64;

    /// Current content facts for the toggler-visibility check
    fn content_snapshot(&self) -> ContentSnapshot;

    // === Style writes ===

    /// Add the open marker class to the root element
    fn add_open_marker(&mut self, class: &str);

    /// Remove the open marker class from the root element
    fn remove_open_marker(&mut self, class: &str);

    /// Set a transform transition on the panel element
    fn set_transition(&mut self, duration_ms: u64, effect: &str);

    /// Clear the panel element's transition style
    fn clear_transition(&mut self);

    /// Set the panel's horizontal translation in pixels
    fn translate(&mut self, x: f64);

    /// Set the overlay element's opacity
    fn set_overlay_opacity(&mut self, opacity: f64);

    /// Add or remove the hidden marker on all toggler elements
    fn set_togglers_hidden(&mut self, hidden: bool);

    // === Structure ===

    /// Insert the overlay element as the panel container's first child
    fn create_overlay(&mut self, class: &str);

    /// Remove the generated overlay element
    fn remove_overlay(&mut self);

    // === Listener bookkeeping ===

    /// Bind the touch gesture listeners (panel start/move/end/cancel,
    /// document-wide move, page scroll)
    fn bind_gestures(&mut self);

    fn unbind_gestures(&mut self);

    /// Bind the delegated click (and, with touch support, tap)
    /// listeners for toggle/open/close trigger elements
    fn bind_triggers(&mut self);

    fn unbind_triggers(&mut self);

    /// Start observing structural mutations of the offcanvas content
    fn observe_content(&mut self);

    fn unobserve_content(&mut self);

    // === Timers ===

    /// Deliver `msg` to the controller after `delay_ms`. Fire and
    /// forget; timers are never cancelled.
    fn schedule(&mut self, delay_ms: u64, msg: TimerMsg);
}
