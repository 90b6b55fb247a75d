//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The runtime
//! controller translates raw host events into messages, enriching them
//! with any synchronous DOM queries the update functions need.

use crate::model::{ContentSnapshot, MutationTarget};

/// What kind of input activated an operation
///
/// Touch activations suppress the event's default action (scrolling);
/// anything else resets the drag flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Touch,
    Pointer,
}

/// Where a close request originated
///
/// A close explicitly targeted at the panel element itself bypasses the
/// drag-in-progress guard (the gesture commit path relies on this).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Panel,
    Other,
}

/// Mode tag carried by a registered trigger element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    Toggle,
    Open,
    Close,
}

/// Programmatic open/close/toggle requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMsg {
    Open { source: InputSource },
    Close { source: InputSource, origin: Origin },
    Toggle { source: InputSource, origin: Origin },
}

/// Touch gesture protocol and scroll disambiguation
#[derive(Debug, Clone, PartialEq)]
pub enum GestureMsg {
    /// Finger down on the panel; `offcanvas_inline_width` is the
    /// content element's current client width (nonzero while the
    /// viewport already shows it inline, which blocks opening drags)
    TouchStart { x: f64, offcanvas_inline_width: f64 },
    /// Finger moved over the panel
    PanelMove { x: f64 },
    /// Finger moved anywhere in the document
    BodyMove,
    TouchEnd,
    TouchCancel,
    /// A page scroll event fired
    Scroll,
}

/// Structural mutation of the offcanvas content
#[derive(Debug, Clone, PartialEq)]
pub enum StructureMsg {
    /// `mutation` is `None` for an on-demand recheck
    ContentChanged {
        mutation: Option<MutationTarget>,
        snapshot: ContentSnapshot,
    },
}

/// Deferred callbacks scheduled through `Cmd::Schedule`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMsg {
    /// The open transition window elapsed
    OpenSettled,
    /// The close transition window elapsed
    CloseSettled,
    /// The scroll quiet period elapsed; stale generations are ignored
    ScrollSettled { generation: u64 },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Panel(PanelMsg),
    Gesture(GestureMsg),
    Structure(StructureMsg),
    Timer(TimerMsg),
}
