//! Panel state - placement, drag offsets, and the gesture flags

use crate::config::PanelOptions;

/// Which screen edge the panel slides in from
///
/// The placement inverts the sign conventions for drag distance and
/// destination offset: a left panel opens by translating to
/// `+padding`, a right panel to `-padding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Left,
    Right,
}

impl Placement {
    /// Sign convention for the open-destination translation
    pub fn sign(&self) -> f64 {
        match self {
            Placement::Left => 1.0,
            Placement::Right => -1.0,
        }
    }
}

/// Drag start position and live/last translation input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OffsetX {
    pub start: f64,
    pub current: f64,
}

/// Scroll/drag disambiguation state
///
/// A page scroll sets the flag; a timer clears it after a quiet period.
/// The generation counter stands in for timer cancellation: a settle
/// message carrying a stale generation is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub scrolling: bool,
    pub generation: u64,
}

/// State for one slide-out panel (one instance per page)
#[derive(Debug, Clone, PartialEq)]
pub struct PanelModel {
    pub placement: Placement,
    pub options: PanelOptions,
    /// Resolved commit threshold in pixels
    pub tolerance: f64,
    /// Stable open/closed state
    pub opened: bool,
    /// Transient target while a drag or transition is in flight
    pub opening: bool,
    pub dragging: bool,
    /// Whether the current gesture registered a qualifying move
    pub moved: bool,
    /// Set at touchstart when the panel cannot meaningfully open
    /// (closed, but the content already occupies width inline)
    pub prevent_open: bool,
    /// Whether event listeners are currently bound
    pub attached: bool,
    /// Whether the content mutation observer is currently bound
    pub observing: bool,
    /// Mirror of the open marker class on the root element; this
    /// component is its only writer
    pub marker: bool,
    pub offset_x: OffsetX,
    pub scroll: ScrollState,
}

impl PanelModel {
    /// Create a closed, detached model
    ///
    /// `options.padding` must already be concrete (auto-measurement is
    /// the controller's job); the tolerance is resolved against it here.
    pub fn new(placement: Placement, options: PanelOptions) -> Self {
        let tolerance = options.tolerance.resolve(options.padding);
        Self {
            placement,
            options,
            tolerance,
            opened: false,
            opening: false,
            dragging: false,
            moved: false,
            prevent_open: false,
            attached: false,
            observing: false,
            marker: false,
            offset_x: OffsetX::default(),
            scroll: ScrollState::default(),
        }
    }

    /// Open-travel distance in pixels
    pub fn padding(&self) -> f64 {
        self.options.padding
    }
}
