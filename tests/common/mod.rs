//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use offslide::config::PanelOptions;
use offslide::host::Host;
use offslide::messages::TimerMsg;
use offslide::model::{ContentSnapshot, PanelModel, Placement};
use offslide::runtime::PanelController;

/// Everything the fake host was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostOp {
    AddOpenMarker(String),
    RemoveOpenMarker(String),
    SetTransition { duration_ms: u64, effect: String },
    ClearTransition,
    Translate(f64),
    SetOverlayOpacity(f64),
    SetTogglersHidden(bool),
    CreateOverlay(String),
    RemoveOverlay,
    BindGestures,
    UnbindGestures,
    BindTriggers,
    UnbindTriggers,
    ObserveContent,
    UnobserveContent,
    MeasureWidth,
}

/// Recording host double
pub struct FakeHost {
    pub present: bool,
    pub placement: Placement,
    pub touch: bool,
    pub natural_width: f64,
    pub inline_width: f64,
    pub snapshot: ContentSnapshot,
    pub ops: Vec<HostOp>,
    pub timers: Vec<(u64, TimerMsg)>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            present: true,
            placement: Placement::Left,
            touch: true,
            natural_width: 250.0,
            inline_width: 0.0,
            snapshot: ContentSnapshot {
                has_mobile_container: true,
                has_togglers: true,
                block_count: 2,
                text_blank: false,
            },
            ops: Vec::new(),
            timers: Vec::new(),
        }
    }

    pub fn without_elements() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    pub fn right_placed() -> Self {
        Self {
            placement: Placement::Right,
            ..Self::new()
        }
    }

    pub fn last_translate(&self) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            HostOp::Translate(x) => Some(*x),
            _ => None,
        })
    }

    pub fn last_opacity(&self) -> Option<f64> {
        self.ops.iter().rev().find_map(|op| match op {
            HostOp::SetOverlayOpacity(o) => Some(*o),
            _ => None,
        })
    }

    pub fn count(&self, op: &HostOp) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }
}

impl Host for FakeHost {
    fn has_panel_elements(&self) -> bool {
        self.present
    }

    fn placement(&self) -> Placement {
        self.placement
    }

    fn touch_supported(&self) -> bool {
        self.touch
    }

    fn measure_offcanvas_width(&mut self) -> f64 {
        self.ops.push(HostOp::MeasureWidth);
        self.natural_width
    }

    fn offcanvas_inline_width(&self) -> f64 {
        self.inline_width
    }

    fn content_snapshot(&self) -> ContentSnapshot {
        self.snapshot
    }

    fn add_open_marker(&mut self, class: &str) {
        self.ops.push(HostOp::AddOpenMarker(class.to_string()));
    }

    fn remove_open_marker(&mut self, class: &str) {
        self.ops.push(HostOp::RemoveOpenMarker(class.to_string()));
    }

    fn set_transition(&mut self, duration_ms: u64, effect: &str) {
        self.ops.push(HostOp::SetTransition {
            duration_ms,
            effect: effect.to_string(),
        });
    }

    fn clear_transition(&mut self) {
        self.ops.push(HostOp::ClearTransition);
    }

    fn translate(&mut self, x: f64) {
        self.ops.push(HostOp::Translate(x));
    }

    fn set_overlay_opacity(&mut self, opacity: f64) {
        self.ops.push(HostOp::SetOverlayOpacity(opacity));
    }

    fn set_togglers_hidden(&mut self, hidden: bool) {
        self.ops.push(HostOp::SetTogglersHidden(hidden));
    }

    fn create_overlay(&mut self, class: &str) {
        self.ops.push(HostOp::CreateOverlay(class.to_string()));
    }

    fn remove_overlay(&mut self) {
        self.ops.push(HostOp::RemoveOverlay);
    }

    fn bind_gestures(&mut self) {
        self.ops.push(HostOp::BindGestures);
    }

    fn unbind_gestures(&mut self) {
        self.ops.push(HostOp::UnbindGestures);
    }

    fn bind_triggers(&mut self) {
        self.ops.push(HostOp::BindTriggers);
    }

    fn unbind_triggers(&mut self) {
        self.ops.push(HostOp::UnbindTriggers);
    }

    fn observe_content(&mut self) {
        self.ops.push(HostOp::ObserveContent);
    }

    fn unobserve_content(&mut self) {
        self.ops.push(HostOp::UnobserveContent);
    }

    fn schedule(&mut self, delay_ms: u64, msg: TimerMsg) {
        self.timers.push((delay_ms, msg));
    }
}

/// Options with a concrete padding (no auto-measurement)
pub fn options(padding: f64) -> PanelOptions {
    PanelOptions {
        padding,
        ..PanelOptions::default()
    }
}

/// Controller over a left-placed panel with padding 250
pub fn controller() -> PanelController<FakeHost> {
    PanelController::new(FakeHost::new(), options(250.0))
}

/// Controller over a right-placed panel with padding 250
pub fn right_controller() -> PanelController<FakeHost> {
    PanelController::new(FakeHost::right_placed(), options(250.0))
}

/// A standalone model for exercising the update functions directly
pub fn test_model(placement: Placement, padding: f64) -> PanelModel {
    PanelModel::new(placement, options(padding))
}

/// Deliver every pending timer in scheduling order
pub fn fire_timers(controller: &mut PanelController<FakeHost>) {
    let timers: Vec<_> = controller.host_mut().timers.drain(..).collect();
    for (_, msg) in timers {
        controller.on_timer(msg);
    }
}

/// Forget recorded setup ops so assertions see only what follows
pub fn clear_ops(controller: &mut PanelController<FakeHost>) {
    controller.host_mut().ops.clear();
}
