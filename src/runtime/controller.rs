//! The panel controller - one instance per page, one panel

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::config::PanelOptions;
use crate::host::{EventResult, Host};
use crate::messages::{
    GestureMsg, InputSource, Msg, Origin, PanelMsg, StructureMsg, TimerMsg, TriggerMode,
};
use crate::model::{MutationTarget, PanelModel};
use crate::update::update;

/// Owns the panel state and the host seam
///
/// Constructed once at page-ready time. When the required panel or
/// offcanvas content elements are missing the controller is inert:
/// every operation is a harmless no-op. That is a normal layout
/// condition (a theme without an offcanvas region), not an error.
pub struct PanelController<H: Host> {
    host: H,
    model: Option<PanelModel>,
}

impl<H: Host> PanelController<H> {
    /// Build the controller, measure the open-travel distance if none
    /// was configured, attach listeners, and run the toggler check
    pub fn new(mut host: H, options: PanelOptions) -> Self {
        let options = match options.validate() {
            Ok(()) => options,
            Err(e) => {
                warn!("invalid panel options ({e}), falling back to defaults");
                PanelOptions::default()
            }
        };

        if !host.has_panel_elements() {
            debug!("panel elements missing, controller stays inert");
            return Self { host, model: None };
        }

        let mut options = options;
        if options.padding <= 0.0 {
            options.padding = host.measure_offcanvas_width();
            debug!(padding = options.padding, "measured open-travel distance");
        }

        let placement = host.placement();
        let model = PanelModel::new(placement, options);

        let mut controller = Self {
            host,
            model: Some(model),
        };
        controller.attach();
        controller
    }

    // === Public operations ===

    /// Programmatic open (pointer semantics)
    pub fn open(&mut self) -> EventResult {
        self.handle(Msg::Panel(PanelMsg::Open {
            source: InputSource::Pointer,
        }))
    }

    /// Programmatic close (pointer semantics)
    pub fn close(&mut self) -> EventResult {
        self.handle(Msg::Panel(PanelMsg::Close {
            source: InputSource::Pointer,
            origin: Origin::Other,
        }))
    }

    /// Programmatic toggle (pointer semantics)
    pub fn toggle(&mut self) -> EventResult {
        self.handle(Msg::Panel(PanelMsg::Toggle {
            source: InputSource::Pointer,
            origin: Origin::Other,
        }))
    }

    /// A registered trigger element (or the overlay) was activated
    pub fn on_trigger(&mut self, mode: TriggerMode, source: InputSource) -> EventResult {
        let msg = match mode {
            TriggerMode::Toggle => PanelMsg::Toggle {
                source,
                origin: Origin::Other,
            },
            TriggerMode::Open => PanelMsg::Open { source },
            TriggerMode::Close => PanelMsg::Close {
                source,
                origin: Origin::Other,
            },
        };
        self.handle(Msg::Panel(msg))
    }

    // === Touch protocol ===

    pub fn on_touch_start(&mut self, x: f64) -> EventResult {
        if self.model.is_none() {
            return EventResult::Bubble;
        }
        let offcanvas_inline_width = self.host.offcanvas_inline_width();
        self.handle(Msg::Gesture(GestureMsg::TouchStart {
            x,
            offcanvas_inline_width,
        }))
    }

    /// Finger moved over the panel element
    pub fn on_panel_touch_move(&mut self, x: f64) -> EventResult {
        self.handle(Msg::Gesture(GestureMsg::PanelMove { x }))
    }

    /// Finger moved anywhere in the document
    pub fn on_body_touch_move(&mut self) -> EventResult {
        self.handle(Msg::Gesture(GestureMsg::BodyMove))
    }

    pub fn on_touch_end(&mut self) -> EventResult {
        self.handle(Msg::Gesture(GestureMsg::TouchEnd))
    }

    pub fn on_touch_cancel(&mut self) -> EventResult {
        self.handle(Msg::Gesture(GestureMsg::TouchCancel))
    }

    /// A page scroll event fired
    pub fn on_scroll(&mut self) -> EventResult {
        self.handle(Msg::Gesture(GestureMsg::Scroll))
    }

    /// A timer scheduled through [`Host::schedule`] elapsed
    pub fn on_timer(&mut self, msg: TimerMsg) -> EventResult {
        self.handle(Msg::Timer(msg))
    }

    // === Structure ===

    /// The content observer reported a structural mutation
    pub fn on_content_mutation(&mut self, target: MutationTarget) -> EventResult {
        if self.model.is_none() {
            return EventResult::Bubble;
        }
        let snapshot = self.host.content_snapshot();
        self.handle(Msg::Structure(StructureMsg::ContentChanged {
            mutation: Some(target),
            snapshot,
        }))
    }

    /// On-demand toggler visibility check
    pub fn check_togglers(&mut self) -> EventResult {
        if self.model.is_none() {
            return EventResult::Bubble;
        }
        let snapshot = self.host.content_snapshot();
        self.handle(Msg::Structure(StructureMsg::ContentChanged {
            mutation: None,
            snapshot,
        }))
    }

    // === Attach / detach ===

    /// Bind all listeners, create the overlay, and run the toggler check
    pub fn attach(&mut self) {
        let Some(model) = self.model.as_mut() else {
            return;
        };
        if model.attached {
            return;
        }
        model.attached = true;

        let touch_enabled = model.options.touch;
        let overlay_class = model.options.overlay_class.clone();
        let observe = !model.observing;
        if observe {
            model.observing = true;
        }

        if touch_enabled && self.host.touch_supported() {
            self.host.bind_gestures();
        }
        self.host.bind_triggers();
        if observe {
            self.host.observe_content();
        }
        self.host.create_overlay(&overlay_class);
        debug!("listeners attached");

        self.check_togglers();
    }

    /// Unbind all listeners and remove the overlay
    pub fn detach(&mut self) {
        let Some(model) = self.model.as_mut() else {
            return;
        };
        if !model.attached {
            return;
        }
        model.attached = false;

        let touch_enabled = model.options.touch;
        let unobserve = model.observing;
        if unobserve {
            model.observing = false;
        }

        if touch_enabled && self.host.touch_supported() {
            self.host.unbind_gestures();
        }
        self.host.unbind_triggers();
        if unobserve {
            self.host.unobserve_content();
        }
        self.host.remove_overlay();
        debug!("listeners detached");
    }

    // === Accessors ===

    /// The controller has no required elements to work with
    pub fn is_inert(&self) -> bool {
        self.model.is_none()
    }

    pub fn is_attached(&self) -> bool {
        self.model.as_ref().is_some_and(|m| m.attached)
    }

    /// Current state, `None` for an inert controller
    pub fn model(&self) -> Option<&PanelModel> {
        self.model.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // === Internals ===

    fn handle(&mut self, msg: Msg) -> EventResult {
        let Some(model) = self.model.as_mut() else {
            return EventResult::Bubble;
        };
        let Some(cmd) = update(model, msg) else {
            return EventResult::Bubble;
        };

        let mut prevent_default = false;
        self.apply(cmd, &mut prevent_default);
        EventResult::Consumed { prevent_default }
    }

    fn apply(&mut self, cmd: Cmd, prevent_default: &mut bool) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.apply(cmd, prevent_default);
                }
            }
            Cmd::SuppressDefault => *prevent_default = true,
            Cmd::AddOpenMarker => {
                if let Some(model) = &self.model {
                    self.host.add_open_marker(&model.options.open_class);
                }
            }
            Cmd::RemoveOpenMarker => {
                if let Some(model) = &self.model {
                    self.host.remove_open_marker(&model.options.open_class);
                }
            }
            Cmd::SetTransition {
                duration_ms,
                effect,
            } => self.host.set_transition(duration_ms, &effect),
            Cmd::ClearTransition => self.host.clear_transition(),
            Cmd::Translate { x } => self.host.translate(x),
            Cmd::SetOverlayOpacity(opacity) => self.host.set_overlay_opacity(opacity),
            Cmd::Schedule { delay_ms, msg } => self.host.schedule(delay_ms, msg),
            Cmd::SetTogglersHidden(hidden) => self.host.set_togglers_hidden(hidden),
            Cmd::Attach => self.attach(),
            Cmd::Detach => self.detach(),
            Cmd::ObserveContent => {
                if let Some(model) = self.model.as_mut() {
                    if !model.observing {
                        model.observing = true;
                        self.host.observe_content();
                    }
                }
            }
            Cmd::UnobserveContent => {
                if let Some(model) = self.model.as_mut() {
                    if model.observing {
                        model.observing = false;
                        self.host.unobserve_content();
                    }
                }
            }
        }
    }
}
