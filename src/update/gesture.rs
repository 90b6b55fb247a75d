//! Touch gesture state machine and scroll/drag disambiguation

use tracing::trace;

use crate::commands::Cmd;
use crate::messages::{GestureMsg, InputSource, Origin, PanelMsg, TimerMsg};
use crate::model::{PanelModel, Placement};
use crate::update::panel::update_panel;
use crate::util::map_range;

/// Quiet period after the last scroll event before drags are trusted again
pub const SCROLL_QUIET_MS: u64 = 250;

/// Handle one step of the touch protocol
pub fn update_gesture(model: &mut PanelModel, msg: GestureMsg) -> Option<Cmd> {
    match msg {
        GestureMsg::TouchStart {
            x,
            offcanvas_inline_width,
        } => touch_start(model, x, offcanvas_inline_width),
        GestureMsg::PanelMove { x } => panel_move(model, x),
        GestureMsg::BodyMove => body_move(model),
        GestureMsg::TouchEnd => touch_end(model),
        GestureMsg::TouchCancel => {
            model.moved = false;
            model.opening = false;
            None
        }
        GestureMsg::Scroll => scroll(model),
    }
}

fn touch_start(model: &mut PanelModel, x: f64, offcanvas_inline_width: f64) -> Option<Cmd> {
    model.moved = false;
    model.opening = false;
    model.dragging = false;
    model.offset_x.start = x;
    // A drag cannot meaningfully open the panel when the viewport
    // already shows the content inline.
    model.prevent_open = !model.opened && offcanvas_inline_width != 0.0;
    None
}

fn panel_move(model: &mut PanelModel, x: f64) -> Option<Cmd> {
    if model.scroll.scrolling || model.prevent_open {
        return None;
    }

    let padding = model.padding();
    let diff_x = (x - model.offset_x.start).clamp(-padding, padding);
    let mut translate_x = diff_x;
    model.offset_x.current = diff_x;

    if translate_x.abs() > padding {
        return None;
    }
    if diff_x == 0.0 {
        return None;
    }

    model.opening = true;

    // No resistance past the rest position: a drag that would push the
    // panel further closed than closed (or further open than open) is
    // ignored outright.
    let past_rest = match model.placement {
        Placement::Left => (model.opened && diff_x > 0.0) || (!model.opened && diff_x < 0.0),
        Placement::Right => (model.opened && diff_x < 0.0) || (!model.opened && diff_x > 0.0),
    };
    if past_rest {
        return None;
    }

    let mut cmds = Vec::new();
    if !model.moved && !model.marker {
        model.marker = true;
        cmds.push(Cmd::AddOpenMarker);
    }

    // Dragging toward the closed range measures from the open edge.
    let into_closed = match model.placement {
        Placement::Left => diff_x <= 0.0,
        Placement::Right => diff_x >= 0.0,
    };
    if into_closed {
        translate_x = diff_x + model.placement.sign() * padding;
        model.opening = false;
    }

    let overlay_opacity = map_range(translate_x.abs(), 0.0, padding, 0.0, 1.0);
    trace!(translate_x, overlay_opacity, "drag move");

    cmds.push(Cmd::Translate { x: translate_x });
    cmds.push(Cmd::SetOverlayOpacity(overlay_opacity));
    model.moved = true;

    Cmd::batch(cmds)
}

fn body_move(model: &mut PanelModel) -> Option<Cmd> {
    let cmd = if model.moved {
        Some(Cmd::SuppressDefault)
    } else {
        None
    };
    model.dragging = true;
    cmd
}

fn touch_end(model: &mut PanelModel) -> Option<Cmd> {
    if !model.moved {
        return None;
    }

    let beyond_tolerance = model.offset_x.current.abs() > model.tolerance;
    let direction = match model.placement {
        Placement::Left => model.offset_x.current < 0.0,
        Placement::Right => model.offset_x.current > 0.0,
    };

    model.opening = if beyond_tolerance { !direction } else { direction };
    model.opened = !model.opening;
    model.moved = false;

    trace!(
        opening = model.opening,
        offset = model.offset_x.current,
        "drag released"
    );

    let msg = if model.opening {
        PanelMsg::Open {
            source: InputSource::Touch,
        }
    } else {
        PanelMsg::Close {
            source: InputSource::Touch,
            origin: Origin::Panel,
        }
    };
    update_panel(model, msg)
}

fn scroll(model: &mut PanelModel) -> Option<Cmd> {
    // Once a drag move has registered, scrolling no longer competes.
    if model.moved {
        return None;
    }

    model.scroll.scrolling = true;
    model.scroll.generation = model.scroll.generation.wrapping_add(1);
    Some(Cmd::Schedule {
        delay_ms: SCROLL_QUIET_MS,
        msg: TimerMsg::ScrollSettled {
            generation: model.scroll.generation,
        },
    })
}

/// Clear the scroll flag when the quiet-period timer that set it is
/// still the latest one
pub(crate) fn scroll_settled(model: &mut PanelModel, generation: u64) -> Option<Cmd> {
    if generation == model.scroll.generation {
        model.scroll.scrolling = false;
    }
    None
}
