//! Programmatic open, close, and toggle

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::{InputSource, Origin, PanelMsg, TimerMsg};
use crate::model::PanelModel;

/// Handle an open/close/toggle request
pub fn update_panel(model: &mut PanelModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Open { source } => open(model, source),
        PanelMsg::Close { source, origin } => close(model, source, origin),
        PanelMsg::Toggle { source, origin } => {
            if model.opened {
                close(model, source, origin)
            } else {
                open(model, source)
            }
        }
    }
}

/// Touch activations suppress the default action (page scrolling);
/// everything else resets the drag flag.
fn preamble(model: &mut PanelModel, source: InputSource) -> Cmd {
    match source {
        InputSource::Touch => Cmd::SuppressDefault,
        InputSource::Pointer => {
            model.dragging = false;
            Cmd::None
        }
    }
}

fn open(model: &mut PanelModel, source: InputSource) -> Option<Cmd> {
    let pre = preamble(model, source);

    if model.opened {
        return Cmd::batch(vec![pre]);
    }

    debug!(placement = ?model.placement, "opening panel");

    let mut cmds = vec![pre];
    if !model.marker {
        model.marker = true;
        cmds.push(Cmd::AddOpenMarker);
    }

    cmds.push(Cmd::SetOverlayOpacity(1.0));
    cmds.push(set_transition(model));

    let x = model.placement.sign() * model.padding();
    model.offset_x.current = x;
    cmds.push(Cmd::Translate { x });
    model.opened = true;

    cmds.push(Cmd::Schedule {
        delay_ms: model.options.duration_ms,
        msg: TimerMsg::OpenSettled,
    });

    Cmd::batch(cmds)
}

fn close(model: &mut PanelModel, source: InputSource, origin: Origin) -> Option<Cmd> {
    let pre = preamble(model, source);

    if !model.opened && !model.opening {
        return Cmd::batch(vec![pre]);
    }
    // No click-through close while a drag is in flight; the gesture
    // commit path passes the panel itself as the origin to get through.
    if origin != Origin::Panel && model.dragging {
        return Cmd::batch(vec![pre]);
    }

    debug!(placement = ?model.placement, "closing panel");

    let mut cmds = vec![pre];
    cmds.push(Cmd::SetOverlayOpacity(0.0));
    cmds.push(set_transition(model));

    model.offset_x.current = 0.0;
    cmds.push(Cmd::Translate { x: 0.0 });
    model.opened = false;

    cmds.push(Cmd::Schedule {
        delay_ms: model.options.duration_ms,
        msg: TimerMsg::CloseSettled,
    });

    Cmd::batch(cmds)
}

fn set_transition(model: &PanelModel) -> Cmd {
    Cmd::SetTransition {
        duration_ms: model.options.duration_ms,
        effect: model.options.effect.clone(),
    }
}
