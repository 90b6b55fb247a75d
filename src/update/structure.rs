//! Toggler visibility bookkeeping driven by content mutations

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::{InputSource, Origin, PanelMsg, StructureMsg};
use crate::model::{MutationTarget, PanelModel};
use crate::update::panel::update_panel;

/// Re-evaluate toggler visibility after a structural mutation of the
/// offcanvas content (or on demand, with `mutation` = `None`)
pub fn update_structure(model: &mut PanelModel, msg: StructureMsg) -> Option<Cmd> {
    let StructureMsg::ContentChanged { mutation, snapshot } = msg;

    // Without a mobile menu this page variant never needs the check;
    // tear the observer down for good.
    if !snapshot.has_mobile_container {
        return Some(Cmd::UnobserveContent);
    }

    if !snapshot.has_togglers {
        return None;
    }
    if let Some(target) = mutation {
        if target != MutationTarget::MobileContainer {
            return None;
        }
    }

    let mut cmds = Vec::new();

    // A structural change invalidates any in-flight drag state.
    if model.opened {
        if let Some(cmd) = update_panel(
            model,
            PanelMsg::Close {
                source: InputSource::Pointer,
                origin: Origin::Other,
            },
        ) {
            cmds.push(cmd);
        }
    }

    let should_collapse = snapshot.should_collapse();
    debug!(should_collapse, attached = model.attached, "toggler check");
    cmds.push(Cmd::SetTogglersHidden(should_collapse));

    if !should_collapse && !model.attached {
        cmds.push(Cmd::Attach);
    } else if should_collapse && model.attached {
        cmds.push(Cmd::Detach);
        // Keep watching so reappearing content can reattach later.
        cmds.push(Cmd::ObserveContent);
    }

    Cmd::batch(cmds)
}
