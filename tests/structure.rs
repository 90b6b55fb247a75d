//! Toggler visibility and mutation-driven attach/detach

mod common;

use common::{clear_ops, controller, HostOp};
use offslide::model::{ContentSnapshot, MutationTarget};

fn empty_content() -> ContentSnapshot {
    ContentSnapshot {
        has_mobile_container: true,
        has_togglers: true,
        block_count: 1,
        text_blank: true,
    }
}

#[test]
fn empty_content_hides_togglers_and_detaches() {
    let mut c = controller();
    c.host_mut().snapshot = empty_content();
    clear_ops(&mut c);

    c.on_content_mutation(MutationTarget::MobileContainer);

    assert_eq!(
        c.host().ops,
        vec![
            HostOp::SetTogglersHidden(true),
            HostOp::UnbindGestures,
            HostOp::UnbindTriggers,
            HostOp::UnobserveContent,
            HostOp::RemoveOverlay,
            HostOp::ObserveContent,
        ]
    );
    let model = c.model().unwrap();
    assert!(!model.attached);
    // The observer alone stays bound so reappearing content is noticed.
    assert!(model.observing);
}

#[test]
fn restored_content_reattaches() {
    let mut c = controller();
    c.host_mut().snapshot = empty_content();
    c.on_content_mutation(MutationTarget::MobileContainer);
    assert!(!c.is_attached());

    c.host_mut().snapshot.block_count = 3;
    c.host_mut().snapshot.text_blank = false;
    clear_ops(&mut c);

    c.on_content_mutation(MutationTarget::MobileContainer);

    assert!(c.is_attached());
    let ops = &c.host().ops;
    assert_eq!(ops[0], HostOp::SetTogglersHidden(false));
    assert!(ops.contains(&HostOp::BindGestures));
    assert!(ops.contains(&HostOp::BindTriggers));
    assert!(ops.contains(&HostOp::CreateOverlay("offcanvas-overlay".to_string())));
}

#[test]
fn mutation_outside_mobile_container_is_ignored() {
    let mut c = controller();
    c.host_mut().snapshot = empty_content();
    clear_ops(&mut c);

    c.on_content_mutation(MutationTarget::Other);
    assert!(c.host().ops.is_empty());
    assert!(c.is_attached());
}

#[test]
fn on_demand_check_skips_the_target_filter() {
    let mut c = controller();
    c.host_mut().snapshot = empty_content();
    clear_ops(&mut c);

    c.check_togglers();
    assert_eq!(c.host().ops[0], HostOp::SetTogglersHidden(true));
    assert!(!c.is_attached());
}

#[test]
fn missing_mobile_container_tears_down_the_observer() {
    let mut c = controller();
    c.host_mut().snapshot.has_mobile_container = false;
    clear_ops(&mut c);

    c.on_content_mutation(MutationTarget::Other);
    assert_eq!(c.host().ops, vec![HostOp::UnobserveContent]);
    assert!(!c.model().unwrap().observing);

    // Tearing down twice does not hit the host again.
    clear_ops(&mut c);
    c.check_togglers();
    assert!(c.host().ops.is_empty());
}

#[test]
fn missing_togglers_is_a_noop() {
    let mut c = controller();
    c.host_mut().snapshot.has_togglers = false;
    clear_ops(&mut c);

    c.on_content_mutation(MutationTarget::MobileContainer);
    assert!(c.host().ops.is_empty());
}

#[test]
fn open_panel_is_forced_closed_by_mutation() {
    let mut c = controller();
    c.open();
    assert!(c.model().unwrap().opened);

    c.host_mut().snapshot = empty_content();
    clear_ops(&mut c);
    c.on_content_mutation(MutationTarget::MobileContainer);

    let model = c.model().unwrap();
    assert!(!model.opened);
    assert_eq!(c.host().last_translate(), Some(0.0));
    assert_eq!(c.host().last_opacity(), Some(0.0));
    assert!(c.host().ops.contains(&HostOp::SetTogglersHidden(true)));
}
