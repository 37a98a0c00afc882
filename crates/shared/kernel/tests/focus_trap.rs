pub mod fixtures;

use fixtures::*;
use vitrine_kernel::event::{Dispatch, Key, UiEvent};
use vitrine_kernel::focus;

fn three_buttons() -> (FakePage, NodeId, [NodeId; 3]) {
    let page = FakePage::new();
    let container = page.element(page.body_id(), &[]);
    let buttons = [
        page.focusable(container, &[]),
        page.focusable(container, &[]),
        page.focusable(container, &[]),
    ];
    (page, container, buttons)
}

#[test]
fn shift_tab_on_first_wraps_to_last() {
    let (page, container, [first, _, last]) = three_buttons();
    page.focus_node(first);

    let dispatch = focus::trap(&page, &container, Key::Tab, true);

    assert!(dispatch.prevent_default);
    assert_eq!(page.active(), Some(last));
}

#[test]
fn tab_on_last_wraps_to_first() {
    let (page, container, [first, _, last]) = three_buttons();
    page.focus_node(last);

    let dispatch = focus::trap(&page, &container, Key::Tab, false);

    assert!(dispatch.prevent_default);
    assert_eq!(page.active(), Some(first));
}

#[test]
fn moves_inside_the_ring_are_left_to_the_browser() {
    let (page, container, [first, middle, last]) = three_buttons();

    page.focus_node(middle);
    assert_eq!(focus::trap(&page, &container, Key::Tab, false), Dispatch::NONE);
    assert_eq!(focus::trap(&page, &container, Key::Tab, true), Dispatch::NONE);

    page.focus_node(first);
    assert_eq!(focus::trap(&page, &container, Key::Tab, false), Dispatch::NONE);

    page.focus_node(last);
    assert_eq!(focus::trap(&page, &container, Key::Tab, true), Dispatch::NONE);
    assert_eq!(page.active(), Some(last));
}

#[test]
fn other_keys_and_empty_containers_are_ignored() {
    let (page, container, [first, ..]) = three_buttons();
    page.focus_node(first);
    assert_eq!(focus::trap(&page, &container, Key::Other, true), Dispatch::NONE);
    assert_eq!(focus::trap(&page, &container, Key::Escape, true), Dispatch::NONE);

    let empty = page.element(page.body_id(), &[]);
    assert_eq!(focus::trap(&page, &empty, Key::Tab, false), Dispatch::NONE);
}

#[test]
fn hidden_elements_are_skipped_unless_focused() {
    let (page, container, [first, middle, last]) = three_buttons();
    page.set_rendered(last, false);

    page.focus_node(middle);
    let dispatch = focus::trap(&page, &container, Key::Tab, false);
    assert!(dispatch.prevent_default, "middle is the last rendered element");
    assert_eq!(page.active(), Some(first));

    page.focus_node(last);
    let dispatch = focus::trap(&page, &container, Key::Tab, false);
    assert!(dispatch.prevent_default, "the focused element stays a candidate");
    assert_eq!(page.active(), Some(first));
}

#[test]
fn open_modal_traps_tab_through_the_controller() {
    let landing = Landing::new();
    let page = &landing.page;
    let mut controller = landing.mount();

    let _ = landing.click(&mut controller, landing.privacy_link);
    page.focus_node(landing.modal_accept);

    let dispatch = controller.handle(page, UiEvent::KeyDown { key: Key::Tab, shift: false });

    assert!(dispatch.prevent_default);
    assert_eq!(page.active(), Some(landing.modal_close));
}

#[test]
fn closed_overlays_do_not_trap() {
    let landing = Landing::new();
    let page = &landing.page;
    let mut controller = landing.mount();
    page.focus_node(landing.modal_accept);

    let dispatch = controller.handle(page, UiEvent::KeyDown { key: Key::Tab, shift: false });

    assert_eq!(dispatch, Dispatch::NONE);
    assert_eq!(page.active(), Some(landing.modal_accept));
}
