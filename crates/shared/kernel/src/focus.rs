//! Keyboard focus confinement for open overlays.

use crate::event::{Dispatch, Key};
use crate::page::Page;

/// Keeps Tab navigation cycling inside `container`.
///
/// Only Tab is handled. Candidates are the container's focusables that are
/// rendered, plus the currently focused element even when it is not. Focus
/// wraps from the last candidate to the first (and back with Shift), in which
/// case the default browser move is cancelled.
pub fn trap<P: Page>(page: &P, container: &P::Node, key: Key, shift: bool) -> Dispatch {
    if key != Key::Tab {
        return Dispatch::NONE;
    }

    let active = page.active_element();
    let candidates: Vec<P::Node> = page
        .focusables(container)
        .into_iter()
        .filter(|node| page.is_rendered(node) || active.as_ref() == Some(node))
        .collect();

    let (Some(first), Some(last)) = (candidates.first(), candidates.last()) else {
        return Dispatch::NONE;
    };

    match (shift, active.as_ref()) {
        (true, Some(current)) if current == first => {
            page.focus(last);
            Dispatch::prevented()
        },
        (false, Some(current)) if current == last => {
            page.focus(first);
            Dispatch::prevented()
        },
        _ => Dispatch::NONE,
    }
}

/// Moves focus to the first focusable descendant of `container`, if any.
pub fn focus_first<P: Page>(page: &P, container: &P::Node) {
    if let Some(first) = page.focusables(container).first() {
        page.focus(first);
    }
}
