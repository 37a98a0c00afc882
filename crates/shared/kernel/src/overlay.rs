//! Drawer and modal overlays.
//!
//! Both share one lifecycle: opening records the focused element, marks the
//! container (and the backdrop, if any) open, takes the scroll lock and moves
//! focus inside; closing undoes all of it in reverse. The open marker class on
//! the container is the single source of truth for the open state.

use crate::event::{Dispatch, Key};
use crate::focus;
use crate::page::Page;
use crate::scroll_lock::ScrollLock;
use std::fmt;
use tracing::debug;
use vitrine_domain::config::SiteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Drawer,
    Modal,
}

impl fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drawer => f.write_str("drawer"),
            Self::Modal => f.write_str("modal"),
        }
    }
}

/// Where focus goes back to when the overlay closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusReturn {
    /// Whatever was focused when the overlay opened.
    ActiveElement,
    /// The trigger that opened it, falling back to the focused element.
    Trigger,
}

#[derive(Debug, Clone)]
pub struct Overlay<N> {
    kind: OverlayKind,
    container: N,
    backdrop: Option<N>,
    openers: Vec<N>,
    closers: Vec<N>,
    /// A click landing on the container itself (outside its content) closes it.
    dismiss_on_self_click: bool,
    focus_return: FocusReturn,
    previously_focused: Option<N>,
    class: String,
}

impl<N: Clone + PartialEq> Overlay<N> {
    pub fn bind_drawer<P: Page<Node = N>>(page: &P, config: &SiteConfig) -> Option<Self> {
        let selectors = &config.selectors;
        let container = page.query(&selectors.drawer)?;
        Some(Self {
            kind: OverlayKind::Drawer,
            container,
            backdrop: page.query(&selectors.drawer_backdrop),
            openers: page.query(&selectors.drawer_open).into_iter().collect(),
            closers: page.query(&selectors.drawer_close).into_iter().collect(),
            dismiss_on_self_click: false,
            focus_return: FocusReturn::ActiveElement,
            previously_focused: None,
            class: config.classes.open.clone(),
        })
    }

    pub fn bind_modal<P: Page<Node = N>>(page: &P, config: &SiteConfig) -> Option<Self> {
        let selectors = &config.selectors;
        let container = page.query(&selectors.modal)?;
        Some(Self {
            kind: OverlayKind::Modal,
            container,
            backdrop: None,
            openers: page.query_all(&selectors.modal_open),
            closers: page.query_all(&selectors.modal_close),
            dismiss_on_self_click: true,
            focus_return: FocusReturn::Trigger,
            previously_focused: None,
            class: config.classes.open.clone(),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[must_use]
    pub const fn container(&self) -> &N {
        &self.container
    }

    #[must_use]
    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        page.has_class(&self.container, &self.class)
    }

    /// Opens the overlay. Already open overlays are left untouched so the
    /// scroll lock stays balanced.
    pub fn open<P: Page<Node = N>>(&mut self, page: &P, lock: &mut ScrollLock, trigger: Option<&N>) {
        if self.is_open(page) {
            return;
        }

        self.previously_focused = match self.focus_return {
            FocusReturn::Trigger => trigger.cloned().or_else(|| page.active_element()),
            FocusReturn::ActiveElement => page.active_element(),
        };

        page.add_class(&self.container, &self.class);
        if let Some(backdrop) = &self.backdrop {
            page.add_class(backdrop, &self.class);
        }
        lock.acquire(page);
        focus::focus_first(page, &self.container);

        debug!(overlay = %self.kind, depth = lock.depth(), "Overlay opened");
    }

    pub fn close<P: Page<Node = N>>(&mut self, page: &P, lock: &mut ScrollLock) {
        if !self.is_open(page) {
            return;
        }

        page.remove_class(&self.container, &self.class);
        if let Some(backdrop) = &self.backdrop {
            page.remove_class(backdrop, &self.class);
        }
        lock.release(page);
        if let Some(previous) = &self.previously_focused {
            page.focus(previous);
        }

        debug!(overlay = %self.kind, depth = lock.depth(), "Overlay closed");
    }

    /// Runs every trigger hit by a click on `target`.
    pub fn on_click<P: Page<Node = N>>(
        &mut self,
        page: &P,
        lock: &mut ScrollLock,
        target: &N,
    ) -> Dispatch {
        let mut dispatch = Dispatch::NONE;

        if let Some(opener) = self.openers.iter().find(|o| page.contains(o, target)).cloned() {
            // Modal triggers are usually in-page links; keep the URL untouched.
            if self.kind == OverlayKind::Modal {
                dispatch = dispatch.merge(Dispatch::prevented());
            }
            self.open(page, lock, Some(&opener));
        }

        if self.closers.iter().any(|c| page.contains(c, target)) {
            self.close(page, lock);
        }

        let backdrop_hit = self.backdrop.as_ref().is_some_and(|b| page.contains(b, target));
        let self_hit = self.dismiss_on_self_click && *target == self.container;
        if backdrop_hit || self_hit {
            self.close(page, lock);
        }

        dispatch
    }

    /// Routes a key press through the focus trap while open.
    pub fn on_key<P: Page<Node = N>>(&self, page: &P, key: Key, shift: bool) -> Dispatch {
        if self.is_open(page) { focus::trap(page, &self.container, key, shift) } else { Dispatch::NONE }
    }
}
