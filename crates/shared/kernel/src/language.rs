use crate::event::Dispatch;
use crate::page::Page;
use vitrine_domain::constants::{ARIA_EXPANDED, ATTR_HREF};

/// The language selector dropdown.
#[derive(Debug, Clone)]
pub struct LanguageMenu<N> {
    toggle: N,
    menu: N,
    class: String,
}

impl<N: Clone + PartialEq> LanguageMenu<N> {
    /// Binds only when both the toggle and the menu are present.
    pub fn bind<P: Page<Node = N>>(
        page: &P,
        toggle: &str,
        menu: &str,
        class: impl Into<String>,
    ) -> Option<Self> {
        let toggle = page.query(toggle)?;
        let menu = page.query(menu)?;
        Some(Self { toggle, menu, class: class.into() })
    }

    #[must_use]
    pub fn is_open<P: Page<Node = N>>(&self, page: &P) -> bool {
        page.has_class(&self.menu, &self.class)
    }

    /// Flips the menu when the click landed on the toggle.
    ///
    /// Returns `None` when the toggle was not hit, so the click keeps travelling
    /// through the other behaviors.
    pub fn on_toggle_click<P: Page<Node = N>>(&self, page: &P, target: &N) -> Option<Dispatch> {
        if !page.contains(&self.toggle, target) {
            return None;
        }
        let open = !self.is_open(page);
        page.set_class(&self.menu, &self.class, open);
        page.set_attribute(&self.toggle, ARIA_EXPANDED, if open { "true" } else { "false" });
        Some(Dispatch::stopped())
    }

    /// Document-level click: anything outside the menu and the toggle closes it.
    pub fn on_document_click<P: Page<Node = N>>(&self, page: &P, target: &N) {
        if !page.contains(&self.menu, target) && *target != self.toggle {
            self.close(page);
        }
    }

    pub fn close<P: Page<Node = N>>(&self, page: &P) {
        page.remove_class(&self.menu, &self.class);
        page.set_attribute(&self.toggle, ARIA_EXPANDED, "false");
    }
}

/// Carries the current fragment over to every language link so switching
/// language keeps the reader at the same section.
pub fn carry_fragment<P: Page>(page: &P, links: &str) -> usize {
    let hash = page.location_hash();
    if hash.is_empty() {
        return 0;
    }

    let mut rewritten = 0;
    for link in page.query_all(links) {
        let href = page.attribute(&link, ATTR_HREF).unwrap_or_default();
        page.set_attribute(&link, ATTR_HREF, &with_fragment(&href, &hash));
        rewritten += 1;
    }
    rewritten
}

/// Replaces any fragment of `href` with `hash`.
#[must_use]
pub fn with_fragment(href: &str, hash: &str) -> String {
    let base = href.split_once('#').map_or(href, |(base, _)| base);
    format!("{base}{hash}")
}
