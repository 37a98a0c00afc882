use crate::page::Page;

/// Marks the site header once the page is scrolled past a small offset.
#[derive(Debug, Clone)]
pub struct Header<N> {
    node: N,
    class: String,
    offset: f64,
}

impl<N: Clone + PartialEq> Header<N> {
    pub fn bind<P: Page<Node = N>>(
        page: &P,
        selector: &str,
        class: impl Into<String>,
        offset: f64,
    ) -> Option<Self> {
        let node = page.query(selector)?;
        Some(Self { node, class: class.into(), offset })
    }

    pub fn on_scroll<P: Page<Node = N>>(&self, page: &P) {
        page.set_class(&self.node, &self.class, page.scroll_y() > self.offset);
    }
}
