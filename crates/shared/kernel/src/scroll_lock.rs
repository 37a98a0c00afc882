use crate::page::Page;
use tracing::trace;

/// Reference-counted body scroll lock shared by every overlay.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    depth: u32,
    class: String,
}

impl ScrollLock {
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self { depth: 0, class: class.into() }
    }

    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.depth > 0
    }

    pub fn acquire<P: Page>(&mut self, page: &P) {
        self.depth = self.depth.saturating_add(1);
        if let Some(body) = page.body() {
            page.add_class(&body, &self.class);
        }
        trace!(depth = self.depth, "Scroll lock acquired");
    }

    /// Releasing an unheld lock is a no-op.
    pub fn release<P: Page>(&mut self, page: &P) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0
            && let Some(body) = page.body()
        {
            page.remove_class(&body, &self.class);
        }
        trace!(depth = self.depth, "Scroll lock released");
    }
}
