use crate::page::{Page, Timer};
use std::time::Duration;

/// Transient confirmation shown after a successful lead submission.
#[derive(Debug, Clone)]
pub struct Toast<N> {
    node: Option<N>,
    class: String,
    dismiss_after: Duration,
    generation: u64,
}

impl<N: Clone + PartialEq> Toast<N> {
    pub fn bind<P: Page<Node = N>>(
        page: &P,
        selector: &str,
        class: impl Into<String>,
        dismiss_ms: u32,
    ) -> Self {
        Self {
            node: page.query(selector),
            class: class.into(),
            dismiss_after: Duration::from_millis(u64::from(dismiss_ms)),
            generation: 0,
        }
    }

    /// Shows the toast and schedules its dismissal. Showing again restarts the window.
    pub fn show<P: Page<Node = N>>(&mut self, page: &P) {
        let Some(node) = &self.node else { return };
        page.add_class(node, &self.class);
        self.generation += 1;
        page.set_timeout(self.dismiss_after, Timer::HideToast { generation: self.generation });
    }

    pub fn on_timer<P: Page<Node = N>>(&self, page: &P, generation: u64) {
        if generation != self.generation {
            return;
        }
        if let Some(node) = &self.node {
            page.remove_class(node, &self.class);
        }
    }
}
