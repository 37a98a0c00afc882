use crate::page::Page;
use vitrine_domain::constants::{ARIA_CONTROLS, ARIA_EXPANDED};

/// FAQ questions, at most one expanded at a time.
///
/// Each question is a button whose `aria-controls` names its answer panel.
#[derive(Debug, Clone)]
pub struct Accordion<N> {
    questions: Vec<N>,
}

impl<N> Default for Accordion<N> {
    fn default() -> Self {
        Self { questions: Vec::new() }
    }
}

impl<N: Clone + PartialEq> Accordion<N> {
    pub fn bind<P: Page<Node = N>>(page: &P, selector: &str) -> Self {
        Self { questions: page.query_all(selector) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` when the click hit a question.
    pub fn on_click<P: Page<Node = N>>(&self, page: &P, target: &N) -> bool {
        let Some(question) = self.questions.iter().find(|q| page.contains(q, target)) else {
            return false;
        };

        let was_expanded = is_expanded(page, question);
        for other in &self.questions {
            set_expanded(page, other, false);
        }
        if !was_expanded {
            set_expanded(page, question, true);
        }
        true
    }
}

#[must_use]
pub fn is_expanded<P: Page>(page: &P, question: &P::Node) -> bool {
    page.attribute(question, ARIA_EXPANDED).as_deref() == Some("true")
}

fn set_expanded<P: Page>(page: &P, question: &P::Node, expanded: bool) {
    page.set_attribute(question, ARIA_EXPANDED, if expanded { "true" } else { "false" });
    let panel = page.attribute(question, ARIA_CONTROLS).and_then(|id| page.element_by_id(&id));
    if let Some(panel) = panel {
        page.set_hidden(&panel, !expanded);
    }
}
