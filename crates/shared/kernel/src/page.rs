//! The host seam.
//!
//! The controller never touches a browser API directly. Everything it needs from
//! the document (lookups, class and attribute mutation, focus, observers and
//! scheduling) goes through [`Page`]. The wasm app implements it over `web-sys`;
//! tests implement it over an in-memory tree.

use std::fmt::Debug;
use std::time::Duration;

/// The three viewport observers, one per animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observer {
    Reveal,
    Counter,
    Bar,
}

/// Deferred work the controller asks the host to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// Hide the toast if no newer toast has been shown since.
    HideToast { generation: u64 },
}

/// Document operations the controller relies on.
///
/// Lookups return `None`/empty when nothing matches; mutations on detached or
/// unsuitable nodes are silently ignored by hosts.
pub trait Page {
    /// Handle to a single element. Equality is identity.
    type Node: Clone + PartialEq + Debug;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn query_within(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn body(&self) -> Option<Self::Node>;

    /// `true` when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&self, node: &Self::Node, class: &str);
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Adds `class` when `on`, removes it otherwise.
    fn set_class(&self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str);
    fn set_hidden(&self, node: &Self::Node, hidden: bool);
    fn set_text(&self, node: &Self::Node, text: &str);
    fn set_style_property(&self, node: &Self::Node, name: &str, value: &str);

    /// Focus candidates inside `container` in document order, matching
    /// [`vitrine_domain::constants::FOCUSABLE`]. No visibility filtering.
    fn focusables(&self, container: &Self::Node) -> Vec<Self::Node>;
    /// Whether the element currently takes part in layout.
    fn is_rendered(&self, node: &Self::Node) -> bool;
    fn active_element(&self) -> Option<Self::Node>;
    fn focus(&self, node: &Self::Node);

    /// Current value of a form control. Empty for anything else.
    fn input_value(&self, node: &Self::Node) -> String;
    fn reset_form(&self, form: &Self::Node);

    fn scroll_y(&self) -> f64;
    /// The URL fragment including the leading `#`, or empty.
    fn location_hash(&self) -> String;
    fn matches_media(&self, query: &str) -> bool;
    /// Monotonic clock in milliseconds, comparable with frame timestamps.
    fn now(&self) -> f64;

    fn observe(&self, observer: Observer, node: &Self::Node);
    fn unobserve(&self, observer: Observer, node: &Self::Node);
    /// Requests one [`crate::event::UiEvent::Frame`] before the next repaint.
    fn request_frame(&self);
    /// Delivers [`crate::event::UiEvent::Timer`] after `delay`.
    fn set_timeout(&self, delay: Duration, timer: Timer);
}
