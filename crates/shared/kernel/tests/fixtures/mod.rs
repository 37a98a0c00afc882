#![allow(dead_code, unreachable_pub)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use vitrine_domain::config::SiteConfig;
use vitrine_domain::constants::{
    ARIA_CONTROLS, ARIA_EXPANDED, ATTR_HREF, BAR, COUNTER, DATA_BAR, DATA_COUNTER, DRAWER,
    DRAWER_BACKDROP, DRAWER_CLOSE, DRAWER_OPEN, FAQ_QUESTION, HEADER, LANG_LINK, LANG_MENU,
    LANG_TOGGLE, LEAD_EMAIL, LEAD_FORM, LEAD_NAME, LEAD_PHONE, MODAL, MODAL_CLOSE, MODAL_OPEN,
    REVEAL, TOAST,
};
use vitrine_kernel::controller::Controller;
use vitrine_kernel::event::{Dispatch, UiEvent};
use vitrine_kernel::page::{Observer, Page, Timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct FakeNode {
    parent: Option<NodeId>,
    dom_id: Option<String>,
    selectors: Vec<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    hidden: bool,
    focusable: bool,
    rendered: bool,
    value: String,
}

/// In-memory document. Nodes match the selectors they were created with;
/// document order is creation order.
#[derive(Debug)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    body: NodeId,
    active: Cell<Option<NodeId>>,
    scroll_y: Cell<f64>,
    hash: RefCell<String>,
    reduced_motion: Cell<bool>,
    now: Cell<f64>,
    observed: RefCell<Vec<(Observer, NodeId)>>,
    frames: Cell<usize>,
    timers: RefCell<Vec<(Duration, Timer)>>,
    resets: RefCell<Vec<NodeId>>,
}

impl Default for FakePage {
    fn default() -> Self {
        Self::new()
    }
}

impl FakePage {
    #[must_use]
    pub fn new() -> Self {
        let body = FakeNode { rendered: true, ..FakeNode::default() };
        Self {
            nodes: RefCell::new(vec![body]),
            body: NodeId(0),
            active: Cell::new(None),
            scroll_y: Cell::new(0.0),
            hash: RefCell::new(String::new()),
            reduced_motion: Cell::new(false),
            now: Cell::new(0.0),
            observed: RefCell::new(Vec::new()),
            frames: Cell::new(0),
            timers: RefCell::new(Vec::new()),
            resets: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub const fn body_id(&self) -> NodeId {
        self.body
    }

    /// Appends a rendered element under `parent` matching `selectors`.
    pub fn element(&self, parent: NodeId, selectors: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            parent: Some(parent),
            selectors: selectors.iter().map(|s| (*s).to_owned()).collect(),
            rendered: true,
            ..FakeNode::default()
        });
        NodeId(nodes.len() - 1)
    }

    /// Appends a focusable element (a button, link or input) under `parent`.
    pub fn focusable(&self, parent: NodeId, selectors: &[&str]) -> NodeId {
        let id = self.element(parent, selectors);
        self.nodes.borrow_mut()[id.0].focusable = true;
        id
    }

    pub fn with_attr(&self, node: NodeId, name: &str, value: &str) -> NodeId {
        self.nodes.borrow_mut()[node.0].attributes.insert(name.to_owned(), value.to_owned());
        node
    }

    pub fn with_dom_id(&self, node: NodeId, id: &str) -> NodeId {
        self.nodes.borrow_mut()[node.0].dom_id = Some(id.to_owned());
        node
    }

    pub fn set_rendered(&self, node: NodeId, rendered: bool) {
        self.nodes.borrow_mut()[node.0].rendered = rendered;
    }

    pub fn type_into(&self, node: NodeId, value: &str) {
        self.nodes.borrow_mut()[node.0].value = value.to_owned();
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_hash(&self, hash: &str) {
        *self.hash.borrow_mut() = hash.to_owned();
    }

    pub fn set_reduced_motion(&self, on: bool) {
        self.reduced_motion.set(on);
    }

    pub fn set_now(&self, now: f64) {
        self.now.set(now);
    }

    pub fn focus_node(&self, node: NodeId) {
        self.active.set(Some(node));
    }

    // --- Inspection ---

    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        self.active.get()
    }

    #[must_use]
    pub fn class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.contains(class)
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    #[must_use]
    pub fn hidden(&self, node: NodeId) -> bool {
        self.nodes.borrow()[node.0].hidden
    }

    #[must_use]
    pub fn style(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].style.get(name).cloned()
    }

    #[must_use]
    pub fn value(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].value.clone()
    }

    #[must_use]
    pub fn is_observed(&self, observer: Observer, node: NodeId) -> bool {
        self.observed.borrow().contains(&(observer, node))
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.observed.borrow().len()
    }

    #[must_use]
    pub fn resets(&self) -> Vec<NodeId> {
        self.resets.borrow().clone()
    }

    /// Consumes one pending frame request.
    pub fn take_frame(&self) -> bool {
        let pending = self.frames.get();
        self.frames.set(pending.saturating_sub(1));
        pending > 0
    }

    #[must_use]
    pub fn pending_frames(&self) -> usize {
        self.frames.get()
    }

    pub fn take_timers(&self) -> Vec<(Duration, Timer)> {
        std::mem::take(&mut *self.timers.borrow_mut())
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .map(NodeId)
            .filter(|&id| id != root && self.is_inside(&nodes, root, id))
            .collect()
    }

    fn is_inside(&self, nodes: &[FakeNode], ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match nodes[node.0].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        self.nodes.borrow()[node.0].selectors.iter().any(|s| s == selector)
    }
}

impl Page for FakePage {
    type Node = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let count = self.nodes.borrow().len();
        (0..count).map(NodeId).filter(|&id| self.matches(id, selector)).collect()
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        self.descendants(*root).into_iter().find(|&id| self.matches(id, selector))
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes.borrow().iter().position(|n| n.dom_id.as_deref() == Some(id)).map(NodeId)
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.is_inside(&self.nodes.borrow(), *ancestor, *node)
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.class(*node, class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.insert(class.to_owned());
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].classes.remove(class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.attr(*node, name)
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) {
        self.with_attr(*node, name, value);
    }

    fn set_hidden(&self, node: &NodeId, hidden: bool) {
        self.nodes.borrow_mut()[node.0].hidden = hidden;
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        text.clone_into(&mut self.nodes.borrow_mut()[node.0].text);
    }

    fn set_style_property(&self, node: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].style.insert(name.to_owned(), value.to_owned());
    }

    fn focusables(&self, container: &NodeId) -> Vec<NodeId> {
        self.descendants(*container)
            .into_iter()
            .filter(|id| self.nodes.borrow()[id.0].focusable)
            .collect()
    }

    fn is_rendered(&self, node: &NodeId) -> bool {
        self.nodes.borrow()[node.0].rendered
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active.get()
    }

    fn focus(&self, node: &NodeId) {
        self.active.set(Some(*node));
    }

    fn input_value(&self, node: &NodeId) -> String {
        self.value(*node)
    }

    fn reset_form(&self, form: &NodeId) {
        for id in self.descendants(*form) {
            self.nodes.borrow_mut()[id.0].value.clear();
        }
        self.resets.borrow_mut().push(*form);
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn location_hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn matches_media(&self, query: &str) -> bool {
        query.contains("prefers-reduced-motion") && self.reduced_motion.get()
    }

    fn now(&self) -> f64 {
        self.now.get()
    }

    fn observe(&self, observer: Observer, node: &NodeId) {
        self.observed.borrow_mut().push((observer, *node));
    }

    fn unobserve(&self, observer: Observer, node: &NodeId) {
        self.observed.borrow_mut().retain(|entry| *entry != (observer, *node));
    }

    fn request_frame(&self) {
        self.frames.set(self.frames.get() + 1);
    }

    fn set_timeout(&self, delay: Duration, timer: Timer) {
        self.timers.borrow_mut().push((delay, timer));
    }
}

/// A complete landing page with every marker the controller looks for.
#[derive(Debug)]
pub struct Landing {
    pub page: FakePage,
    pub header: NodeId,
    pub lang_toggle: NodeId,
    pub lang_menu: NodeId,
    pub lang_links: Vec<NodeId>,
    pub outside: NodeId,
    pub drawer_open: NodeId,
    pub drawer: NodeId,
    pub drawer_close: NodeId,
    pub drawer_links: Vec<NodeId>,
    pub drawer_backdrop: NodeId,
    pub privacy_link: NodeId,
    pub modal: NodeId,
    pub modal_dialog: NodeId,
    pub modal_close: NodeId,
    pub modal_accept: NodeId,
    pub reveals: Vec<NodeId>,
    pub counter: NodeId,
    pub bar: NodeId,
    pub faq: Vec<(NodeId, NodeId)>,
    pub form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub phone: NodeId,
    pub toast: NodeId,
}

impl Landing {
    #[must_use]
    pub fn new() -> Self {
        let page = FakePage::new();
        let body = page.body_id();

        let header = page.element(body, &[HEADER]);
        let lang_toggle = page.focusable(header, &[LANG_TOGGLE]);
        let lang_menu = page.element(header, &[LANG_MENU]);
        let lang_links = ["/en/", "/de/#pricing", "/uk/"]
            .into_iter()
            .map(|href| {
                let link = page.focusable(lang_menu, &[LANG_LINK]);
                page.with_attr(link, ATTR_HREF, href)
            })
            .collect();
        let outside = page.element(body, &[]);
        let drawer_open = page.focusable(header, &[DRAWER_OPEN]);

        let drawer = page.element(body, &[DRAWER]);
        let drawer_close = page.focusable(drawer, &[DRAWER_CLOSE]);
        let drawer_links = (0..2).map(|_| page.focusable(drawer, &[])).collect::<Vec<_>>();
        let privacy_link = page.focusable(drawer, &[MODAL_OPEN]);
        let drawer_backdrop = page.element(body, &[DRAWER_BACKDROP]);

        let modal = page.element(body, &[MODAL]);
        let modal_dialog = page.element(modal, &[]);
        let modal_close = page.focusable(modal_dialog, &[MODAL_CLOSE]);
        let modal_accept = page.focusable(modal_dialog, &[MODAL_CLOSE]);

        let reveals = (0..3).map(|_| page.element(body, &[REVEAL])).collect();
        let counter = page.element(body, &[COUNTER]);
        page.with_attr(counter, DATA_COUNTER, "250");
        let bar = page.element(body, &[BAR]);
        page.with_attr(bar, DATA_BAR, "72");

        let faq = (1..=3)
            .map(|i| {
                let question = page.focusable(body, &[FAQ_QUESTION]);
                let panel_id = format!("faq-{i}");
                page.with_attr(question, ARIA_CONTROLS, &panel_id);
                page.with_attr(question, ARIA_EXPANDED, "false");
                let panel = page.element(body, &[]);
                page.with_dom_id(panel, &panel_id);
                page.set_hidden(&panel, true);
                (question, panel)
            })
            .collect();

        let form = page.element(body, &[LEAD_FORM]);
        let name = page.focusable(form, &[LEAD_NAME]);
        let email = page.focusable(form, &[LEAD_EMAIL]);
        let phone = page.focusable(form, &[LEAD_PHONE]);
        let toast = page.element(body, &[TOAST]);

        Self {
            page,
            header,
            lang_toggle,
            lang_menu,
            lang_links,
            outside,
            drawer_open,
            drawer,
            drawer_close,
            drawer_links,
            drawer_backdrop,
            privacy_link,
            modal,
            modal_dialog,
            modal_close,
            modal_accept,
            reveals,
            counter,
            bar,
            faq,
            form,
            name,
            email,
            phone,
            toast,
        }
    }

    #[must_use]
    pub fn mount(&self) -> Controller<NodeId> {
        Controller::mount(&self.page, SiteConfig::default())
    }

    pub fn click(&self, controller: &mut Controller<NodeId>, target: NodeId) -> Dispatch {
        controller.handle(&self.page, UiEvent::Click { target })
    }
}

impl Default for Landing {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives the frame loop at a fixed step until nothing requests another frame.
pub fn run_frames(page: &FakePage, controller: &mut Controller<NodeId>, step: f64) -> usize {
    let mut frames = 0;
    while page.take_frame() {
        page.set_now(page.now() + step);
        let _ = controller.handle(page, UiEvent::Frame { now: page.now() });
        frames += 1;
        assert!(frames < 10_000, "frame loop never settled");
    }
    frames
}
