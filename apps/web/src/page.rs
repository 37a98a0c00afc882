//! [`Page`] over the live DOM.

use crate::schedule::{Request, Requests};
use std::time::Duration;
use tracing::trace;
use vitrine_domain::constants::FOCUSABLE;
use vitrine_kernel::page::{Observer, Page, Timer};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, Window,
};

#[derive(Debug)]
pub struct WebPage {
    window: Window,
    document: Document,
    focusable: String,
    requests: Requests<Element>,
}

impl WebPage {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document, focusable: FOCUSABLE.join(", "), requests: Requests::default() }
    }

    pub const fn window(&self) -> &Window {
        &self.window
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Requests queued since the last call.
    pub fn take_requests(&self) -> Vec<Request<Element>> {
        self.requests.drain()
    }
}

fn elements(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Page for WebPage {
    type Node = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        elements(self.document.query_selector_all(selector).ok())
    }

    fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).ok().flatten()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        ancestor.contains(Some(node.as_ref()))
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            trace!(?e, class, "classList.add rejected");
        }
    }

    fn remove_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().remove_1(class) {
            trace!(?e, class, "classList.remove rejected");
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) {
        if let Err(e) = node.set_attribute(name, value) {
            trace!(?e, name, "setAttribute rejected");
        }
    }

    fn set_hidden(&self, node: &Element, hidden: bool) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            el.set_hidden(hidden);
        }
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_style_property(&self, node: &Element, name: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>()
            && let Err(e) = el.style().set_property(name, value)
        {
            trace!(?e, name, "style.setProperty rejected");
        }
    }

    fn focusables(&self, container: &Element) -> Vec<Element> {
        elements(container.query_selector_all(&self.focusable).ok())
    }

    fn is_rendered(&self, node: &Element) -> bool {
        node.get_client_rects().length() > 0
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn focus(&self, node: &Element) {
        if let Some(el) = node.dyn_ref::<HtmlElement>()
            && let Err(e) = el.focus()
        {
            trace!(?e, "focus rejected");
        }
    }

    fn input_value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = node.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn location_hash(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn matches_media(&self, query: &str) -> bool {
        self.window.match_media(query).ok().flatten().is_some_and(|list| list.matches())
    }

    fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |performance| performance.now())
    }

    fn observe(&self, observer: Observer, node: &Element) {
        self.requests.push(Request::Observe(observer, node.clone()));
    }

    fn unobserve(&self, observer: Observer, node: &Element) {
        self.requests.push(Request::Unobserve(observer, node.clone()));
    }

    fn request_frame(&self) {
        self.requests.push(Request::Frame);
    }

    fn set_timeout(&self, delay: Duration, timer: Timer) {
        self.requests.push(Request::Timeout(delay, timer));
    }
}
