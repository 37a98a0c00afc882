//! Marker selectors, state classes and attribute names shared by the controller
//! and its hosts. These are the defaults baked into [`crate::config::SiteConfig`].

// --- Selectors ---

pub const HEADER: &str = ".site-header";
pub const LANG_TOGGLE: &str = "[data-lang-toggle]";
pub const LANG_MENU: &str = "[data-lang-menu]";
pub const LANG_LINK: &str = "a[data-lang-link]";
pub const DRAWER: &str = "[data-drawer]";
pub const DRAWER_OPEN: &str = "[data-drawer-open]";
pub const DRAWER_CLOSE: &str = "[data-drawer-close]";
pub const DRAWER_BACKDROP: &str = "[data-drawer-backdrop]";
pub const MODAL: &str = "[data-modal]";
pub const MODAL_OPEN: &str = "[data-modal-open]";
pub const MODAL_CLOSE: &str = "[data-modal-close]";
pub const REVEAL: &str = "[data-reveal]";
pub const COUNTER: &str = "[data-counter]";
pub const BAR: &str = "[data-bar]";
pub const FAQ_QUESTION: &str = ".faq-question";
pub const TOAST: &str = "[data-toast]";
pub const LEAD_FORM: &str = "form[data-lead-form]";
pub const LEAD_NAME: &str = r#"input[name="name"]"#;
pub const LEAD_EMAIL: &str = r#"input[name="email"]"#;
pub const LEAD_PHONE: &str = r#"input[name="phone"]"#;
pub const CONFIG_SCRIPT: &str = r#"script[type="application/json"][data-vitrine-config]"#;

/// Interactive elements that can receive keyboard focus inside an overlay.
pub const FOCUSABLE: &[&str] = &[
    "a[href]",
    "button:not([disabled])",
    "textarea:not([disabled])",
    "input:not([disabled])",
    "select:not([disabled])",
    r#"[tabindex]:not([tabindex="-1"])"#,
];

// --- State classes ---

pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SHOW: &str = "show";
pub const CLASS_INVALID: &str = "invalid";
pub const CLASS_SCROLL_LOCK: &str = "scroll-lock";

// --- Attributes ---

pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ATTR_HREF: &str = "href";
pub const DATA_COUNTER: &str = "data-counter";
pub const DATA_SUFFIX: &str = "data-suffix";
pub const DATA_BAR: &str = "data-bar";
pub const BAR_WIDTH_PROPERTY: &str = "--bar-width";

// --- Behavior names ---

pub const HEADER_BEHAVIOR: &str = "header";
pub const LANGUAGE_BEHAVIOR: &str = "language";
pub const DRAWER_BEHAVIOR: &str = "drawer";
pub const MODAL_BEHAVIOR: &str = "modal";
pub const REVEAL_BEHAVIOR: &str = "reveal";
pub const COUNTER_BEHAVIOR: &str = "counters";
pub const BAR_BEHAVIOR: &str = "bars";
pub const FAQ_BEHAVIOR: &str = "faq";
pub const LEAD_FORM_BEHAVIOR: &str = "lead-forms";
