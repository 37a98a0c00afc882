use crate::behaviors::Behaviors;
use crate::constants::{
    BAR, CLASS_INVALID, CLASS_OPEN, CLASS_SCROLL_LOCK, CLASS_SCROLLED, CLASS_SHOW, CLASS_VISIBLE,
    COUNTER, DRAWER, DRAWER_BACKDROP, DRAWER_CLOSE, DRAWER_OPEN, FAQ_QUESTION, HEADER, LANG_LINK,
    LANG_MENU, LANG_TOGGLE, LEAD_EMAIL, LEAD_FORM, LEAD_NAME, LEAD_PHONE, MODAL, MODAL_CLOSE,
    MODAL_OPEN, REVEAL, TOAST,
};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Everything a page view can tune about the interaction layer.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub behaviors: Behaviors,
    pub selectors: Selectors,
    pub classes: Classes,
    pub header: HeaderConfig,
    pub motion: MotionConfig,
    pub form: FormRules,
    pub toast: ToastConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into behaviors and host closures.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl From<SiteConfigInner> for SiteConfig {
    fn from(inner: SiteConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// CSS selectors locating the annotated elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub lang_toggle: String,
    pub lang_menu: String,
    pub lang_link: String,
    pub drawer: String,
    pub drawer_open: String,
    pub drawer_close: String,
    pub drawer_backdrop: String,
    pub modal: String,
    pub modal_open: String,
    pub modal_close: String,
    pub reveal: String,
    pub counter: String,
    pub bar: String,
    pub faq_question: String,
    pub toast: String,
    pub lead_form: String,
    pub lead_name: String,
    pub lead_email: String,
    pub lead_phone: String,
}

/// Visual-state marker classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub scrolled: String,
    pub open: String,
    pub visible: String,
    pub show: String,
    pub invalid: String,
    pub scroll_lock: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Vertical offset (px) past which the header counts as scrolled.
    pub scrolled_offset: f64,
}

/// Intersection thresholds and animation timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub bar_threshold: f64,
    pub counter_duration_ms: u32,
    pub reduced_motion_query: String,
}

/// Minimum trimmed lengths for lead form fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub name_min_len: usize,
    pub phone_min_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub dismiss_ms: u32,
}

// --- Default ---

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: HEADER.to_owned(),
            lang_toggle: LANG_TOGGLE.to_owned(),
            lang_menu: LANG_MENU.to_owned(),
            lang_link: LANG_LINK.to_owned(),
            drawer: DRAWER.to_owned(),
            drawer_open: DRAWER_OPEN.to_owned(),
            drawer_close: DRAWER_CLOSE.to_owned(),
            drawer_backdrop: DRAWER_BACKDROP.to_owned(),
            modal: MODAL.to_owned(),
            modal_open: MODAL_OPEN.to_owned(),
            modal_close: MODAL_CLOSE.to_owned(),
            reveal: REVEAL.to_owned(),
            counter: COUNTER.to_owned(),
            bar: BAR.to_owned(),
            faq_question: FAQ_QUESTION.to_owned(),
            toast: TOAST.to_owned(),
            lead_form: LEAD_FORM.to_owned(),
            lead_name: LEAD_NAME.to_owned(),
            lead_email: LEAD_EMAIL.to_owned(),
            lead_phone: LEAD_PHONE.to_owned(),
        }
    }
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            scrolled: CLASS_SCROLLED.to_owned(),
            open: CLASS_OPEN.to_owned(),
            visible: CLASS_VISIBLE.to_owned(),
            show: CLASS_SHOW.to_owned(),
            invalid: CLASS_INVALID.to_owned(),
            scroll_lock: CLASS_SCROLL_LOCK.to_owned(),
        }
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { scrolled_offset: 8.0 }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.18,
            counter_threshold: 0.4,
            bar_threshold: 0.35,
            counter_duration_ms: 1200,
            reduced_motion_query: "(prefers-reduced-motion: reduce)".to_owned(),
        }
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self { name_min_len: 2, phone_min_len: 6 }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { dismiss_ms: 3500 }
    }
}
