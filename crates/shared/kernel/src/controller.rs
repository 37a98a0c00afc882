use crate::accordion::Accordion;
use crate::event::{Dispatch, Key, UiEvent};
use crate::form::{LeadForms, Verdict};
use crate::header::Header;
use crate::language::{self, LanguageMenu};
use crate::motion::{self, Counters};
use crate::overlay::Overlay;
use crate::page::{Observer, Page, Timer};
use crate::scroll_lock::ScrollLock;
use crate::toast::Toast;
use std::fmt::Debug;
use tracing::{debug, info};
use vitrine_domain::behaviors::Behaviors;
use vitrine_domain::config::SiteConfig;

/// All interaction state of one page view.
///
/// Built once by [`Controller::mount`], then fed every translated browser
/// event through [`Controller::handle`]. Behaviors whose elements are missing
/// are simply not bound.
#[derive(Debug)]
pub struct Controller<N> {
    config: SiteConfig,
    bound: Behaviors,
    lock: ScrollLock,
    header: Option<Header<N>>,
    language: Option<LanguageMenu<N>>,
    drawer: Option<Overlay<N>>,
    modal: Option<Overlay<N>>,
    accordion: Accordion<N>,
    counters: Counters<N>,
    forms: LeadForms<N>,
    toast: Toast<N>,
}

impl<N: Clone + PartialEq + Debug> Controller<N> {
    /// Looks up every annotated element and wires the enabled behaviors.
    pub fn mount<P: Page<Node = N>>(page: &P, config: SiteConfig) -> Self {
        let enabled = config.behaviors;
        let on = |flag: Behaviors| enabled.contains(flag);
        let mut bound = Behaviors::empty();

        let header = if on(Behaviors::HEADER) {
            Header::bind(
                page,
                &config.selectors.header,
                &config.classes.scrolled,
                config.header.scrolled_offset,
            )
        } else {
            None
        };
        bound.set(Behaviors::HEADER, header.is_some());

        let language = if on(Behaviors::LANGUAGE) {
            LanguageMenu::bind(
                page,
                &config.selectors.lang_toggle,
                &config.selectors.lang_menu,
                &config.classes.open,
            )
        } else {
            None
        };
        if language.is_some() {
            bound |= Behaviors::LANGUAGE;
            let rewritten = language::carry_fragment(page, &config.selectors.lang_link);
            debug!(rewritten, "Language links carry the current fragment");
        }

        let drawer =
            if on(Behaviors::DRAWER) { Overlay::bind_drawer(page, &config) } else { None };
        bound.set(Behaviors::DRAWER, drawer.is_some());

        let modal = if on(Behaviors::MODAL) { Overlay::bind_modal(page, &config) } else { None };
        bound.set(Behaviors::MODAL, modal.is_some());

        if on(Behaviors::REVEAL) && motion::bind_reveal(page, &config) > 0 {
            bound |= Behaviors::REVEAL;
        }
        if on(Behaviors::COUNTERS)
            && motion::observe_all(page, Observer::Counter, &config.selectors.counter) > 0
        {
            bound |= Behaviors::COUNTERS;
        }
        if on(Behaviors::BARS) && motion::observe_all(page, Observer::Bar, &config.selectors.bar) > 0
        {
            bound |= Behaviors::BARS;
        }

        let accordion = if on(Behaviors::FAQ) {
            Accordion::bind(page, &config.selectors.faq_question)
        } else {
            Accordion::default()
        };
        bound.set(Behaviors::FAQ, accordion.len() > 0);

        let forms = if on(Behaviors::LEAD_FORMS) {
            LeadForms::bind(page, &config.selectors.lead_form)
        } else {
            LeadForms::default()
        };
        bound.set(Behaviors::LEAD_FORMS, forms.len() > 0);

        let toast =
            Toast::bind(page, &config.selectors.toast, &config.classes.show, config.toast.dismiss_ms);
        let counters = Counters::new(config.motion.counter_duration_ms);
        let lock = ScrollLock::new(&config.classes.scroll_lock);

        info!(behaviors = ?bound.names(), "Interaction controller mounted");

        Self {
            config,
            bound,
            lock,
            header,
            language,
            drawer,
            modal,
            accordion,
            counters,
            forms,
            toast,
        }
    }

    /// Behaviors that found their elements and were wired up.
    #[must_use]
    pub const fn bound(&self) -> Behaviors {
        self.bound
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn lock_depth(&self) -> u32 {
        self.lock.depth()
    }

    #[must_use]
    pub fn running_counters(&self) -> usize {
        self.counters.running()
    }

    pub fn handle<P: Page<Node = N>>(&mut self, page: &P, event: UiEvent<N>) -> Dispatch {
        match event {
            UiEvent::Scroll => {
                if let Some(header) = &self.header {
                    header.on_scroll(page);
                }
                Dispatch::NONE
            },
            UiEvent::Click { target } => self.on_click(page, &target),
            UiEvent::KeyDown { key, shift } => self.on_key(page, key, shift),
            UiEvent::Submit { form } => {
                if self.forms.owns(&form) {
                    self.on_submit(page, &form);
                    Dispatch::prevented()
                } else {
                    Dispatch::NONE
                }
            },
            UiEvent::Intersection { observer, target, intersecting } => {
                if intersecting {
                    self.on_intersection(page, observer, target);
                }
                Dispatch::NONE
            },
            UiEvent::Frame { now } => {
                self.counters.on_frame(page, now);
                Dispatch::NONE
            },
            UiEvent::Timer(Timer::HideToast { generation }) => {
                self.toast.on_timer(page, generation);
                Dispatch::NONE
            },
        }
    }

    /// Opens the drawer as if its open button had been pressed.
    pub fn open_drawer<P: Page<Node = N>>(&mut self, page: &P) {
        if let Some(drawer) = &mut self.drawer {
            drawer.open(page, &mut self.lock, None);
        }
    }

    pub fn close_drawer<P: Page<Node = N>>(&mut self, page: &P) {
        if let Some(drawer) = &mut self.drawer {
            drawer.close(page, &mut self.lock);
        }
    }

    /// Opens the modal; `trigger` receives focus back on close.
    pub fn open_modal<P: Page<Node = N>>(&mut self, page: &P, trigger: Option<&N>) {
        if let Some(modal) = &mut self.modal {
            modal.open(page, &mut self.lock, trigger);
        }
    }

    pub fn close_modal<P: Page<Node = N>>(&mut self, page: &P) {
        if let Some(modal) = &mut self.modal {
            modal.close(page, &mut self.lock);
        }
    }

    fn on_click<P: Page<Node = N>>(&mut self, page: &P, target: &N) -> Dispatch {
        // The toggle swallows its own click so the document handler below
        // does not close the menu it just opened.
        if let Some(dispatch) =
            self.language.as_ref().and_then(|menu| menu.on_toggle_click(page, target))
        {
            return dispatch;
        }

        let mut dispatch = Dispatch::NONE;
        if let Some(drawer) = &mut self.drawer {
            dispatch = dispatch.merge(drawer.on_click(page, &mut self.lock, target));
        }
        if let Some(modal) = &mut self.modal {
            dispatch = dispatch.merge(modal.on_click(page, &mut self.lock, target));
        }
        self.accordion.on_click(page, target);

        if let Some(menu) = &self.language {
            menu.on_document_click(page, target);
        }
        dispatch
    }

    fn on_key<P: Page<Node = N>>(&mut self, page: &P, key: Key, shift: bool) -> Dispatch {
        if key == Key::Escape {
            if let Some(menu) = &self.language {
                menu.close(page);
            }
            self.close_modal(page);
            self.close_drawer(page);
        }

        let mut dispatch = Dispatch::NONE;
        for overlay in [&self.drawer, &self.modal].into_iter().flatten() {
            dispatch = dispatch.merge(overlay.on_key(page, key, shift));
        }
        dispatch
    }

    fn on_submit<P: Page<Node = N>>(&mut self, page: &P, form: &N) -> Verdict {
        let verdict = self.forms.submit(page, form, &self.config);
        if verdict.is_valid() {
            self.toast.show(page);
        }
        verdict
    }

    fn on_intersection<P: Page<Node = N>>(&mut self, page: &P, observer: Observer, target: N) {
        page.unobserve(observer, &target);
        match observer {
            Observer::Reveal => page.add_class(&target, &self.config.classes.visible),
            Observer::Counter => self.counters.start(page, target),
            Observer::Bar => motion::fill_bar(page, &target),
        }
    }
}
