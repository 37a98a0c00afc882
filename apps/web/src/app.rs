//! Wires browser events, observers and timers to the controller.

use crate::error::{WebError, WebErrorExt};
use crate::page::WebPage;
use crate::schedule::{Request, timeout_millis};
use fxhash::FxHashMap;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, warn};
use vitrine_domain::config::{MotionConfig, SiteConfig};
use vitrine_kernel::prelude::{
    Behaviors, Controller, Dispatch, Key, Observer, Page, UiEvent, load_config,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

/// The running page controller together with its browser bindings.
///
/// Every callback installed by the app keeps a strong handle to it, so it
/// lives as long as the document.
#[derive(Debug)]
pub struct App {
    page: WebPage,
    controller: RefCell<Controller<Element>>,
    observers: RefCell<FxHashMap<Observer, IntersectionObserver>>,
    motion: MotionConfig,
}

impl App {
    /// Mounts the controller on the current document and installs listeners.
    ///
    /// # Errors
    /// Fails when there is no document or a browser API refuses a listener.
    pub fn start() -> Result<Rc<Self>, WebError> {
        let window = web_sys::window().ok_or_else(|| WebError::Unavailable {
            message: "no global window".into(),
            context: None,
        })?;
        let document = window.document().ok_or_else(|| WebError::Unavailable {
            message: "window has no document".into(),
            context: None,
        })?;
        let page = WebPage::new(window, document);

        let config = read_config(&page);
        let motion = config.motion.clone();
        let controller = Controller::mount(&page, config);

        let app = Rc::new(Self {
            page,
            controller: RefCell::new(controller),
            observers: RefCell::new(FxHashMap::default()),
            motion,
        });

        app.flush().context("installing observers requested on mount")?;
        app.listen().context("installing document listeners")?;
        let _ = app.dispatch(UiEvent::Scroll);

        Ok(app)
    }

    pub fn bound(&self) -> Behaviors {
        self.controller.borrow().bound()
    }

    /// Hands `event` to the controller, then installs whatever it scheduled.
    fn dispatch(self: &Rc<Self>, event: UiEvent<Element>) -> Dispatch {
        let dispatch = match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.handle(&self.page, event),
            Err(_) => {
                warn!(?event, "Re-entrant event dropped");
                Dispatch::NONE
            },
        };

        if let Err(e) = self.flush() {
            error!(%e, "Failed to schedule follow-up work");
        }
        dispatch
    }

    fn flush(self: &Rc<Self>) -> Result<(), WebError> {
        for request in self.page.take_requests() {
            match request {
                Request::Observe(kind, node) => self.observer(kind)?.observe(&node),
                Request::Unobserve(kind, node) => {
                    if let Some(observer) = self.observers.borrow().get(&kind) {
                        observer.unobserve(&node);
                    }
                },
                Request::Frame => {
                    let app = Rc::clone(self);
                    let callback = Closure::once_into_js(move |now: f64| {
                        let _ = app.dispatch(UiEvent::Frame { now });
                    });
                    self.page
                        .window()
                        .request_animation_frame(callback.unchecked_ref())
                        .context("requestAnimationFrame")?;
                },
                Request::Timeout(delay, timer) => {
                    let app = Rc::clone(self);
                    let callback = Closure::once_into_js(move || {
                        let _ = app.dispatch(UiEvent::Timer(timer));
                    });
                    self.page
                        .window()
                        .set_timeout_with_callback_and_timeout_and_arguments_0(
                            callback.unchecked_ref(),
                            timeout_millis(delay),
                        )
                        .context("setTimeout")?;
                },
            }
        }
        Ok(())
    }

    /// One `IntersectionObserver` per animator, created on first use.
    fn observer(self: &Rc<Self>, kind: Observer) -> Result<IntersectionObserver, WebError> {
        if let Some(existing) = self.observers.borrow().get(&kind) {
            return Ok(existing.clone());
        }

        let app = Rc::clone(self);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let _ = app.dispatch(UiEvent::Intersection {
                        observer: kind,
                        target: entry.target(),
                        intersecting: entry.is_intersecting(),
                    });
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(kind.threshold(&self.motion)));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .context(format!("creating the {kind:?} observer"))?;
        callback.forget();

        debug!(?kind, "Intersection observer created");
        self.observers.borrow_mut().insert(kind, observer.clone());
        Ok(observer)
    }

    fn listen(self: &Rc<Self>) -> Result<(), WebError> {
        let document = self.page.document();

        let app = Rc::clone(self);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(target) = event_element(&event) {
                apply(&event, app.dispatch(UiEvent::Click { target }));
            }
        });
        document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        let app = Rc::clone(self);
        let on_key = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
                let key = Key::from(keyboard.key().as_str());
                if key != Key::Other {
                    let shift = keyboard.shift_key();
                    apply(&event, app.dispatch(UiEvent::KeyDown { key, shift }));
                }
            }
        });
        document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();

        let app = Rc::clone(self);
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(form) = event_element(&event) {
                apply(&event, app.dispatch(UiEvent::Submit { form }));
            }
        });
        document.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();

        let app = Rc::clone(self);
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            let _ = app.dispatch(UiEvent::Scroll);
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.page.window().add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )?;
        on_scroll.forget();

        info!("Document listeners installed");
        Ok(())
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_into::<Element>().ok())
}

fn apply(event: &Event, dispatch: Dispatch) {
    if dispatch.prevent_default {
        event.prevent_default();
    }
    if dispatch.stop_propagation {
        event.stop_propagation();
    }
}

/// Reads the inline JSON configuration, falling back to defaults.
fn read_config(page: &WebPage) -> SiteConfig {
    let selector = vitrine_domain::constants::CONFIG_SCRIPT;
    let raw = page.query(selector).and_then(|script| script.text_content());

    load_config(raw.as_deref()).unwrap_or_else(|e| {
        warn!(%e, "Ignoring unreadable page configuration");
        SiteConfig::default()
    })
}
