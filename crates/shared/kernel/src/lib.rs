//! Headless interaction controller for the marketing site.
//!
//! The crate knows nothing about browsers. A host implements [`page::Page`],
//! translates browser events into [`event::UiEvent`] and applies the returned
//! [`event::Dispatch`]. That keeps every behavior testable on the host machine.
//!
//! ## Wiring
//! ```rust,ignore
//! use vitrine_kernel::prelude::*;
//!
//! let config = load_config(inline_json.as_deref())?;
//! let mut controller = Controller::mount(&page, config);
//! let dispatch = controller.handle(&page, UiEvent::KeyDown { key: Key::Escape, shift: false });
//! ```

pub mod accordion;
pub mod config;
pub mod controller;
pub mod event;
pub mod focus;
pub mod form;
pub mod header;
pub mod language;
pub mod motion;
pub mod overlay;
pub mod page;
pub mod prelude;
pub mod scroll_lock;
pub mod toast;

pub use vitrine_domain as domain;
