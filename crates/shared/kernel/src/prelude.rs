//! Everything a host needs to drive the controller.

pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use crate::controller::Controller;
pub use crate::event::{Dispatch, Key, UiEvent};
pub use crate::page::{Observer, Page, Timer};
pub use vitrine_domain::behaviors::Behaviors;
pub use vitrine_domain::config::SiteConfig;
