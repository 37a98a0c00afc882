use crate::page::{Observer, Timer};

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Other,
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Tab" => Self::Tab,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// A browser event translated by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent<N> {
    Scroll,
    Click { target: N },
    KeyDown { key: Key, shift: bool },
    Submit { form: N },
    Intersection { observer: Observer, target: N, intersecting: bool },
    Frame { now: f64 },
    Timer(Timer),
}

/// What the host must do with the originating browser event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use]
pub struct Dispatch {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl Dispatch {
    pub const NONE: Self = Self { prevent_default: false, stop_propagation: false };

    pub const fn prevented() -> Self {
        Self { prevent_default: true, stop_propagation: false }
    }

    pub const fn stopped() -> Self {
        Self { prevent_default: false, stop_propagation: true }
    }

    pub const fn merge(self, other: Self) -> Self {
        Self {
            prevent_default: self.prevent_default || other.prevent_default,
            stop_propagation: self.stop_propagation || other.stop_propagation,
        }
    }
}
