use crate::constants::{
    BAR_BEHAVIOR, COUNTER_BEHAVIOR, DRAWER_BEHAVIOR, FAQ_BEHAVIOR, HEADER_BEHAVIOR,
    LANGUAGE_BEHAVIOR, LEAD_FORM_BEHAVIOR, MODAL_BEHAVIOR, REVEAL_BEHAVIOR,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// The independent behaviors the controller can bind to a page.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Behaviors: u32 {
        const HEADER = 1 << 0;
        const LANGUAGE = 1 << 1;
        const DRAWER = 1 << 2;
        const MODAL = 1 << 3;
        const REVEAL = 1 << 4;
        const COUNTERS = 1 << 5;
        const BARS = 1 << 6;
        const FAQ = 1 << 7;
        const LEAD_FORMS = 1 << 8;

        const OVERLAYS = Self::DRAWER.bits() | Self::MODAL.bits();
        const MOTION = Self::REVEAL.bits() | Self::COUNTERS.bits() | Self::BARS.bits();
        const ALL = Self::HEADER.bits()
            | Self::LANGUAGE.bits()
            | Self::OVERLAYS.bits()
            | Self::MOTION.bits()
            | Self::FAQ.bits()
            | Self::LEAD_FORMS.bits();
    }
}

const NAMED: &[(&str, Behaviors)] = &[
    (HEADER_BEHAVIOR, Behaviors::HEADER),
    (LANGUAGE_BEHAVIOR, Behaviors::LANGUAGE),
    (DRAWER_BEHAVIOR, Behaviors::DRAWER),
    (MODAL_BEHAVIOR, Behaviors::MODAL),
    (REVEAL_BEHAVIOR, Behaviors::REVEAL),
    (COUNTER_BEHAVIOR, Behaviors::COUNTERS),
    (BAR_BEHAVIOR, Behaviors::BARS),
    (FAQ_BEHAVIOR, Behaviors::FAQ),
    (LEAD_FORM_BEHAVIOR, Behaviors::LEAD_FORMS),
];

impl Default for Behaviors {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for Behaviors {
    fn from(s: &str) -> Self {
        match s.trim() {
            "all" | "*" => Self::ALL,
            "overlays" => Self::OVERLAYS,
            "motion" => Self::MOTION,
            name => NAMED
                .iter()
                .find_map(|(n, flag)| (*n == name).then_some(*flag))
                .unwrap_or_else(Self::empty),
        }
    }
}

impl Behaviors {
    /// Stable names of every single behavior contained in `self`.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        NAMED.iter().filter(|(_, flag)| self.contains(*flag)).map(|(name, _)| *name).collect()
    }
}

impl Serialize for Behaviors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Behaviors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(names.iter().fold(Self::empty(), |acc, name| acc | Self::from(name.as_str())))
    }
}
