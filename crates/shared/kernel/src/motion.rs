//! Fire-once viewport animations: reveal, count-up counters and progress bars.

use crate::page::{Observer, Page};
use tracing::{debug, trace};
use vitrine_domain::config::{MotionConfig, SiteConfig};
use vitrine_domain::constants::{BAR_WIDTH_PROPERTY, DATA_BAR, DATA_COUNTER, DATA_SUFFIX};

impl Observer {
    /// Visible fraction an element needs before its animation fires.
    #[must_use]
    pub const fn threshold(self, motion: &MotionConfig) -> f64 {
        match self {
            Self::Reveal => motion.reveal_threshold,
            Self::Counter => motion.counter_threshold,
            Self::Bar => motion.bar_threshold,
        }
    }
}

/// Cubic ease-out.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Value shown by a counter at `progress` (clamped to `[0, 1]`).
#[must_use]
pub fn counter_value(target: f64, progress: f64) -> f64 {
    (target * ease_out_cubic(progress.clamp(0.0, 1.0))).floor()
}

/// Renders a floored counter value without a fractional part, at any magnitude.
#[must_use]
pub fn render_counter(value: f64, suffix: &str) -> String {
    // `+ 0.0` turns -0 into 0
    format!("{:.0}{suffix}", value + 0.0)
}

/// Marks every reveal target visible, immediately when reduced motion is
/// requested, otherwise as each one scrolls into view.
pub fn bind_reveal<P: Page>(page: &P, config: &SiteConfig) -> usize {
    let items = page.query_all(&config.selectors.reveal);
    if page.matches_media(&config.motion.reduced_motion_query) {
        for item in &items {
            page.add_class(item, &config.classes.visible);
        }
        debug!(items = items.len(), "Reduced motion requested, reveal targets shown");
    } else {
        for item in &items {
            page.observe(Observer::Reveal, item);
        }
    }
    items.len()
}

/// Starts observing every element matching `selector` with `observer`.
pub fn observe_all<P: Page>(page: &P, observer: Observer, selector: &str) -> usize {
    let items = page.query_all(selector);
    for item in &items {
        page.observe(observer, item);
    }
    items.len()
}

/// Sets a bar's width property from its `data-bar` percentage.
pub fn fill_bar<P: Page>(page: &P, bar: &P::Node) {
    if let Some(value) = page.attribute(bar, DATA_BAR) {
        page.set_style_property(bar, BAR_WIDTH_PROPERTY, &format!("{}%", value.trim()));
    }
}

#[derive(Debug, Clone)]
struct CounterRun<N> {
    node: N,
    target: f64,
    suffix: String,
    started: f64,
}

/// Running count-up animations, driven by one shared frame loop.
#[derive(Debug, Clone)]
pub struct Counters<N> {
    runs: Vec<CounterRun<N>>,
    duration_ms: f64,
}

impl<N: Clone + PartialEq> Counters<N> {
    #[must_use]
    pub fn new(duration_ms: u32) -> Self {
        Self { runs: Vec::new(), duration_ms: f64::from(duration_ms.max(1)) }
    }

    #[must_use]
    pub fn running(&self) -> usize {
        self.runs.len()
    }

    /// Starts counting `node` up from zero to its `data-counter` value.
    pub fn start<P: Page<Node = N>>(&mut self, page: &P, node: N) {
        let Some(target) =
            page.attribute(&node, DATA_COUNTER).and_then(|raw| raw.trim().parse::<f64>().ok())
        else {
            debug!("Counter target is not a number, leaving element untouched");
            return;
        };
        if !target.is_finite() {
            return;
        }

        let suffix = page.attribute(&node, DATA_SUFFIX).unwrap_or_default();
        let idle = self.runs.is_empty();
        self.runs.push(CounterRun { node, target, suffix, started: page.now() });
        if idle {
            page.request_frame();
        }
    }

    /// Renders every run at `now` and drops the finished ones. Keeps the frame
    /// loop alive while anything is still running.
    pub fn on_frame<P: Page<Node = N>>(&mut self, page: &P, now: f64) {
        let duration = self.duration_ms;
        self.runs.retain(|run| {
            let progress = ((now - run.started) / duration).clamp(0.0, 1.0);
            let value = counter_value(run.target, progress);
            page.set_text(&run.node, &render_counter(value, &run.suffix));
            progress < 1.0
        });

        trace!(running = self.runs.len(), "Counter frame");
        if !self.runs.is_empty() {
            page.request_frame();
        }
    }
}
