//! # Logger
//!
//! Sets up the global tracing subscriber for the page controller and its tools.
//! Events are filtered through an [`EnvFilter`] and formatted either to the
//! terminal (native builds, tests, `xtask`) or to the browser devtools console
//! (the `wasm32` bundle), where each level lands on the matching `console.*`
//! method.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"vitrine_kernel=debug"`), in addition to `RUST_LOG` on native targets.
//!
//! ## Example
//!
//! ```rust
//! # use vitrine_logger::{Logger, LevelFilter, Output};
//!
//! let _logger = Logger::builder()
//!     .name("my-page")
//!     .output(Output::Terminal)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod console;
mod error;

pub use crate::console::{BrowserConsole, ConsoleWriter};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Where formatted events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Compact, colored lines on stdout.
    Terminal,
    /// `console.error` / `warn` / `info` / `debug` in the browser, no timestamps.
    BrowserConsole,
}

impl Default for Output {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") { Self::BrowserConsole } else { Self::Terminal }
    }
}

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    output: Output,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, output: Output::default() }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `vitrine_kernel=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables the output layer.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Picks the output sink. Defaults to [`Output::BrowserConsole`] on `wasm32`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn output(mut self, output: Output) -> Self {
        self.config.output = output;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        match self.config.output {
            Output::Terminal => layers.push(layer().compact().with_ansi(true).boxed()),
            Output::BrowserConsole => layers.push(
                layer()
                    .without_time()
                    .with_ansi(false)
                    .with_level(false)
                    .with_writer(BrowserConsole)
                    .boxed(),
            ),
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(logger = %self.name.0, output = ?self.config.output, "Logger initialized");

        Ok(Logger { name: self.name.0, output: self.config.output })
    }
}

/// A handle to the initialized logging system.
#[derive(Debug)]
pub struct Logger {
    name: String,
    output: Output,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vitrine_logger::{LevelFilter, Logger, Output};
    ///
    /// let logger = Logger::builder()
    ///     .name("my-page")
    ///     .output(Output::Terminal)
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// assert_eq!(logger.name(), "my-page");
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn output(&self) -> Output {
        self.output
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if !config.console {
        return Err(LoggerError::InvalidConfiguration {
            message: "No logging layers enabled. Enable console output.".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let logger_builder = Logger::builder().name("test-page").env_filter("vitrine=debug");
        assert!(logger_builder.config.console);
        assert_eq!(logger_builder.config.level, LevelFilter::INFO);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("vitrine=debug"));
        assert_eq!(logger_builder.config.output, Output::Terminal);
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let logger_builder = Logger::builder()
            .name("test-page")
            .output(Output::BrowserConsole)
            .env_filter("vitrine_kernel=trace")
            .level(LevelFilter::WARN);

        assert_eq!(logger_builder.config.output, Output::BrowserConsole);
        assert_eq!(logger_builder.config.level, LevelFilter::WARN);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("vitrine_kernel=trace"));
    }

    #[test]
    #[serial]
    fn test_blank_name_is_rejected() {
        let err = Logger::builder().name("  ").init().expect_err("blank name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    #[serial]
    fn test_disabled_console_is_rejected() {
        let err = Logger::builder().name("quiet").console(false).init().expect_err("no layers");
        assert!(err.to_string().contains("No logging layers"));
    }

    #[test]
    #[serial]
    fn test_bad_env_filter_is_rejected_with_context() {
        let err = Logger::builder()
            .name("test-page")
            .env_filter("vitrine=[")
            .init()
            .map(|_| ())
            .context("bootstrapping")
            .expect_err("invalid directive");

        assert!(err.to_string().starts_with("Invalid logger configuration (bootstrapping)"));
    }
}
