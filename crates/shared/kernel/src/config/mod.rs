use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::info;
use vitrine_domain::config::{SiteConfig, SiteConfigInner};

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Adds a human readable context to config failures.
pub trait ConfigErrorExt<T> {
    /// # Errors
    /// Returns the original error wrapped in [`ConfigError`] with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// Parses an inline JSON document into any configuration structure.
///
/// The document usually comes from a `<script type="application/json">` block
/// embedded in the page, so there is no file system or environment layer.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the document is not valid JSON or does not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use vitrine_kernel::config::load_json;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Tunables {
///     offset: u16,
/// }
///
/// let cfg: Tunables = load_json(r#"{ "offset": 12 }"#).unwrap_or_default();
/// assert_eq!(cfg.offset, 12);
/// ```
pub fn load_json<T>(raw: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let config = Config::builder()
        .add_source(File::from_str(raw, FileFormat::Json))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the site configuration.
///
/// `None` (no inline document on the page) yields the defaults. Every section
/// is optional, so a document only needs to mention what it overrides.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the document cannot be parsed.
pub fn load_config(raw: Option<&str>) -> Result<SiteConfig, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        info!("No inline site config, using defaults");
        return Ok(SiteConfig::default());
    };

    info!(bytes = raw.len(), "Loading inline site config");
    load_json::<SiteConfigInner>(raw).map(SiteConfig::from)
}
