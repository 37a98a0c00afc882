use std::borrow::Cow;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// A browser API threw while installing listeners, observers or timers.
    #[error("JavaScript error{}: {message}", format_context(context))]
    Js { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The page is not running in a document context (worker, SSR, tests).
    #[error("Browser API unavailable{}: {message}", format_context(context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error(transparent)]
    Logger(#[from] vitrine_logger::LoggerError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()))
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js { message: message.into(), context: None }
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        Self::from_str(&error.to_string())
    }
}

pub trait WebErrorExt<T> {
    /// # Errors
    /// Returns the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, WebError>;
}

impl<T, E: Into<WebError>> WebErrorExt<T> for Result<T, E> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, WebError> {
        self.map_err(|e| {
            let mut e = e.into();
            match &mut e {
                WebError::Js { context: c, .. } | WebError::Unavailable { context: c, .. } => {
                    *c = Some(context.into());
                },
                WebError::Logger(_) => {},
            }
            e
        })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
