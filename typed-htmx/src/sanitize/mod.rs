//! Sanitization gate
//!
//! Every interpolated child and every non-JSON attribute value passes
//! through [`sanitize`] before it reaches the output. What happens there is
//! decided by the [`RenderConfig`]:
//!
//! - trusted mode returns the verbatim string form;
//! - otherwise the configured [`Sanitizer`] runs, receiving the raw string
//!   and the `typeof` name of the original value;
//! - with the sanitizer disabled, the verbatim string form is used.
//!
//! [`Value::Html`] is already-rendered markup and always bypasses the gate.
//!
//! # Example
//!
//! ```rust
//! use typed_htmx::config::RenderConfig;
//! use typed_htmx::sanitize::{sanitize, Sanitizer};
//! use typed_htmx::value::Value;
//!
//! let config = RenderConfig::default().with_sanitizer(Sanitizer::Escape);
//! assert_eq!(sanitize(&Value::from("<b>"), &config), "&lt;b&gt;");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::template::escape::escape_text;
use crate::value::Value;

/// Signature of a custom sanitizer: `(raw, original_type) -> sanitized`
pub type SanitizeFn = dyn Fn(&str, &str) -> String + Send + Sync;

/// Sanitizer applied to untrusted values
#[derive(Clone, Default)]
pub enum Sanitizer {
    /// No sanitization; values are emitted verbatim
    #[default]
    Disabled,
    /// Escape `&`, `<` and `>`
    Escape,
    /// User-supplied function
    Custom(Arc<SanitizeFn>),
}

impl Sanitizer {
    /// Wrap a custom sanitizer function
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Whether a sanitizer is configured
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Run the sanitizer on a raw string
    #[must_use]
    pub fn apply(&self, raw: &str, original_type: &str) -> String {
        match self {
            Self::Disabled => raw.to_string(),
            Self::Escape => escape_text(raw),
            Self::Custom(f) => f(raw, original_type),
        }
    }
}

impl fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("Disabled"),
            Self::Escape => f.write_str("Escape"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Sanitizer choice that can be loaded from configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizerKind {
    /// No sanitization
    #[default]
    Disabled,
    /// Built-in HTML escaping
    Escape,
}

impl From<SanitizerKind> for Sanitizer {
    fn from(kind: SanitizerKind) -> Self {
        match kind {
            SanitizerKind::Disabled => Self::Disabled,
            SanitizerKind::Escape => Self::Escape,
        }
    }
}

/// Pass a value through the sanitization gate
#[must_use]
pub fn sanitize(value: &Value, config: &RenderConfig) -> String {
    if let Value::Html(html) = value {
        return html.as_str().to_string();
    }

    let raw = value.to_js_string();
    if config.trusted {
        return raw;
    }
    config.sanitizer.apply(&raw, value.type_name())
}
