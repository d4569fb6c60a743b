//! Attribute serialization shared by the templator and the element runtime

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::sanitize::{sanitize, Sanitizer};
use crate::schema;
use crate::value::{Attributes, Value};

use super::escape::{escape_double_quoted, escape_single_quoted};

/// Render a single `name="value"` pair
///
/// Returns `None` when the value is not renderable (the empty string is
/// kept as `name=""`). JSON attributes holding a composite value are
/// serialized and single-quoted; everything else is sanitized and
/// double-quoted. [`Sanitizer::Escape`] is not run here since the quoting
/// escape already handles the same characters.
///
/// # Errors
///
/// Returns [`crate::error::RenderError::Json`] if JSON encoding fails.
pub fn render_attribute(
    name: &str,
    value: &Value,
    config: &RenderConfig,
) -> RenderResult<Option<String>> {
    if !value.is_renderable() && !value.is_empty_string() {
        return Ok(None);
    }

    schema::check(name, value);

    if config.is_json_attribute(name) {
        if let Value::Json(json) = value {
            if value.is_composite() {
                let encoded = serde_json::to_string(json)?;
                return Ok(Some(format!("{name}='{}'", escape_single_quoted(&encoded))));
            }
        }
    }

    // escape_double_quoted already covers the built-in escaper
    let text = if matches!(config.sanitizer, Sanitizer::Escape) {
        value.to_js_string()
    } else {
        sanitize(value, config)
    };
    Ok(Some(format!("{name}=\"{}\"", escape_double_quoted(&text))))
}

/// Render an attribute mapping as space-separated pairs
///
/// # Errors
///
/// Returns [`crate::error::RenderError::Json`] if JSON encoding fails.
pub fn render_attributes(attrs: &Attributes, config: &RenderConfig) -> RenderResult<String> {
    let mut pairs = Vec::with_capacity(attrs.len());
    for (name, value) in attrs.iter() {
        if let Some(pair) = render_attribute(name, value, config)? {
            pairs.push(pair);
        }
    }
    Ok(pairs.join(" "))
}
