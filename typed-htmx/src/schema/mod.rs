//! htmx attribute schema
//!
//! A lookup table from htmx attribute names (core attributes up to 1.9.x and
//! the attributes introduced by the bundled extensions) to the shape of
//! value each one expects. The renderer consults it to emit debug events
//! for suspicious attributes; rendering never fails on schema grounds.
//!
//! ```rust
//! use typed_htmx::schema::{lookup, AttributeShape};
//!
//! assert_eq!(lookup("hx-swap"), Some(AttributeShape::Swap));
//! assert_eq!(lookup("data-hx-vals"), Some(AttributeShape::Json));
//! assert_eq!(lookup("hx-on:click"), Some(AttributeShape::Text));
//! ```

use crate::value::Value;

/// Expected shape of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeShape {
    /// Request URL
    Url,
    /// `"true"` or `"false"`
    BoolStr,
    /// Swap strategy, e.g. `outerHTML` or `beforeend`
    Swap,
    /// Target selector or relative keyword (`this`, `closest form`)
    Target,
    /// Trigger specification
    Trigger,
    /// Object literal or JSON / `js:` string
    Json,
    /// CSS selector
    Selector,
    /// Presence-only flag
    Flag,
    /// Free text
    Text,
}

const SWAP_STRATEGIES: [&str; 11] = [
    "innerHTML",
    "outerHTML",
    "beforebegin",
    "afterbegin",
    "beforeend",
    "afterend",
    "delete",
    "none",
    "morph",
    "morphdom",
    "multi:",
];

impl AttributeShape {
    /// Whether a value fits this shape
    ///
    /// Non-renderable values are always accepted since they are omitted.
    #[must_use]
    pub fn accepts(self, value: &Value) -> bool {
        if !value.is_renderable() {
            return true;
        }
        match self {
            Self::Json => value.is_composite() || value.as_str().is_some(),
            Self::BoolStr => matches!(value, Value::Bool(_))
                || matches!(value.as_str(), Some("true" | "false")),
            Self::Flag => matches!(value, Value::Bool(true)) || value.as_str().is_some(),
            Self::Swap => match value {
                Value::Bool(true) => true,
                _ => value.as_str().is_some_and(|s| {
                    SWAP_STRATEGIES
                        .iter()
                        .any(|strategy| s == *strategy || s.starts_with(strategy))
                }),
            },
            Self::Url | Self::Target | Self::Trigger | Self::Selector | Self::Text => {
                !value.is_composite()
            }
        }
    }
}

const ATTRIBUTES: &[(&str, AttributeShape)] = &[
    ("hx-get", AttributeShape::Url),
    ("hx-post", AttributeShape::Url),
    ("hx-put", AttributeShape::Url),
    ("hx-delete", AttributeShape::Url),
    ("hx-patch", AttributeShape::Url),
    ("hx-boost", AttributeShape::BoolStr),
    ("hx-on", AttributeShape::Text),
    ("hx-push-url", AttributeShape::Text),
    ("hx-select", AttributeShape::Selector),
    ("hx-select-oob", AttributeShape::Selector),
    ("hx-swap", AttributeShape::Swap),
    ("hx-swap-oob", AttributeShape::Text),
    ("hx-target", AttributeShape::Target),
    ("hx-target-error", AttributeShape::Target),
    ("hx-trigger", AttributeShape::Trigger),
    ("hx-vals", AttributeShape::Json),
    ("hx-confirm", AttributeShape::Text),
    ("hx-disable", AttributeShape::Flag),
    ("hx-disabled-elt", AttributeShape::Target),
    ("hx-disinherit", AttributeShape::Text),
    ("hx-encoding", AttributeShape::Text),
    ("hx-ext", AttributeShape::Text),
    ("hx-headers", AttributeShape::Json),
    ("hx-history", AttributeShape::BoolStr),
    ("hx-history-elt", AttributeShape::Flag),
    ("hx-include", AttributeShape::Target),
    ("hx-indicator", AttributeShape::Target),
    ("hx-params", AttributeShape::Text),
    ("hx-preserve", AttributeShape::BoolStr),
    ("hx-prompt", AttributeShape::Text),
    ("hx-replace-url", AttributeShape::Text),
    ("hx-request", AttributeShape::Text),
    ("hx-sync", AttributeShape::Target),
    ("hx-validate", AttributeShape::BoolStr),
    ("hx-vars", AttributeShape::Text),
    ("hx-disable-element", AttributeShape::Target),
    ("hx-head", AttributeShape::Text),
    ("sse-connect", AttributeShape::Url),
    ("sse-swap", AttributeShape::Text),
    ("ws-connect", AttributeShape::Url),
    ("ws-send", AttributeShape::Flag),
    ("classes", AttributeShape::Text),
    ("mustache-template", AttributeShape::Selector),
    ("mustache-array-template", AttributeShape::Selector),
    ("handlebars-template", AttributeShape::Selector),
    ("handlebars-array-template", AttributeShape::Selector),
    ("nunjucks-template", AttributeShape::Selector),
    ("nunjucks-array-template", AttributeShape::Selector),
    ("xslt-template", AttributeShape::Selector),
    ("include-vals", AttributeShape::Text),
    ("data-loading", AttributeShape::Flag),
    ("data-loading-class", AttributeShape::Text),
    ("data-loading-disable", AttributeShape::Flag),
    ("data-loading-class-remove", AttributeShape::Text),
    ("data-loading-aria-busy", AttributeShape::Flag),
    ("data-loading-delay", AttributeShape::Text),
    ("data-loading-target", AttributeShape::Selector),
    ("data-loading-path", AttributeShape::Url),
    ("data-loading-states", AttributeShape::Flag),
    ("path-deps", AttributeShape::Url),
    ("preload", AttributeShape::Text),
    ("preload-images", AttributeShape::BoolStr),
    ("remove-me", AttributeShape::Text),
];

/// Attribute families matched by prefix (`hx-on:click`, `hx-target-404`)
const PREFIXES: &[(&str, AttributeShape)] = &[
    ("hx-on:", AttributeShape::Text),
    ("hx-on-", AttributeShape::Text),
    ("hx-target-", AttributeShape::Target),
];

/// Look up the expected shape of an attribute
///
/// `data-hx-*` resolves to the same entry as `hx-*`.
#[must_use]
pub fn lookup(name: &str) -> Option<AttributeShape> {
    if let Some(shape) = exact(name) {
        return Some(shape);
    }
    if let Some(unprefixed) = name.strip_prefix("data-") {
        if unprefixed.starts_with("hx-") {
            return lookup(unprefixed);
        }
    }
    PREFIXES
        .iter()
        .find(|(prefix, _)| name.len() > prefix.len() && name.starts_with(prefix))
        .map(|(_, shape)| *shape)
}

fn exact(name: &str) -> Option<AttributeShape> {
    ATTRIBUTES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, shape)| *shape)
}

/// Whether the attribute belongs to htmx's namespace
#[must_use]
pub fn is_htmx_attribute(name: &str) -> bool {
    name.starts_with("hx-") || name.starts_with("data-hx-")
}

/// Names of all JSON-shaped attributes, with and without the `data-` prefix
#[must_use]
pub fn json_attribute_names() -> Vec<String> {
    let names: Vec<&str> = ATTRIBUTES
        .iter()
        .filter(|(_, shape)| *shape == AttributeShape::Json)
        .map(|(name, _)| *name)
        .collect();

    names
        .iter()
        .map(ToString::to_string)
        .chain(names.iter().map(|name| format!("data-{name}")))
        .collect()
}

/// Emit a debug event when an htmx attribute looks wrong
pub(crate) fn check(name: &str, value: &Value) {
    if !is_htmx_attribute(name) {
        return;
    }
    match lookup(name) {
        None => tracing::debug!(attribute = name, "Unknown htmx attribute"),
        Some(shape) if !shape.accepts(value) => tracing::debug!(
            attribute = name,
            ?shape,
            value_type = value.type_name(),
            "Attribute value does not match expected shape"
        ),
        Some(_) => {}
    }
}
