//! Interpolation values
//!
//! [`Value`] models what a template slot or an attribute can hold: scalars,
//! trusted markup, and JSON composites. Its truthiness and string conversion
//! follow the conventions htmx markup is usually written against, so that
//! `false`, `null` and `undefined` vanish from the output while `0` stays.
//!
//! [`Interpolation`] is what a template slot receives: a single child, a
//! sequence of children, or a mapping of attributes.

mod attributes;

pub use attributes::Attributes;

use crate::template::Html;

/// A renderable value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Number
    Number(f64),
    /// Untrusted text
    String(String),
    /// Trusted markup, never sanitized
    Html(Html),
    /// Composite value (array or object)
    Json(serde_json::Value),
}

impl Value {
    /// Whether the value produces output
    ///
    /// `undefined`, `null`, `false`, `NaN` and the empty string do not.
    /// The numeral zero does.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Html(_) => true,
            Self::Json(json) => match json {
                serde_json::Value::Null => false,
                serde_json::Value::Bool(b) => *b,
                serde_json::Value::Number(_) => true,
                serde_json::Value::String(s) => !s.is_empty(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
            },
        }
    }

    /// Whether the value is the empty string
    #[must_use]
    pub fn is_empty_string(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Json(serde_json::Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether the value is an array or object
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Json(serde_json::Value::Array(_) | serde_json::Value::Object(_))
        )
    }

    /// The `typeof` name handed to sanitizers
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Bool(_) | Self::Json(serde_json::Value::Bool(_)) => "boolean",
            Self::Number(_) | Self::Json(serde_json::Value::Number(_)) => "number",
            Self::String(_) | Self::Json(serde_json::Value::String(_)) => "string",
            Self::Null | Self::Html(_) | Self::Json(_) => "object",
        }
    }

    /// String conversion
    ///
    /// Numbers print in their shortest round-trip form, switching to
    /// exponent notation at or above `1e21` and below `1e-6`. Arrays join
    /// their elements with commas and objects print as `[object Object]`.
    #[must_use]
    pub fn to_js_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::String(s) => s.clone(),
            Self::Html(html) => html.as_str().to_string(),
            Self::Json(json) => json_to_string(json),
        }
    }

    /// Borrow the string payload, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Json(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let name = if n.is_sign_positive() { "Infinity" } else { "-Infinity" };
        name.to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // exponent form carries an explicit sign: 1e+21, 1e-7
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

fn json_to_string(json: &serde_json::Value) -> String {
    match json {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), format_number),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::Null => String::new(),
                other => json_to_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        serde_json::Value::Object(_) => "[object Object]".to_string(),
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless, clippy::unnecessary_cast)]
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::String(c.to_string())
    }
}

impl From<Html> for Value {
    fn from(html: Html) -> Self {
        Self::Html(html)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            composite => Self::Json(composite),
        }
    }
}

/// A template slot
#[derive(Debug, Clone, PartialEq)]
pub enum Interpolation {
    /// A single child value
    Child(Value),
    /// A sequence of children, joined with a space
    ///
    /// Elements that are not renderable (`false`, `null`, `undefined`,
    /// `NaN`, `""`) are dropped before joining, so they leave no stray
    /// separator: `["a", false, "b"]` renders as `a b`.
    Children(Vec<Value>),
    /// Attributes spread into a tag (`{..attrs}`)
    Spread(Attributes),
    /// A plain attribute mapping
    Attributes(Attributes),
}

impl Interpolation {
    /// Whether this slot renders attributes rather than children
    #[must_use]
    pub const fn is_attributes(&self) -> bool {
        matches!(self, Self::Spread(_) | Self::Attributes(_))
    }
}

impl<T: Into<Value>> From<T> for Interpolation {
    fn from(value: T) -> Self {
        Self::Child(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Interpolation {
    fn from(values: Vec<T>) -> Self {
        Self::Children(values.into_iter().map(Into::into).collect())
    }
}

impl From<Attributes> for Interpolation {
    fn from(attrs: Attributes) -> Self {
        Self::Attributes(attrs)
    }
}
