//! JSX-style element runtime
//!
//! Element creation calls take a tag and a props mapping with a `children`
//! member, and produce [`Html`]. Attributes follow the same rules as the
//! templator; children pass through the sanitization gate unless they are
//! already [`Html`], so nested elements are never escaped twice.
//!
//! # Examples
//!
//! ```rust
//! use typed_htmx::config::RenderConfig;
//! use typed_htmx::jsx::{jsx, jsxs, Props};
//! use typed_htmx::value::Value;
//!
//! let config = RenderConfig::default();
//! let label = jsx("span", Props::new().child("Save"), &config)?;
//! let button = jsxs(
//!     "button",
//!     Props::new()
//!         .attr("hx-post", "/save")
//!         .children([Value::from(label), Value::from("!")]),
//!     &config,
//! )?;
//! assert_eq!(button, r#"<button hx-post="/save"><span>Save</span>!</button>"#);
//! # Ok::<(), typed_htmx::error::RenderError>(())
//! ```

use std::fmt;
use std::panic::Location;

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::sanitize::sanitize;
use crate::template::{render_attributes, Html};
use crate::value::{Attributes, Value};

/// Function component
///
/// Receives its props with children already rendered to [`Html`].
pub type Component = fn(Props, &RenderConfig) -> RenderResult<Html>;

/// Element tag
#[derive(Debug, Clone, Copy)]
pub enum Tag<'a> {
    /// Built-in element such as `div`
    Intrinsic(&'a str),
    /// Children without a wrapping element
    Fragment,
    /// Function component
    Component {
        /// Name used in diagnostics
        name: &'a str,
        /// Render function
        render: Component,
    },
}

impl<'a> From<&'a str> for Tag<'a> {
    fn from(name: &'a str) -> Self {
        Self::Intrinsic(name)
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intrinsic(name) | Self::Component { name, .. } => f.write_str(name),
            Self::Fragment => f.write_str("Fragment"),
        }
    }
}

/// The `children` member of [`Props`]
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Children {
    /// No children
    #[default]
    None,
    /// A single child
    One(Value),
    /// A sequence of children
    Many(Vec<Value>),
}

impl Children {
    /// Whether the children form a sequence
    #[must_use]
    pub const fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Flatten into a list
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Self::None => Vec::new(),
            Self::One(child) => vec![child],
            Self::Many(children) => children,
        }
    }
}

/// Element props: attributes plus children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    /// Attributes in insertion order
    pub attributes: Attributes,
    /// Child values
    pub children: Children,
}

impl Props {
    /// Empty props
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Attributes::new(),
            children: Children::None,
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Add one child; a second call turns the children into a sequence
    #[must_use]
    pub fn child(mut self, child: impl Into<Value>) -> Self {
        let child = child.into();
        self.children = match self.children {
            Children::None => Children::One(child),
            Children::One(first) => Children::Many(vec![first, child]),
            Children::Many(mut children) => {
                children.push(child);
                Children::Many(children)
            }
        };
        self
    }

    /// Set the children as a sequence
    #[must_use]
    pub fn children<I, V>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.children = Children::Many(children.into_iter().map(Into::into).collect());
        self
    }
}

impl From<Attributes> for Props {
    fn from(attributes: Attributes) -> Self {
        Self {
            attributes,
            children: Children::None,
        }
    }
}

/// Call-site information attached to development-mode element calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    /// Source file
    pub file: &'a str,
    /// Line number
    pub line: u32,
    /// Column number
    pub column: u32,
}

impl Source<'static> {
    /// Location of the caller
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Create an element with a single child
///
/// # Errors
///
/// Returns an error if a JSON attribute cannot be encoded or a component
/// fails.
pub fn jsx<'a>(tag: impl Into<Tag<'a>>, props: Props, config: &RenderConfig) -> RenderResult<Html> {
    let Props {
        attributes,
        children,
    } = props;
    let children = match children {
        Children::One(child) => render_child(&child, config).into_iter().collect(),
        other => render_children(&other.into_vec(), config),
    };
    create_element(tag.into(), attributes, &children, config)
}

/// Create an element with a sequence of children
///
/// # Errors
///
/// Returns an error if a JSON attribute cannot be encoded or a component
/// fails.
pub fn jsxs<'a>(tag: impl Into<Tag<'a>>, props: Props, config: &RenderConfig) -> RenderResult<Html> {
    let Props {
        attributes,
        children,
    } = props;
    let children = render_children(&children.into_vec(), config);
    create_element(tag.into(), attributes, &children, config)
}

/// Development-mode element creation
///
/// Dispatches to [`jsxs`] for child sequences and [`jsx`] otherwise. A
/// failure is logged with the tag and call site before it is returned.
///
/// # Errors
///
/// Returns the error of the underlying [`jsx`] / [`jsxs`] call.
pub fn jsx_dev<'a>(
    tag: impl Into<Tag<'a>>,
    props: Props,
    source: Option<Source<'_>>,
    config: &RenderConfig,
) -> RenderResult<Html> {
    let tag = tag.into();
    let result = if props.children.is_many() {
        jsxs(tag, props, config)
    } else {
        jsx(tag, props, config)
    };

    result.inspect_err(|error| {
        tracing::error!(
            tag = %tag,
            error = %error,
            source = ?source,
            "Error encountered while rendering {tag}"
        );
    })
}

/// Create an element from already-rendered children
///
/// Intrinsic elements without content render self-closing
/// (`<div hx-get="/x" />`); elements with content render
/// `<tag attrs>content</tag>`. Fragments concatenate their children and
/// components are called with the children as [`Html`] values.
///
/// # Errors
///
/// Returns an error if a JSON attribute cannot be encoded or a component
/// fails.
pub fn create_element(
    tag: Tag<'_>,
    attributes: Attributes,
    children: &[Html],
    config: &RenderConfig,
) -> RenderResult<Html> {
    match tag {
        Tag::Fragment => Ok(fragment(children)),
        Tag::Component { render, .. } => {
            let props = Props {
                attributes,
                children: Children::Many(children.iter().cloned().map(Value::Html).collect()),
            };
            render(props, config)
        }
        Tag::Intrinsic(name) => {
            let attrs = render_attributes(&attributes, config)?;
            let content = fragment(children);

            let mut html = String::with_capacity(name.len() * 2 + attrs.len() + content.as_str().len() + 8);
            html.push('<');
            html.push_str(name);
            if !attrs.is_empty() {
                html.push(' ');
                html.push_str(&attrs);
            }
            if content.is_empty() {
                html.push_str(" />");
            } else {
                html.push('>');
                html.push_str(content.as_str());
                html.push_str("</");
                html.push_str(name);
                html.push('>');
            }
            Ok(Html::new(html))
        }
    }
}

/// Concatenate rendered children without a wrapping element
#[must_use]
pub fn fragment(children: &[Html]) -> Html {
    Html::new(children.iter().map(Html::as_str).collect::<String>())
}

fn render_child(child: &Value, config: &RenderConfig) -> Option<Html> {
    child
        .is_renderable()
        .then(|| Html::new(sanitize(child, config)))
}

fn render_children(children: &[Value], config: &RenderConfig) -> Vec<Html> {
    children
        .iter()
        .filter_map(|child| render_child(child, config))
        .collect()
}
