//! Tagged-template rendering
//!
//! A [`Template`] holds literal fragments; rendering interleaves them with
//! interpolation values positionally:
//! `literal[0] + value[0] + literal[1] + ... + literal[n]`.
//!
//! Each interpolation is rendered by variant:
//!
//! - **Child**: sanitized string form, or nothing if not renderable
//! - **Children**: renderable elements sanitized and joined with a space
//! - **Spread / Attributes**: `name="value"` pairs, JSON attributes as
//!   `name='{...}'`
//!
//! Two context rules keep attribute output tidy:
//!
//! - a child directly after `name=` inside an open tag is rendered as that
//!   attribute (quoted, JSON-encoded or omitted as the attribute rules say)
//! - an attribute slot that renders nothing does not leave a double space
//!
//! # Examples
//!
//! ```rust
//! use typed_htmx::config::RenderConfig;
//! use typed_htmx::template::Template;
//! use typed_htmx::value::Interpolation;
//!
//! let config = RenderConfig::default();
//! let template = Template::new(["<div data-foo=", " />"]);
//! let html = template.render(&[Interpolation::from(123)], &config)?;
//! assert_eq!(html, r#"<div data-foo="123" />"#);
//! # Ok::<(), typed_htmx::error::RenderError>(())
//! ```

mod attributes;
pub mod escape;
mod html;

pub use attributes::{render_attribute, render_attributes};
pub use html::Html;

use std::borrow::Cow;

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::sanitize::sanitize;
use crate::value::{Interpolation, Value};

/// Literal fragments of a tagged template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    literals: Vec<Cow<'static, str>>,
}

impl Template {
    /// Create a template from its literal fragments
    pub fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            literals: literals.into_iter().map(Into::into).collect(),
        }
    }

    /// Literal fragments
    #[must_use]
    pub fn literals(&self) -> &[Cow<'static, str>] {
        &self.literals
    }

    /// Render with the given interpolation values
    ///
    /// A literal/value count mismatch is not an error: missing literals
    /// render as empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::RenderError::Json`] if a JSON attribute cannot
    /// be encoded.
    pub fn render(&self, values: &[Interpolation], config: &RenderConfig) -> RenderResult<Html> {
        render_parts(&self.literals, values, config)
    }
}

/// Render literal fragments and values without building a [`Template`]
///
/// ```rust
/// use typed_htmx::config::RenderConfig;
/// use typed_htmx::template::html;
///
/// let out = html(&["<p>", "</p>"], &["hi".into()], &RenderConfig::default())?;
/// assert_eq!(out, "<p>hi</p>");
/// # Ok::<(), typed_htmx::error::RenderError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::error::RenderError::Json`] if a JSON attribute cannot be
/// encoded.
pub fn html(
    literals: &[&str],
    values: &[Interpolation],
    config: &RenderConfig,
) -> RenderResult<Html> {
    render_parts(literals, values, config)
}

fn render_parts<S: AsRef<str>>(
    literals: &[S],
    values: &[Interpolation],
    config: &RenderConfig,
) -> RenderResult<Html> {
    tracing::trace!(
        literals = literals.len(),
        values = values.len(),
        "Rendering template"
    );

    let mut out = String::with_capacity(literals.iter().map(|l| l.as_ref().len()).sum());
    let mut literals = literals.iter().map(AsRef::<str>::as_ref);
    let mut values = values.iter();

    out.push_str(literals.next().unwrap_or_default());
    loop {
        let value = values.next();
        let next = literals.next();
        if value.is_none() && next.is_none() {
            break;
        }
        let next = next.unwrap_or_default();
        if let Some(value) = value {
            write_interpolation(&mut out, value, next, config)?;
        }
        out.push_str(next);
    }

    Ok(Html::new(out))
}

fn write_interpolation(
    out: &mut String,
    value: &Interpolation,
    next: &str,
    config: &RenderConfig,
) -> RenderResult<()> {
    match value {
        Interpolation::Child(child) => {
            if let Some(name) = pending_attribute_name(out).map(ToString::to_string) {
                out.truncate(out.len() - name.len() - 1);
                match render_attribute(&name, child, config)? {
                    Some(pair) => out.push_str(&pair),
                    None => collapse_whitespace(out, next),
                }
            } else if child.is_renderable() {
                out.push_str(&sanitize(child, config));
            }
        }
        Interpolation::Children(children) => {
            out.push_str(&render_children(children, config, " "));
        }
        Interpolation::Spread(attrs) | Interpolation::Attributes(attrs) => {
            let rendered = render_attributes(attrs, config)?;
            if rendered.is_empty() {
                collapse_whitespace(out, next);
            } else {
                out.push_str(&rendered);
            }
        }
    }
    Ok(())
}

/// Sanitize renderable children and join them
fn render_children(children: &[Value], config: &RenderConfig, separator: &str) -> String {
    children
        .iter()
        .filter(|child| child.is_renderable())
        .map(|child| sanitize(child, config))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Drop trailing whitespace when the next literal brings its own
fn collapse_whitespace(out: &mut String, next: &str) {
    if next.starts_with(char::is_whitespace) {
        let trimmed = out.trim_end().len();
        out.truncate(trimmed);
    }
}

/// Attribute name if the output ends with ` name=` inside an open tag
fn pending_attribute_name(out: &str) -> Option<&str> {
    let head = out.strip_suffix('=')?;
    let name_start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_attribute_name_char(*c))
        .last()
        .map(|(index, _)| index)?;

    let before = &head[..name_start];
    if !before.ends_with(char::is_whitespace) {
        return None;
    }

    if inside_open_tag(before) {
        Some(&head[name_start..])
    } else {
        None
    }
}

/// Whether `before` ends inside a tag, outside any quoted value
fn inside_open_tag(before: &str) -> bool {
    let Some(start) = before.rfind('<') else {
        return false;
    };

    let mut quote = None;
    for c in before[start..].chars() {
        match quote {
            Some(open) if c == open => quote = None,
            Some(_) => {}
            None if matches!(c, '"' | '\'') => quote = Some(c),
            None if c == '>' => return false,
            None => {}
        }
    }
    quote.is_none()
}

fn is_attribute_name_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Attributes;
    use serde_json::json;

    fn render(literals: &[&str], values: &[Interpolation]) -> String {
        html(literals, values, &RenderConfig::default())
            .unwrap()
            .into_string()
    }

    #[test]
    fn test_positional_concatenation() {
        let out = render(&["a", "b", "c"], &["1".into(), "2".into()]);
        assert_eq!(out, "a1b2c");
    }

    #[test]
    fn test_child_values() {
        assert_eq!(render(&["<p>", "</p>"], &[false.into()]), "<p></p>");
        assert_eq!(render(&["<p>", "</p>"], &[Value::Null.into()]), "<p></p>");
        assert_eq!(render(&["<p>", "</p>"], &[Value::Undefined.into()]), "<p></p>");
        assert_eq!(render(&["<p>", "</p>"], &[0.into()]), "<p>0</p>");
        assert_eq!(render(&["<p>", "</p>"], &[true.into()]), "<p>true</p>");
    }

    #[test]
    fn test_children_joined_with_space() {
        let out = render(
            &["<p>", "</p>"],
            &[Interpolation::Children(vec![
                Value::from("a"),
                Value::Bool(false),
                Value::from(0),
                Value::from("b"),
            ])],
        );
        assert_eq!(out, "<p>a 0 b</p>");
    }

    #[test]
    fn test_attribute_position_value() {
        assert_eq!(
            render(&["<div data-foo=", " />"], &[123.into()]),
            r#"<div data-foo="123" />"#
        );
        assert_eq!(
            render(&["<div hx-vals=", " />"], &[json!({"foo": "It's joever"}).into()]),
            r#"<div hx-vals='{"foo":"It&#39;s joever"}' />"#
        );
    }

    #[test]
    fn test_attribute_position_omitted() {
        assert_eq!(render(&["<div data-foo=", " />"], &[false.into()]), "<div />");
        assert_eq!(render(&["<div data-foo=", ">x</div>"], &[false.into()]), "<div >x</div>");
    }

    #[test]
    fn test_equals_outside_tag_is_text() {
        assert_eq!(render(&["<p>a =", "</p>"], &[1.into()]), "<p>a =1</p>");
        assert_eq!(render(&["<p>x=", "</p>"], &[1.into()]), "<p>x=1</p>");
        assert_eq!(
            render(&[r#"<a title="x y="#, r#"">"#], &[1.into()]),
            r#"<a title="x y=1">"#
        );
    }

    #[test]
    fn test_spread_false_collapses() {
        let spread = Interpolation::Spread(Attributes::new().with("foobar", false));
        assert_eq!(render(&["<div ", " />"], &[spread]), "<div />");
    }

    #[test]
    fn test_attribute_mapping() {
        let attrs = Attributes::new().with("foo", "bar").with("hx-swap", "outerHTML");
        assert_eq!(
            render(&["<div ", ">"], &[attrs.into()]),
            r#"<div foo="bar" hx-swap="outerHTML">"#
        );
    }

    #[test]
    fn test_mismatched_counts_degrade() {
        assert_eq!(render(&["<p>"], &["a".into(), "b".into()]), "<p>ab");
        assert_eq!(render(&["a", "b", "c"], &[]), "abc");
        assert_eq!(render(&[], &["x".into()]), "x");
        assert_eq!(render(&[], &[]), "");
    }

    #[test]
    fn test_pending_attribute_name() {
        assert_eq!(pending_attribute_name("<div data-foo="), Some("data-foo"));
        assert_eq!(pending_attribute_name("<div a=\"1\" hx-get="), Some("hx-get"));
        assert_eq!(pending_attribute_name("<div>a="), None);
        assert_eq!(pending_attribute_name("<div ="), None);
        assert_eq!(pending_attribute_name("no tag="), None);
        assert_eq!(pending_attribute_name("<a title=\"x y="), None);
        assert_eq!(pending_attribute_name("<a title='x y="), None);
    }

    #[test]
    fn test_attribute_position_after_mixed_quotes() {
        assert_eq!(
            render(&[r#"<div title="it's" data-foo="#, " />"], &[123.into()]),
            r#"<div title="it's" data-foo="123" />"#
        );
        assert_eq!(
            render(&[r#"<div title='say "hi"' data-foo="#, " />"], &[123.into()]),
            r#"<div title='say "hi"' data-foo="123" />"#
        );
        assert_eq!(
            render(&[r#"<div hx-trigger="a>b" data-foo="#, " />"], &[1.into()]),
            r#"<div hx-trigger="a>b" data-foo="1" />"#
        );
    }

    #[test]
    fn test_attribute_position_after_json_with_quotes() {
        let spread = Interpolation::Spread(Attributes::new().with("hx-vals", json!({"q": "a\"b"})));
        assert_eq!(
            render(&["<div ", " data-foo=", " />"], &[spread, 1.into()]),
            r#"<div hx-vals='{"q":"a\"b"}' data-foo="1" />"#
        );
    }
}
