//! Integration tests for the templator
//!
//! Covers child rendering, attribute serialization, sanitization and the
//! `html!` macro.

use proptest::prelude::*;
use typed_htmx::prelude::*;

fn render(literals: &[&str], values: &[Interpolation], config: &RenderConfig) -> String {
    typed_htmx::template::html(literals, values, config)
        .unwrap()
        .into_string()
}

#[test]
fn test_attribute_position_number() {
    let config = RenderConfig::default();
    let html = html!(config; "<div data-foo=" {123} " />").unwrap();
    assert_eq!(html, r#"<div data-foo="123" />"#);
}

#[test]
fn test_json_attribute_single_quoted() {
    let config = RenderConfig::default();
    let html = html!(config; "<div " {Attributes::new().with("hx-vals", json!({"foo": "It's joever"}))} " />")
        .unwrap();
    assert_eq!(html, r#"<div hx-vals='{"foo":"It&#39;s joever"}' />"#);
}

#[test]
fn test_spread_of_false_attribute_is_omitted() {
    let config = RenderConfig::default();
    let spread = attrs! { "foobar" => false };
    let html = html!(config; "<div " {..spread} " />").unwrap();
    assert_eq!(html, "<div />");
}

#[test]
fn test_falsy_attribute_and_spread_together() {
    let config = RenderConfig::default();
    let spread = attrs! { "foobar" => false };
    let html = html!(config; "<div data-foo=" {false} " " {..spread} " />").unwrap();
    assert_eq!(html, "<div />");
}

#[test]
fn test_plain_attribute_mapping() {
    let config = RenderConfig::default();
    let out = render(&["<a ", ">"], &[attrs! { "foo" => "bar" }.into()], &config);
    assert_eq!(out, r#"<a foo="bar">"#);
}

#[test]
fn test_spread_from_json_object() {
    let config = RenderConfig::default();
    let serde_json::Value::Object(map) = json!({"hx-get": "/items", "hx-headers": {"X-Id": 7}}) else {
        unreachable!()
    };
    let html = html!(config; "<button " {..map} ">Load</button>").unwrap();
    assert_eq!(
        html,
        r#"<button hx-get="/items" hx-headers='{"X-Id":7}'>Load</button>"#
    );
}

#[test]
fn test_falsy_children_render_empty() {
    let config = RenderConfig::default();
    assert_eq!(html!(config; "<p>" {false} "</p>").unwrap(), "<p></p>");
    assert_eq!(html!(config; "<p>" {Value::Null} "</p>").unwrap(), "<p></p>");
    assert_eq!(html!(config; "<p>" {None::<String>} "</p>").unwrap(), "<p></p>");
    assert_eq!(html!(config; "<p>" {0} "</p>").unwrap(), "<p>0</p>");
}

#[test]
fn test_child_sequence() {
    let config = RenderConfig::default();
    let html = html!(config; "<p>" {vec!["one", "", "two"]} "</p>").unwrap();
    assert_eq!(html, "<p>one two</p>");
}

#[test]
fn test_escape_sanitizer_on_children() {
    let config = RenderConfig::default().with_sanitizer(Sanitizer::Escape);
    let html = html!(config; "<p>" {"<script>alert(1)</script>"} "</p>").unwrap();
    assert_eq!(html, "<p>&lt;script&gt;alert(1)&lt;/script&gt;</p>");
}

#[test]
fn test_trusted_mode_skips_sanitizer() {
    let config = RenderConfig::default()
        .with_sanitizer(Sanitizer::Escape)
        .trusted(true);
    let html = html!(config; "<p>" {"<em>raw</em>"} "</p>").unwrap();
    assert_eq!(html, "<p><em>raw</em></p>");
}

#[test]
fn test_nested_templates_not_sanitized_twice() {
    let config = RenderConfig::default().with_sanitizer(Sanitizer::Escape);
    let inner = html!(config; "<b>" {"&"} "</b>").unwrap();
    let outer = html!(config; "<p>" {inner} "</p>").unwrap();
    assert_eq!(outer, "<p><b>&amp;</b></p>");
}

#[test]
fn test_custom_json_attribute() {
    let config = RenderConfig::default().with_json_attribute("x-data");
    let html = html!(config; "<div x-data=" {json!({"open": false})} "></div>").unwrap();
    assert_eq!(html, r#"<div x-data='{"open":false}'></div>"#);
}

#[test]
fn test_template_reuse() {
    let config = RenderConfig::default();
    let template = Template::new(["<li>", "</li>"]);
    let items: Vec<String> = ["a", "b"]
        .iter()
        .map(|item| {
            template
                .render(&[Interpolation::from(*item)], &config)
                .unwrap()
                .into_string()
        })
        .collect();
    assert_eq!(items, vec!["<li>a</li>", "<li>b</li>"]);
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z0-9 <>&'\"]{0,16}".prop_map(Value::from),
        Just(Value::Null),
        Just(Value::Undefined),
    ]
}

proptest! {
    #[test]
    fn prop_renderable_scalar_appears_verbatim(s in "[a-zA-Z0-9 ]{1,24}") {
        let config = RenderConfig::default();
        let out = render(&["<p>", "</p>"], &[Interpolation::from(s.as_str())], &config);
        prop_assert_eq!(out, format!("<p>{s}</p>"));
    }

    #[test]
    fn prop_integers_render_as_decimal(n in any::<i32>()) {
        let config = RenderConfig::default();
        let out = render(&["", ""], &[Interpolation::from(n)], &config);
        prop_assert_eq!(out, n.to_string());
    }

    #[test]
    fn prop_sanitizer_output_is_used(s in "[a-z<>&]{1,24}") {
        let config = RenderConfig::default().with_sanitizer(Sanitizer::Escape);
        let out = render(&["<p>", "</p>"], &[Interpolation::from(s.as_str())], &config);
        let expected = format!(
            "<p>{}</p>",
            s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
        );
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn prop_rendering_is_idempotent(values in prop::collection::vec(scalar(), 0..6)) {
        let config = RenderConfig::default();
        let literals = vec!["<div ", " data-x=", ">", " ", "</div>", "", ""];
        let literals = &literals[..=values.len()];
        let slots: Vec<Interpolation> = values.into_iter().map(Interpolation::from).collect();
        let first = render(literals, &slots, &config);
        let second = render(literals, &slots, &config);
        prop_assert_eq!(first, second);
    }
}
