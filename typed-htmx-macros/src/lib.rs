//! Procedural macros for typed-htmx
//!
//! Provides [`html!`], a tagged-template style macro: string literals are
//! the template's literal fragments and `{expr}` blocks are its
//! interpolations.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{braced, parse_macro_input, token, Expr, LitStr, Token};

/// Render a template
///
/// ```rust,ignore
/// let html = html!(config; "<div " {..attrs} " hx-vals=" {json!({"id": 1})} ">" {label} "</div>")?;
/// ```
///
/// - `"..."` literal markup; adjacent literals are concatenated
/// - `{expr}` an interpolation, converted with `Interpolation::from`
/// - `{..expr}` an attribute spread, converted into `Attributes`
///
/// Expands to `Template::new([...]).render(&[...], &config)`, so the result
/// is a `Result<Html, RenderError>`.
#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
    let template = parse_macro_input!(input as HtmlTemplate);
    template.expand().into()
}

/// Parsed macro input
struct HtmlTemplate {
    config: Expr,
    literals: Vec<String>,
    values: Vec<Slot>,
}

/// One `{...}` block
enum Slot {
    Value(Expr),
    Spread(Expr),
}

impl Parse for HtmlTemplate {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let config: Expr = input.parse()?;
        input.parse::<Token![;]>()?;

        let mut literals = Vec::new();
        let mut values = Vec::new();
        let mut current = String::new();

        while !input.is_empty() {
            if input.peek(LitStr) {
                let lit: LitStr = input.parse()?;
                current.push_str(&lit.value());
            } else if input.peek(token::Brace) {
                let content;
                braced!(content in input);
                let slot = if content.peek(Token![..]) {
                    content.parse::<Token![..]>()?;
                    Slot::Spread(content.parse()?)
                } else {
                    Slot::Value(content.parse()?)
                };
                if !content.is_empty() {
                    return Err(content.error("expected a single expression"));
                }
                literals.push(std::mem::take(&mut current));
                values.push(slot);
            } else {
                return Err(input.error("expected a string literal or a `{...}` interpolation"));
            }
        }
        literals.push(current);

        Ok(Self {
            config,
            literals,
            values,
        })
    }
}

impl HtmlTemplate {
    fn expand(&self) -> TokenStream2 {
        let config = &self.config;
        let literals = &self.literals;
        let values = self.values.iter().map(|slot| match slot {
            Slot::Value(expr) => quote! {
                ::typed_htmx::value::Interpolation::from(#expr)
            },
            Slot::Spread(expr) => quote! {
                ::typed_htmx::value::Interpolation::Spread(::core::convert::Into::into(#expr))
            },
        });

        quote! {
            ::typed_htmx::template::Template::new([#(#literals),*])
                .render(&[#(#values),*], &(#config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alternation() {
        let template: HtmlTemplate =
            syn::parse_str(r#"config; "<div " {..attrs} " data-x=" {1} "/>""#).unwrap();
        assert_eq!(template.literals, vec!["<div ", " data-x=", "/>"]);
        assert_eq!(template.values.len(), 2);
        assert!(matches!(template.values[0], Slot::Spread(_)));
        assert!(matches!(template.values[1], Slot::Value(_)));
    }

    #[test]
    fn test_parse_leading_and_trailing_interpolation() {
        let template: HtmlTemplate = syn::parse_str(r#"cfg; {a} "x" "y" {b}"#).unwrap();
        assert_eq!(template.literals, vec!["", "xy", ""]);
        assert_eq!(template.values.len(), 2);
    }

    #[test]
    fn test_rejects_bare_tokens() {
        assert!(syn::parse_str::<HtmlTemplate>(r#"cfg; "<p>" name "</p>""#).is_err());
        assert!(syn::parse_str::<HtmlTemplate>(r#"cfg; {a b}"#).is_err());
    }

    #[test]
    fn test_expand_paths() {
        let template: HtmlTemplate = syn::parse_str(r#"cfg; "<p>" {x} "</p>""#).unwrap();
        let expanded = template.expand().to_string();
        assert!(expanded.contains("Template :: new"));
        assert!(expanded.contains("Interpolation :: from"));
    }
}
