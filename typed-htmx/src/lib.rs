//! typed-htmx: HTML string rendering for htmx markup
//!
//! Renders markup to strings through two entry points that share one set of
//! attribute and sanitization rules:
//!
//! - **Templates**: literal fragments interleaved with typed values, written
//!   with the [`html!`] macro or [`template::Template`]
//! - **Elements**: JSX-style `jsx` / `jsxs` calls with a tag and props
//!
//! Attributes listed as JSON attributes (`hx-vals`, `hx-headers` and their
//! `data-` forms by default) turn object values into single-quoted JSON.
//! Everything else is double-quoted and escaped. Children pass through the
//! configured sanitizer unless the configuration is trusted.
//!
//! # Quick Start
//!
//! ```rust
//! use typed_htmx::prelude::*;
//!
//! # fn main() -> Result<(), RenderError> {
//! let config = RenderConfig::default();
//!
//! let html = html!(config; "<div data-foo=" {123} " />")?;
//! assert_eq!(html, r#"<div data-foo="123" />"#);
//!
//! let form = jsx(
//!     "form",
//!     Props::new()
//!         .attr("hx-post", "/posts")
//!         .attr("hx-vals", json!({ "foo": "bar" })),
//!     &config,
//! )?;
//! assert_eq!(form, r#"<form hx-post="/posts" hx-vals='{"foo":"bar"}' />"#);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `macros` - the [`html!`] template macro (default)

// Public modules (exported in public API)
pub mod config;
pub mod error;
pub mod jsx;
pub mod observability;
pub mod sanitize;
pub mod schema;
pub mod template;
pub mod value;

#[cfg(feature = "macros")]
pub use typed_htmx_macros::html;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! ```rust
    //! use typed_htmx::prelude::*;
    //! ```

    // Configuration
    pub use crate::config::{RenderConfig, RenderSettings};

    // Sanitization
    pub use crate::sanitize::{Sanitizer, SanitizerKind};

    // Values
    pub use crate::value::{Attributes, Interpolation, Value};

    // Templates
    pub use crate::template::{Html, Template};

    // Elements
    pub use crate::jsx::{create_element, fragment, jsx, jsx_dev, jsxs, Children, Props, Source, Tag};

    // Error types
    pub use crate::error::{RenderError, RenderResult};

    // Template macro
    #[cfg(feature = "macros")]
    pub use typed_htmx_macros::html;

    pub use crate::attrs;

    // Convenience for JSON attribute values
    pub use serde_json::json;
}
