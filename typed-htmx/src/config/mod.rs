//! Render configuration
//!
//! [`RenderConfig`] is passed by reference into every render entry point.
//! It holds the set of JSON attributes, the sanitizer and the trusted flag.
//! Build it once at startup and share it read-only afterwards.
//!
//! Applications that prefer file-based configuration can load
//! [`RenderSettings`] with clear precedence:
//!
//! 1. Environment variables (highest priority, `TYPED_HTMX_` prefix)
//! 2. `./config.toml` (development)
//! 3. `~/.config/typed-htmx/{service}/config.toml` (user config, XDG)
//! 4. `/etc/typed-htmx/{service}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! json_attributes = ["hx-vals", "hx-headers", "data-hx-vals", "data-hx-headers"]
//! sanitizer = "escape"
//! trusted = false
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use typed_htmx::config::{RenderConfig, RenderSettings};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config: RenderConfig = RenderSettings::load_for_service("my-app")?.into();
//! assert!(config.is_json_attribute("hx-vals"));
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::sanitize::{Sanitizer, SanitizerKind};

/// Attributes whose object values are JSON-encoded by default
pub const DEFAULT_JSON_ATTRIBUTES: [&str; 4] =
    ["hx-vals", "hx-headers", "data-hx-vals", "data-hx-headers"];

/// Configuration consulted by every render call
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Attribute names whose composite values are serialized to JSON
    pub json_attributes: Vec<String>,

    /// Sanitizer for untrusted values
    pub sanitizer: Sanitizer,

    /// Disable all sanitization
    pub trusted: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            json_attributes: DEFAULT_JSON_ATTRIBUTES.iter().map(ToString::to_string).collect(),
            sanitizer: Sanitizer::Disabled,
            trusted: false,
        }
    }
}

impl RenderConfig {
    /// Whether `name` is JSON-encoded when given a composite value
    #[must_use]
    pub fn is_json_attribute(&self, name: &str) -> bool {
        self.json_attributes.iter().any(|attr| attr == name)
    }

    /// Add an attribute to the JSON set
    #[must_use]
    pub fn with_json_attribute(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.is_json_attribute(&name) {
            self.json_attributes.push(name);
        }
        self
    }

    /// Replace the sanitizer
    #[must_use]
    pub fn with_sanitizer(mut self, sanitizer: impl Into<Sanitizer>) -> Self {
        self.sanitizer = sanitizer.into();
        self
    }

    /// Set trusted mode
    #[must_use]
    pub const fn trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }
}

/// File and environment loadable projection of [`RenderConfig`]
///
/// Custom sanitizer functions cannot come from a file; use
/// [`RenderConfig::with_sanitizer`] after conversion for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Attribute names whose composite values are serialized to JSON
    pub json_attributes: Vec<String>,

    /// Built-in sanitizer choice
    pub sanitizer: SanitizerKind,

    /// Disable all sanitization
    pub trusted: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            json_attributes: DEFAULT_JSON_ATTRIBUTES.iter().map(ToString::to_string).collect(),
            sanitizer: SanitizerKind::Disabled,
            trusted: false,
        }
    }
}

impl RenderSettings {
    /// Load settings for a specific service
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default settings cannot be serialized to TOML
    /// - A configuration file contains invalid TOML
    /// - A value has the wrong type (e.g. an unknown sanitizer name)
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config
        let system_config = PathBuf::from("/etc/typed-htmx")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config
        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables
        figment = figment.merge(Env::prefixed("TYPED_HTMX_").split("__").lowercase(true));

        let settings: Self = figment.extract()?;
        tracing::debug!(service = service_name, ?settings, "Loaded render settings");
        Ok(settings)
    }

    /// Load settings from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or a value has the
    /// wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let settings: Self = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("TYPED_HTMX_").split("__").lowercase(true))
            .extract()?;

        Ok(settings)
    }

    /// Get the recommended XDG config path for a service
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| {
                config_dir
                    .join("typed-htmx")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Convert into a [`RenderConfig`]
    #[must_use]
    pub fn into_render_config(self) -> RenderConfig {
        RenderConfig {
            json_attributes: self.json_attributes,
            sanitizer: self.sanitizer.into(),
            trusted: self.trusted,
        }
    }
}

impl From<RenderSettings> for RenderConfig {
    fn from(settings: RenderSettings) -> Self {
        settings.into_render_config()
    }
}
