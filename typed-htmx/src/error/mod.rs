//! Error types and error handling

use thiserror::Error;

/// Render error type
///
/// Invalid or absent values never produce an error: they render as empty
/// output. The only failures are JSON attribute encoding and components
/// that report a failure of their own.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON attribute encoding failed
    #[error("JSON attribute encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A component function failed
    #[error("Component <{tag}> failed: {message}")]
    Component {
        /// Tag name of the failing component
        tag: String,
        /// Failure description
        message: String,
    },
}

impl RenderError {
    /// Create a component error
    pub fn component(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Component {
            tag: tag.into(),
            message: message.into(),
        }
    }
}

/// Result alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_error_display() {
        let err = RenderError::component("Card", "missing title");
        assert_eq!(err.to_string(), "Component <Card> failed: missing title");
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RenderError = json_err.into();
        assert!(matches!(err, RenderError::Json(_)));
        assert!(err.to_string().starts_with("JSON attribute encoding failed"));
    }
}
