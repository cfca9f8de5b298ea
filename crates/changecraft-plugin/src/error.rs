//! Plugin error types.

use thiserror::Error;

/// Plugin-related errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// No renderer registered under the requested name.
    #[error("renderer not found: {0}")]
    RendererNotFound(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_not_found_display() {
        let err = PluginError::RendererNotFound("pdf".to_string());
        assert_eq!(err.to_string(), "renderer not found: pdf");
    }

    #[test]
    fn test_plugin_result_err() {
        let result: PluginResult<i32> = Err(PluginError::RendererNotFound("x".to_string()));
        assert!(result.is_err());
    }
}
