//! Custom error types for Trellis
//!
//! This module provides the unified error type used throughout the framework.
//! Every startup operation reports failures through it; the framework never
//! recovers on its own, so callers decide whether a failure is fatal.

use thiserror::Error;

/// Main error type for Trellis operations
#[derive(Error, Debug)]
pub enum TrellisError {
    /// The selector string is not part of the supported grammar
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// No element in the document matched the mount selector
    #[error("Mount target not found: {selector}")]
    TargetNotFound { selector: String },

    /// The application handle has already been mounted
    #[error("Application is already mounted")]
    AlreadyMounted,

    /// A widget node referenced a component name with no registry entry
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },

    /// An element carried a directive with no registry entry
    #[error("Unknown directive: {name}")]
    UnknownDirective { name: String },

    /// A plugin's install routine failed
    #[error("Plugin '{plugin}' failed to install: {message}")]
    Plugin { plugin: String, message: String },

    /// Component resolution recursed past the render depth limit
    #[error("Render depth limit of {limit} exceeded (component cycle?)")]
    RenderDepthExceeded { limit: usize },
}

impl TrellisError {
    /// Create a target-not-found error for a selector
    pub fn target_not_found(selector: impl Into<String>) -> Self {
        Self::TargetNotFound {
            selector: selector.into(),
        }
    }

    /// Create an unknown-component error
    pub fn unknown_component(name: impl Into<String>) -> Self {
        Self::UnknownComponent { name: name.into() }
    }

    /// Create an unknown-directive error
    pub fn unknown_directive(name: impl Into<String>) -> Self {
        Self::UnknownDirective { name: name.into() }
    }

    /// Create a plugin installation error
    pub fn plugin(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Plugin {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrellisError::target_not_found("#app");
        assert_eq!(err.to_string(), "Mount target not found: #app");

        let err = TrellisError::plugin("input-mask", "boom");
        assert_eq!(err.to_string(), "Plugin 'input-mask' failed to install: boom");
    }
}
