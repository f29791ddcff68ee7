//! Plugin and directive contracts
//!
//! A plugin is a value implementing [`Plugin`]: the application invokes its
//! install routine once, with the handle as context, and the plugin performs
//! whatever setup it needs (typically registering components or directives).
//! The framework has no visibility into a plugin beyond its name and the
//! error channel of `install`.

use crate::app::App;
use crate::dom::Element;
use crate::error::TrellisError;

/// The installable capability all plugins implement
pub trait Plugin: Send + Sync {
    /// Unique plugin name, used for dedup and error attribution
    fn name(&self) -> &str;

    /// Perform setup against the application handle
    ///
    /// Called at most once per handle. Any error aborts the bootstrap
    /// sequence; the application does not retry or roll back.
    fn install(&self, app: &mut App) -> Result<(), TrellisError>;
}

/// An element-level behavior registered under a global directive name
///
/// Directives are the extension point plugins typically register. Each
/// annotated element invokes the directive once when it is materialized at
/// mount time, after attributes and children are in place.
pub trait Directive: Send + Sync {
    /// Apply the directive to a freshly rendered element
    fn applied(&self, el: &mut Element, arg: &str) -> Result<(), TrellisError>;
}
