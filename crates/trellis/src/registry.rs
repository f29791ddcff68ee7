//! Component registry
//!
//! The registry maps global component names to their definitions. It is
//! owned by a single application handle and mutated only through it, so name
//! resolution is an explicit lookup against application state rather than a
//! process-wide global.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::component::Component;

/// Name → component definition map with last-write-wins inserts
#[derive(Default)]
pub struct ComponentRegistry {
    entries: HashMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a component under a global name
    ///
    /// Registering the same name twice silently replaces the previous
    /// definition. Returns true when an existing entry was replaced.
    pub fn insert(&mut self, name: impl Into<String>, component: Arc<dyn Component>) -> bool {
        let name = name.into();
        let replaced = self.entries.insert(name.clone(), component).is_some();
        if replaced {
            debug!("Component '{}' re-registered, previous definition replaced", name);
        } else {
            debug!("Component '{}' registered", name);
        }
        replaced
    }

    /// Resolve a component by its exact registered name
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Component>> {
        self.entries.get(name).cloned()
    }

    /// Whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
