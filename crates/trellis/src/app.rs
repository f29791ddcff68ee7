//! Application handle and bootstrap lifecycle
//!
//! The [`App`] owns everything one running application needs: the root
//! component, the component and directive registries, and the list of
//! installed plugins. The lifecycle is strictly linear and runs once:
//! create, register, install, mount.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::component::{Component, Props};
use crate::dom::Document;
use crate::error::TrellisError;
use crate::plugin::{Directive, Plugin};
use crate::registry::ComponentRegistry;
use crate::render;

/// Application lifecycle state
///
/// Transitions are one-directional: `Created → Mounted`, exactly once.
/// There is no unmount transition; the handle lives until it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppState {
    /// Handle exists, nothing rendered yet
    Created,
    /// Component tree has been rendered into the host document
    Mounted,
}

/// A handle to one application: root component, registries, plugin list
pub struct App {
    root: Arc<dyn Component>,
    components: ComponentRegistry,
    directives: HashMap<String, Arc<dyn Directive>>,
    plugins: Vec<String>,
    state: AppState,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("root", &self.root.name())
            .field("components", &self.components.len())
            .field("plugins", &self.plugins)
            .field("state", &self.state)
            .finish()
    }
}

/// Create a fresh, unmounted application handle from a root component
pub fn create_app(root: impl Component + 'static) -> App {
    App::new(root)
}

impl App {
    /// Create a fresh, unmounted application handle
    pub fn new(root: impl Component + 'static) -> Self {
        let root: Arc<dyn Component> = Arc::new(root);
        debug!("Application created with root component '{}'", root.name());
        Self {
            root,
            components: ComponentRegistry::new(),
            directives: HashMap::new(),
            plugins: Vec::new(),
            state: AppState::Created,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Whether the application has been mounted
    pub fn is_mounted(&self) -> bool {
        self.state == AppState::Mounted
    }

    /// The component registry
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Names of installed plugins, in installation order
    pub fn installed_plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Register a component under a global name
    ///
    /// The name becomes resolvable from anywhere in the component tree.
    /// Registering an existing name silently replaces the prior definition.
    pub fn component(&mut self, name: &str, definition: impl Component + 'static) -> &mut Self {
        self.components.insert(name, Arc::new(definition));
        self
    }

    /// Register a directive under a global name, last-write-wins
    pub fn directive(&mut self, name: &str, directive: impl Directive + 'static) -> &mut Self {
        if self.directives.insert(name.to_string(), Arc::new(directive)).is_some() {
            debug!("Directive '{}' re-registered, previous definition replaced", name);
        } else {
            debug!("Directive '{}' registered", name);
        }
        self
    }

    /// Install a plugin by running its install routine with this handle
    ///
    /// Each plugin's install routine runs at most once per handle; installing
    /// a plugin whose name is already recorded is a no-op. A failing install
    /// aborts the bootstrap sequence.
    pub fn use_plugin(&mut self, plugin: impl Plugin) -> Result<&mut Self, TrellisError> {
        let name = plugin.name().to_string();
        if self.plugins.iter().any(|p| p == &name) {
            debug!("Plugin '{}' already installed, skipping", name);
            return Ok(self);
        }

        info!("Installing plugin '{}'", name);
        plugin
            .install(self)
            .map_err(|e| TrellisError::plugin(name.clone(), e.to_string()))?;
        self.plugins.push(name);
        Ok(self)
    }

    /// Render the component tree into the document element matching `selector`
    ///
    /// Rendering is a snapshot: components and directives registered after
    /// this call have no effect on the tree it produced. Fails without
    /// changing state when the target is missing, and never mounts twice.
    pub fn mount(&mut self, document: &mut Document, selector: &str) -> Result<(), TrellisError> {
        if self.is_mounted() {
            return Err(TrellisError::AlreadyMounted);
        }

        let target = document
            .query_selector(selector)?
            .ok_or_else(|| TrellisError::target_not_found(selector))?;

        info!(
            "Mounting root component '{}' at {}",
            self.root.name(),
            selector
        );
        let tree = self.root.render(&Props::new());
        render::render_into(&self.components, &self.directives, &tree, target, 0)?;

        self.state = AppState::Mounted;
        info!("Application mounted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::vnode::VNode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Empty;

    impl Component for Empty {
        fn name(&self) -> &str {
            "Empty"
        }

        fn render(&self, _props: &Props) -> VNode {
            VNode::element("div")
        }
    }

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    impl Plugin for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn install(&self, _app: &mut App) -> Result<(), TrellisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Failing;

    impl Plugin for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn install(&self, _app: &mut App) -> Result<(), TrellisError> {
            Err(TrellisError::InvalidSelector("simulated".into()))
        }
    }

    fn document_with_app_node() -> Document {
        let mut doc = Document::new();
        doc.body_mut()
            .append_child(Element::new("div").with_attr("id", "app"));
        doc
    }

    #[test]
    fn test_new_app_starts_created() {
        let app = create_app(Empty);
        assert_eq!(app.state(), AppState::Created);
        assert!(!app.is_mounted());
        assert!(app.components().is_empty());
        assert!(app.installed_plugins().is_empty());
    }

    #[test]
    fn test_plugin_installed_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut app = create_app(Empty);

        app.use_plugin(Counting { calls: calls.clone() }).unwrap();
        app.use_plugin(Counting { calls: calls.clone() }).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.installed_plugins(), &["counting".to_string()]);
    }

    #[test]
    fn test_failing_plugin_aborts_and_is_not_recorded() {
        let mut app = create_app(Empty);
        let err = app.use_plugin(Failing).unwrap_err();

        assert!(matches!(err, TrellisError::Plugin { plugin, .. } if plugin == "failing"));
        assert!(app.installed_plugins().is_empty());
    }

    #[test]
    fn test_mount_twice_errors() {
        let mut doc = document_with_app_node();
        let mut app = create_app(Empty);

        app.mount(&mut doc, "#app").unwrap();
        assert!(app.is_mounted());

        let err = app.mount(&mut doc, "#app").unwrap_err();
        assert!(matches!(err, TrellisError::AlreadyMounted));
    }

    #[test]
    fn test_debug_summarizes_handle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut app = create_app(Empty);
        app.use_plugin(Counting { calls }).unwrap();

        let rendered = format!("{:?}", app);
        assert!(rendered.contains("Empty"));
        assert!(rendered.contains("counting"));
        assert!(rendered.contains("Created"));
    }

    #[test]
    fn test_mount_missing_target_leaves_state_created() {
        let mut doc = Document::new();
        let mut app = create_app(Empty);

        let err = app.mount(&mut doc, "#app").unwrap_err();
        assert!(matches!(err, TrellisError::TargetNotFound { selector } if selector == "#app"));
        assert_eq!(app.state(), AppState::Created);
    }
}
