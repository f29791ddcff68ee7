//! Component contract
//!
//! A component is a named, reusable unit of UI definition. The framework
//! treats components as opaque: it only ever calls [`Component::render`] and
//! never inspects what a component does internally.

use crate::vnode::VNode;

/// Props passed to a component when a widget reference is rendered
pub type Props = serde_json::Map<String, serde_json::Value>;

/// The component trait all UI definitions implement
pub trait Component: Send + Sync {
    /// Diagnostic label for logs and errors
    fn name(&self) -> &str;

    /// Produce the component's output for the given props
    fn render(&self, props: &Props) -> VNode;
}
