//! Virtual node tree
//!
//! Components describe their output as a [`VNode`] tree. The renderer turns
//! that description into concrete document elements at mount time, resolving
//! widget references through the application's component registry.

use crate::component::Props;

/// A node in a component's rendered output
#[derive(Debug, Clone)]
pub enum VNode {
    /// A concrete element with attributes, directive annotations, and children
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        directives: Vec<(String, String)>,
        children: Vec<VNode>,
    },
    /// Text content placed on the enclosing element
    Text(String),
    /// A by-name reference to a registered component, resolved at render time
    Widget { name: String, props: Props },
}

impl VNode {
    /// Create an element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            directives: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a widget reference to a registered component name
    pub fn widget(name: impl Into<String>) -> Self {
        Self::Widget {
            name: name.into(),
            props: Props::new(),
        }
    }

    /// Add an attribute (element nodes only; no-op otherwise)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Add a directive annotation (element nodes only; no-op otherwise)
    pub fn directive(mut self, name: impl Into<String>, arg: impl Into<String>) -> Self {
        if let Self::Element { directives, .. } = &mut self {
            directives.push((name.into(), arg.into()));
        }
        self
    }

    /// Append a child node (element nodes only; no-op otherwise)
    pub fn child(mut self, node: VNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Set a prop (widget nodes only; no-op otherwise)
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        if let Self::Widget { props, .. } = &mut self {
            props.insert(name.into(), value.into());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let node = VNode::element("input")
            .attr("type", "text")
            .directive("mask", "###")
            .child(VNode::text("placeholder"));

        match node {
            VNode::Element {
                tag,
                attrs,
                directives,
                children,
            } => {
                assert_eq!(tag, "input");
                assert_eq!(attrs, vec![("type".to_string(), "text".to_string())]);
                assert_eq!(directives, vec![("mask".to_string(), "###".to_string())]);
                assert_eq!(children.len(), 1);
            }
            _ => panic!("expected element node"),
        }
    }

    #[test]
    fn test_widget_props() {
        let node = VNode::widget("BaseButton").prop("label", "Sign up");
        match node {
            VNode::Widget { name, props } => {
                assert_eq!(name, "BaseButton");
                assert_eq!(props.get("label").and_then(|v| v.as_str()), Some("Sign up"));
            }
            _ => panic!("expected widget node"),
        }
    }
}
