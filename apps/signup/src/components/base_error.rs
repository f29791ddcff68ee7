//! Globally registered error banner component

use trellis::{Component, Props, VNode};

/// Inline error banner; message comes from the `message` prop
pub struct BaseError;

impl BaseError {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaseError {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BaseError {
    fn name(&self) -> &str {
        "BaseError"
    }

    fn render(&self, props: &Props) -> VNode {
        let message = props
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let node = VNode::element("div")
            .attr("class", "base-error")
            .attr("role", "alert");
        if message.is_empty() {
            // Keep the banner in the tree but invisible until a message is set.
            node.attr("hidden", "hidden")
        } else {
            node.child(VNode::text(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_message() {
        let mut props = Props::new();
        props.insert("message".into(), "Email is required".into());

        match BaseError::new().render(&props) {
            VNode::Element { children, .. } => {
                assert!(matches!(&children[0], VNode::Text(t) if t == "Email is required"));
            }
            _ => panic!("expected element node"),
        }
    }

    #[test]
    fn test_empty_message_renders_hidden() {
        match BaseError::new().render(&Props::new()) {
            VNode::Element { attrs, children, .. } => {
                assert!(attrs.contains(&("hidden".to_string(), "hidden".to_string())));
                assert!(children.is_empty());
            }
            _ => panic!("expected element node"),
        }
    }
}
