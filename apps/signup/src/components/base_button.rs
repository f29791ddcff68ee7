//! Globally registered button component

use trellis::{Component, Props, VNode};

/// A styled submit button; label comes from the `label` prop
pub struct BaseButton;

impl BaseButton {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaseButton {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BaseButton {
    fn name(&self) -> &str {
        "BaseButton"
    }

    fn render(&self, props: &Props) -> VNode {
        let label = props
            .get("label")
            .and_then(|v| v.as_str())
            .unwrap_or("Submit")
            .to_string();

        VNode::element("button")
            .attr("class", "base-button")
            .attr("type", "submit")
            .child(VNode::text(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_label_prop() {
        let mut props = Props::new();
        props.insert("label".into(), "Sign up".into());

        match BaseButton::new().render(&props) {
            VNode::Element { tag, children, .. } => {
                assert_eq!(tag, "button");
                assert!(matches!(&children[0], VNode::Text(t) if t == "Sign up"));
            }
            _ => panic!("expected element node"),
        }
    }

    #[test]
    fn test_defaults_to_submit() {
        match BaseButton::new().render(&Props::new()) {
            VNode::Element { children, .. } => {
                assert!(matches!(&children[0], VNode::Text(t) if t == "Submit"));
            }
            _ => panic!("expected element node"),
        }
    }
}
