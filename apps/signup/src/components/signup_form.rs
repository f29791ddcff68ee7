//! Root component: the enrollment form

use trellis::{Component, Props, VNode};

/// The application root: a small enrollment form that references the
/// globally registered `BaseError` and `BaseButton` components and carries a
/// masked phone input.
pub struct SignupForm;

impl SignupForm {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SignupForm {
    fn name(&self) -> &str {
        "SignupForm"
    }

    fn render(&self, _props: &Props) -> VNode {
        VNode::element("form")
            .attr("id", "signup-form")
            .attr("class", "signup")
            .child(VNode::element("h1").child(VNode::text("Create your account")))
            .child(VNode::widget("BaseError"))
            .child(
                VNode::element("label")
                    .attr("for", "email")
                    .child(VNode::text("Email")),
            )
            .child(
                VNode::element("input")
                    .attr("id", "email")
                    .attr("name", "email")
                    .attr("type", "email"),
            )
            .child(
                VNode::element("label")
                    .attr("for", "phone")
                    .child(VNode::text("Phone")),
            )
            .child(
                VNode::element("input")
                    .attr("id", "phone")
                    .attr("name", "phone")
                    .attr("type", "tel")
                    .attr("value", "5551234567")
                    .directive("mask", "(###) ###-####"),
            )
            .child(VNode::widget("BaseButton").prop("label", "Sign up"))
    }
}
