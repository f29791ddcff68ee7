//! Mount-time renderer
//!
//! Walks a component's virtual node tree, resolves widget references through
//! the component registry, applies directives, and materializes concrete
//! document elements under the mount target. Resolution uses the registries
//! as they exist at the moment of the call; later registrations do not affect
//! an already rendered tree.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::dom::Element;
use crate::error::TrellisError;
use crate::plugin::Directive;
use crate::registry::ComponentRegistry;
use crate::vnode::VNode;

/// Maximum widget resolution depth before rendering aborts
///
/// Components can reference each other by name, so a cycle is representable.
/// The limit turns an accidental cycle into an error instead of unbounded
/// recursion.
pub const MAX_DEPTH: usize = 64;

/// Render a virtual node into a parent element
pub(crate) fn render_into(
    components: &ComponentRegistry,
    directives: &HashMap<String, Arc<dyn Directive>>,
    node: &VNode,
    parent: &mut Element,
    depth: usize,
) -> Result<(), TrellisError> {
    if depth > MAX_DEPTH {
        return Err(TrellisError::RenderDepthExceeded { limit: MAX_DEPTH });
    }

    match node {
        VNode::Text(content) => {
            match &mut parent.text {
                Some(existing) => existing.push_str(content),
                None => parent.set_text(content.clone()),
            }
            Ok(())
        }
        VNode::Element {
            tag,
            attrs,
            directives: annotations,
            children,
        } => {
            trace!("Rendering <{}>", tag);
            let mut el = Element::new(tag.clone());
            for (name, value) in attrs {
                el.set_attr(name.clone(), value.clone());
            }
            for child in children {
                render_into(components, directives, child, &mut el, depth)?;
            }
            for (name, arg) in annotations {
                let directive = directives
                    .get(name)
                    .ok_or_else(|| TrellisError::unknown_directive(name.as_str()))?;
                directive.applied(&mut el, arg)?;
            }
            parent.append_child(el);
            Ok(())
        }
        VNode::Widget { name, props } => {
            let component = components
                .resolve(name)
                .ok_or_else(|| TrellisError::unknown_component(name.as_str()))?;
            debug!("Resolving widget '{}' -> component '{}'", name, component.name());
            let rendered = component.render(props);
            render_into(components, directives, &rendered, parent, depth + 1)
        }
    }
}
