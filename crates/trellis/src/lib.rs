//! Trellis - a small component and plugin framework
//!
//! Trellis models the startup surface of a document-mounted UI application:
//! an application handle built from a root component, a global component
//! registry, an installable plugin contract, and a mount call that renders
//! the component tree into a host document.
//!
//! The bootstrap sequence is linear and synchronous:
//!
//! ```
//! use trellis::{create_app, Component, Document, Element, Props, VNode};
//!
//! struct Root;
//!
//! impl Component for Root {
//!     fn name(&self) -> &str {
//!         "Root"
//!     }
//!
//!     fn render(&self, _props: &Props) -> VNode {
//!         VNode::element("main").child(VNode::text("hello"))
//!     }
//! }
//!
//! let mut document = Document::new();
//! document
//!     .body_mut()
//!     .append_child(Element::new("div").with_attr("id", "app"));
//!
//! let mut app = create_app(Root);
//! app.mount(&mut document, "#app").unwrap();
//! assert!(app.is_mounted());
//! ```

pub mod app;
pub mod component;
pub mod dom;
pub mod error;
pub mod plugin;
pub mod registry;
pub mod render;
pub mod vnode;

pub use app::{create_app, App, AppState};
pub use component::{Component, Props};
pub use dom::{Document, Element};
pub use error::TrellisError;
pub use plugin::{Directive, Plugin};
pub use registry::ComponentRegistry;
pub use vnode::VNode;
