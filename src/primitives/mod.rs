//! VDOM Primitives - The node factory.
//!
//! This module provides what render functions call:
//! - [`create_element`] - Host element or component placeholder for a tag
//! - [`create_text_node`] - Plain text
//! - [`create_component`] - Placeholder for an already resolved definition
//!
//! # Architecture
//!
//! Every call returns exactly one [`VNode`]:
//! 1. Child content is normalized (text, node sequence, leading slot producer)
//! 2. The tag is classified by the context's base constructor
//! 3. Host tags become element vnodes; anything else is looked up in the
//!    context's component registry and becomes a placeholder carrying hooks
//!
//! ```ignore
//! let vnode = create_element(vm, "div", Some(Attrs::new().with("class", "a")), "hello")?;
//! // VNode { tag: "div", children: [VNode { tag: None, text: "hello" }] }
//!
//! let foo = create_element(vm, "Foo", None, Children::Empty)?;
//! // VNode { tag: "vue-component-1-Foo", attrs.hook: { init, inserted }, component_options }
//! ```

mod types;
mod vnode;
mod element;
mod component;
mod text;

pub use types::*;
pub use vnode::{ComponentOptions, VNode, VNodeKind};
pub use element::create_element;
pub use component::{component_tag, create_component};
pub use text::create_text_node;
