//! # spark-vdom
//!
//! Virtual node factory and component bridge for declarative UI rendering.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! configuration signals and render scopes.
//!
//! ## Architecture
//!
//! Render functions call [`create_element`] for every tag. The factory turns
//! the call into a [`VNode`]: a text node, a host element, or a component
//! placeholder carrying `init` / `inserted` hooks. The patch engine consumes
//! the tree and runs the hooks through [`pipeline::mount_component`].
//!
//! ```text
//! render fn → create_element → classify tag → element VNode
//!                                           → create_component → placeholder VNode
//! placeholder → init hook → ComponentInstance::mount(None) → child render tree
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Attribute values and bags, mount targets, flags
//! - [`engine`] - Tag classification, base constructor, component instances
//! - [`primitives`] - The node factory and vnode shape
//! - [`pipeline`] - Hook invocation for the mount subsystem
//! - [`config`] - Factory settings
//! - [`error`] - Error type

pub mod config;
pub mod engine;
pub mod error;
pub mod pipeline;
pub mod primitives;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{Result, VdomError};

pub use engine::{
    Base, ComponentDef, ComponentDefinition, ComponentInstance, Constructor, InstanceOptions,
    RenderContext, RenderFn, TagClassifier, WebTagClassifier,
};

pub use primitives::{
    component_tag, create_component, create_element, create_text_node, Child, Children,
    ComponentOptions, ScopedSlot, ScopedSlots, VNode, VNodeHooks, VNodeKind,
};

pub use pipeline::{mount_component, unmount_component};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_host_element() {
        config::reset_config();
        let base = Base::new();
        let vm = ComponentInstance::root(&base, ComponentDef::new()).unwrap();

        let vnode = create_element(&*vm, "div", Some(Attrs::new().with("class", "a")), "hello").unwrap();

        assert_eq!(vnode.tag(), Some("div"));
        assert_eq!(vnode.attrs().and_then(|a| a.get("class")), Some(&AttrValue::from("a")));
        assert!(vnode.text_content().is_none());
        let children = vnode.children().unwrap();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag(), None);
        assert_eq!(children[0].text_content(), Some("hello"));
    }

    #[test]
    fn test_end_to_end_component() {
        config::reset_config();
        let base = Base::new();
        let vm = ComponentInstance::root(&base, ComponentDef::new().component("Foo", ComponentDef::new())).unwrap();

        let vnode = create_element(&*vm, "Foo", Some(Attrs::new()), Vec::<VNode>::new()).unwrap();

        assert!(vnode.tag().unwrap().starts_with("vue-component-"));
        assert!(vnode.component_options().unwrap().children.is_empty());
        let hooks = vnode.attrs().and_then(Attrs::hook).unwrap();
        (hooks.init)(&vnode).unwrap();
        (hooks.inserted)(&vnode);
        assert!(vnode.component_instance().is_some());
    }

    #[test]
    fn test_unregistered_tag_never_yields_vnode() {
        config::reset_config();
        let base = Base::new();
        let vm = ComponentInstance::root(&base, ComponentDef::new()).unwrap();
        assert!(create_element(&*vm, "Unregistered", None, Children::Empty).is_err());
    }
}
