//! Element Primitive - The node factory entry point.
//!
//! `create_element` is what render functions call for every tag. It:
//! 1. Normalizes child content (text, node sequence, leading slot producer)
//! 2. Classifies the tag through the context's base
//! 3. Emits a host element vnode, or hands off to the component bridge
//!
//! # Example
//!
//! ```ignore
//! use spark_vdom::{create_element, Attrs, Children};
//!
//! let vnode = create_element(vm, "div", Some(Attrs::new().with("class", "a")), "hello")?;
//! assert_eq!(vnode.children().unwrap()[0].text_content(), Some("hello"));
//!
//! // Leading slot producer becomes attrs.scoped_slots.default
//! let list = create_element(vm, "TodoList", None, Children::slot(|props| {
//!     vec![]
//! }))?;
//! ```

use crate::engine::RenderContext;
use crate::error::{Result, VdomError};
use crate::types::{Attrs, TagFlags};
use super::component::create_component;
use super::types::{Child, Children};
use super::vnode::VNode;

/// Create a vnode for `tag`.
///
/// `attrs` defaults to an empty bag and is taken by value; it may be rewritten
/// (scoped slots, hooks) before it lands on the returned vnode.
///
/// Fails with `UnknownElement` when `tag` is neither a host tag nor a
/// registered component.
pub fn create_element<C>(
    ctx: &C,
    tag: &str,
    attrs: Option<Attrs>,
    children: impl Into<Children>,
) -> Result<VNode>
where
    C: RenderContext + ?Sized,
{
    if tag.is_empty() {
        return Err(VdomError::EmptyTag);
    }

    let mut attrs = attrs.unwrap_or_default();
    let children = normalize_children(&mut attrs, children.into());

    let base = ctx.base();
    if base.is_host_tag(tag) {
        if attrs.hook.take().is_some() {
            tracing::warn!(tag, "dropping lifecycle hooks from host element attrs");
        }
        if base.classify(tag).contains(TagFlags::VOID) && !children.is_empty() {
            tracing::warn!(tag, count = children.len(), "void element given children");
        }
        return Ok(VNode::element(tag, attrs, host_children(tag, children)));
    }

    let Some(definition) = ctx.resolve_component(tag) else {
        tracing::error!(tag, "unknown element");
        return Err(VdomError::unknown_element(tag));
    };
    create_component(ctx, tag, attrs, children, definition)
}

/// Resolve the three child shapes into one sequence.
///
/// A slot producer in first position moves to `attrs.scoped_slots.default`
/// and empties the sequence, whatever followed it.
fn normalize_children(attrs: &mut Attrs, children: Children) -> Vec<Child> {
    match children {
        Children::Empty => Vec::new(),
        Children::Text(text) => vec![Child::Node(VNode::text(text))],
        Children::Nodes(mut nodes) => {
            if let Some(Child::Slot(producer)) = nodes.first() {
                let producer = producer.clone();
                tracing::trace!(discarded = nodes.len() - 1, "moved slot producer to scoped slots");
                attrs.scoped_slots.get_or_insert_with(Default::default).default = Some(producer);
                nodes.clear();
            }
            nodes
        }
    }
}

/// Host elements only take nodes; stray slot producers are dropped.
fn host_children(tag: &str, children: Vec<Child>) -> Vec<VNode> {
    children
        .into_iter()
        .enumerate()
        .filter_map(|(position, child)| match child {
            Child::Node(node) => Some(node),
            Child::Slot(_) => {
                tracing::warn!(tag, position, "dropping slot producer from host element children");
                None
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
