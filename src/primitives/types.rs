//! Primitive types - Child content, scoped slots, and hooks.
//!
//! These types define what a render function can pass as children and what
//! the component bridge attaches to placeholder vnodes.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::types::Attrs;
use super::vnode::VNode;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by lifecycle scopes.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Scoped Slots
// =============================================================================

/// Deferred content producer passed from a parent to a child component.
///
/// Receives slot props from the child and returns the nodes to render.
/// The factory only stores it; the consuming component decides when to call it.
pub type ScopedSlot = Rc<dyn Fn(&Attrs) -> Vec<VNode>>;

/// Scoped slot producers keyed by slot name.
#[derive(Clone, Default)]
pub struct ScopedSlots {
    /// The unnamed slot.
    pub default: Option<ScopedSlot>,
    pub named: BTreeMap<String, ScopedSlot>,
}

impl ScopedSlots {
    /// Look up a slot; `"default"` maps to the unnamed slot.
    pub fn get(&self, name: &str) -> Option<&ScopedSlot> {
        if name == "default" {
            self.default.as_ref()
        } else {
            self.named.get(name)
        }
    }
}

impl fmt::Debug for ScopedSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedSlots")
            .field("default", &self.default.is_some())
            .field("named", &self.named.keys().collect::<Vec<_>>())
            .finish()
    }
}

// =============================================================================
// Child Content
// =============================================================================

/// One entry of a child sequence.
#[derive(Clone)]
pub enum Child {
    Node(VNode),
    /// Slot producer. Only meaningful in first position.
    Slot(ScopedSlot),
}

impl Child {
    pub fn as_node(&self) -> Option<&VNode> {
        match self {
            Child::Node(node) => Some(node),
            Child::Slot(_) => None,
        }
    }
}

impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        Child::Node(node)
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Child::Slot(_) => f.write_str("Slot(..)"),
        }
    }
}

/// Child content as written by a render function.
///
/// ```ignore
/// create_element(vm, "p", None, "hello")?;                    // Text
/// create_element(vm, "ul", None, vec![li_a, li_b])?;          // Nodes
/// create_element(vm, "List", None, Children::slot(|props| {  // Slot producer
///     vec![]
/// }))?;
/// ```
#[derive(Clone, Default, Debug)]
pub enum Children {
    /// No children given.
    #[default]
    Empty,
    Text(String),
    Nodes(Vec<Child>),
}

impl Children {
    /// A sequence holding a single slot producer.
    pub fn slot(producer: impl Fn(&Attrs) -> Vec<VNode> + 'static) -> Self {
        Children::Nodes(vec![Child::Slot(Rc::new(producer))])
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Children::Text(text.to_string())
    }
}

impl From<String> for Children {
    fn from(text: String) -> Self {
        Children::Text(text)
    }
}

impl From<Vec<VNode>> for Children {
    fn from(nodes: Vec<VNode>) -> Self {
        Children::Nodes(nodes.into_iter().map(Child::Node).collect())
    }
}

impl From<Vec<Child>> for Children {
    fn from(children: Vec<Child>) -> Self {
        Children::Nodes(children)
    }
}

impl From<VNode> for Children {
    fn from(node: VNode) -> Self {
        Children::Nodes(vec![Child::Node(node)])
    }
}

impl<T: Into<Children>> From<Option<T>> for Children {
    fn from(children: Option<T>) -> Self {
        children.map(Into::into).unwrap_or_default()
    }
}

// =============================================================================
// Hooks
// =============================================================================

/// Creation hook: instantiates and mounts the component for a placeholder.
pub type InitHook = Rc<dyn Fn(&VNode) -> Result<()>>;

/// Insertion hook: called once the component's element is in the document.
pub type InsertedHook = Rc<dyn Fn(&VNode)>;

/// Lifecycle callbacks installed on component placeholders.
///
/// The owning vnode is always passed in explicitly.
#[derive(Clone)]
pub struct VNodeHooks {
    pub init: InitHook,
    pub inserted: InsertedHook,
}

impl fmt::Debug for VNodeHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VNodeHooks { init, inserted }")
    }
}
