//! VNode - The intermediate node representation.
//!
//! A vnode is exactly one of: a text node, a host element with children, or a
//! component placeholder. The kind is an enum, so no vnode can be two of these
//! at once. Vnodes are rebuilt on every render; the only field written after
//! construction is the component instance, and only by the `init` hook.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::engine::{Base, ComponentInstance, Constructor};
use crate::types::{AttrValue, Attrs};
use super::types::Child;

// =============================================================================
// Component Options
// =============================================================================

/// What a component placeholder needs to instantiate its component later.
#[derive(Clone)]
pub struct ComponentOptions {
    /// Resolved constructor.
    pub ctor: Rc<Constructor>,
    /// Base the constructor was resolved against.
    pub base: Rc<Base>,
    /// Local tag as written in the render function.
    pub tag: String,
    /// Raw child content, kept for slot distribution inside the child.
    pub children: Vec<Child>,
}

impl fmt::Debug for ComponentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentOptions")
            .field("cid", &self.ctor.cid())
            .field("tag", &self.tag)
            .field("children", &self.children)
            .finish()
    }
}

// =============================================================================
// VNode
// =============================================================================

/// The three shapes a vnode can take.
#[derive(Clone, Debug)]
pub enum VNodeKind {
    Text(String),
    Element { children: Vec<VNode> },
    Component(ComponentOptions),
}

#[derive(Clone)]
pub struct VNode {
    tag: Option<String>,
    attrs: Option<Attrs>,
    key: Option<AttrValue>,
    kind: VNodeKind,
    component_instance: RefCell<Option<Rc<ComponentInstance>>>,
}

impl VNode {
    fn new(tag: Option<String>, attrs: Option<Attrs>, kind: VNodeKind) -> Self {
        let key = attrs.as_ref().and_then(Attrs::key).cloned();
        Self {
            tag,
            attrs,
            key,
            kind,
            component_instance: RefCell::new(None),
        }
    }

    pub(crate) fn text(text: impl Into<String>) -> Self {
        Self::new(None, None, VNodeKind::Text(text.into()))
    }

    pub(crate) fn element(tag: impl Into<String>, attrs: Attrs, children: Vec<VNode>) -> Self {
        Self::new(Some(tag.into()), Some(attrs), VNodeKind::Element { children })
    }

    pub(crate) fn component(tag: String, attrs: Attrs, options: ComponentOptions) -> Self {
        Self::new(Some(tag), Some(attrs), VNodeKind::Component(options))
    }

    /// `None` for text nodes.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn attrs(&self) -> Option<&Attrs> {
        self.attrs.as_ref()
    }

    /// Reconciliation identity, taken from `attrs["key"]`.
    pub fn key(&self) -> Option<&AttrValue> {
        self.key.as_ref()
    }

    pub fn kind(&self) -> &VNodeKind {
        &self.kind
    }

    /// Children of a host element.
    pub fn children(&self) -> Option<&[VNode]> {
        match &self.kind {
            VNodeKind::Element { children } => Some(children),
            _ => None,
        }
    }

    /// Payload of a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            VNodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn component_options(&self) -> Option<&ComponentOptions> {
        match &self.kind {
            VNodeKind::Component(options) => Some(options),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, VNodeKind::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self.kind, VNodeKind::Element { .. })
    }

    pub fn is_component(&self) -> bool {
        matches!(self.kind, VNodeKind::Component(_))
    }

    /// Live instance behind a component placeholder, once `init` has run.
    pub fn component_instance(&self) -> Option<Rc<ComponentInstance>> {
        self.component_instance.borrow().clone()
    }

    pub(crate) fn set_component_instance(&self, instance: Rc<ComponentInstance>) {
        *self.component_instance.borrow_mut() = Some(instance);
    }
}

impl fmt::Debug for VNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VNode")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("component_instance", &self.component_instance.borrow().is_some())
            .finish()
    }
}
