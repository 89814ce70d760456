//! Component Primitive - Placeholder vnodes for user components.
//!
//! Turns a resolved component definition into a placeholder vnode:
//! 1. Normalizes the definition into a constructor (memoized by the base)
//! 2. Installs the `init` / `inserted` hooks on the attrs
//! 3. Synthesizes a tag unique per constructor and local tag
//! 4. Keeps the raw children for slot distribution inside the child
//!
//! The placeholder has no subtree of its own. The mount subsystem later
//! calls `init`, which builds the instance and renders it detached.

use std::rc::Rc;

use crate::config;
use crate::engine::{ComponentDefinition, ComponentInstance, InstanceOptions, RenderContext};
use crate::error::{Result, VdomError};
use crate::types::Attrs;
use super::types::{Child, VNodeHooks};
use super::vnode::{ComponentOptions, VNode};

/// Create a component placeholder vnode.
pub fn create_component<C>(
    ctx: &C,
    tag: &str,
    mut attrs: Attrs,
    children: Vec<Child>,
    definition: ComponentDefinition,
) -> Result<VNode>
where
    C: RenderContext + ?Sized,
{
    let base = ctx.base();
    let ctor = base.resolve_constructor(&definition)?;

    attrs.hook = Some(VNodeHooks::component());

    let vnode_tag = component_tag(ctor.cid(), tag);
    tracing::debug!(tag, cid = ctor.cid(), vnode_tag = %vnode_tag, "created component placeholder");

    Ok(VNode::component(
        vnode_tag,
        attrs,
        ComponentOptions {
            ctor,
            base: base.clone(),
            tag: tag.to_string(),
            children,
        },
    ))
}

/// Placeholder tag for a constructor and local tag: `{prefix}-{cid}-{tag}`.
pub fn component_tag(cid: u32, tag: &str) -> String {
    format!("{}-{}-{}", config::component_tag_prefix(), cid, tag)
}

// =============================================================================
// Hooks
// =============================================================================

impl VNodeHooks {
    /// Hooks installed on every component placeholder.
    pub(crate) fn component() -> Self {
        Self {
            init: Rc::new(init_hook),
            inserted: Rc::new(inserted_hook),
        }
    }
}

/// Build the component instance for a placeholder and mount it detached.
fn init_hook(vnode: &VNode) -> Result<()> {
    let Some(options) = vnode.component_options() else {
        return Err(VdomError::MissingComponentOptions {
            tag: vnode.tag().unwrap_or_default().to_string(),
        });
    };

    if vnode.component_instance().is_some() {
        if config::guard_double_init() {
            return Err(VdomError::AlreadyInitialized {
                tag: options.tag.clone(),
            });
        }
        tracing::warn!(tag = %options.tag, "re-initializing component placeholder");
    }

    let scoped_slots = vnode.attrs().and_then(|attrs| attrs.scoped_slots.clone());
    let child = ComponentInstance::new(
        options.ctor.clone(),
        options.base.clone(),
        InstanceOptions::nested(options.children.clone(), scoped_slots),
    );
    // The placeholder only takes the instance once it rendered.
    if let Err(err) = child.mount(None) {
        child.destroy();
        return Err(err);
    }
    vnode.set_component_instance(child);
    Ok(())
}

fn inserted_hook(vnode: &VNode) {
    tracing::trace!(tag = ?vnode.tag(), "component inserted");
}
