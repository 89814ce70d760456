//! Mount API - Running component hooks for the mount subsystem.
//!
//! The patch engine walks a vnode tree and, for every component placeholder,
//! asks this module to instantiate it. Host elements and text are left to the
//! patch engine itself.
//!
//! # Example
//!
//! ```ignore
//! use spark_vdom::pipeline::mount;
//!
//! let placeholder = create_element(vm, "Foo", None, Children::Empty)?;
//!
//! // Runs init (build + detached mount), then inserted
//! if mount::mount_component(&placeholder)? {
//!     let child = placeholder.component_instance().unwrap();
//!     // child.render_tree() is ready to be patched into the document
//! }
//!
//! // Later
//! mount::unmount_component(&placeholder);
//! ```

use crate::error::Result;
use crate::primitives::VNode;
use crate::types::Attrs;

// =============================================================================
// Mount
// =============================================================================

/// Instantiate and insert the component behind a placeholder.
///
/// Returns `Ok(false)` for vnodes without hooks (text and host elements).
/// Errors from `init` propagate; `inserted` only runs once an instance exists.
pub fn mount_component(vnode: &VNode) -> Result<bool> {
    let Some(hooks) = vnode.attrs().and_then(Attrs::hook) else {
        return Ok(false);
    };

    (hooks.init)(vnode)?;

    let Some(instance) = vnode.component_instance() else {
        return Ok(false);
    };

    (hooks.inserted)(vnode);
    instance.mark_inserted();

    tracing::debug!(tag = ?vnode.tag(), uid = instance.uid(), "component mounted and inserted");
    Ok(true)
}

// =============================================================================
// Unmount
// =============================================================================

/// Destroy the component instance behind a placeholder, if any.
///
/// Returns whether an instance was destroyed.
pub fn unmount_component(vnode: &VNode) -> bool {
    match vnode.component_instance() {
        Some(instance) if !instance.is_destroyed() => {
            instance.destroy();
            true
        }
        _ => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
