//! Mount Pipeline
//!
//! Connects the vnode trees built by the node factory to the subsystem that
//! attaches them to a document.
//!
//! ```text
//! render fn → create_element → VNode tree → patch engine → mount_component → init / inserted
//! ```
//!
//! Only the component step lives here; diffing and patching host elements
//! belong to the patch engine.

pub mod mount;

pub use mount::{mount_component, unmount_component};
