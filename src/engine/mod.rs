//! VDOM Engine - Tag classification, constructors, and instances.
//!
//! The engine owns what the node factory consults:
//! - Tags: host tag classification (`TagClassifier`, web tag lists)
//! - Registry: component definitions, `Base::extend`, constructor identities
//! - Instance: component instances and the `RenderContext` they provide
//!
//! # Identity
//!
//! ```text
//! ComponentDef (id 7) ──extend──▶ Constructor (cid 3) ──▶ "vue-component-3-Foo"
//! ComponentDef (id 7) ──extend──▶ same Constructor (cid 3)
//! ```

mod registry;
mod tags;
mod instance;

pub use registry::*;
pub use tags::*;
pub use instance::*;
