//! Component Instances - Construction, deferred mount, and teardown.
//!
//! An instance is created from a constructor, either as an app root or from
//! a component placeholder's `init` hook. Mounting runs the render function
//! inside an effect scope and keeps the resulting tree; nothing is attached
//! to a document here.
//!
//! # Lifecycle
//!
//! ```text
//! new() → mount(None) → [MOUNTED] → mark_inserted() → [INSERTED] → destroy() → [DESTROYED]
//! ```
//!
//! Instances double as the render context for `create_element`: component
//! lookup goes through the constructor's local registry first, then the base.

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use spark_signals::{effect_scope, on_scope_dispose};

use crate::engine::registry::{Base, ComponentDef, ComponentDefinition, Constructor};
use crate::error::{Result, VdomError};
use crate::primitives::{create_text_node, Child, Cleanup, ScopedSlots, VNode};
use crate::types::{ElementRef, InstanceFlags};

// =============================================================================
// Render Context
// =============================================================================

/// What `create_element` needs from the enclosing component.
pub trait RenderContext {
    /// Base constructor used to normalize definitions and classify tags.
    fn base(&self) -> &Rc<Base>;

    /// Component registered under `tag`, if any.
    fn resolve_component(&self, tag: &str) -> Option<ComponentDefinition>;
}

impl RenderContext for Rc<Base> {
    fn base(&self) -> &Rc<Base> {
        self
    }

    fn resolve_component(&self, tag: &str) -> Option<ComponentDefinition> {
        Base::resolve_component(self, tag)
    }
}

// =============================================================================
// Instance Options
// =============================================================================

/// Options handed to a new instance.
#[derive(Clone, Default, Debug)]
pub struct InstanceOptions {
    /// Created from a placeholder vnode (nested) rather than as an app root.
    pub is_component: bool,
    /// Raw children from the placeholder, for slot distribution.
    pub slot_children: Vec<Child>,
    /// Scoped slot producers from the placeholder's attrs.
    pub scoped_slots: Option<ScopedSlots>,
}

impl InstanceOptions {
    /// Options for a nested component.
    pub fn nested(slot_children: Vec<Child>, scoped_slots: Option<ScopedSlots>) -> Self {
        Self {
            is_component: true,
            slot_children,
            scoped_slots,
        }
    }
}

// =============================================================================
// Instance
// =============================================================================

thread_local! {
    /// Counter for instance uids.
    static UID_COUNTER: Cell<u64> = const { Cell::new(0) };
}

pub struct ComponentInstance {
    uid: u64,
    ctor: Rc<Constructor>,
    base: Rc<Base>,
    flags: Cell<InstanceFlags>,
    slot_children: Vec<Child>,
    scoped_slots: Option<ScopedSlots>,
    el: RefCell<Option<ElementRef>>,
    render_tree: RefCell<Option<VNode>>,
    stop_scope: RefCell<Option<Cleanup>>,
    destroy_callbacks: RefCell<Vec<Cleanup>>,
}

impl ComponentInstance {
    /// Create an instance. Nothing is rendered until `mount`.
    pub fn new(ctor: Rc<Constructor>, base: Rc<Base>, options: InstanceOptions) -> Rc<Self> {
        let uid = UID_COUNTER.with(|counter| {
            let uid = counter.get();
            counter.set(uid + 1);
            uid
        });

        let mut flags = InstanceFlags::NONE;
        if options.is_component {
            flags |= InstanceFlags::IS_COMPONENT;
        }

        Rc::new(Self {
            uid,
            ctor,
            base,
            flags: Cell::new(flags),
            slot_children: options.slot_children,
            scoped_slots: options.scoped_slots,
            el: RefCell::new(None),
            render_tree: RefCell::new(None),
            stop_scope: RefCell::new(None),
            destroy_callbacks: RefCell::new(Vec::new()),
        })
    }

    /// Create an app root from a plain definition.
    pub fn root(base: &Rc<Base>, def: ComponentDef) -> Result<Rc<Self>> {
        let ctor = base.extend(&Rc::new(def))?;
        Ok(Self::new(ctor, base.clone(), InstanceOptions::default()))
    }

    pub fn uid(&self) -> u64 {
        self.uid
    }

    pub fn constructor(&self) -> &Rc<Constructor> {
        &self.ctor
    }

    /// Component name, or `anonymous-{cid}`.
    pub fn name(&self) -> String {
        match self.ctor.name() {
            Some(name) => name.to_string(),
            None => format!("anonymous-{}", self.ctor.cid()),
        }
    }

    pub fn flags(&self) -> InstanceFlags {
        self.flags.get()
    }

    pub fn is_component(&self) -> bool {
        self.flags().contains(InstanceFlags::IS_COMPONENT)
    }

    pub fn is_mounted(&self) -> bool {
        self.flags().contains(InstanceFlags::MOUNTED)
    }

    pub fn is_destroyed(&self) -> bool {
        self.flags().contains(InstanceFlags::DESTROYED)
    }

    /// Mount target, if one was given.
    pub fn el(&self) -> Option<ElementRef> {
        self.el.borrow().clone()
    }

    /// Tree produced by the last render.
    pub fn render_tree(&self) -> Ref<'_, Option<VNode>> {
        self.render_tree.borrow()
    }

    /// Raw children the parent passed to this component.
    pub fn slot_children(&self) -> &[Child] {
        &self.slot_children
    }

    pub fn scoped_slots(&self) -> Option<&ScopedSlots> {
        self.scoped_slots.as_ref()
    }

    // =========================================================================
    // Mount
    // =========================================================================

    /// Render this instance and keep its tree.
    ///
    /// With `target = None` the instance renders without being attached
    /// anywhere; that is how nested components are mounted by `init`.
    /// Mounting again re-renders and replaces the previous scope.
    pub fn mount(self: &Rc<Self>, target: Option<ElementRef>) -> Result<Rc<Self>> {
        *self.el.borrow_mut() = target;

        if let Some(stop) = self.stop_scope.borrow_mut().take() {
            stop();
        }

        let tree = self.render()?;
        *self.render_tree.borrow_mut() = Some(tree);
        self.set_flag(InstanceFlags::MOUNTED);

        tracing::debug!(
            uid = self.uid,
            cid = self.ctor.cid(),
            component = %self.name(),
            nested = self.is_component(),
            "mounted component instance"
        );
        Ok(self.clone())
    }

    fn render(self: &Rc<Self>) -> Result<VNode> {
        let Some(render) = self.ctor.options().get_render().cloned() else {
            return Ok(create_text_node(&**self, ""));
        };

        let output: Rc<RefCell<Option<Result<VNode>>>> = Rc::new(RefCell::new(None));
        let scope = effect_scope(false);

        let vm = self.clone();
        let output_for_render = output.clone();
        scope.run(move || {
            let uid = vm.uid;
            on_scope_dispose(move || {
                tracing::trace!(uid, "render scope disposed");
            });
            *output_for_render.borrow_mut() = Some(render(&*vm));
        });

        *self.stop_scope.borrow_mut() = Some(Box::new(move || {
            scope.stop();
        }));

        let result = output
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Ok(create_text_node(&**self, "")));
        result.map_err(|err| VdomError::render(self.name(), err))
    }

    // =========================================================================
    // Insert / Destroy
    // =========================================================================

    /// Record that the component's element reached the document.
    pub fn mark_inserted(&self) {
        self.set_flag(InstanceFlags::INSERTED);
    }

    /// Register a callback to run when this instance is destroyed.
    pub fn on_destroy(&self, callback: impl FnOnce() + 'static) {
        self.destroy_callbacks.borrow_mut().push(Box::new(callback));
    }

    /// Tear down: run destroy callbacks, stop the render scope, drop the tree.
    ///
    /// Calling it twice is a no-op.
    pub fn destroy(&self) {
        if self.is_destroyed() {
            return;
        }

        let callbacks = std::mem::take(&mut *self.destroy_callbacks.borrow_mut());
        for callback in callbacks {
            callback();
        }

        if let Some(stop) = self.stop_scope.borrow_mut().take() {
            stop();
        }
        self.render_tree.borrow_mut().take();
        self.set_flag(InstanceFlags::DESTROYED);

        tracing::debug!(uid = self.uid, component = %self.name(), "destroyed component instance");
    }

    fn set_flag(&self, flag: InstanceFlags) {
        self.flags.set(self.flags.get() | flag);
    }
}

impl RenderContext for ComponentInstance {
    fn base(&self) -> &Rc<Base> {
        &self.base
    }

    fn resolve_component(&self, tag: &str) -> Option<ComponentDefinition> {
        self.ctor
            .resolve_component(tag)
            .or_else(|| self.base.resolve_component(tag))
    }
}

impl fmt::Debug for ComponentInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentInstance")
            .field("uid", &self.uid)
            .field("cid", &self.ctor.cid())
            .field("flags", &self.flags.get())
            .field("el", &self.el.borrow())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;
    use crate::primitives::{create_element, Children};

    fn setup() -> Rc<Base> {
        config::reset_config();
        Base::new()
    }

    #[test]
    fn test_root_instance_is_not_nested() {
        let base = setup();
        let vm = ComponentInstance::root(&base, ComponentDef::new().name("App")).unwrap();

        assert!(!vm.is_component());
        assert!(!vm.is_mounted());
        assert_eq!(vm.name(), "App");
        assert!(vm.render_tree().is_none());
    }

    #[test]
    fn test_mount_renders_tree() {
        let base = setup();
        let def = ComponentDef::new().render(|vm| create_element(vm, "div", None, "hi"));
        let vm = ComponentInstance::root(&base, def).unwrap();

        let mounted = vm.mount(Some(ElementRef::new("app"))).unwrap();
        assert!(Rc::ptr_eq(&vm, &mounted));
        assert!(vm.is_mounted());
        assert_eq!(vm.el(), Some(ElementRef::new("app")));

        let tree = vm.render_tree();
        let tree = tree.as_ref().unwrap();
        assert_eq!(tree.tag(), Some("div"));
        assert_eq!(tree.children().unwrap()[0].text_content(), Some("hi"));
    }

    #[test]
    fn test_mount_without_render_yields_empty_text() {
        let base = setup();
        let vm = ComponentInstance::root(&base, ComponentDef::new()).unwrap();
        vm.mount(None).unwrap();

        assert!(vm.el().is_none());
        assert_eq!(vm.render_tree().as_ref().and_then(VNode::text_content), Some(""));
    }

    #[test]
    fn test_render_error_is_wrapped() {
        let base = setup();
        let def = ComponentDef::new()
            .name("Broken")
            .render(|vm| create_element(vm, "not-registered", None, Children::Empty));
        let vm = ComponentInstance::root(&base, def).unwrap();

        let err = vm.mount(None).unwrap_err();
        match err {
            VdomError::Render { component, source } => {
                assert_eq!(component, "Broken");
                assert!(matches!(*source, VdomError::UnknownElement { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!vm.is_mounted());
    }

    #[test]
    fn test_local_then_global_lookup() {
        let base = setup();
        base.component("GlobalThing", ComponentDef::new()).unwrap();
        let vm = ComponentInstance::root(
            &base,
            ComponentDef::new().component("LocalThing", ComponentDef::new()),
        )
        .unwrap();

        assert!(vm.resolve_component("LocalThing").is_some());
        assert!(vm.resolve_component("global-thing").is_some());
        assert!(vm.resolve_component("Missing").is_none());
    }

    #[test]
    fn test_destroy_runs_callbacks_once() {
        use std::cell::Cell;

        let base = setup();
        let vm = ComponentInstance::root(&base, ComponentDef::new()).unwrap();
        vm.mount(None).unwrap();

        let calls = Rc::new(Cell::new(0));
        let calls_clone = calls.clone();
        vm.on_destroy(move || calls_clone.set(calls_clone.get() + 1));

        vm.destroy();
        vm.destroy();

        assert_eq!(calls.get(), 1);
        assert!(vm.is_destroyed());
        assert!(vm.render_tree().is_none());
    }

    #[test]
    fn test_render_runs_in_scope_stopped_on_destroy() {
        use std::cell::Cell;

        let base = setup();
        let in_scope = Rc::new(Cell::new(false));
        let disposed = Rc::new(Cell::new(false));
        let (in_scope_render, disposed_render) = (in_scope.clone(), disposed.clone());
        let def = ComponentDef::new().render(move |vm| {
            in_scope_render.set(spark_signals::get_current_scope().is_some());
            let disposed = disposed_render.clone();
            on_scope_dispose(move || disposed.set(true));
            create_element(vm, "div", None, Children::Empty)
        });
        let vm = ComponentInstance::root(&base, def).unwrap();

        vm.mount(None).unwrap();
        assert!(in_scope.get());
        assert!(!disposed.get());

        vm.destroy();
        assert!(disposed.get());
    }

    #[test]
    fn test_uids_are_unique() {
        let base = setup();
        let a = ComponentInstance::root(&base, ComponentDef::new()).unwrap();
        let b = ComponentInstance::root(&base, ComponentDef::new()).unwrap();
        assert_ne!(a.uid(), b.uid());
    }
}
