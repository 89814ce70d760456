//! Component Registry - Definitions, constructors, and the base constructor.
//!
//! Manages how component definitions become constructible types:
//! - Definition ids (stable identity per `ComponentDef`)
//! - `Base::extend` memoized by definition id, handing out unique `cid`s
//! - Global component registration on the base
//! - Asset-style name lookup (as written, camelCase, PascalCase)
//!
//! # Identity
//!
//! Extending the same definition twice returns the same `Rc<Constructor>`,
//! so the `cid` used for placeholder tags never changes between renders.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::config;
use crate::engine::instance::ComponentInstance;
use crate::engine::tags::{TagClassifier, WebTagClassifier};
use crate::error::{Result, VdomError};
use crate::primitives::VNode;
use crate::types::TagFlags;

// =============================================================================
// Definition Ids
// =============================================================================

thread_local! {
    /// Counter for definition identities.
    static DEF_ID_COUNTER: Cell<u64> = const { Cell::new(0) };
}

thread_local! {
    /// Counter for constructor ids, shared by every base on the thread.
    /// cid 0 is reserved for the base itself.
    static CID_COUNTER: Cell<u32> = const { Cell::new(1) };
}

fn next_cid() -> u32 {
    CID_COUNTER.with(|counter| {
        let cid = counter.get();
        counter.set(cid + 1);
        cid
    })
}

fn next_def_id() -> u64 {
    DEF_ID_COUNTER.with(|counter| {
        let id = counter.get();
        counter.set(id + 1);
        id
    })
}

// =============================================================================
// Component Definition
// =============================================================================

/// Render function of a component. Receives the live instance, which also
/// serves as the render context for nested `create_element` calls.
pub type RenderFn = Rc<dyn Fn(&ComponentInstance) -> Result<VNode>>;

/// Plain component configuration, before it is made constructible.
///
/// # Example
///
/// ```ignore
/// let child = ComponentDef::new()
///     .name("Child")
///     .render(|vm| create_element(vm, "span", None, "child"));
///
/// let parent = ComponentDef::new().component("Child", child);
/// ```
pub struct ComponentDef {
    id: u64,
    name: Option<String>,
    components: HashMap<String, ComponentDefinition>,
    render: Option<RenderFn>,
}

impl ComponentDef {
    pub fn new() -> Self {
        Self {
            id: next_def_id(),
            name: None,
            components: HashMap::new(),
            render: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Register a component local to this definition.
    pub fn component(mut self, tag: impl Into<String>, definition: impl Into<ComponentDefinition>) -> Self {
        self.components.insert(tag.into(), definition.into());
        self
    }

    pub fn render(mut self, render: impl Fn(&ComponentInstance) -> Result<VNode> + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Stable identity of this definition.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn components(&self) -> &HashMap<String, ComponentDefinition> {
        &self.components
    }

    pub fn get_render(&self) -> Option<&RenderFn> {
        self.render.as_ref()
    }
}

impl Default for ComponentDef {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComponentDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components: Vec<&str> = self.components.keys().map(String::as_str).collect();
        components.sort_unstable();
        f.debug_struct("ComponentDef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("components", &components)
            .field("render", &self.render.is_some())
            .finish()
    }
}

/// A component as found in a registry: plain configuration or an already
/// constructible type.
#[derive(Debug, Clone)]
pub enum ComponentDefinition {
    Options(Rc<ComponentDef>),
    Constructor(Rc<Constructor>),
}

impl From<ComponentDef> for ComponentDefinition {
    fn from(def: ComponentDef) -> Self {
        ComponentDefinition::Options(Rc::new(def))
    }
}

impl From<Rc<ComponentDef>> for ComponentDefinition {
    fn from(def: Rc<ComponentDef>) -> Self {
        ComponentDefinition::Options(def)
    }
}

impl From<Rc<Constructor>> for ComponentDefinition {
    fn from(ctor: Rc<Constructor>) -> Self {
        ComponentDefinition::Constructor(ctor)
    }
}

// =============================================================================
// Constructor
// =============================================================================

/// A constructible component type produced by `Base::extend`.
#[derive(Debug)]
pub struct Constructor {
    cid: u32,
    options: Rc<ComponentDef>,
}

impl Constructor {
    /// Unique identity token used in placeholder tags.
    pub fn cid(&self) -> u32 {
        self.cid
    }

    pub fn name(&self) -> Option<&str> {
        self.options.get_name()
    }

    pub fn options(&self) -> &Rc<ComponentDef> {
        &self.options
    }

    /// Look up a component registered locally on this constructor.
    pub fn resolve_component(&self, tag: &str) -> Option<ComponentDefinition> {
        resolve_asset(self.options.components(), tag).cloned()
    }
}

// =============================================================================
// Base Constructor
// =============================================================================

/// The root constructor every component type is extended from.
///
/// Carries the host tag classifier and the global component registry, and
/// memoizes `extend` per definition.
pub struct Base {
    classifier: Box<dyn TagClassifier>,
    components: RefCell<HashMap<String, ComponentDefinition>>,
    constructors: RefCell<HashMap<u64, Rc<Constructor>>>,
}

impl Base {
    /// Base with the web (HTML + SVG) tag classifier.
    pub fn new() -> Rc<Self> {
        Self::with_classifier(WebTagClassifier::new())
    }

    pub fn with_classifier(classifier: impl TagClassifier + 'static) -> Rc<Self> {
        Rc::new(Self {
            classifier: Box::new(classifier),
            components: RefCell::new(HashMap::new()),
            constructors: RefCell::new(HashMap::new()),
        })
    }

    pub fn cid(&self) -> u32 {
        0
    }

    pub fn classify(&self, tag: &str) -> TagFlags {
        self.classifier.classify(tag)
    }

    pub fn is_host_tag(&self, tag: &str) -> bool {
        self.classifier.is_host_tag(tag)
    }

    /// Turn a plain definition into a constructible type.
    ///
    /// The same definition always yields the same constructor.
    pub fn extend(&self, def: &Rc<ComponentDef>) -> Result<Rc<Constructor>> {
        if let Some(ctor) = self.constructors.borrow().get(&def.id()) {
            return Ok(ctor.clone());
        }

        if config::validate_component_names() {
            if let Some(name) = def.get_name() {
                self.validate_component_name(name)?;
            }
            for name in def.components().keys() {
                self.validate_component_name(name)?;
            }
        }

        let cid = next_cid();

        let ctor = Rc::new(Constructor {
            cid,
            options: def.clone(),
        });
        self.constructors.borrow_mut().insert(def.id(), ctor.clone());

        tracing::debug!(cid, def_id = def.id(), name = ?def.get_name(), "extended component definition");
        Ok(ctor)
    }

    /// Normalize any definition into a constructor.
    pub fn resolve_constructor(&self, definition: &ComponentDefinition) -> Result<Rc<Constructor>> {
        match definition {
            ComponentDefinition::Options(def) => self.extend(def),
            ComponentDefinition::Constructor(ctor) => Ok(ctor.clone()),
        }
    }

    /// Register a component visible from every context built on this base.
    pub fn component(&self, name: impl Into<String>, definition: impl Into<ComponentDefinition>) -> Result<()> {
        let name = name.into();
        if config::validate_component_names() {
            self.validate_component_name(&name)?;
        }
        self.components.borrow_mut().insert(name, definition.into());
        Ok(())
    }

    /// Look up a globally registered component.
    pub fn resolve_component(&self, tag: &str) -> Option<ComponentDefinition> {
        resolve_asset(&self.components.borrow(), tag).cloned()
    }

    /// Number of constructors created so far.
    pub fn constructor_count(&self) -> usize {
        self.constructors.borrow().len()
    }

    fn validate_component_name(&self, name: &str) -> Result<()> {
        let mut chars = name.chars();
        let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'));
        if !valid_start || !valid_rest {
            return Err(VdomError::invalid_name(
                name,
                "must start with a letter and contain only letters, digits, '-', '.' or '_'",
            ));
        }
        if matches!(name.to_ascii_lowercase().as_str(), "slot" | "component") {
            return Err(VdomError::invalid_name(name, "built-in tags cannot be used as component names"));
        }
        if self.is_host_tag(name) {
            return Err(VdomError::invalid_name(name, "host element tags cannot be used as component names"));
        }
        Ok(())
    }
}

impl fmt::Debug for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base")
            .field("components", &self.components.borrow().len())
            .field("constructors", &self.constructors.borrow().len())
            .finish()
    }
}

// =============================================================================
// Asset Lookup
// =============================================================================

/// Find `id` as written, then camelCased, then PascalCased.
fn resolve_asset<'a>(
    assets: &'a HashMap<String, ComponentDefinition>,
    id: &str,
) -> Option<&'a ComponentDefinition> {
    if let Some(found) = assets.get(id) {
        return Some(found);
    }
    let camel = camelize(id);
    if let Some(found) = assets.get(&camel) {
        return Some(found);
    }
    assets.get(&capitalize(&camel))
}

/// `my-comp` -> `myComp`
pub(crate) fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper_next = false;
    for c in s.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    if upper_next {
        out.push('-');
    }
    out
}

/// `myComp` -> `MyComp`
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        config::reset_config();
    }

    #[test]
    fn test_extend_memoizes_by_definition() {
        setup();
        let base = Base::new();
        let def = Rc::new(ComponentDef::new());

        let a = base.extend(&def).unwrap();
        let b = base.extend(&def).unwrap();

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.cid(), b.cid());
        assert_eq!(base.constructor_count(), 1);
    }

    #[test]
    fn test_distinct_definitions_get_distinct_cids() {
        setup();
        let base = Base::new();
        let a = base.extend(&Rc::new(ComponentDef::new())).unwrap();
        let b = base.extend(&Rc::new(ComponentDef::new())).unwrap();

        assert_ne!(a.cid(), b.cid());
        assert_ne!(a.cid(), base.cid());
        assert_ne!(b.cid(), base.cid());
    }

    #[test]
    fn test_cids_are_unique_across_bases() {
        setup();
        let a = Base::new();
        let b = Base::new();

        let foreign = a.extend(&Rc::new(ComponentDef::new())).unwrap();
        b.component("Foo", ComponentDefinition::Constructor(foreign.clone())).unwrap();
        let local = b.extend(&Rc::new(ComponentDef::new())).unwrap();

        assert_ne!(foreign.cid(), local.cid());
        let resolved = b.resolve_constructor(&b.resolve_component("Foo").unwrap()).unwrap();
        assert!(Rc::ptr_eq(&resolved, &foreign));
    }

    #[test]
    fn test_resolve_constructor_passes_constructors_through() {
        setup();
        let base = Base::new();
        let ctor = base.extend(&Rc::new(ComponentDef::new())).unwrap();

        let resolved = base
            .resolve_constructor(&ComponentDefinition::Constructor(ctor.clone()))
            .unwrap();
        assert!(Rc::ptr_eq(&ctor, &resolved));
        assert_eq!(base.constructor_count(), 1);
    }

    #[test]
    fn test_invalid_component_names() {
        setup();
        let base = Base::new();

        for name in ["1abc", "my comp", "slot", "div", "", "café", "x١"] {
            let def = Rc::new(ComponentDef::new().name(name));
            let err = base.extend(&def).unwrap_err();
            assert!(matches!(err, VdomError::InvalidComponentName { .. }), "{name}");
        }

        let def = Rc::new(ComponentDef::new().component("button", ComponentDef::new()));
        assert!(base.extend(&def).is_err());
        assert_eq!(base.constructor_count(), 0);
    }

    #[test]
    fn test_name_validation_can_be_disabled() {
        setup();
        config::set_validate_component_names(false);
        let base = Base::new();
        let def = Rc::new(ComponentDef::new().name("div"));
        assert!(base.extend(&def).is_ok());
        config::reset_config();
    }

    #[test]
    fn test_global_registration() {
        setup();
        let base = Base::new();
        base.component("MyButton", ComponentDef::new()).unwrap();

        assert!(base.resolve_component("MyButton").is_some());
        assert!(base.resolve_component("my-button").is_some());
        assert!(base.resolve_component("other").is_none());
        assert!(base.component("input", ComponentDef::new()).is_err());
    }

    #[test]
    fn test_local_lookup_variants() {
        setup();
        let base = Base::new();
        let def = Rc::new(
            ComponentDef::new()
                .component("todoItem", ComponentDef::new())
                .component("TodoList", ComponentDef::new()),
        );
        let ctor = base.extend(&def).unwrap();

        assert!(ctor.resolve_component("todoItem").is_some());
        assert!(ctor.resolve_component("todo-item").is_some());
        assert!(ctor.resolve_component("todo-list").is_some());
        assert!(ctor.resolve_component("TodoList").is_some());
        assert!(ctor.resolve_component("todo").is_none());
    }

    #[test]
    fn test_camelize_and_capitalize() {
        assert_eq!(camelize("my-comp"), "myComp");
        assert_eq!(camelize("a-b-c"), "aBC");
        assert_eq!(camelize("plain"), "plain");
        assert_eq!(capitalize("myComp"), "MyComp");
        assert_eq!(capitalize(""), "");
    }
}
