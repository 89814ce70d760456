//! Factory configuration signals.
//!
//! Thread-local signals holding the knobs the node factory and component
//! bridge read on every call. Set them once at startup, or per test.

use spark_signals::{signal, Signal};
use std::cell::RefCell;

/// Default marker placed in front of synthesized component tags.
pub const DEFAULT_COMPONENT_TAG_PREFIX: &str = "vue-component";

thread_local! {
    static COMPONENT_TAG_PREFIX: RefCell<Signal<String>> =
        RefCell::new(signal(DEFAULT_COMPONENT_TAG_PREFIX.to_string()));
    static GUARD_DOUBLE_INIT: RefCell<Signal<bool>> = RefCell::new(signal(true));
    static VALIDATE_COMPONENT_NAMES: RefCell<Signal<bool>> = RefCell::new(signal(true));
}

// =============================================================================
// Component Tags
// =============================================================================

/// Marker used when synthesizing component placeholder tags.
pub fn component_tag_prefix() -> String {
    COMPONENT_TAG_PREFIX.with(|p| p.borrow().get())
}

/// Set the component tag marker.
pub fn set_component_tag_prefix(prefix: impl Into<String>) {
    let prefix = prefix.into();
    COMPONENT_TAG_PREFIX.with(|p| p.borrow().set(prefix));
}

// =============================================================================
// Hook Guards
// =============================================================================

/// Whether a second `init` on the same vnode is rejected.
pub fn guard_double_init() -> bool {
    GUARD_DOUBLE_INIT.with(|g| g.borrow().get())
}

pub fn set_guard_double_init(enabled: bool) {
    GUARD_DOUBLE_INIT.with(|g| g.borrow().set(enabled));
}

// =============================================================================
// Definition Checks
// =============================================================================

/// Whether `Base::extend` validates component names.
pub fn validate_component_names() -> bool {
    VALIDATE_COMPONENT_NAMES.with(|v| v.borrow().get())
}

pub fn set_validate_component_names(enabled: bool) {
    VALIDATE_COMPONENT_NAMES.with(|v| v.borrow().set(enabled));
}

// =============================================================================
// Snapshot
// =============================================================================

/// All factory settings at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub component_tag_prefix: String,
    pub guard_double_init: bool,
    pub validate_component_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            component_tag_prefix: DEFAULT_COMPONENT_TAG_PREFIX.to_string(),
            guard_double_init: true,
            validate_component_names: true,
        }
    }
}

/// Read the current settings.
pub fn config() -> Config {
    Config {
        component_tag_prefix: component_tag_prefix(),
        guard_double_init: guard_double_init(),
        validate_component_names: validate_component_names(),
    }
}

/// Apply every setting from a snapshot.
pub fn set_config(config: Config) {
    set_component_tag_prefix(config.component_tag_prefix);
    set_guard_double_init(config.guard_double_init);
    set_validate_component_names(config.validate_component_names);
}

/// Restore defaults (for testing).
pub fn reset_config() {
    set_config(Config::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        reset_config();
        assert_eq!(component_tag_prefix(), "vue-component");
        assert!(guard_double_init());
        assert!(validate_component_names());
        assert_eq!(config(), Config::default());
    }

    #[test]
    fn test_set_config() {
        set_config(Config {
            component_tag_prefix: "x-comp".to_string(),
            guard_double_init: false,
            validate_component_names: false,
        });
        assert_eq!(component_tag_prefix(), "x-comp");
        assert!(!guard_double_init());
        assert!(!validate_component_names());

        reset_config();
        assert_eq!(component_tag_prefix(), DEFAULT_COMPONENT_TAG_PREFIX);
    }
}
