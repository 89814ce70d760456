//! Error types for vnode construction and component instantiation.
//!
//! Every failure here is a developer-facing authoring or contract mistake.
//! Errors surface synchronously to the render function that triggered them.

/// Errors raised while building vnodes or instantiating components.
#[derive(Debug, thiserror::Error)]
pub enum VdomError {
    #[error("element tag must not be empty")]
    EmptyTag,

    #[error("unknown element <{tag}>: not a host tag and not a registered component")]
    UnknownElement { tag: String },

    #[error("invalid component name \"{name}\": {reason}")]
    InvalidComponentName { name: String, reason: String },

    #[error("init hook called on <{tag}> which is not a component placeholder")]
    MissingComponentOptions { tag: String },

    #[error("component <{tag}> was already initialized for this vnode")]
    AlreadyInitialized { tag: String },

    #[error("failed to render component <{component}>")]
    Render {
        component: String,
        #[source]
        source: Box<VdomError>,
    },
}

impl VdomError {
    pub(crate) fn unknown_element(tag: impl Into<String>) -> Self {
        Self::UnknownElement { tag: tag.into() }
    }

    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidComponentName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn render(component: impl Into<String>, source: VdomError) -> Self {
        Self::Render {
            component: component.into(),
            source: Box::new(source),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VdomError>;
