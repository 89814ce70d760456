//! Text Primitive - Plain text vnodes.
//!
//! Text never goes through tag classification or component lookup.

use crate::engine::RenderContext;
use super::vnode::VNode;

/// Create a text vnode.
///
/// The context is accepted so every factory has the same shape; text does
/// not need it.
pub fn create_text_node<C>(_ctx: &C, text: impl Into<String>) -> VNode
where
    C: RenderContext + ?Sized,
{
    VNode::text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Base;

    #[test]
    fn test_text_node() {
        let base = Base::new();
        let node = create_text_node(&base, "hello");

        assert!(node.is_text());
        assert_eq!(node.tag(), None);
        assert_eq!(node.text_content(), Some("hello"));
        assert!(node.key().is_none());
    }

    #[test]
    fn test_text_node_never_classified() {
        // A string that happens to be a host tag is still just text.
        let base = Base::new();
        let node = create_text_node(&base, "div");
        assert!(node.is_text());
        assert!(!node.is_element());
    }
}
