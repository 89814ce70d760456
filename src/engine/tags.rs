//! Tag Classification - Host tag lookup.
//!
//! Decides whether a tag name is understood natively by the host platform or
//! must be resolved as a component. The classifier is a seam: the base
//! constructor carries one, and platforms can supply their own.

use std::collections::HashSet;

use crate::types::TagFlags;

/// Host tag lookup.
pub trait TagClassifier {
    /// Flags for `tag`; empty when the tag is not a host tag.
    fn classify(&self, tag: &str) -> TagFlags;

    fn is_host_tag(&self, tag: &str) -> bool {
        self.classify(tag).intersects(TagFlags::HTML | TagFlags::SVG)
    }
}

// =============================================================================
// Web Tag Lists
// =============================================================================

const HTML_TAGS: &[&str] = &[
    "html", "body", "base", "head", "link", "meta", "style", "title",
    "address", "article", "aside", "footer", "header", "h1", "h2", "h3", "h4", "h5", "h6",
    "hgroup", "nav", "section",
    "div", "dd", "dl", "dt", "figcaption", "figure", "picture", "hr", "img", "li", "main",
    "ol", "p", "pre", "ul",
    "a", "b", "abbr", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em", "i", "kbd",
    "mark", "q", "rp", "rt", "rtc", "ruby", "s", "samp", "small", "span", "strong", "sub",
    "sup", "time", "u", "var", "wbr",
    "area", "audio", "map", "track", "video",
    "embed", "object", "param", "source",
    "canvas", "script", "noscript", "del", "ins",
    "caption", "col", "colgroup", "table", "thead", "tbody", "td", "th", "tr",
    "button", "datalist", "fieldset", "form", "input", "label", "legend", "meter",
    "optgroup", "option", "output", "progress", "select", "textarea",
    "details", "dialog", "menu", "menuitem", "summary",
    "content", "element", "shadow", "template", "blockquote", "iframe", "tfoot",
];

// camelCase tags are listed in both spellings.
const SVG_TAGS: &[&str] = &[
    "svg", "animate", "circle", "clippath", "clipPath", "cursor", "defs", "desc", "ellipse",
    "filter", "font-face", "foreignobject", "foreignObject", "g", "glyph", "image", "line",
    "marker", "mask", "missing-glyph", "path", "pattern", "polygon", "polyline", "rect",
    "switch", "symbol", "text", "textpath", "textPath", "tspan", "use", "view",
];

// Every void tag is also an HTML tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Classifier for browser-style HTML and SVG tags.
///
/// Lookups are case-sensitive, so `Text` or `View` stay free for components.
#[derive(Debug, Clone)]
pub struct WebTagClassifier {
    html: HashSet<&'static str>,
    svg: HashSet<&'static str>,
    void: HashSet<&'static str>,
}

impl WebTagClassifier {
    pub fn new() -> Self {
        Self {
            html: HTML_TAGS.iter().copied().collect(),
            svg: SVG_TAGS.iter().copied().collect(),
            void: VOID_TAGS.iter().copied().collect(),
        }
    }
}

impl Default for WebTagClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TagClassifier for WebTagClassifier {
    fn classify(&self, tag: &str) -> TagFlags {
        let mut flags = TagFlags::NONE;
        if self.html.contains(tag) {
            flags |= TagFlags::HTML;
        }
        if self.svg.contains(tag) {
            flags |= TagFlags::SVG;
        }
        if self.void.contains(tag) {
            flags |= TagFlags::VOID;
        }
        flags
    }
}
