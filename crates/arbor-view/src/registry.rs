//! Tag registry
//!
//! Closed set of recognized element kinds. Pure lookup, no state.

/// Every recognized element tag, sorted for binary search
pub const VALID_ELEMENTS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "bdi",
    "bdo", "blockquote", "body", "button", "canvas", "caption", "cite",
    "code", "col", "colgroup", "data", "datalist", "dd", "del", "details",
    "dfn", "dialog", "div", "dl", "dt", "em", "embed", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "hr", "html", "i", "iframe", "img", "input", "ins",
    "kbd", "label", "legend", "li", "link", "main", "map", "mark", "menu",
    "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option",
    "output", "p", "picture", "pre", "progress", "q", "rp", "rt", "ruby",
    "s", "samp", "script", "section", "select", "slot", "small", "source",
    "span", "strong", "style", "sub", "summary", "sup", "table", "tbody",
    "td", "template", "textarea", "tfoot", "th", "thead", "time", "title",
    "tr", "track", "u", "ul", "var", "video", "wbr",
];

/// Rejected tag error, listing every valid identifier for discoverability
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{tag}' is not a valid HTML element. Valid elements are: {}", .valid.join(", "))]
pub struct InvalidTagError {
    /// The rejected input
    pub tag: String,
    /// The full set of accepted identifiers
    pub valid: &'static [&'static str],
}

impl InvalidTagError {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            valid: VALID_ELEMENTS,
        }
    }
}

/// Validate a tag, returning its canonical identifier.
///
/// Case-sensitive exact match against [`VALID_ELEMENTS`].
pub fn validate(tag: &str) -> Result<&'static str, InvalidTagError> {
    match VALID_ELEMENTS.binary_search(&tag) {
        Ok(i) => Ok(VALID_ELEMENTS[i]),
        Err(_) => Err(InvalidTagError::new(tag)),
    }
}
