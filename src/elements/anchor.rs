//! `<a>` element wrapper

use super::{string_prop, typed_wrapper, ElementOps, HtmlElementOps};

typed_wrapper!(
    /// An `<a>` anchor element
    HtmlAnchorElement,
    class = "HTMLAnchorElement"
);

impl ElementOps for HtmlAnchorElement {}
impl HtmlElementOps for HtmlAnchorElement {}

impl HtmlAnchorElement {
    string_prop!(
        /// The anchor's href, resolved to an absolute URL
        href, set_href, "href"
    );

    string_prop!(
        /// Where to display the linked resource (e.g. `_blank`)
        target, set_target, "target"
    );

    string_prop!(
        /// Relationship of the target object to the link object
        rel, set_rel, "rel"
    );

    string_prop!(
        /// The anchor's text content
        text, set_text, "text"
    );
}
