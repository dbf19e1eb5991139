//! Generic HTML element wrappers
//!
//! [`HtmlElement`] accepts any `HTML*Element` remote class and is the
//! fallback wrapper when no specific type matches. The other wrappers here
//! add nothing beyond their class check.

use super::{typed_wrapper, ElementOps, HtmlElementOps};

typed_wrapper!(
    /// Any HTML element
    ///
    /// Accepts every `HTML*Element` class, including classes this crate has
    /// no dedicated wrapper for (e.g. `HTMLCanvasElement`).
    HtmlElement,
    accepts = |c: &str| c.starts_with("HTML") && c.ends_with("Element")
);

impl ElementOps for HtmlElement {}
impl HtmlElementOps for HtmlElement {}

typed_wrapper!(
    /// A `<div>` element
    HtmlDivElement,
    class = "HTMLDivElement"
);

impl ElementOps for HtmlDivElement {}
impl HtmlElementOps for HtmlDivElement {}

typed_wrapper!(
    /// A `<span>` element
    HtmlSpanElement,
    class = "HTMLSpanElement"
);

impl ElementOps for HtmlSpanElement {}
impl HtmlElementOps for HtmlSpanElement {}

typed_wrapper!(
    /// A `<p>` element
    HtmlParagraphElement,
    class = "HTMLParagraphElement"
);

impl ElementOps for HtmlParagraphElement {}
impl HtmlElementOps for HtmlParagraphElement {}

typed_wrapper!(
    /// The `<body>` element
    HtmlBodyElement,
    class = "HTMLBodyElement"
);

impl ElementOps for HtmlBodyElement {}
impl HtmlElementOps for HtmlBodyElement {}

typed_wrapper!(
    /// An `<h1>`..`<h6>` element
    HtmlHeadingElement,
    class = "HTMLHeadingElement"
);

impl ElementOps for HtmlHeadingElement {}
impl HtmlElementOps for HtmlHeadingElement {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::TypedDomHandle;

    #[test]
    fn test_html_element_accepts_any_html_class() {
        assert!(HtmlElement::accepts("HTMLButtonElement"));
        assert!(HtmlElement::accepts("HTMLCanvasElement"));
        assert!(!HtmlElement::accepts("SVGSVGElement"));
        assert!(!HtmlElement::accepts("CSSStyleDeclaration"));
    }

    #[test]
    fn test_specific_wrappers_reject_other_classes() {
        assert!(HtmlDivElement::accepts("HTMLDivElement"));
        assert!(!HtmlDivElement::accepts("HTMLSpanElement"));
        assert!(HtmlHeadingElement::accepts("HTMLHeadingElement"));
        assert!(!HtmlBodyElement::accepts("HTMLDivElement"));
    }
}
