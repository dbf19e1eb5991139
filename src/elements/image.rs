//! `<img>` element wrapper

use super::{prop_get, string_prop, typed_wrapper, ElementOps, HtmlElementOps};

typed_wrapper!(
    /// An `<img>` element
    HtmlImageElement,
    class = "HTMLImageElement"
);

impl ElementOps for HtmlImageElement {}
impl HtmlElementOps for HtmlImageElement {}

impl HtmlImageElement {
    string_prop!(
        /// The image URL, resolved to an absolute URL
        src, set_src, "src"
    );

    string_prop!(
        /// Alternative text shown when the image cannot be displayed
        alt, set_alt, "alt"
    );

    prop_get!(
        /// Intrinsic width of the image in CSS pixels
        natural_width: i64, "naturalWidth"
    );

    prop_get!(
        /// Intrinsic height of the image in CSS pixels
        natural_height: i64, "naturalHeight"
    );

    prop_get!(
        /// Whether the image has finished loading
        complete: bool, "complete"
    );
}
