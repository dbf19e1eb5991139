//! `<form>` element wrapper

use super::{prop_get, string_prop, typed_wrapper, ElementOps, HtmlElementOps};
use crate::error::Result;

typed_wrapper!(
    /// A `<form>` element
    HtmlFormElement,
    class = "HTMLFormElement"
);

impl ElementOps for HtmlFormElement {}
impl HtmlElementOps for HtmlFormElement {}

impl HtmlFormElement {
    string_prop!(
        /// The form's name
        name, set_name, "name"
    );

    string_prop!(
        /// URL the form data is sent to
        action, set_action, "action"
    );

    string_prop!(
        /// HTTP method used to submit (`get` or `post`)
        method, set_method, "method"
    );

    prop_get!(
        /// Number of controls in the form
        length: i64, "length"
    );

    /// Submit the form
    pub async fn submit(&self) -> Result<()> {
        self.handle.evaluate_fn_unit("e => e.submit()", vec![]).await
    }

    /// Reset all controls to their initial values
    pub async fn reset(&self) -> Result<()> {
        self.handle.evaluate_fn_unit("e => e.reset()", vec![]).await
    }

    /// Whether all controls satisfy their validation constraints
    pub async fn check_validity(&self) -> Result<bool> {
        self.handle.evaluate_fn("e => e.checkValidity()", vec![]).await
    }
}
