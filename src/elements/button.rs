//! `<button>` element wrapper

use serde::{Deserialize, Serialize};

use super::{bool_prop, string_prop, typed_wrapper, ElementOps, HtmlElementOps};
use crate::error::Result;
use crate::runtime::CallArg;

/// Behavior of a `<button>` when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    /// Submits the enclosing form
    Submit,
    /// Resets the enclosing form
    Reset,
    /// No default behavior
    Button,
}

typed_wrapper!(
    /// A `<button>` element
    HtmlButtonElement,
    class = "HTMLButtonElement"
);

impl ElementOps for HtmlButtonElement {}
impl HtmlElementOps for HtmlButtonElement {}

impl HtmlButtonElement {
    bool_prop!(
        /// Whether the button is disabled
        disabled, set_disabled, "disabled"
    );

    string_prop!(
        /// The button's form control name
        name, set_name, "name"
    );

    string_prop!(
        /// The value submitted with the form
        value, set_value, "value"
    );

    /// The button's type
    pub async fn button_type(&self) -> Result<ButtonType> {
        self.handle.evaluate_fn("e => e.type", vec![]).await
    }

    /// Set the button's type
    pub async fn set_button_type(&self, value: ButtonType) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, v) => { e.type = v; }", vec![CallArg::json(value)?])
            .await
    }
}
