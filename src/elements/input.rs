//! `<input>` element wrapper

use super::{bool_prop, string_prop, typed_wrapper, ElementOps, HtmlElementOps};
use crate::error::Result;

typed_wrapper!(
    /// An `<input>` element
    HtmlInputElement,
    class = "HTMLInputElement"
);

impl ElementOps for HtmlInputElement {}
impl HtmlElementOps for HtmlInputElement {}

impl HtmlInputElement {
    string_prop!(
        /// The current value of the control
        value, set_value, "value"
    );

    string_prop!(
        /// The control's form name
        name, set_name, "name"
    );

    string_prop!(
        /// The input type (e.g. `text`, `checkbox`)
        input_type, set_input_type, "type"
    );

    string_prop!(
        /// Hint shown while the control is empty
        placeholder, set_placeholder, "placeholder"
    );

    bool_prop!(
        /// Checked state of a checkbox or radio input
        checked, set_checked, "checked"
    );

    bool_prop!(
        /// Visual indeterminate state of a checkbox
        indeterminate, set_indeterminate, "indeterminate"
    );

    bool_prop!(
        /// Whether the control is disabled
        disabled, set_disabled, "disabled"
    );

    bool_prop!(
        /// Whether the control is read-only
        read_only, set_read_only, "readOnly"
    );

    bool_prop!(
        /// Whether a value is required to submit the form
        required, set_required, "required"
    );

    /// Select all text in the control
    pub async fn select(&self) -> Result<()> {
        self.handle.evaluate_fn_unit("e => e.select()", vec![]).await
    }
}
