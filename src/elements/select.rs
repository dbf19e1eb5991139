//! `<select>` and `<option>` element wrappers

use super::{bool_prop, prop_get, string_prop, typed_wrapper, ElementOps, HtmlElementOps};
use crate::collections::HtmlCollection;
use crate::error::{Error, Result};
use crate::factory::TypedDomHandle;
use crate::runtime::CallArg;

typed_wrapper!(
    /// A `<select>` element
    HtmlSelectElement,
    class = "HTMLSelectElement"
);

impl ElementOps for HtmlSelectElement {}
impl HtmlElementOps for HtmlSelectElement {}

impl HtmlSelectElement {
    string_prop!(
        /// Value of the first selected option, or the empty string
        value, set_value, "value"
    );

    string_prop!(
        /// The control's form name
        name, set_name, "name"
    );

    bool_prop!(
        /// Whether the control is disabled
        disabled, set_disabled, "disabled"
    );

    bool_prop!(
        /// Whether multiple options may be selected
        multiple, set_multiple, "multiple"
    );

    bool_prop!(
        /// Whether a selection is required to submit the form
        required, set_required, "required"
    );

    prop_get!(
        /// Number of options in the list
        length: i64, "length"
    );

    prop_get!(
        /// Either `select-one` or `select-multiple`
        select_type: String, "type"
    );

    /// Index of the first selected option, `-1` when none is selected
    pub async fn selected_index(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.selectedIndex", vec![]).await
    }

    /// Select the option at the given index
    pub async fn set_selected_index(&self, index: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, i) => { e.selectedIndex = i; }", vec![CallArg::json(index)?])
            .await
    }

    /// The option at the given index, `None` when out of range
    pub async fn item(&self, index: i64) -> Result<Option<HtmlOptionElement>> {
        self.handle
            .evaluate_fn_handle("(e, i) => e.item(i)", vec![CallArg::json(index)?])
            .await
    }

    /// The option whose id or name matches, `None` when absent
    pub async fn named_item(&self, name: &str) -> Result<Option<HtmlOptionElement>> {
        self.handle
            .evaluate_fn_handle("(e, n) => e.namedItem(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Append an existing option to the list
    pub async fn add_option(&self, option: &HtmlOptionElement) -> Result<()> {
        self.handle
            .evaluate_fn_unit(
                "(e, o) => e.add(o)",
                vec![CallArg::handle(option.handle().object_id())],
            )
            .await
    }

    /// Create a new option with the given text and value and append it
    pub async fn add_new_option(&self, text: &str, value: &str) -> Result<()> {
        self.handle
            .evaluate_fn_unit(
                "(e, t, v) => e.add(new Option(t, v))",
                vec![CallArg::json(text)?, CallArg::json(value)?],
            )
            .await
    }

    /// Remove the option at the given index
    pub async fn remove_option(&self, index: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, i) => e.remove(i)", vec![CallArg::json(index)?])
            .await
    }

    /// The live collection of the list's options
    pub async fn options(&self) -> Result<HtmlCollection<HtmlOptionElement>> {
        self.handle
            .property_handle("options")
            .await?
            .ok_or_else(|| Error::internal("select has no options collection"))
    }
}

typed_wrapper!(
    /// An `<option>` element
    HtmlOptionElement,
    class = "HTMLOptionElement"
);

impl ElementOps for HtmlOptionElement {}
impl HtmlElementOps for HtmlOptionElement {}

impl HtmlOptionElement {
    string_prop!(
        /// The value submitted with the form
        value, set_value, "value"
    );

    string_prop!(
        /// The option's displayed text
        text, set_text, "text"
    );

    string_prop!(
        /// Label shown in place of the text when set
        label, set_label, "label"
    );

    bool_prop!(
        /// Whether the option is currently selected
        selected, set_selected, "selected"
    );

    bool_prop!(
        /// Whether the option is disabled
        disabled, set_disabled, "disabled"
    );

    prop_get!(
        /// Position within the enclosing select, `0` when detached
        index: i64, "index"
    );
}
