//! Inline style declaration wrapper

use serde::de::DeserializeOwned;

use crate::elements::typed_wrapper;
use crate::error::Result;
use crate::runtime::CallArg;

typed_wrapper!(
    /// A `CSSStyleDeclaration`, usually an element's inline `style`
    CssStyleDeclaration,
    class = "CSSStyleDeclaration"
);

impl CssStyleDeclaration {
    /// Textual representation of the declaration block
    pub async fn css_text(&self) -> Result<String> {
        self.handle.evaluate_fn("e => e.cssText", vec![]).await
    }

    /// Replace the whole declaration block
    pub async fn set_css_text(&self, value: &str) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, v) => { e.cssText = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Number of explicitly set properties
    pub async fn length(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.length", vec![]).await
    }

    /// Name of the property at the given index, empty when out of range
    pub async fn item(&self, index: i64) -> Result<String> {
        self.handle
            .evaluate_fn("(e, i) => e.item(i)", vec![CallArg::json(index)?])
            .await
    }

    /// Value of a property, empty when the property is not set
    pub async fn get_property_value(&self, name: &str) -> Result<String> {
        self.handle
            .evaluate_fn("(e, n) => e.getPropertyValue(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Value of a property, coerced into `T`
    pub async fn get_property_value_as<T>(&self, name: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.handle
            .evaluate_fn("(e, n) => e.getPropertyValue(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Whether the property carries the `important` priority
    pub async fn get_property_priority(&self, name: &str) -> Result<bool> {
        self.handle
            .evaluate_fn(
                "(e, n) => e.getPropertyPriority(n) === 'important'",
                vec![CallArg::json(name)?],
            )
            .await
    }

    /// Set a property, optionally marking it `important`
    pub async fn set_property(&self, name: &str, value: &str, important: bool) -> Result<()> {
        self.handle
            .evaluate_fn_unit(
                "(e, n, v, p) => e.setProperty(n, v, p ? 'important' : '')",
                vec![CallArg::json(name)?, CallArg::json(value)?, CallArg::json(important)?],
            )
            .await
    }

    /// Remove a property, returning its previous value
    pub async fn remove_property(&self, name: &str) -> Result<String> {
        self.handle
            .evaluate_fn("(e, n) => e.removeProperty(n)", vec![CallArg::json(name)?])
            .await
    }
}
