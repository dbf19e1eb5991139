//! `data-*` attribute map wrapper

use crate::elements::typed_wrapper;
use crate::error::Result;
use crate::runtime::CallArg;

typed_wrapper!(
    /// A `DOMStringMap`, an element's `dataset`
    ///
    /// Keys are camel-cased property names, so `data-my-flag` is read and
    /// written as `myFlag`.
    DomStringMap,
    class = "DOMStringMap"
);

impl DomStringMap {
    /// Value for a key, `None` when the attribute is absent
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        self.handle
            .evaluate_fn(
                "(e, k) => k in e ? e[k] : null",
                vec![CallArg::json(key)?],
            )
            .await
    }

    /// Set the value for a key, creating the `data-*` attribute
    pub async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.handle
            .evaluate_fn_unit(
                "(e, k, v) => { e[k] = v; }",
                vec![CallArg::json(key)?, CallArg::json(value)?],
            )
            .await
    }

    /// Remove a key and its `data-*` attribute
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, k) => { delete e[k]; }", vec![CallArg::json(key)?])
            .await
    }

    /// All entries of the map, in enumeration order
    pub async fn to_vec(&self) -> Result<Vec<(String, String)>> {
        self.handle.string_map().await
    }
}
