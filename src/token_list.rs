//! `DOMTokenList` wrapper

use crate::elements::typed_wrapper;
use crate::error::Result;
use crate::runtime::CallArg;

typed_wrapper!(
    /// A `DOMTokenList`, usually an element's `classList`
    DomTokenList,
    class = "DOMTokenList"
);

impl DomTokenList {
    /// Number of tokens in the list
    pub async fn length(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.length", vec![]).await
    }

    /// The serialized token list (the underlying attribute value)
    pub async fn value(&self) -> Result<String> {
        self.handle.evaluate_fn("e => e.value", vec![]).await
    }

    /// The token at the given index, `None` when out of range
    pub async fn item(&self, index: i64) -> Result<Option<String>> {
        self.handle
            .evaluate_fn("(e, i) => e.item(i)", vec![CallArg::json(index)?])
            .await
    }

    /// Whether the list contains the token
    pub async fn contains(&self, token: &str) -> Result<bool> {
        self.handle
            .evaluate_fn("(e, t) => e.contains(t)", vec![CallArg::json(token)?])
            .await
    }

    /// Add a token; adding an existing token is a no-op
    pub async fn add(&self, token: &str) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, t) => e.add(t)", vec![CallArg::json(token)?])
            .await
    }

    /// Remove a token; removing an absent token is a no-op
    pub async fn remove(&self, token: &str) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, t) => e.remove(t)", vec![CallArg::json(token)?])
            .await
    }

    /// Toggle a token, returning whether it is present afterwards
    pub async fn toggle(&self, token: &str) -> Result<bool> {
        self.handle
            .evaluate_fn("(e, t) => e.toggle(t)", vec![CallArg::json(token)?])
            .await
    }

    /// All tokens, in list order
    pub async fn to_vec(&self) -> Result<Vec<String>> {
        self.handle
            .evaluate_fn("e => Array.from(e)", vec![])
            .await
    }
}
