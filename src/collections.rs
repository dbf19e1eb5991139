//! Typed wrappers for remote element collections
//!
//! [`HtmlCollection`] and [`NodeList`] are handles onto live browser-side
//! collections. `item` fetches a single member; `to_vec` materializes the
//! whole collection in one property sweep.

use std::marker::PhantomData;

use futures::Stream;

use crate::error::Result;
use crate::factory::TypedDomHandle;
use crate::handle::DomHandle;
use crate::runtime::CallArg;

/// A remote `HTMLCollection` whose members are wrapped as `T`
pub struct HtmlCollection<T: TypedDomHandle> {
    handle: DomHandle,
    _marker: PhantomData<T>,
}

impl<T: TypedDomHandle> std::fmt::Debug for HtmlCollection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlCollection").field("handle", &self.handle).finish()
    }
}

impl<T: TypedDomHandle> TypedDomHandle for HtmlCollection<T> {
    const TYPE_NAME: &'static str = "HtmlCollection";

    fn accepts(class_name: &str) -> bool {
        matches!(
            class_name,
            "HTMLCollection" | "HTMLOptionsCollection" | "HTMLFormControlsCollection"
        )
    }

    fn from_handle(handle: DomHandle) -> Self {
        Self { handle, _marker: PhantomData }
    }

    fn handle(&self) -> &DomHandle {
        &self.handle
    }

    fn into_handle(self) -> DomHandle {
        self.handle
    }
}

impl<T: TypedDomHandle> HtmlCollection<T> {
    /// Number of members in the collection
    pub async fn length(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.length", vec![]).await
    }

    /// The member at the given index, `None` when out of range
    pub async fn item(&self, index: i64) -> Result<Option<T>> {
        self.handle
            .evaluate_fn_handle("(e, i) => e.item(i)", vec![CallArg::json(index)?])
            .await
    }

    /// The member whose id or name matches, `None` when absent
    pub async fn named_item(&self, name: &str) -> Result<Option<T>> {
        self.handle
            .evaluate_fn_handle("(e, n) => e.namedItem(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Materialize every member as a typed wrapper
    pub async fn to_vec(&self) -> Result<Vec<T>> {
        self.handle.handle_array().await
    }

    /// Stream the members one `item` call at a time, stopping at the first
    /// out-of-range index
    pub fn stream(&self) -> impl Stream<Item = Result<T>> + '_ {
        futures::stream::try_unfold(0i64, move |index| async move {
            Ok(self.item(index).await?.map(|member| (member, index + 1)))
        })
    }

    /// Release the underlying remote object
    pub async fn dispose(&self) -> Result<()> {
        self.handle.dispose().await
    }
}

/// A remote `NodeList` whose members are wrapped as `T`
pub struct NodeList<T: TypedDomHandle> {
    handle: DomHandle,
    _marker: PhantomData<T>,
}

impl<T: TypedDomHandle> std::fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeList").field("handle", &self.handle).finish()
    }
}

impl<T: TypedDomHandle> TypedDomHandle for NodeList<T> {
    const TYPE_NAME: &'static str = "NodeList";

    fn accepts(class_name: &str) -> bool {
        class_name == "NodeList"
    }

    fn from_handle(handle: DomHandle) -> Self {
        Self { handle, _marker: PhantomData }
    }

    fn handle(&self) -> &DomHandle {
        &self.handle
    }

    fn into_handle(self) -> DomHandle {
        self.handle
    }
}

impl<T: TypedDomHandle> NodeList<T> {
    /// Number of nodes in the list
    pub async fn length(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.length", vec![]).await
    }

    /// The node at the given index, `None` when out of range
    pub async fn item(&self, index: i64) -> Result<Option<T>> {
        self.handle
            .evaluate_fn_handle("(e, i) => e.item(i)", vec![CallArg::json(index)?])
            .await
    }

    /// Materialize every node as a typed wrapper
    pub async fn to_vec(&self) -> Result<Vec<T>> {
        self.handle.handle_array().await
    }

    /// Stream the nodes one `item` call at a time, stopping at the first
    /// out-of-range index
    pub fn stream(&self) -> impl Stream<Item = Result<T>> + '_ {
        futures::stream::try_unfold(0i64, move |index| async move {
            Ok(self.item(index).await?.map(|node| (node, index + 1)))
        })
    }

    /// Release the underlying remote object
    pub async fn dispose(&self) -> Result<()> {
        self.handle.dispose().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::HtmlOptionElement;

    #[test]
    fn test_collection_class_checks() {
        assert!(HtmlCollection::<HtmlOptionElement>::accepts("HTMLCollection"));
        assert!(HtmlCollection::<HtmlOptionElement>::accepts("HTMLOptionsCollection"));
        assert!(!HtmlCollection::<HtmlOptionElement>::accepts("NodeList"));
        assert!(NodeList::<HtmlOptionElement>::accepts("NodeList"));
        assert!(!NodeList::<HtmlOptionElement>::accepts("HTMLCollection"));
    }
}
