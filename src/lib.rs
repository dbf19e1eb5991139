//! Strongly-typed DOM element handles for browser automation
//!
//! This crate layers typed wrappers over the untyped JavaScript handles a
//! CDP-driven page hands back. Instead of stringly-typed `evaluate` calls,
//! a query returns an [`HtmlButtonElement`], [`HtmlInputElement`],
//! [`HtmlSelectElement`] and friends, each exposing the properties and
//! methods of its DOM interface as async Rust methods.
//!
//! The entry point is [`DomContext`], built over a `chromiumoxide::Page`
//! (or, in tests, any [`RemoteRuntime`] implementation):
//!
//! ```no_run
//! use oxidom::{DomContext, HtmlInputElement, PageDomExt};
//!
//! # async fn example(page: chromiumoxide::Page) -> oxidom::Result<()> {
//! let dom = page.dom();
//! if let Some(input) = dom.query_selector::<HtmlInputElement>("input[name='q']").await? {
//!     input.set_value("rust").await?;
//!     assert_eq!(input.value().await?, "rust");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Dispatch is driven by the browser-reported class name: requesting a
//! wrapper whose class check rejects the actual element fails with
//! [`Error::TypeMismatch`], and a missing selector match is `Ok(None)`,
//! never an error.

pub mod collections;
pub mod css;
pub mod elements;
pub mod error;
pub mod factory;
pub mod handle;
mod js;
pub mod page;
pub mod runtime;
pub mod string_map;
pub mod token_list;

pub use collections::{HtmlCollection, NodeList};
pub use css::CssStyleDeclaration;
pub use elements::{
    BoundingBox, ButtonType, ElementOps, HtmlAnchorElement, HtmlBodyElement, HtmlButtonElement,
    HtmlDivElement, HtmlElement, HtmlElementOps, HtmlFormElement, HtmlHeadingElement,
    HtmlImageElement, HtmlInputElement, HtmlOptionElement, HtmlParagraphElement,
    HtmlSelectElement, HtmlSpanElement, HtmlTableCellElement, HtmlTableElement,
    HtmlTableRowElement, HtmlTableSectionElement, HtmlTextAreaElement, SelectionDirection,
    TableCellKind,
};
pub use error::{Error, Result};
pub use factory::{create, ElementTag, TypedDomHandle, TypedElement};
pub use handle::DomHandle;
pub use page::{DomContext, PageDomExt, WaitOptions};
pub use runtime::{CallArg, MockRuntime, PageRuntime, RemoteProperty, RemoteRuntime, RemoteValue};
pub use string_map::DomStringMap;
pub use token_list::DomTokenList;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
