//! Typed DOM element wrappers
//!
//! Each wrapper is a thin shell around a [`DomHandle`](crate::DomHandle):
//! shared behavior lives in the [`ElementOps`] and [`HtmlElementOps`] traits,
//! type-specific properties on the concrete structs. Every operation is a
//! single evaluation round trip against the remote node.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::css::CssStyleDeclaration;
use crate::collections::NodeList;
use crate::error::{Error, Result};
use crate::factory::TypedDomHandle;
use crate::js;
use crate::runtime::CallArg;
use crate::string_map::DomStringMap;
use crate::token_list::DomTokenList;

mod anchor;
mod button;
mod element;
mod form;
mod image;
mod input;
mod select;
mod table;
mod textarea;

pub use anchor::HtmlAnchorElement;
pub use button::{ButtonType, HtmlButtonElement};
pub use element::{
    HtmlBodyElement, HtmlDivElement, HtmlElement, HtmlHeadingElement, HtmlParagraphElement,
    HtmlSpanElement,
};
pub use form::HtmlFormElement;
pub use image::HtmlImageElement;
pub use input::HtmlInputElement;
pub use select::{HtmlOptionElement, HtmlSelectElement};
pub use table::{
    HtmlTableCellElement, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement,
    TableCellKind,
};
pub use textarea::{HtmlTextAreaElement, SelectionDirection};

/// Position and size of an element's border box, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    /// X offset
    pub x: f64,
    /// Y offset
    pub y: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

/// Declares a typed wrapper struct and its [`TypedDomHandle`] impl.
macro_rules! typed_wrapper {
    ($(#[$meta:meta])* $name:ident, class = $class:literal) => {
        crate::elements::typed_wrapper!($(#[$meta])* $name, accepts = |c: &str| c == $class);
    };
    ($(#[$meta:meta])* $name:ident, accepts = $accepts:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            handle: crate::handle::DomHandle,
        }

        impl crate::factory::TypedDomHandle for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn accepts(class_name: &str) -> bool {
                let accepts: fn(&str) -> bool = $accepts;
                accepts(class_name)
            }

            fn from_handle(handle: crate::handle::DomHandle) -> Self {
                Self { handle }
            }

            fn handle(&self) -> &crate::handle::DomHandle {
                &self.handle
            }

            fn into_handle(self) -> crate::handle::DomHandle {
                self.handle
            }
        }

        impl $name {
            /// Browser-reported class name
            pub fn class_name(&self) -> &str {
                self.handle.class_name()
            }

            /// Release the underlying remote object
            pub async fn dispose(&self) -> crate::error::Result<()> {
                self.handle.dispose().await
            }
        }
    };
}
pub(crate) use typed_wrapper;

/// Declares a `get`/`set` pair over a remote string property.
macro_rules! string_prop {
    ($(#[$gm:meta])* $get:ident, $set:ident, $js:literal) => {
        $(#[$gm])*
        pub async fn $get(&self) -> crate::error::Result<String> {
            self.handle.evaluate_fn(concat!("e => e.", $js), vec![]).await
        }

        /// Set the property
        pub async fn $set(&self, value: &str) -> crate::error::Result<()> {
            self.handle
                .evaluate_fn_unit(
                    concat!("(e, v) => { e.", $js, " = v; }"),
                    vec![crate::runtime::CallArg::json(value)?],
                )
                .await
        }
    };
}
pub(crate) use string_prop;

/// Declares a `get`/`set` pair over a remote boolean property.
macro_rules! bool_prop {
    ($(#[$gm:meta])* $get:ident, $set:ident, $js:literal) => {
        $(#[$gm])*
        pub async fn $get(&self) -> crate::error::Result<bool> {
            self.handle.evaluate_fn(concat!("e => e.", $js), vec![]).await
        }

        /// Set the property
        pub async fn $set(&self, value: bool) -> crate::error::Result<()> {
            self.handle
                .evaluate_fn_unit(
                    concat!("(e, v) => { e.", $js, " = v; }"),
                    vec![crate::runtime::CallArg::json(value)?],
                )
                .await
        }
    };
}
pub(crate) use bool_prop;

/// Declares a `get`/`set` pair over a remote integer property.
macro_rules! int_prop {
    ($(#[$gm:meta])* $get:ident, $set:ident, $js:literal) => {
        $(#[$gm])*
        pub async fn $get(&self) -> crate::error::Result<i64> {
            self.handle.evaluate_fn(concat!("e => e.", $js), vec![]).await
        }

        /// Set the property
        pub async fn $set(&self, value: i64) -> crate::error::Result<()> {
            self.handle
                .evaluate_fn_unit(
                    concat!("(e, v) => { e.", $js, " = v; }"),
                    vec![crate::runtime::CallArg::json(value)?],
                )
                .await
        }
    };
}
pub(crate) use int_prop;

/// Declares a read-only remote property getter.
macro_rules! prop_get {
    ($(#[$gm:meta])* $get:ident: $ty:ty, $js:literal) => {
        $(#[$gm])*
        pub async fn $get(&self) -> crate::error::Result<$ty> {
            self.handle.evaluate_fn(concat!("e => e.", $js), vec![]).await
        }
    };
}
pub(crate) use prop_get;

/// Operations shared by every element wrapper
#[async_trait]
pub trait ElementOps: TypedDomHandle {
    /// Upper-case tag name (e.g. `"BUTTON"`)
    async fn tag_name(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.tagName", vec![]).await
    }

    /// The element's id attribute
    async fn id(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.id", vec![]).await
    }

    /// Set the element's id attribute
    async fn set_id(&self, id: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.id = v; }", vec![CallArg::json(id)?])
            .await
    }

    /// Read an attribute; `None` when the attribute is absent
    async fn get_attribute(&self, name: &str) -> Result<Option<String>> {
        self.handle()
            .evaluate_fn("(e, n) => e.getAttribute(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Read an attribute, coercing the value into `T`
    async fn get_attribute_as<T>(&self, name: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.handle()
            .evaluate_fn("(e, n) => e.getAttribute(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Set an attribute
    async fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit(
                "(e, n, v) => e.setAttribute(n, v)",
                vec![CallArg::json(name)?, CallArg::json(value)?],
            )
            .await
    }

    /// Whether the attribute is present
    async fn has_attribute(&self, name: &str) -> Result<bool> {
        self.handle()
            .evaluate_fn("(e, n) => e.hasAttribute(n)", vec![CallArg::json(name)?])
            .await
    }

    /// Remove an attribute
    async fn remove_attribute(&self, name: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, n) => e.removeAttribute(n)", vec![CallArg::json(name)?])
            .await
    }

    /// The element's `class` attribute as one string (DOM `className`)
    async fn class_name_attr(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.className", vec![]).await
    }

    /// Replace the whole `class` attribute
    async fn set_class_name_attr(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.className = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Query the first matching descendant; `None` when nothing matches
    async fn query_selector<T: TypedDomHandle>(&self, selector: &str) -> Result<Option<T>> {
        self.handle()
            .evaluate_fn_handle("(e, s) => e.querySelector(s)", vec![CallArg::json(selector)?])
            .await
    }

    /// Query all matching descendants
    async fn query_selector_all<T: TypedDomHandle>(&self, selector: &str) -> Result<Vec<T>> {
        let list: Option<NodeList<T>> = self
            .handle()
            .evaluate_fn_handle(
                "(e, s) => e.querySelectorAll(s)",
                vec![CallArg::json(selector)?],
            )
            .await?;
        match list {
            Some(list) => list.to_vec().await,
            None => Ok(Vec::new()),
        }
    }

    /// The parent element, if any
    async fn parent_element<T: TypedDomHandle>(&self) -> Result<Option<T>> {
        self.handle()
            .evaluate_fn_handle("e => e.parentElement", vec![])
            .await
    }

    /// Append a child node
    async fn append_child<C: TypedDomHandle>(&self, child: &C) -> Result<()> {
        self.handle()
            .evaluate_fn_unit(
                "(e, c) => { e.appendChild(c); }",
                vec![CallArg::handle(child.handle().object_id())],
            )
            .await
    }

    /// Remove this element from the document
    async fn remove(&self) -> Result<()> {
        self.handle().evaluate_fn_unit("e => e.remove()", vec![]).await
    }

    /// The element's border box
    async fn bounding_box(&self) -> Result<BoundingBox> {
        self.handle()
            .evaluate_fn(
                "e => { const r = e.getBoundingClientRect(); \
                 return { x: r.x, y: r.y, width: r.width, height: r.height }; }",
                vec![],
            )
            .await
    }

    /// Scroll the element into view
    async fn scroll_into_view(&self) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("e => e.scrollIntoView({block: 'center'})", vec![])
            .await
    }

    /// Whether any part of the element intersects the viewport
    async fn is_intersecting_viewport(&self) -> Result<bool> {
        self.handle()
            .evaluate_fn(
                "e => new Promise(resolve => { \
                 const observer = new IntersectionObserver(entries => { \
                 resolve(entries[0].intersectionRatio > 0); observer.disconnect(); }); \
                 observer.observe(e); })",
                vec![],
            )
            .await
    }

    /// Whether the element is visible per computed style and box size
    async fn is_visible(&self) -> Result<bool> {
        self.handle().evaluate_fn(js::IS_VISIBLE_FN, vec![]).await
    }

    /// Scroll into view and click the element
    async fn click(&self) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("e => { e.scrollIntoView({block: 'center'}); e.click(); }", vec![])
            .await
    }

    /// Give the element keyboard focus
    async fn focus(&self) -> Result<()> {
        self.handle().evaluate_fn_unit("e => e.focus()", vec![]).await
    }

    /// Dispatch a `mouseover` event on the element
    async fn hover(&self) -> Result<()> {
        self.handle()
            .evaluate_fn_unit(
                "e => e.dispatchEvent(new MouseEvent('mouseover', \
                 {bubbles: true, cancelable: true, view: window}))",
                vec![],
            )
            .await
    }

    /// Focus the element, set its value and fire input/change events
    async fn type_text(&self, text: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit(
                "(e, t) => { e.focus(); e.value = t; \
                 e.dispatchEvent(new Event('input', {bubbles: true})); \
                 e.dispatchEvent(new Event('change', {bubbles: true})); }",
                vec![CallArg::json(text)?],
            )
            .await
    }

    /// Dispatch keydown/keypress/keyup events for a key
    async fn press_key(&self, key: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit(
                "(e, k) => { for (const t of ['keydown', 'keypress', 'keyup']) \
                 e.dispatchEvent(new KeyboardEvent(t, {key: k, bubbles: true})); }",
                vec![CallArg::json(key)?],
            )
            .await
    }

    /// Wire an event to a function previously exposed on `window`
    async fn add_event_listener(&self, event: &str, exposed_fn: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit(
                "(e, t, n) => e.addEventListener(t, () => window[n]())",
                vec![CallArg::json(event)?, CallArg::json(exposed_fn)?],
            )
            .await
    }
}

/// Operations shared by every HTML element wrapper
#[async_trait]
pub trait HtmlElementOps: ElementOps {
    /// Rendered text content
    async fn inner_text(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.innerText", vec![]).await
    }

    /// Set rendered text content
    async fn set_inner_text(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.innerText = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Rendered text content of the element and its descendants
    async fn outer_text(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.outerText", vec![]).await
    }

    /// Replace the element with the given text
    async fn set_outer_text(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.outerText = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// HTML markup contained within the element
    async fn inner_html(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.innerHTML", vec![]).await
    }

    /// Set the HTML markup contained within the element
    async fn set_inner_html(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.innerHTML = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// HTML markup of the element including its tag
    async fn outer_html(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.outerHTML", vec![]).await
    }

    /// Replace the element with the given markup
    async fn set_outer_html(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.outerHTML = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Text content of the node and its descendants
    async fn text_content(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.textContent", vec![]).await
    }

    /// Set the text content of the node
    async fn set_text_content(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.textContent = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Advisory title
    async fn title(&self) -> Result<String> {
        self.handle().evaluate_fn("e => e.title", vec![]).await
    }

    /// Set the advisory title
    async fn set_title(&self, value: &str) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.title = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Whether the element is hidden
    async fn hidden(&self) -> Result<bool> {
        self.handle().evaluate_fn("e => e.hidden", vec![]).await
    }

    /// Show or hide the element
    async fn set_hidden(&self, value: bool) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.hidden = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Position in the sequential keyboard focus order
    async fn tab_index(&self) -> Result<i64> {
        self.handle().evaluate_fn("e => e.tabIndex", vec![]).await
    }

    /// Set the keyboard focus order position
    async fn set_tab_index(&self, value: i64) -> Result<()> {
        self.handle()
            .evaluate_fn_unit("(e, v) => { e.tabIndex = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// The element's inline style declaration
    async fn style(&self) -> Result<CssStyleDeclaration> {
        self.handle()
            .property_handle("style")
            .await?
            .ok_or_else(|| Error::internal("element has no style declaration"))
    }

    /// The element's `data-*` attribute map
    async fn dataset(&self) -> Result<DomStringMap> {
        self.handle()
            .property_handle("dataset")
            .await?
            .ok_or_else(|| Error::internal("element has no dataset"))
    }

    /// The element's class list
    async fn class_list(&self) -> Result<DomTokenList> {
        self.handle()
            .property_handle("classList")
            .await?
            .ok_or_else(|| Error::internal("element has no class list"))
    }
}
