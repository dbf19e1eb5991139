//! Page-level typed queries
//!
//! [`DomContext`] is the entry point of the crate: it evaluates expressions
//! against a page's main execution context and hands back typed element
//! wrappers. [`PageDomExt`] bolts a context onto `chromiumoxide::Page`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::elements::{HtmlBodyElement, HtmlElement};
use crate::error::{Error, Result};
use crate::factory::{self, TypedDomHandle, TypedElement};
use crate::handle::DomHandle;
use crate::js;
use crate::runtime::{PageRuntime, RemoteRuntime, RemoteValue};

/// Options for [`DomContext::wait_for_selector`]
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// How long to keep polling before giving up
    pub timeout: Duration,
    /// Delay between polls
    pub polling: Duration,
    /// Require the element to be visible, not just attached
    pub visible: bool,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            polling: Duration::from_millis(100),
            visible: false,
        }
    }
}

/// Typed DOM access to a page's main execution context
#[derive(Debug, Clone)]
pub struct DomContext {
    runtime: Arc<dyn RemoteRuntime>,
}

impl DomContext {
    /// Create a context over a chromiumoxide page
    pub fn new(page: chromiumoxide::Page) -> Self {
        Self::from_runtime(Arc::new(PageRuntime::new(page)))
    }

    /// Create a context over any remote runtime
    pub fn from_runtime(runtime: Arc<dyn RemoteRuntime>) -> Self {
        Self { runtime }
    }

    /// The runtime this context evaluates against
    pub fn runtime(&self) -> &Arc<dyn RemoteRuntime> {
        &self.runtime
    }

    fn wrap_value<T: TypedDomHandle>(&self, value: RemoteValue) -> Result<Option<T>> {
        if value.is_null() {
            return Ok(None);
        }
        match DomHandle::from_remote(self.runtime.clone(), value) {
            Some(handle) => factory::create::<T>(handle).map(Some),
            None => Ok(None),
        }
    }

    /// Evaluate an expression and parse its JSON result into `T`
    pub async fn evaluate_expression<T: DeserializeOwned>(&self, expression: &str) -> Result<T> {
        let value = self.runtime.evaluate_expression(expression, true).await?;
        serde_json::from_value(value.into_json()).map_err(|e| Error::coercion(e.to_string()))
    }

    /// Evaluate an expression and wrap the resulting object in a typed
    /// handle. JS `null`/`undefined` resolve to `None`.
    pub async fn evaluate_expression_handle<T: TypedDomHandle>(
        &self,
        expression: &str,
    ) -> Result<Option<T>> {
        trace!(expression, "evaluate expression handle");
        let value = self.runtime.evaluate_expression(expression, false).await?;
        self.wrap_value(value)
    }

    /// Apply a function declaration to JSON arguments and wrap the result.
    ///
    /// Arguments are embedded by value; pass element handles through
    /// element-scoped calls instead.
    pub async fn evaluate_function_handle<T: TypedDomHandle>(
        &self,
        declaration: &str,
        args: &[serde_json::Value],
    ) -> Result<Option<T>> {
        let expression = js::call_function_expression(declaration, args);
        self.evaluate_expression_handle(expression.as_str()).await
    }

    /// Query the document for the first selector match.
    ///
    /// `Ok(None)` when nothing matches; `Err(TypeMismatch)` when the match
    /// is not a `T`.
    pub async fn query_selector<T: TypedDomHandle>(&self, selector: &str) -> Result<Option<T>> {
        self.evaluate_expression_handle(&js::query_selector_expression(selector))
            .await
    }

    /// Query the document for all selector matches
    pub async fn query_selector_all<T: TypedDomHandle>(&self, selector: &str) -> Result<Vec<T>> {
        let list = self.query_selector_all_handle::<T>(selector).await?;
        match list.to_vec().await {
            Ok(elements) => {
                list.dispose().await?;
                Ok(elements)
            }
            Err(e) => {
                // Release the list handle even when materialization fails.
                let _ = list.dispose().await;
                Err(e)
            }
        }
    }

    /// Query the document for all selector matches, keeping the result as a
    /// live `NodeList` handle
    pub async fn query_selector_all_handle<T: TypedDomHandle>(
        &self,
        selector: &str,
    ) -> Result<crate::collections::NodeList<T>> {
        self.evaluate_expression_handle(&js::query_selector_all_expression(selector))
            .await?
            .ok_or_else(|| Error::internal("querySelectorAll returned no list"))
    }

    /// Query the first selector match and dispatch it by class name
    pub async fn query_selector_any(&self, selector: &str) -> Result<Option<TypedElement>> {
        let value = self
            .runtime
            .evaluate_expression(&js::query_selector_expression(selector), false)
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        match DomHandle::from_remote(self.runtime.clone(), value) {
            Some(handle) => TypedElement::from_handle(handle).map(Some),
            None => Ok(None),
        }
    }

    /// Create a detached element of the given tag
    pub async fn create_html_element<T: TypedDomHandle>(&self, tag_name: &str) -> Result<T> {
        debug!(tag_name, "create element");
        self.evaluate_expression_handle(&js::create_element_expression(tag_name, None))
            .await?
            .ok_or_else(|| Error::internal("createElement returned no element"))
    }

    /// Create a detached element with the given tag and id
    pub async fn create_html_element_with_id<T: TypedDomHandle>(
        &self,
        tag_name: &str,
        id: &str,
    ) -> Result<T> {
        debug!(tag_name, id, "create element");
        self.evaluate_expression_handle(&js::create_element_expression(tag_name, Some(id)))
            .await?
            .ok_or_else(|| Error::internal("createElement returned no element"))
    }

    /// The document's `<body>` element
    pub async fn body(&self) -> Result<HtmlBodyElement> {
        self.evaluate_expression_handle("document.body")
            .await?
            .ok_or_else(|| Error::internal("document has no body"))
    }

    /// The document's root element
    pub async fn document_element(&self) -> Result<HtmlElement> {
        self.evaluate_expression_handle("document.documentElement")
            .await?
            .ok_or_else(|| Error::internal("document has no root element"))
    }

    /// Adopt an untyped remote object id into a typed wrapper.
    ///
    /// The class name is probed via `Symbol.toStringTag`, so handles
    /// obtained outside this crate can join the typed layer.
    pub async fn adopt<T: TypedDomHandle>(&self, object_id: &str) -> Result<T> {
        let tag = self
            .runtime
            .call_function(object_id, js::TO_STRING_TAG_FN, vec![], true)
            .await?;
        let class_name = tag
            .value
            .as_ref()
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        factory::create::<T>(DomHandle::new(self.runtime.clone(), object_id, class_name))
    }

    /// Poll the document until the selector matches, then hand back the
    /// typed element. Fails with [`Error::Timeout`] when the deadline
    /// passes first.
    pub async fn wait_for_selector<T: TypedDomHandle>(
        &self,
        selector: &str,
        options: WaitOptions,
    ) -> Result<T> {
        debug!(selector, ?options, "wait for selector");
        let poll = async {
            loop {
                match self.query_selector::<T>(selector).await? {
                    Some(element) => {
                        if !options.visible {
                            return Ok(element);
                        }
                        match element
                            .handle()
                            .evaluate_fn::<bool>(js::IS_VISIBLE_FN, vec![])
                            .await
                        {
                            Ok(true) => return Ok(element),
                            Ok(false) => element.handle().dispose().await?,
                            Err(e) => {
                                let _ = element.handle().dispose().await;
                                return Err(e);
                            }
                        }
                    }
                    None => {}
                }
                tokio::time::sleep(options.polling).await;
            }
        };
        tokio::time::timeout(options.timeout, poll)
            .await
            .map_err(|_| {
                Error::timeout(format!(
                    "selector {:?} did not match within {:?}",
                    selector, options.timeout
                ))
            })?
    }
}

/// Typed DOM entry point for `chromiumoxide::Page`
#[async_trait]
pub trait PageDomExt {
    /// A typed DOM context over this page's main execution context
    fn dom(&self) -> DomContext;

    /// Shorthand for [`DomContext::query_selector`]
    async fn typed_query_selector<T: TypedDomHandle>(&self, selector: &str) -> Result<Option<T>>
    where
        Self: Sync,
    {
        self.dom().query_selector(selector).await
    }

    /// Shorthand for [`DomContext::query_selector_all`]
    async fn typed_query_selector_all<T: TypedDomHandle>(&self, selector: &str) -> Result<Vec<T>>
    where
        Self: Sync,
    {
        self.dom().query_selector_all(selector).await
    }

    /// Shorthand for [`DomContext::wait_for_selector`]
    async fn typed_wait_for_selector<T: TypedDomHandle>(
        &self,
        selector: &str,
        options: WaitOptions,
    ) -> Result<T>
    where
        Self: Sync,
    {
        self.dom().wait_for_selector(selector, options).await
    }
}

#[async_trait]
impl PageDomExt for chromiumoxide::Page {
    fn dom(&self) -> DomContext {
        DomContext::new(self.clone())
    }
}
