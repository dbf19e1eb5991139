//! chromiumoxide-backed remote runtime
//!
//! [`PageRuntime`] implements [`RemoteRuntime`] over a `chromiumoxide::Page`
//! using raw Runtime-domain commands: `Runtime.evaluate`,
//! `Runtime.callFunctionOn`, `Runtime.getProperties` and
//! `Runtime.releaseObject`.

use async_trait::async_trait;
use chromiumoxide::cdp::js_protocol::runtime::{
    CallArgument, CallFunctionOnParams, EvaluateParams, ExceptionDetails, GetPropertiesParams,
    ReleaseObjectParams, RemoteObject, RemoteObjectId,
};
use chromiumoxide::Page;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::runtime::traits::{CallArg, RemoteProperty, RemoteRuntime, RemoteValue};

/// Remote runtime backed by a chromiumoxide page
#[derive(Debug, Clone)]
pub struct PageRuntime {
    page: Page,
}

impl PageRuntime {
    /// Create a runtime over an existing page
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// The underlying page
    pub fn page(&self) -> &Page {
        &self.page
    }

    fn convert_remote_object(obj: RemoteObject) -> RemoteValue {
        RemoteValue {
            object_id: obj.object_id.map(|id| id.inner().clone()),
            class_name: obj.class_name,
            value: obj.value,
            description: obj.description,
        }
    }

    fn convert_exception(details: ExceptionDetails) -> Error {
        let message = details
            .exception
            .and_then(|e| e.description)
            .unwrap_or(details.text);
        Error::script_exception(message)
    }

    fn convert_args(args: Vec<CallArg>) -> Vec<CallArgument> {
        args.into_iter()
            .map(|arg| match arg {
                CallArg::Json(value) => CallArgument::builder().value(value).build(),
                CallArg::Handle(id) => CallArgument::builder()
                    .object_id(RemoteObjectId::new(id))
                    .build(),
            })
            .collect()
    }
}

#[async_trait]
impl RemoteRuntime for PageRuntime {
    async fn evaluate_expression(&self, expression: &str, by_value: bool) -> Result<RemoteValue> {
        trace!(expression, by_value, "Runtime.evaluate");

        let params = EvaluateParams::builder()
            .expression(expression)
            .return_by_value(by_value)
            .await_promise(true)
            .build()
            .map_err(Error::cdp)?;

        let resp = self
            .page
            .execute(params)
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;
        let returns = resp.result;

        if let Some(details) = returns.exception_details {
            return Err(Self::convert_exception(details));
        }

        Ok(Self::convert_remote_object(returns.result))
    }

    async fn call_function(
        &self,
        object_id: &str,
        declaration: &str,
        args: Vec<CallArg>,
        by_value: bool,
    ) -> Result<RemoteValue> {
        trace!(object_id, declaration, by_value, "Runtime.callFunctionOn");

        // The target handle is always the first argument of the declaration.
        let mut arguments = vec![CallArgument::builder()
            .object_id(RemoteObjectId::new(object_id))
            .build()];
        arguments.extend(Self::convert_args(args));

        let params = CallFunctionOnParams::builder()
            .function_declaration(declaration)
            .object_id(RemoteObjectId::new(object_id))
            .arguments(arguments)
            .return_by_value(by_value)
            .await_promise(true)
            .build()
            .map_err(Error::cdp)?;

        let resp = self
            .page
            .execute(params)
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;
        let returns = resp.result;

        if let Some(details) = returns.exception_details {
            return Err(Self::convert_exception(details));
        }

        Ok(Self::convert_remote_object(returns.result))
    }

    async fn get_properties(&self, object_id: &str) -> Result<Vec<RemoteProperty>> {
        trace!(object_id, "Runtime.getProperties");

        let params = GetPropertiesParams::builder()
            .object_id(RemoteObjectId::new(object_id))
            .own_properties(true)
            .build()
            .map_err(Error::cdp)?;

        let resp = self
            .page
            .execute(params)
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;
        let returns = resp.result;

        if let Some(details) = returns.exception_details {
            return Err(Self::convert_exception(details));
        }

        Ok(returns
            .result
            .into_iter()
            .map(|p| RemoteProperty {
                name: p.name,
                value: p.value.map(Self::convert_remote_object),
            })
            .collect())
    }

    async fn release(&self, object_id: &str) -> Result<()> {
        debug!(object_id, "Runtime.releaseObject");

        let params = ReleaseObjectParams::builder()
            .object_id(RemoteObjectId::new(object_id))
            .build()
            .map_err(Error::cdp)?;

        self.page
            .execute(params)
            .await
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }
}
