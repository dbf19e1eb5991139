//! Remote runtime layer traits
//!
//! This module defines the abstract interface over the wrapped automation
//! client. Everything the typed DOM layer needs from the browser goes
//! through [`RemoteRuntime`]: expression evaluation, function calls against
//! a remote object, property enumeration, and handle release.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A value returned by the remote runtime.
///
/// Mirrors the interesting subset of a CDP `Runtime.RemoteObject`: either a
/// by-value JSON payload, or a reference to an object living in the page
/// (`object_id` plus the browser-reported class name).
#[derive(Debug, Clone, Default)]
pub struct RemoteValue {
    /// Remote object id, present when the value was returned by reference
    pub object_id: Option<String>,
    /// Browser-reported class name (e.g. `"HTMLButtonElement"`)
    pub class_name: Option<String>,
    /// JSON payload, present when the value was returned by value
    pub value: Option<Value>,
    /// Human-readable description of the remote object
    pub description: Option<String>,
}

impl RemoteValue {
    /// Build a by-value result
    pub fn from_json(value: Value) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Build a by-reference result
    pub fn from_handle<S: Into<String>>(object_id: S, class_name: S) -> Self {
        Self {
            object_id: Some(object_id.into()),
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    /// Whether this value represents JS `null`/`undefined`
    ///
    /// A remote object with neither an object id nor a serialized value is
    /// what the protocol hands back for `document.querySelector` misses.
    pub fn is_null(&self) -> bool {
        self.object_id.is_none()
            && matches!(self.value.as_ref(), None | Some(Value::Null))
    }

    /// JSON payload, with absent treated as `null`
    pub fn into_json(self) -> Value {
        self.value.unwrap_or(Value::Null)
    }
}

/// A single property of a remote object, as returned by property enumeration
#[derive(Debug, Clone)]
pub struct RemoteProperty {
    /// Property name (an index string for array-likes)
    pub name: String,
    /// Property value, if the property has one
    pub value: Option<RemoteValue>,
}

/// An argument to a remote function call
#[derive(Debug, Clone)]
pub enum CallArg {
    /// A plain JSON value
    Json(Value),
    /// A reference to an existing remote object
    Handle(String),
}

impl CallArg {
    /// Build a JSON argument from anything serializable
    pub fn json<T: serde::Serialize>(value: T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|e| crate::Error::coercion(e.to_string()))?;
        Ok(CallArg::Json(value))
    }

    /// Build a handle argument
    pub fn handle<S: Into<String>>(object_id: S) -> Self {
        CallArg::Handle(object_id.into())
    }
}

/// Remote runtime trait
///
/// The seam between the typed DOM layer and the wrapped automation client.
/// The production implementation drives a `chromiumoxide::Page`; tests use
/// the scripted mock.
#[async_trait]
pub trait RemoteRuntime: Send + Sync + std::fmt::Debug {
    /// Evaluate a JS expression in the page.
    ///
    /// With `by_value` the result is serialized to JSON; otherwise a handle
    /// to the resulting object is returned.
    async fn evaluate_expression(&self, expression: &str, by_value: bool) -> Result<RemoteValue>;

    /// Call a function with a remote object as its first argument.
    ///
    /// `declaration` is an arrow function whose first parameter receives the
    /// object identified by `object_id`; `args` follow as further
    /// parameters. Promises are awaited.
    async fn call_function(
        &self,
        object_id: &str,
        declaration: &str,
        args: Vec<CallArg>,
        by_value: bool,
    ) -> Result<RemoteValue>;

    /// Enumerate own properties of a remote object
    async fn get_properties(&self, object_id: &str) -> Result<Vec<RemoteProperty>>;

    /// Release a remote object handle
    async fn release(&self, object_id: &str) -> Result<()>;
}
