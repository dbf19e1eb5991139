//! Core DOM handle wrapper
//!
//! [`DomHandle`] pairs a remote object id with the browser-reported class
//! name and forwards evaluation calls to the remote runtime, deserializing
//! JSON results into requested types. Every typed wrapper in this crate is
//! a thin shell around one of these.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::factory::{self, TypedDomHandle};
use crate::runtime::{CallArg, RemoteRuntime, RemoteValue};

/// A handle to a value living inside the automated page
#[derive(Debug)]
pub struct DomHandle {
    runtime: Arc<dyn RemoteRuntime>,
    object_id: String,
    class_name: String,
    disposed: AtomicBool,
}

impl DomHandle {
    /// Wrap an existing remote object
    pub fn new(
        runtime: Arc<dyn RemoteRuntime>,
        object_id: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            runtime,
            object_id: object_id.into(),
            class_name: class_name.into(),
            disposed: AtomicBool::new(false),
        }
    }

    /// Wrap a by-reference [`RemoteValue`].
    ///
    /// Returns `None` for JS `null`/`undefined` results.
    pub fn from_remote(runtime: Arc<dyn RemoteRuntime>, value: RemoteValue) -> Option<Self> {
        let object_id = value.object_id?;
        let class_name = value.class_name.unwrap_or_default();
        Some(Self::new(runtime, object_id, class_name))
    }

    /// Browser-reported class name (e.g. `"HTMLButtonElement"`)
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Remote object id
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The runtime this handle evaluates against
    pub fn runtime(&self) -> &Arc<dyn RemoteRuntime> {
        &self.runtime
    }

    /// Whether [`dispose`](Self::dispose) has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Relaxed)
    }

    fn ensure_live(&self) -> Result<()> {
        if self.is_disposed() {
            return Err(Error::handle_disposed(self.object_id.clone()));
        }
        Ok(())
    }

    /// Release the remote object. Idempotent; later calls on this handle
    /// fail with [`Error::HandleDisposed`].
    pub async fn dispose(&self) -> Result<()> {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.runtime.release(&self.object_id).await
    }

    /// Call a function against this handle and parse the JSON result.
    ///
    /// The handle is passed as the declaration's first argument; promises
    /// are awaited.
    pub async fn evaluate_fn<T: DeserializeOwned>(
        &self,
        declaration: &str,
        args: Vec<CallArg>,
    ) -> Result<T> {
        self.ensure_live()?;
        let value = self
            .runtime
            .call_function(&self.object_id, declaration, args, true)
            .await?;
        serde_json::from_value(value.into_json()).map_err(|e| Error::coercion(e.to_string()))
    }

    /// Call a function against this handle, discarding the result
    pub async fn evaluate_fn_unit(&self, declaration: &str, args: Vec<CallArg>) -> Result<()> {
        self.ensure_live()?;
        self.runtime
            .call_function(&self.object_id, declaration, args, true)
            .await?;
        Ok(())
    }

    /// Call a function against this handle and wrap the resulting object in
    /// a typed handle. JS `null` resolves to `None`.
    pub async fn evaluate_fn_handle<T: TypedDomHandle>(
        &self,
        declaration: &str,
        args: Vec<CallArg>,
    ) -> Result<Option<T>> {
        self.ensure_live()?;
        let value = self
            .runtime
            .call_function(&self.object_id, declaration, args, false)
            .await?;
        if value.is_null() {
            return Ok(None);
        }
        match DomHandle::from_remote(self.runtime.clone(), value) {
            Some(handle) => factory::create::<T>(handle).map(Some),
            None => Ok(None),
        }
    }

    /// Read a named property as a JSON value
    pub async fn property<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        self.evaluate_fn("(e, n) => e[n]", vec![CallArg::json(name)?])
            .await
    }

    /// Write a named property from a serializable value
    pub async fn set_property<V: Serialize>(&self, name: &str, value: V) -> Result<()> {
        self.evaluate_fn_unit(
            "(e, n, v) => { e[n] = v; }",
            vec![CallArg::json(name)?, CallArg::json(value)?],
        )
        .await
    }

    /// Read a named property as a typed handle
    pub async fn property_handle<T: TypedDomHandle>(&self, name: &str) -> Result<Option<T>> {
        self.evaluate_fn_handle("(e, n) => e[n]", vec![CallArg::json(name)?])
            .await
    }

    /// Serialize the remote value itself into `T`
    pub async fn json_value<T: DeserializeOwned>(&self) -> Result<T> {
        self.evaluate_fn("e => e", vec![]).await
    }

    /// Extract the indexed entries of an array-like remote object as typed
    /// handles, in index order.
    pub async fn handle_array<T: TypedDomHandle>(&self) -> Result<Vec<T>> {
        self.ensure_live()?;
        let mut entries: Vec<(usize, DomHandle)> = Vec::new();
        for prop in self.runtime.get_properties(&self.object_id).await? {
            let Ok(index) = prop.name.parse::<usize>() else {
                continue;
            };
            let Some(value) = prop.value else { continue };
            if let Some(handle) = DomHandle::from_remote(self.runtime.clone(), value) {
                entries.push((index, handle));
            }
        }
        entries.sort_by_key(|(index, _)| *index);
        entries
            .into_iter()
            .map(|(_, handle)| factory::create::<T>(handle))
            .collect()
    }

    /// Extract the indexed entries of an array-like remote object as strings
    pub async fn string_array(&self) -> Result<Vec<String>> {
        self.ensure_live()?;
        let mut entries: Vec<(usize, String)> = Vec::new();
        for prop in self.runtime.get_properties(&self.object_id).await? {
            let Ok(index) = prop.name.parse::<usize>() else {
                continue;
            };
            let Some(text) = prop
                .value
                .and_then(|v| v.value)
                .and_then(|v| v.as_str().map(str::to_string))
            else {
                continue;
            };
            entries.push((index, text));
        }
        entries.sort_by_key(|(index, _)| *index);
        Ok(entries.into_iter().map(|(_, text)| text).collect())
    }

    /// Extract the named string entries of a map-like remote object,
    /// preserving enumeration order.
    pub async fn string_map(&self) -> Result<Vec<(String, String)>> {
        self.ensure_live()?;
        let mut entries = Vec::new();
        for prop in self.runtime.get_properties(&self.object_id).await? {
            let Some(text) = prop
                .value
                .and_then(|v| v.value)
                .and_then(|v| v.as_str().map(str::to_string))
            else {
                continue;
            };
            entries.push((prop.name, text));
        }
        Ok(entries)
    }
}
