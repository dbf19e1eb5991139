//! Mock remote runtime for testing
//!
//! A scripted [`RemoteRuntime`]: responses are queued up front, every call is
//! recorded, and released object ids are tracked. Lets the typed wrapper
//! layer be exercised without a browser.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::runtime::traits::{CallArg, RemoteProperty, RemoteRuntime, RemoteValue};

/// A recorded runtime call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Object id the call targeted, if any
    pub object_id: Option<String>,
    /// Expression or function declaration sent to the browser
    pub script: String,
    /// JSON arguments (handles rendered as their object id strings)
    pub args: Vec<Value>,
}

#[derive(Debug)]
enum Scripted {
    Value(Result<RemoteValue>),
    Properties(Vec<RemoteProperty>),
}

/// Scripted mock runtime
#[derive(Debug, Default)]
pub struct MockRuntime {
    responses: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
    released: Mutex<Vec<String>>,
}

impl MockRuntime {
    /// Create an empty mock runtime
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a by-value response
    pub async fn enqueue_json(&self, value: Value) {
        self.responses
            .lock()
            .await
            .push_back(Scripted::Value(Ok(RemoteValue::from_json(value))));
    }

    /// Queue a by-reference response with a generated object id
    pub async fn enqueue_handle(&self, class_name: &str) -> String {
        let object_id = uuid::Uuid::new_v4().to_string();
        self.responses
            .lock()
            .await
            .push_back(Scripted::Value(Ok(RemoteValue::from_handle(
                object_id.as_str(),
                class_name,
            ))));
        object_id
    }

    /// Queue a JS `null` response
    pub async fn enqueue_null(&self) {
        self.responses
            .lock()
            .await
            .push_back(Scripted::Value(Ok(RemoteValue::default())));
    }

    /// Queue an error response
    pub async fn enqueue_error(&self, error: Error) {
        self.responses
            .lock()
            .await
            .push_back(Scripted::Value(Err(error)));
    }

    /// Queue a property enumeration response
    pub async fn enqueue_properties(&self, properties: Vec<RemoteProperty>) {
        self.responses
            .lock()
            .await
            .push_back(Scripted::Properties(properties));
    }

    /// All calls recorded so far
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    /// The most recent recorded call
    pub async fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().await.last().cloned()
    }

    /// Object ids released so far
    pub async fn released(&self) -> Vec<String> {
        self.released.lock().await.clone()
    }

    async fn record(&self, object_id: Option<&str>, script: &str, args: &[CallArg]) {
        let args = args
            .iter()
            .map(|a| match a {
                CallArg::Json(v) => v.clone(),
                CallArg::Handle(id) => Value::String(id.clone()),
            })
            .collect();
        self.calls.lock().await.push(RecordedCall {
            object_id: object_id.map(str::to_string),
            script: script.to_string(),
            args,
        });
    }

    async fn next_value(&self) -> Result<RemoteValue> {
        match self.responses.lock().await.pop_front() {
            Some(Scripted::Value(result)) => result,
            Some(Scripted::Properties(_)) => Err(Error::internal(
                "mock: expected a value response, found properties",
            )),
            None => Err(Error::internal("mock: no scripted response left")),
        }
    }
}

#[async_trait]
impl RemoteRuntime for MockRuntime {
    async fn evaluate_expression(&self, expression: &str, _by_value: bool) -> Result<RemoteValue> {
        self.record(None, expression, &[]).await;
        self.next_value().await
    }

    async fn call_function(
        &self,
        object_id: &str,
        declaration: &str,
        args: Vec<CallArg>,
        _by_value: bool,
    ) -> Result<RemoteValue> {
        self.record(Some(object_id), declaration, &args).await;
        self.next_value().await
    }

    async fn get_properties(&self, object_id: &str) -> Result<Vec<RemoteProperty>> {
        self.record(Some(object_id), "<getProperties>", &[]).await;
        match self.responses.lock().await.pop_front() {
            Some(Scripted::Properties(props)) => Ok(props),
            Some(Scripted::Value(_)) => Err(Error::internal(
                "mock: expected a properties response, found value",
            )),
            None => Err(Error::internal("mock: no scripted response left")),
        }
    }

    async fn release(&self, object_id: &str) -> Result<()> {
        self.released.lock().await.push(object_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_scripted_responses_in_order() {
        let mock = MockRuntime::new();
        mock.enqueue_json(json!("first")).await;
        mock.enqueue_null().await;

        let a = mock.evaluate_expression("1", true).await.unwrap();
        assert_eq!(a.value, Some(json!("first")));

        let b = mock.evaluate_expression("2", false).await.unwrap();
        assert!(b.is_null());

        assert!(mock.evaluate_expression("3", true).await.is_err());
    }

    #[tokio::test]
    async fn test_records_calls_and_releases() {
        let mock = MockRuntime::new();
        mock.enqueue_json(json!(true)).await;

        mock.call_function("obj-1", "e => e.checked", vec![], true)
            .await
            .unwrap();
        mock.release("obj-1").await.unwrap();

        let call = mock.last_call().await.unwrap();
        assert_eq!(call.object_id.as_deref(), Some("obj-1"));
        assert_eq!(call.script, "e => e.checked");
        assert_eq!(mock.released().await, vec!["obj-1".to_string()]);
    }
}
