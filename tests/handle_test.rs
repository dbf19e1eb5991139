//! Handle lifecycle and coercion tests

mod common;

use serde_json::json;

use common::{handle_on, mock_context};
use oxidom::{Error, RemoteProperty, RemoteValue};

#[tokio::test]
async fn test_evaluate_fn_parses_json_result() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-1", "HTMLInputElement");

    mock.enqueue_json(json!("hello")).await;
    let value: String = handle.evaluate_fn("e => e.value", vec![]).await.unwrap();
    assert_eq!(value, "hello");

    let call = mock.last_call().await.unwrap();
    assert_eq!(call.object_id.as_deref(), Some("obj-1"));
    assert_eq!(call.script, "e => e.value");
}

#[tokio::test]
async fn test_evaluate_fn_reports_coercion_failure() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-1", "HTMLInputElement");

    mock.enqueue_json(json!("not a number")).await;
    let result: oxidom::Result<i64> = handle.evaluate_fn("e => e.value", vec![]).await;
    assert!(matches!(result, Err(Error::Coercion(_))));
}

#[tokio::test]
async fn test_script_exception_propagates() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-1", "HTMLElement");

    mock.enqueue_error(Error::script_exception("ReferenceError: nope is not defined"))
        .await;
    let result: oxidom::Result<String> = handle.evaluate_fn("e => nope", vec![]).await;
    assert!(matches!(result, Err(Error::ScriptException(_))));
}

#[tokio::test]
async fn test_dispose_is_idempotent_and_releases_once() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-9", "HTMLDivElement");

    assert!(!handle.is_disposed());
    handle.dispose().await.unwrap();
    handle.dispose().await.unwrap();

    assert!(handle.is_disposed());
    assert_eq!(mock.released().await, vec!["obj-9".to_string()]);
}

#[tokio::test]
async fn test_disposed_handle_rejects_evaluation() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-9", "HTMLDivElement");

    handle.dispose().await.unwrap();
    let result: oxidom::Result<String> = handle.evaluate_fn("e => e.id", vec![]).await;
    assert!(matches!(result, Err(Error::HandleDisposed(_))));
}

#[tokio::test]
async fn test_string_array_sorts_by_index() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-1", "DOMTokenList");

    // Enumeration order is not index order; extraction must sort.
    mock.enqueue_properties(vec![
        RemoteProperty {
            name: "2".to_string(),
            value: Some(RemoteValue::from_json(json!("third"))),
        },
        RemoteProperty {
            name: "length".to_string(),
            value: Some(RemoteValue::from_json(json!(3))),
        },
        RemoteProperty {
            name: "0".to_string(),
            value: Some(RemoteValue::from_json(json!("first"))),
        },
        RemoteProperty {
            name: "1".to_string(),
            value: Some(RemoteValue::from_json(json!("second"))),
        },
    ])
    .await;

    let values = handle.string_array().await.unwrap();
    assert_eq!(values, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_string_map_preserves_enumeration_order() {
    let (_dom, mock) = mock_context();
    let handle = handle_on(&mock, "obj-1", "DOMStringMap");

    mock.enqueue_properties(vec![
        RemoteProperty {
            name: "userId".to_string(),
            value: Some(RemoteValue::from_json(json!("42"))),
        },
        RemoteProperty {
            name: "role".to_string(),
            value: Some(RemoteValue::from_json(json!("admin"))),
        },
    ])
    .await;

    let entries = handle.string_map().await.unwrap();
    assert_eq!(
        entries,
        vec![
            ("userId".to_string(), "42".to_string()),
            ("role".to_string(), "admin".to_string()),
        ]
    );
}
