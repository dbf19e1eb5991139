//! Page-level typed query tests

mod common;

use std::time::Duration;

use serde_json::json;

use common::mock_context;
use oxidom::{
    ElementTag, Error, HtmlBodyElement, HtmlButtonElement, HtmlDivElement, HtmlInputElement,
    RemoteProperty, RemoteValue, TypedDomHandle, TypedElement, WaitOptions,
};

#[tokio::test]
async fn test_query_selector_miss_is_none() {
    let (dom, mock) = mock_context();

    mock.enqueue_null().await;
    let result = dom
        .query_selector::<HtmlButtonElement>("button.missing")
        .await
        .unwrap();
    assert!(result.is_none());

    let call = mock.last_call().await.unwrap();
    assert_eq!(call.script, "document.querySelector(\"button.missing\")");
}

#[tokio::test]
async fn test_query_selector_returns_typed_wrapper() {
    let (dom, mock) = mock_context();

    let id = mock.enqueue_handle("HTMLButtonElement").await;
    let button = dom
        .query_selector::<HtmlButtonElement>("button")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(button.handle().object_id(), id);
    assert_eq!(button.class_name(), "HTMLButtonElement");
}

#[tokio::test]
async fn test_query_selector_rejects_wrong_type() {
    let (dom, mock) = mock_context();

    mock.enqueue_handle("HTMLDivElement").await;
    let result = dom.query_selector::<HtmlButtonElement>("div").await;
    match result {
        Err(Error::TypeMismatch { requested, actual }) => {
            assert_eq!(requested, "HtmlButtonElement");
            assert_eq!(actual, "HTMLDivElement");
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_selector_any_dispatches_by_class() {
    let (dom, mock) = mock_context();

    mock.enqueue_handle("HTMLInputElement").await;
    let typed = dom.query_selector_any("input").await.unwrap().unwrap();
    assert_eq!(typed.tag(), ElementTag::Input);
    assert!(matches!(typed, TypedElement::Input(_)));
}

#[tokio::test]
async fn test_query_selector_all_materializes_and_disposes_list() {
    let (dom, mock) = mock_context();

    let list_id = mock.enqueue_handle("NodeList").await;
    mock.enqueue_properties(vec![
        RemoteProperty {
            name: "0".to_string(),
            value: Some(RemoteValue::from_handle("div-0", "HTMLDivElement")),
        },
        RemoteProperty {
            name: "1".to_string(),
            value: Some(RemoteValue::from_handle("div-1", "HTMLDivElement")),
        },
    ])
    .await;

    let divs = dom.query_selector_all::<HtmlDivElement>("div").await.unwrap();
    assert_eq!(divs.len(), 2);
    assert_eq!(divs[0].handle().object_id(), "div-0");

    // The NodeList handle itself is released once materialized.
    assert_eq!(mock.released().await, vec![list_id]);
}

#[tokio::test]
async fn test_query_selector_all_no_matches_is_empty_vec() {
    let (dom, mock) = mock_context();

    // querySelectorAll always hands back a NodeList, here with no indexed
    // entries.
    let list_id = mock.enqueue_handle("NodeList").await;
    mock.enqueue_properties(vec![RemoteProperty {
        name: "length".to_string(),
        value: Some(RemoteValue::from_json(json!(0))),
    }])
    .await;

    let divs = dom
        .query_selector_all::<HtmlDivElement>("div.missing")
        .await
        .unwrap();
    assert!(divs.is_empty());
    assert_eq!(mock.released().await, vec![list_id]);
}

#[tokio::test]
async fn test_query_selector_all_releases_list_on_failure() {
    let (dom, mock) = mock_context();

    // Materialization fails (nothing scripted for the property sweep); the
    // NodeList handle must still be released.
    let list_id = mock.enqueue_handle("NodeList").await;

    let result = dom.query_selector_all::<HtmlDivElement>("div").await;
    assert!(result.is_err());
    assert_eq!(mock.released().await, vec![list_id]);
}

#[tokio::test]
async fn test_create_html_element() {
    let (dom, mock) = mock_context();

    mock.enqueue_handle("HTMLDivElement").await;
    let div = dom
        .create_html_element::<HtmlDivElement>("div")
        .await
        .unwrap();
    assert_eq!(div.class_name(), "HTMLDivElement");

    let call = mock.last_call().await.unwrap();
    assert_eq!(call.script, "document.createElement(\"div\")");
}

#[tokio::test]
async fn test_create_html_element_with_id() {
    let (dom, mock) = mock_context();

    mock.enqueue_handle("HTMLInputElement").await;
    let _input = dom
        .create_html_element_with_id::<HtmlInputElement>("input", "search")
        .await
        .unwrap();

    let call = mock.last_call().await.unwrap();
    assert!(call.script.contains("document.createElement(\"input\")"));
    assert!(call.script.contains("e.id = \"search\""));
}

#[tokio::test]
async fn test_body_is_typed() {
    let (dom, mock) = mock_context();

    mock.enqueue_handle("HTMLBodyElement").await;
    let body: HtmlBodyElement = dom.body().await.unwrap();
    assert_eq!(body.class_name(), "HTMLBodyElement");
}

#[tokio::test]
async fn test_evaluate_expression_parses_json() {
    let (dom, mock) = mock_context();

    mock.enqueue_json(json!({"width": 1280, "height": 720})).await;
    #[derive(serde::Deserialize)]
    struct Viewport {
        width: i64,
        height: i64,
    }
    let viewport: Viewport = dom
        .evaluate_expression("({width: innerWidth, height: innerHeight})")
        .await
        .unwrap();
    assert_eq!(viewport.width, 1280);
    assert_eq!(viewport.height, 720);
}

#[tokio::test]
async fn test_evaluate_function_handle_embeds_args() {
    let (dom, mock) = mock_context();

    mock.enqueue_handle("HTMLDivElement").await;
    let _div = dom
        .evaluate_function_handle::<HtmlDivElement>(
            "id => document.getElementById(id)",
            &[json!("main")],
        )
        .await
        .unwrap()
        .unwrap();

    let call = mock.last_call().await.unwrap();
    assert_eq!(call.script, "(id => document.getElementById(id))(\"main\")");
}

#[tokio::test]
async fn test_adopt_probes_class_name() {
    let (dom, mock) = mock_context();

    mock.enqueue_json(json!("HTMLButtonElement")).await;
    let button: HtmlButtonElement = dom.adopt("ext-obj-1").await.unwrap();
    assert_eq!(button.class_name(), "HTMLButtonElement");
    assert_eq!(button.handle().object_id(), "ext-obj-1");
}

#[tokio::test]
async fn test_wait_for_selector_succeeds_after_polls() {
    let (dom, mock) = mock_context();

    // Two misses, then a match.
    mock.enqueue_null().await;
    mock.enqueue_null().await;
    mock.enqueue_handle("HTMLButtonElement").await;

    let options = WaitOptions {
        timeout: Duration::from_secs(2),
        polling: Duration::from_millis(1),
        visible: false,
    };
    let button = dom
        .wait_for_selector::<HtmlButtonElement>("button", options)
        .await
        .unwrap();
    assert_eq!(button.class_name(), "HTMLButtonElement");
    assert_eq!(mock.calls().await.len(), 3);
}

#[tokio::test]
async fn test_wait_for_selector_visibility_requirement() {
    let (dom, mock) = mock_context();

    // First match is hidden and gets discarded; second match is visible.
    let hidden_id = mock.enqueue_handle("HTMLButtonElement").await;
    mock.enqueue_json(json!(false)).await;
    mock.enqueue_handle("HTMLButtonElement").await;
    mock.enqueue_json(json!(true)).await;

    let options = WaitOptions {
        timeout: Duration::from_secs(2),
        polling: Duration::from_millis(1),
        visible: true,
    };
    let button = dom
        .wait_for_selector::<HtmlButtonElement>("button", options)
        .await
        .unwrap();
    assert!(!button.handle().is_disposed());
    assert_eq!(mock.released().await, vec![hidden_id]);
}

#[tokio::test]
async fn test_wait_for_selector_releases_match_on_visibility_failure() {
    let (dom, mock) = mock_context();

    let match_id = mock.enqueue_handle("HTMLButtonElement").await;
    mock.enqueue_error(Error::script_exception("node detached")).await;

    let options = WaitOptions {
        timeout: Duration::from_secs(2),
        polling: Duration::from_millis(1),
        visible: true,
    };
    let result = dom
        .wait_for_selector::<HtmlButtonElement>("button", options)
        .await;
    assert!(matches!(result, Err(Error::ScriptException(_))));
    assert_eq!(mock.released().await, vec![match_id]);
}

#[tokio::test]
async fn test_wait_for_selector_times_out() {
    let (dom, mock) = mock_context();

    // Keep the queue stocked with misses so polling never errors.
    for _ in 0..64 {
        mock.enqueue_null().await;
    }

    let options = WaitOptions {
        timeout: Duration::from_millis(30),
        polling: Duration::from_millis(1),
        visible: false,
    };
    let result = dom
        .wait_for_selector::<HtmlButtonElement>("#never", options)
        .await;
    assert!(matches!(result, Err(Error::Timeout(_))));
}
