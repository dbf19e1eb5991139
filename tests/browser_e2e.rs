//! End-to-end tests against a real Chromium
//!
//! Ignored by default; run with `cargo test -- --ignored` on a machine with
//! a Chromium binary on the path.

use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;

use oxidom::{
    ButtonType, ElementOps, HtmlButtonElement, HtmlElementOps, HtmlInputElement,
    HtmlSelectElement, HtmlTableElement, PageDomExt, WaitOptions,
};

async fn launch() -> (Browser, tokio::task::JoinHandle<()>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = BrowserConfig::builder()
        .no_sandbox()
        .build()
        .expect("browser config");
    let (browser, mut handler) = Browser::launch(config).await.expect("browser launch");
    let handle = tokio::spawn(async move {
        while let Some(event) = handler.next().await {
            if event.is_err() {
                break;
            }
        }
    });
    (browser, handle)
}

async fn page_with(browser: &Browser, html: &str) -> chromiumoxide::Page {
    let page = browser.new_page("about:blank").await.expect("new page");
    page.set_content(html).await.expect("set content");
    page
}

#[tokio::test]
#[ignore]
async fn test_e2e_button_round_trip() {
    let (browser, _handler) = launch().await;
    let page = page_with(
        &browser,
        "<button type='reset' disabled>Click Me</button>",
    )
    .await;
    let dom = page.dom();

    let button = dom
        .query_selector::<HtmlButtonElement>("button")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(button.inner_text().await.unwrap(), "Click Me");
    assert_eq!(button.button_type().await.unwrap(), ButtonType::Reset);
    assert!(button.disabled().await.unwrap());

    button.set_disabled(false).await.unwrap();
    assert!(!button.disabled().await.unwrap());
}

#[tokio::test]
#[ignore]
async fn test_e2e_missing_selector_is_none() {
    let (browser, _handler) = launch().await;
    let page = page_with(&browser, "<div></div>").await;

    let result = page
        .typed_query_selector::<HtmlButtonElement>("#nope")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore]
async fn test_e2e_input_typing() {
    let (browser, _handler) = launch().await;
    let page = page_with(&browser, "<input name='q' value=''>").await;
    let dom = page.dom();

    let input = dom
        .query_selector::<HtmlInputElement>("input[name='q']")
        .await
        .unwrap()
        .unwrap();
    input.type_text("hello world").await.unwrap();
    assert_eq!(input.value().await.unwrap(), "hello world");
}

#[tokio::test]
#[ignore]
async fn test_e2e_select_options() {
    let (browser, _handler) = launch().await;
    let page = page_with(
        &browser,
        "<select><option value='a'>A</option><option value='b'>B</option></select>",
    )
    .await;
    let dom = page.dom();

    let select = dom
        .query_selector::<HtmlSelectElement>("select")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(select.length().await.unwrap(), 2);

    select.add_new_option("C", "c").await.unwrap();
    assert_eq!(select.length().await.unwrap(), 3);

    let options = select.options().await.unwrap().to_vec().await.unwrap();
    let mut values = Vec::new();
    for option in &options {
        values.push(option.value().await.unwrap());
    }
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[tokio::test]
#[ignore]
async fn test_e2e_table_manipulation() {
    let (browser, _handler) = launch().await;
    let page = page_with(&browser, "<table><tr><td>seed</td></tr></table>").await;
    let dom = page.dom();

    let table = dom
        .query_selector::<HtmlTableElement>("table")
        .await
        .unwrap()
        .unwrap();

    let row = table.insert_row(None).await.unwrap();
    let cell = row.insert_cell_with_text(None, "added").await.unwrap();
    assert_eq!(cell.inner_text().await.unwrap(), "added");

    let rows = table.rows().await.unwrap();
    assert_eq!(rows.length().await.unwrap(), 2);
}

#[tokio::test]
#[ignore]
async fn test_e2e_wait_for_selector() {
    let (browser, _handler) = launch().await;
    let page = page_with(&browser, "<div id='host'></div>").await;
    let dom = page.dom();

    page.evaluate(
        "setTimeout(() => { \
         document.getElementById('host').innerHTML = '<button>Late</button>'; }, 200)",
    )
    .await
    .unwrap();

    let button = dom
        .wait_for_selector::<HtmlButtonElement>("button", WaitOptions::default())
        .await
        .unwrap();
    assert_eq!(button.inner_text().await.unwrap(), "Late");
}
