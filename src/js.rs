//! JavaScript snippet builders
//!
//! Helpers for generating the expressions the typed layer evaluates in the
//! page. String payloads are embedded via JSON encoding, which handles
//! quoting and escaping in one step.

/// Function declaration that reports an element's class name
pub(crate) const TO_STRING_TAG_FN: &str = "e => e[Symbol.toStringTag]";

/// Function declaration that checks whether an element is visible.
///
/// Mirrors the usual computed-style checks: display, visibility, opacity
/// and a non-empty border box.
pub(crate) const IS_VISIBLE_FN: &str = r#"e => {
    const style = window.getComputedStyle(e);
    if (style.display === 'none') return false;
    if (style.visibility === 'hidden') return false;
    if (style.opacity === '0') return false;
    const rect = e.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}"#;

/// Embed a string into a JS expression, quoted and escaped
pub(crate) fn embed_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Expression querying the document for the first selector match
pub(crate) fn query_selector_expression(selector: &str) -> String {
    format!("document.querySelector({})", embed_str(selector))
}

/// Expression querying the document for all selector matches
pub(crate) fn query_selector_all_expression(selector: &str) -> String {
    format!("document.querySelectorAll({})", embed_str(selector))
}

/// Expression applying a function declaration to JSON-encoded arguments
pub(crate) fn call_function_expression(declaration: &str, args: &[serde_json::Value]) -> String {
    let args = args
        .iter()
        .map(|v| serde_json::to_string(v).unwrap_or_else(|_| "null".to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({declaration})({args})")
}

/// Expression creating a detached element, optionally with an id
pub(crate) fn create_element_expression(tag_name: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!(
            "(() => {{ const e = document.createElement({}); e.id = {}; return e; }})()",
            embed_str(tag_name),
            embed_str(id)
        ),
        None => format!("document.createElement({})", embed_str(tag_name)),
    }
}
