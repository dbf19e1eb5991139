//! `<textarea>` element wrapper

use serde::{Deserialize, Serialize};

use super::{int_prop, string_prop, typed_wrapper, ElementOps, HtmlElementOps};
use crate::error::Result;
use crate::runtime::CallArg;

/// Direction of a text selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// Anchored at the start, extends forward
    Forward,
    /// Anchored at the end, extends backward
    Backward,
    /// Direction unknown
    None,
}

typed_wrapper!(
    /// A `<textarea>` element
    HtmlTextAreaElement,
    class = "HTMLTextAreaElement"
);

impl ElementOps for HtmlTextAreaElement {}
impl HtmlElementOps for HtmlTextAreaElement {}

impl HtmlTextAreaElement {
    string_prop!(
        /// The current value of the control
        value, set_value, "value"
    );

    int_prop!(
        /// Number of visible text rows
        rows, set_rows, "rows"
    );

    int_prop!(
        /// Visible width in average character widths
        cols, set_cols, "cols"
    );

    /// Offset of the start of the selection
    pub async fn selection_start(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.selectionStart", vec![]).await
    }

    /// Offset of the end of the selection
    pub async fn selection_end(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.selectionEnd", vec![]).await
    }

    /// Direction of the current selection
    pub async fn selection_direction(&self) -> Result<SelectionDirection> {
        self.handle.evaluate_fn("e => e.selectionDirection", vec![]).await
    }

    /// Select all text in the control
    pub async fn select(&self) -> Result<()> {
        self.handle.evaluate_fn_unit("e => e.select()", vec![]).await
    }

    /// Select a range of text, optionally with a direction
    pub async fn set_selection_range(
        &self,
        start: i64,
        end: i64,
        direction: Option<SelectionDirection>,
    ) -> Result<()> {
        match direction {
            Some(direction) => {
                self.handle
                    .evaluate_fn_unit(
                        "(e, s, n, d) => e.setSelectionRange(s, n, d)",
                        vec![
                            CallArg::json(start)?,
                            CallArg::json(end)?,
                            CallArg::json(direction)?,
                        ],
                    )
                    .await
            }
            None => {
                self.handle
                    .evaluate_fn_unit(
                        "(e, s, n) => e.setSelectionRange(s, n)",
                        vec![CallArg::json(start)?, CallArg::json(end)?],
                    )
                    .await
            }
        }
    }
}
