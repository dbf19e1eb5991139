//! Table element wrappers
//!
//! Covers `<table>`, its `<thead>`/`<tbody>`/`<tfoot>` sections, `<tr>` rows
//! and `<td>`/`<th>` cells. Row and cell insertion mirrors the DOM API: a
//! missing index appends at the end.

use serde::Deserialize;

use super::{prop_get, string_prop, typed_wrapper, ElementOps, HtmlElementOps};
use crate::collections::HtmlCollection;
use crate::error::{Error, Result};
use crate::runtime::CallArg;

/// Whether a table cell is a data or header cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableCellKind {
    /// A `<td>` data cell
    Td,
    /// A `<th>` header cell
    Th,
}

typed_wrapper!(
    /// A `<table>` element
    HtmlTableElement,
    class = "HTMLTableElement"
);

impl ElementOps for HtmlTableElement {}
impl HtmlElementOps for HtmlTableElement {}

impl HtmlTableElement {
    /// All rows of the table, in document order
    pub async fn rows(&self) -> Result<HtmlCollection<HtmlTableRowElement>> {
        self.handle
            .property_handle("rows")
            .await?
            .ok_or_else(|| Error::internal("table has no rows collection"))
    }

    /// The table's `<thead>`, if present
    pub async fn t_head(&self) -> Result<Option<HtmlTableSectionElement>> {
        self.handle.property_handle("tHead").await
    }

    /// The table's `<tfoot>`, if present
    pub async fn t_foot(&self) -> Result<Option<HtmlTableSectionElement>> {
        self.handle.property_handle("tFoot").await
    }

    /// The table's `<tbody>` sections
    pub async fn t_bodies(&self) -> Result<HtmlCollection<HtmlTableSectionElement>> {
        self.handle
            .property_handle("tBodies")
            .await?
            .ok_or_else(|| Error::internal("table has no tBodies collection"))
    }

    /// Return the existing `<thead>` or create one
    pub async fn create_t_head(&self) -> Result<HtmlTableSectionElement> {
        self.handle
            .evaluate_fn_handle("e => e.createTHead()", vec![])
            .await?
            .ok_or_else(|| Error::internal("createTHead returned no element"))
    }

    /// Return the existing `<tfoot>` or create one
    pub async fn create_t_foot(&self) -> Result<HtmlTableSectionElement> {
        self.handle
            .evaluate_fn_handle("e => e.createTFoot()", vec![])
            .await?
            .ok_or_else(|| Error::internal("createTFoot returned no element"))
    }

    /// Remove the table's `<thead>`, if present
    pub async fn delete_t_head(&self) -> Result<()> {
        self.handle.evaluate_fn_unit("e => e.deleteTHead()", vec![]).await
    }

    /// Remove the table's `<tfoot>`, if present
    pub async fn delete_t_foot(&self) -> Result<()> {
        self.handle.evaluate_fn_unit("e => e.deleteTFoot()", vec![]).await
    }

    /// Insert a row at `index`, or at the end when `index` is `None`
    pub async fn insert_row(&self, index: Option<i64>) -> Result<HtmlTableRowElement> {
        self.handle
            .evaluate_fn_handle(
                "(e, i) => e.insertRow(i)",
                vec![CallArg::json(index.unwrap_or(-1))?],
            )
            .await?
            .ok_or_else(|| Error::internal("insertRow returned no element"))
    }

    /// Remove the row at the given index
    pub async fn delete_row(&self, index: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, i) => e.deleteRow(i)", vec![CallArg::json(index)?])
            .await
    }
}

typed_wrapper!(
    /// A `<thead>`, `<tbody>` or `<tfoot>` element
    HtmlTableSectionElement,
    class = "HTMLTableSectionElement"
);

impl ElementOps for HtmlTableSectionElement {}
impl HtmlElementOps for HtmlTableSectionElement {}

impl HtmlTableSectionElement {
    /// The section's rows, in document order
    pub async fn rows(&self) -> Result<HtmlCollection<HtmlTableRowElement>> {
        self.handle
            .property_handle("rows")
            .await?
            .ok_or_else(|| Error::internal("table section has no rows collection"))
    }

    /// Insert a row at `index`, or at the end when `index` is `None`
    pub async fn insert_row(&self, index: Option<i64>) -> Result<HtmlTableRowElement> {
        self.handle
            .evaluate_fn_handle(
                "(e, i) => e.insertRow(i)",
                vec![CallArg::json(index.unwrap_or(-1))?],
            )
            .await?
            .ok_or_else(|| Error::internal("insertRow returned no element"))
    }

    /// Remove the row at the given index
    pub async fn delete_row(&self, index: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, i) => e.deleteRow(i)", vec![CallArg::json(index)?])
            .await
    }
}

typed_wrapper!(
    /// A `<tr>` element
    HtmlTableRowElement,
    class = "HTMLTableRowElement"
);

impl ElementOps for HtmlTableRowElement {}
impl HtmlElementOps for HtmlTableRowElement {}

impl HtmlTableRowElement {
    /// The row's cells, in document order
    pub async fn cells(&self) -> Result<HtmlCollection<HtmlTableCellElement>> {
        self.handle
            .property_handle("cells")
            .await?
            .ok_or_else(|| Error::internal("table row has no cells collection"))
    }

    prop_get!(
        /// Position of the row within the whole table, `-1` when detached
        row_index: i64, "rowIndex"
    );

    prop_get!(
        /// Position of the row within its section, `-1` when detached
        section_row_index: i64, "sectionRowIndex"
    );

    /// Insert a cell at `index`, or at the end when `index` is `None`
    pub async fn insert_cell(&self, index: Option<i64>) -> Result<HtmlTableCellElement> {
        self.handle
            .evaluate_fn_handle(
                "(e, i) => e.insertCell(i)",
                vec![CallArg::json(index.unwrap_or(-1))?],
            )
            .await?
            .ok_or_else(|| Error::internal("insertCell returned no element"))
    }

    /// Insert a cell and set its text content in one round trip
    pub async fn insert_cell_with_text(
        &self,
        index: Option<i64>,
        text: &str,
    ) -> Result<HtmlTableCellElement> {
        self.handle
            .evaluate_fn_handle(
                "(e, i, t) => { const c = e.insertCell(i); c.textContent = t; return c; }",
                vec![CallArg::json(index.unwrap_or(-1))?, CallArg::json(text)?],
            )
            .await?
            .ok_or_else(|| Error::internal("insertCell returned no element"))
    }

    /// Remove the cell at the given index
    pub async fn delete_cell(&self, index: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, i) => e.deleteCell(i)", vec![CallArg::json(index)?])
            .await
    }
}

typed_wrapper!(
    /// A `<td>` or `<th>` element
    HtmlTableCellElement,
    class = "HTMLTableCellElement"
);

impl ElementOps for HtmlTableCellElement {}
impl HtmlElementOps for HtmlTableCellElement {}

impl HtmlTableCellElement {
    prop_get!(
        /// Position of the cell within its row, `-1` when detached
        cell_index: i64, "cellIndex"
    );

    string_prop!(
        /// Abbreviated description of the cell's content
        abbr, set_abbr, "abbr"
    );

    string_prop!(
        /// Cells a header cell relates to (e.g. `row`, `col`)
        scope, set_scope, "scope"
    );

    /// Number of columns the cell spans
    pub async fn col_span(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.colSpan", vec![]).await
    }

    /// Set the number of columns the cell spans
    pub async fn set_col_span(&self, value: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, v) => { e.colSpan = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Number of rows the cell spans
    pub async fn row_span(&self) -> Result<i64> {
        self.handle.evaluate_fn("e => e.rowSpan", vec![]).await
    }

    /// Set the number of rows the cell spans
    pub async fn set_row_span(&self, value: i64) -> Result<()> {
        self.handle
            .evaluate_fn_unit("(e, v) => { e.rowSpan = v; }", vec![CallArg::json(value)?])
            .await
    }

    /// Whether this is a `<td>` or `<th>` cell
    pub async fn kind(&self) -> Result<TableCellKind> {
        self.handle
            .evaluate_fn("e => e.tagName.toLowerCase()", vec![])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cell_kind_matches_tag_names() {
        assert_eq!(
            serde_json::from_str::<TableCellKind>("\"td\"").unwrap(),
            TableCellKind::Td
        );
        assert_eq!(
            serde_json::from_str::<TableCellKind>("\"th\"").unwrap(),
            TableCellKind::Th
        );
        assert!(serde_json::from_str::<TableCellKind>("\"tr\"").is_err());
    }
}
