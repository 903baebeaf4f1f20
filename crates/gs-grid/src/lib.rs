//! Sort, filter, pagination, and navigation engine for grid-suite.
//!
//! This crate is the reusable data-grid core. It consumes a dataset and its
//! column model and exposes row activation upward as plain navigation data.
//!
//! # Overview
//!
//! - [`ColumnModel`] / [`ColumnDescriptor`]: how each column is labeled and read
//! - [`query`]: the pure sort/filter engine
//! - [`Paginator`]: page state and the visible slice
//! - [`Debouncer`]: keyed last-write-wins timer for filter input
//! - [`GridView`]: the orchestrator that owns all of the above plus focus
//! - [`Navigator`] / [`Route`]: location and one-shot navigation state
//! - [`DatasetRegistry`]: datasets resolvable by identifier
//! - [`detail::resolve`]: the detail view lookup
//! - [`Breadcrumbs`]: the trail for the current location
//!
//! # Architecture
//!
//! ```text
//! DatasetRegistry ──▶ Dataset ──open_grid──▶ GridView
//!                                              │
//!                 records + columns ──▶ query::apply ──▶ Paginator ──▶ page_rows
//!                                              │
//!                               activate(row) ─┴─▶ NavigationContext
//!                                                        │
//!                       Navigator::open_record ◀─────────┘
//!                                 │
//!                   detail::resolve(registry, id, context) ──▶ RecordDetail
//!                                 │
//!                 Navigator::return_to_origin ──▶ ReturnRequest
//!                                 │
//!                      GridView::restore_focus
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gs_core::{JsonRecord, SharedRecord};
//! use gs_grid::{ColumnDescriptor, ColumnModel, Dataset, DatasetRegistry, GridOptions};
//! use serde_json::json;
//!
//! let records: Vec<SharedRecord> = vec![
//!     Arc::new(JsonRecord::try_from(json!({"id": 1, "level": "INFO"})).unwrap()),
//!     Arc::new(JsonRecord::try_from(json!({"id": 2, "level": "ERROR"})).unwrap()),
//! ];
//! let columns = ColumnModel::new(vec![
//!     ColumnDescriptor::field("id", "ID").sortable(),
//!     ColumnDescriptor::field("level", "Level").filterable(),
//! ]);
//!
//! let mut registry = DatasetRegistry::new();
//! registry.register(Dataset::new("logs", "Application Logs", records, columns)).unwrap();
//!
//! let mut grid = registry.get("logs").unwrap().open_grid(&GridOptions::default());
//! grid.set_filter("level", "err").unwrap();
//! assert_eq!(grid.result_len(), 1);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod breadcrumb;
pub mod column;
pub mod debounce;
pub mod detail;
pub mod error;
pub mod grid;
pub mod navigation;
pub mod pagination;
pub mod query;
pub mod registry;
pub mod render;

pub use breadcrumb::{Breadcrumbs, Crumb};
pub use column::{Accessor, ColumnDescriptor, ColumnModel, DeriveFn};
pub use debounce::Debouncer;
pub use detail::{DetailField, RecordDetail};
pub use error::{DetailError, GridError, Recovery};
pub use grid::{GridEvent, GridOptions, GridView, RowKey};
pub use navigation::{LocationState, NavigationContext, Navigator, ReturnRequest, Route};
pub use pagination::{PageMeta, Paginator};
pub use query::{FilterState, SortDirection, SortState};
pub use registry::{Dataset, DatasetId, DatasetRegistry};
pub use render::{FieldRenderer, FieldRenderers, RenderedValue, Tone};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gs_core::{JsonRecord, Record, RecordId, SharedRecord};
    use serde_json::json;

    use super::*;

    /// The five-item vulnerability sample used across the scenarios below.
    fn registry() -> DatasetRegistry {
        let records: Vec<SharedRecord> = [
            (0, "Accessible Name", "Critical"),
            (3, "Accessible Name", "Critical"),
            (2, "Color Contrast", "Minor"),
            (16, "Keyboard Trap", "Critical"),
            (8, "Alt Text", "Minor"),
        ]
        .into_iter()
        .map(|(id, issue, severity)| {
            let record = JsonRecord::try_from(json!({
                "id": id,
                "issueType": issue,
                "severity": severity,
            }))
            .unwrap();
            Arc::new(record) as SharedRecord
        })
        .collect();
        let columns = ColumnModel::new(vec![
            ColumnDescriptor::field("id", "ID").sortable(),
            ColumnDescriptor::field("issueType", "Issue Type").sortable(),
            ColumnDescriptor::field("severity", "Severity").sortable().filterable(),
        ]);
        let mut registry = DatasetRegistry::new();
        registry
            .register(Dataset::new(
                "vulnerabilities",
                "Vulnerability Scanner Results",
                records,
                columns,
            ))
            .unwrap();
        registry
    }

    fn page_ids(grid: &GridView<SharedRecord>) -> Vec<RecordId> {
        grid.page_rows().iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_round_trip_restores_focus() {
        let registry = registry();
        let mut nav = Navigator::at(Route::parse("/vulnerabilities"));
        let dataset = registry.get("vulnerabilities").unwrap();
        let mut grid = dataset.open_grid(&GridOptions::default());

        // Row 1 holds id 3 in source order.
        let context = grid.activate(1).unwrap();
        assert_eq!(
            context,
            NavigationContext {
                record_id: RecordId::from(3),
                dataset_id: DatasetId::from("vulnerabilities"),
                origin_path: "/vulnerabilities".to_owned(),
            }
        );

        nav.open_record(context);
        let Route::Detail(record_id) = nav.route().clone() else {
            panic!("expected a detail route");
        };
        let detail = detail::resolve(&registry, &record_id, nav.context()).unwrap();
        assert_eq!(
            detail.field("issueType"),
            Some(&RenderedValue::text("Accessible Name"))
        );

        // The grid is re-created on return, as when the view is remounted.
        assert!(nav.return_to_origin());
        let mut grid = dataset.open_grid(&GridOptions::default());
        let request = nav.take_return_request().unwrap();
        assert_eq!(request.focus_id, RecordId::from(3));
        assert!(grid.restore_focus(request));
        assert_eq!(grid.focused_row(), Some(1));
        assert!(nav.take_return_request().is_none());
    }

    #[test]
    fn test_detail_without_context_is_navigation_error() {
        let registry = registry();
        let nav = Navigator::at(Route::parse("/details/3"));
        let error = detail::resolve(&registry, &RecordId::from(3), nav.context()).unwrap_err();
        assert_eq!(error, DetailError::MissingContext);
        assert_eq!(error.title(), "Navigation Error");
    }

    #[test]
    fn test_severity_filter_then_sort() {
        let registry = registry();
        let mut grid = registry
            .get("vulnerabilities")
            .unwrap()
            .open_grid(&GridOptions::default());

        grid.set_filter("severity", "critical").unwrap();
        assert_eq!(page_ids(&grid), [0, 3, 16].map(RecordId::from).to_vec());

        grid.clear_filters();
        grid.toggle_sort("id").unwrap();
        assert_eq!(page_ids(&grid), [0, 2, 3, 8, 16].map(RecordId::from).to_vec());
    }

    #[test]
    fn test_focus_not_restored_when_filtered_out() {
        let registry = registry();
        let mut grid = registry
            .get("vulnerabilities")
            .unwrap()
            .open_grid(&GridOptions::default());
        grid.set_filter("severity", "minor").unwrap();
        assert!(!grid.restore_focus(ReturnRequest {
            focus_id: RecordId::from(3),
        }));
        assert_eq!(grid.focused_row(), None);
    }
}
