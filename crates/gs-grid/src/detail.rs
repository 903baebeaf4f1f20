//! Detail view resolution.
//!
//! Given a record identifier and the navigation context it was opened with,
//! [`resolve`] finds the dataset and record through the registry and renders
//! every field. Failures come back as [`DetailError`] so the front end can show
//! a distinct error state with a way out.

use gs_core::{Record, RecordId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::DetailError;
use crate::navigation::{NavigationContext, ReturnRequest};
use crate::registry::{DatasetId, DatasetRegistry};
use crate::render::RenderedValue;

/// One rendered field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    /// The field name.
    pub name: String,
    /// The rendered value.
    pub value: RenderedValue,
}

impl DetailField {
    /// The field name as a label: first letter capitalized.
    #[must_use]
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

/// A record resolved and rendered for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetail {
    /// The owning dataset.
    pub dataset_id: DatasetId,
    /// The owning dataset's title.
    pub dataset_title: String,
    /// The record's identifier.
    pub record_id: RecordId,
    /// Fields in declaration order.
    pub fields: Vec<DetailField>,
    /// Path of the grid to return to.
    pub origin_path: String,
}

impl RecordDetail {
    /// Heading of the detail view.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Details for Item {}", self.record_id)
    }

    /// The request that returns to the grid with this record focused.
    #[must_use]
    pub fn return_request(&self) -> ReturnRequest {
        ReturnRequest {
            focus_id: self.record_id.clone(),
        }
    }

    /// Looks up a rendered field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&RenderedValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

/// Resolves `record_id` against the dataset named by `context`.
///
/// The record is matched by stringified identifier, so `"3"` finds the record
/// with numeric id `3`.
///
/// # Errors
///
/// - [`DetailError::MissingContext`] when `context` is `None`
/// - [`DetailError::UnknownDataset`] when the context names no registered dataset
/// - [`DetailError::RecordNotFound`] when no record has the identifier
pub fn resolve(
    registry: &DatasetRegistry,
    record_id: &RecordId,
    context: Option<&NavigationContext>,
) -> Result<RecordDetail, DetailError> {
    let Some(context) = context else {
        warn!(record = %record_id, "Detail view opened without navigation context");
        return Err(DetailError::MissingContext);
    };

    let Some(dataset) = registry.get(context.dataset_id.as_str()) else {
        warn!(dataset = %context.dataset_id, "Detail view names unknown dataset");
        return Err(DetailError::UnknownDataset {
            dataset_id: context.dataset_id.clone(),
        });
    };

    let Some(record) = dataset.find_record(&record_id.to_string()) else {
        warn!(record = %record_id, dataset = %context.dataset_id, "Record not found");
        return Err(DetailError::RecordNotFound {
            record_id: record_id.clone(),
            dataset_id: context.dataset_id.clone(),
            origin_path: context.origin_path.clone(),
        });
    };

    let renderers = dataset.renderers();
    let fields = record
        .fields()
        .into_iter()
        .map(|(name, value)| DetailField {
            value: renderers.render(&name, &value, &**record),
            name,
        })
        .collect::<Vec<_>>();

    debug!(record = %record_id, dataset = %context.dataset_id, fields = fields.len(), "Resolved detail");
    Ok(RecordDetail {
        dataset_id: context.dataset_id.clone(),
        dataset_title: dataset.title().to_owned(),
        record_id: record.id(),
        fields,
        origin_path: context.origin_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::column::{ColumnDescriptor, ColumnModel};
    use crate::error::Recovery;
    use crate::registry::Dataset;
    use crate::render::{FieldRenderers, Tone};
    use gs_core::{FieldValue, JsonRecord, Record, SharedRecord};
    use serde_json::json;

    fn severity_badge(value: &FieldValue, _record: &dyn Record) -> RenderedValue {
        let tone = if value.as_text() == "Critical" {
            Tone::Danger
        } else {
            Tone::Success
        };
        RenderedValue::badge(value.as_text(), tone)
    }

    fn registry() -> DatasetRegistry {
        let records: Vec<SharedRecord> = vec![
            Arc::new(
                JsonRecord::try_from(json!({
                    "id": 3,
                    "issueType": "Accessible Name",
                    "severity": "Critical",
                    "screenshot": null,
                    "meta": {"wcag": "4.1.2"},
                }))
                .unwrap(),
            ),
        ];
        let mut registry = DatasetRegistry::new();
        registry
            .register(
                Dataset::new(
                    "vulnerabilities",
                    "Vulnerability Scanner Results",
                    records,
                    ColumnModel::new(vec![ColumnDescriptor::field("id", "ID")]),
                )
                .with_renderers(FieldRenderers::new().with("severity", severity_badge)),
            )
            .unwrap();
        registry
    }

    fn context() -> NavigationContext {
        NavigationContext {
            record_id: RecordId::from(3),
            dataset_id: DatasetId::from("vulnerabilities"),
            origin_path: "/vulnerabilities".to_owned(),
        }
    }

    #[test]
    fn test_resolves_with_renderers() {
        let detail = resolve(&registry(), &RecordId::parse("3"), Some(&context())).unwrap();
        assert_eq!(detail.heading(), "Details for Item 3");
        assert_eq!(
            detail.field("issueType"),
            Some(&RenderedValue::text("Accessible Name"))
        );
        assert_eq!(
            detail.field("severity"),
            Some(&RenderedValue::badge("Critical", Tone::Danger))
        );
        assert_eq!(detail.field("screenshot"), Some(&RenderedValue::Empty));
        assert!(matches!(detail.field("meta"), Some(RenderedValue::Block { .. })));
        let names: Vec<&str> = detail.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "issueType", "severity", "screenshot", "meta"]);
        assert_eq!(detail.return_request().focus_id, RecordId::from(3));
    }

    #[test]
    fn test_missing_context() {
        let error = resolve(&registry(), &RecordId::from(3), None).unwrap_err();
        assert_eq!(error, DetailError::MissingContext);
        assert_eq!(error.recovery(), Recovery::GoHome);
    }

    #[test]
    fn test_unknown_dataset() {
        let mut context = context();
        context.dataset_id = DatasetId::from("reports");
        let error = resolve(&registry(), &RecordId::from(3), Some(&context)).unwrap_err();
        assert!(matches!(error, DetailError::UnknownDataset { .. }));
    }

    #[test]
    fn test_record_not_found_returns_to_origin() {
        let error = resolve(&registry(), &RecordId::from(99), Some(&context())).unwrap_err();
        assert_eq!(
            error.recovery(),
            Recovery::BackToGrid("/vulnerabilities".to_owned())
        );
    }

    #[test]
    fn test_field_label() {
        let field = DetailField {
            name: "issueType".to_owned(),
            value: RenderedValue::Empty,
        };
        assert_eq!(field.label(), "IssueType");
    }
}
