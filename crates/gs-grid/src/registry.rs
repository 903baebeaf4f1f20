//! The dataset registry.
//!
//! A [`DatasetRegistry`] is built explicitly and passed to whoever needs to
//! resolve a dataset by identifier: the grid host, the detail view, and the
//! breadcrumb trail. Datasets are resolvable by identifier alone, so navigation
//! state only ever carries plain [`DatasetId`]s.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use gs_core::{FxHashMap, Record, SharedRecord, fx_hash_map};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::column::ColumnModel;
use crate::error::GridError;
use crate::grid::{GridOptions, GridView};
use crate::render::FieldRenderers;

/// Identifier of a configured dataset, e.g. `vulnerabilities`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(String);

impl DatasetId {
    /// Creates an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route path of this dataset's grid, e.g. `/logs`.
    #[must_use]
    pub fn grid_path(&self) -> String {
        format!("/{}", self.0)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DatasetId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for DatasetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for DatasetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A named collection of records with its grid and detail configuration.
pub struct Dataset {
    id: DatasetId,
    title: String,
    label: String,
    description: String,
    records: Arc<[SharedRecord]>,
    columns: Arc<ColumnModel<SharedRecord>>,
    renderers: FieldRenderers,
}

impl Dataset {
    /// Creates a dataset with no description and no custom renderers.
    #[must_use]
    pub fn new(
        id: impl Into<DatasetId>,
        title: impl Into<String>,
        records: Vec<SharedRecord>,
        columns: ColumnModel<SharedRecord>,
    ) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            label: title.clone(),
            title,
            description: String::new(),
            records: records.into(),
            columns: Arc::new(columns),
            renderers: FieldRenderers::new(),
        }
    }

    /// Sets the short label used for navigation tabs and home cards.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the home-card description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the detail-view renderers.
    #[must_use]
    pub fn with_renderers(mut self, renderers: FieldRenderers) -> Self {
        self.renderers = renderers;
        self
    }

    /// The identifier.
    #[must_use]
    pub const fn id(&self) -> &DatasetId {
        &self.id
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The short label; defaults to the title.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The home-card description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The records in source order.
    #[must_use]
    pub fn records(&self) -> &[SharedRecord] {
        &self.records
    }

    /// The column model.
    #[must_use]
    pub fn columns(&self) -> &ColumnModel<SharedRecord> {
        &self.columns
    }

    /// The detail-view renderers.
    #[must_use]
    pub const fn renderers(&self) -> &FieldRenderers {
        &self.renderers
    }

    /// Finds the record whose stringified identifier equals `id`.
    #[must_use]
    pub fn find_record(&self, id: &str) -> Option<&SharedRecord> {
        self.records.iter().find(|record| record.id().matches(id))
    }

    /// Opens a fresh grid over this dataset.
    #[must_use]
    pub fn open_grid(&self, options: &GridOptions) -> GridView<SharedRecord> {
        GridView::new(
            self.id.clone(),
            self.id.grid_path(),
            Arc::clone(&self.records),
            Arc::clone(&self.columns),
            options.clone(),
        )
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("label", &self.label)
            .field("records", &self.records.len())
            .field("columns", &self.columns)
            .field("renderers", &self.renderers)
            .finish_non_exhaustive()
    }
}

/// Registry of datasets in registration order.
///
/// # Examples
///
/// ```
/// use gs_grid::{ColumnModel, Dataset, DatasetRegistry};
///
/// let mut registry = DatasetRegistry::new();
/// registry
///     .register(Dataset::new("logs", "Application Logs", Vec::new(), ColumnModel::new(Vec::new())))
///     .unwrap();
///
/// assert_eq!(registry.title_of("logs"), Some("Application Logs"));
/// assert!(registry.get("reports").is_none());
/// ```
#[derive(Debug, Default)]
pub struct DatasetRegistry {
    datasets: Vec<Arc<Dataset>>,
    index: FxHashMap<DatasetId, usize>,
}

impl DatasetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            datasets: Vec::new(),
            index: fx_hash_map(),
        }
    }

    /// Registers `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DuplicateDataset`] if the identifier is taken.
    pub fn register(&mut self, dataset: Dataset) -> Result<(), GridError> {
        if self.index.contains_key(dataset.id()) {
            return Err(GridError::DuplicateDataset(dataset.id().clone()));
        }
        info!(
            dataset = %dataset.id(),
            records = dataset.records().len(),
            columns = dataset.columns().len(),
            "Registered dataset"
        );
        self.index.insert(dataset.id().clone(), self.datasets.len());
        self.datasets.push(Arc::new(dataset));
        Ok(())
    }

    /// Looks up a dataset by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Arc<Dataset>> {
        self.index.get(id).and_then(|&i| self.datasets.get(i))
    }

    /// Looks up a dataset, failing with [`GridError::UnknownDataset`].
    pub fn resolve(&self, id: &str) -> Result<&Arc<Dataset>, GridError> {
        self.get(id)
            .ok_or_else(|| GridError::UnknownDataset(id.to_owned()))
    }

    /// The dataset at `position` in registration order.
    #[must_use]
    pub fn nth(&self, position: usize) -> Option<&Arc<Dataset>> {
        self.datasets.get(position)
    }

    /// Registration position of `id`.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// The title of dataset `id`.
    #[must_use]
    pub fn title_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|d| d.title())
    }

    /// Iterates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Dataset>> {
        self.datasets.iter()
    }

    /// Number of datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnDescriptor;
    use gs_core::JsonRecord;
    use serde_json::json;

    fn dataset(id: &str) -> Dataset {
        let records: Vec<SharedRecord> = [json!({"id": 0}), json!({"id": "user-abc"})]
            .into_iter()
            .map(|value| Arc::new(JsonRecord::try_from(value).unwrap()) as SharedRecord)
            .collect();
        Dataset::new(
            id,
            "Sample",
            records,
            ColumnModel::new(vec![ColumnDescriptor::field("id", "ID").sortable()]),
        )
        .with_description("A sample dataset.")
        .with_label("Samples")
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = DatasetRegistry::new();
        registry.register(dataset("sample")).unwrap();
        registry.register(dataset("other")).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.position("other"), Some(1));
        assert_eq!(registry.nth(0).unwrap().id().as_str(), "sample");
        assert_eq!(registry.nth(0).unwrap().label(), "Samples");
        assert_eq!(
            registry.resolve("missing").unwrap_err(),
            GridError::UnknownDataset("missing".to_owned())
        );
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut registry = DatasetRegistry::new();
        registry.register(dataset("sample")).unwrap();
        assert_eq!(
            registry.register(dataset("sample")).unwrap_err(),
            GridError::DuplicateDataset(DatasetId::from("sample"))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_record_by_stringified_id() {
        let dataset = dataset("sample");
        assert!(dataset.find_record("0").is_some());
        assert_eq!(
            dataset.find_record("user-abc").map(|r| r.id().to_string()),
            Some("user-abc".to_owned())
        );
        assert!(dataset.find_record("7").is_none());
    }

    #[test]
    fn test_dataset_id_paths() {
        let id = DatasetId::from("vulnerabilities");
        assert_eq!(id.grid_path(), "/vulnerabilities");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""vulnerabilities""#);
    }
}
