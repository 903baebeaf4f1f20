//! The sort/filter engine.
//!
//! [`apply`] is pure: given records, columns, and the committed filter and
//! sort state it returns the derived sequence as indices into the input. The
//! caller owns the state.
//!
//! # Semantics
//!
//! - A record survives filtering if, for every filterable column with a
//!   non-empty filter, its stringified field contains the filter text
//!   case-insensitively.
//! - Sorting compares numbers numerically and everything else with
//!   [`collate`](gs_core::types::collate). Nulls go last in both directions.
//! - The sort is stable in both directions.

use std::cmp::Ordering;
use std::fmt;

use gs_core::{FieldValue, FxHashMap, Record, fx_hash_map};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::column::ColumnModel;

// ============================================================================
// Sort State
// ============================================================================

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Arrow shown next to a sorted column header.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Single-column sort state. `key: None` preserves input order.
///
/// # Examples
///
/// ```
/// use gs_grid::{SortDirection, SortState};
///
/// let mut sort = SortState::default();
/// sort.toggle("id");
/// assert_eq!(sort.direction(), SortDirection::Ascending);
/// sort.toggle("id");
/// assert_eq!(sort.direction(), SortDirection::Descending);
/// sort.toggle("severity");
/// assert_eq!(sort.key(), Some("severity"));
/// assert_eq!(sort.direction(), SortDirection::Ascending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Sorts by `key` in `direction`.
    #[must_use]
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// The active sort key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The active direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Returns the direction if `key` is the active sort key.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key() == Some(key)).then_some(self.direction)
    }

    /// Toggles the sort on `key`.
    ///
    /// The active key flips from ascending to descending. Any other toggle
    /// sorts `key` ascending.
    pub fn toggle(&mut self, key: &str) {
        self.direction = if self.key() == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key.to_owned());
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{key} {}", self.direction.indicator()),
            None => f.write_str("unsorted"),
        }
    }
}

// ============================================================================
// Filter State
// ============================================================================

/// Committed per-column filter text, keyed by field key.
///
/// Empty text is the same as no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: FxHashMap<String, String>,
}

impl FilterState {
    /// Creates an empty filter state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: fx_hash_map(),
        }
    }

    /// Sets the filter for `key`. Empty text removes it.
    ///
    /// Returns `true` if the effective state changed.
    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>) -> bool {
        let key = key.into();
        let text = text.into();
        if text.is_empty() {
            return self.filters.remove(&key).is_some();
        }
        self.filters.insert(key, text.clone()) != Some(text)
    }

    /// Returns the filter for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Removes every filter. Returns `true` if any was active.
    pub fn clear(&mut self) -> bool {
        let had_filters = !self.filters.is_empty();
        self.filters.clear();
        had_filters
    }

    /// Returns `true` if no filter is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of active filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Iterates over active filters in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FilterState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = Self::new();
        for (key, text) in iter {
            state.set(key, text);
        }
        state
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Filters and sorts `records`, returning indices of the derived sequence.
///
/// # Examples
///
/// ```
/// use gs_core::JsonRecord;
/// use gs_grid::{ColumnDescriptor, ColumnModel, FilterState, SortDirection, SortState, query};
/// use serde_json::json;
///
/// let records: Vec<JsonRecord> = [(3, "Critical"), (2, "Minor"), (16, "Critical")]
///     .into_iter()
///     .map(|(id, severity)| JsonRecord::try_from(json!({"id": id, "severity": severity})).unwrap())
///     .collect();
/// let columns = ColumnModel::new(vec![
///     ColumnDescriptor::field("id", "ID").sortable(),
///     ColumnDescriptor::field("severity", "Severity").filterable(),
/// ]);
/// let filters: FilterState = [("severity", "CRIT")].into_iter().collect();
/// let sort = SortState::by("id", SortDirection::Descending);
///
/// assert_eq!(query::apply(&records, &columns, &filters, &sort), vec![2, 0]);
/// ```
#[must_use]
pub fn apply<R: Record>(
    records: &[R],
    columns: &ColumnModel<R>,
    filters: &FilterState,
    sort: &SortState,
) -> Vec<usize> {
    let active: Vec<(&str, String)> = columns
        .filterable()
        .filter_map(|column| {
            let key = column.field_key()?;
            let text = filters.get(key)?;
            Some((key, text.to_lowercase()))
        })
        .collect();

    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            active
                .iter()
                .all(|(key, needle)| record.field(key).contains_lowercase(needle))
        })
        .map(|(index, _)| index)
        .collect();

    if let Some(key) = sort.key() {
        if columns.sortable(key).is_some() {
            let mut keyed: Vec<(usize, FieldValue)> = indices
                .iter()
                .map(|&index| (index, records[index].field(key)))
                .collect();
            keyed.sort_by(|(_, a), (_, b)| compare_nullable(a, b, sort.direction()));
            indices = keyed.into_iter().map(|(index, _)| index).collect();
        } else {
            warn!(key, "Sort key is not a sortable column; keeping input order");
        }
    }

    indices
}

/// Like [`apply`] but returns references to the surviving records.
#[must_use]
pub fn apply_records<'a, R: Record>(
    records: &'a [R],
    columns: &ColumnModel<R>,
    filters: &FilterState,
    sort: &SortState,
) -> Vec<&'a R> {
    apply(records, columns, filters, sort)
        .into_iter()
        .map(|index| &records[index])
        .collect()
}

/// Nulls last in both directions; the direction only flips non-null order.
fn compare_nullable(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(a.compare(b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnDescriptor;
    use gs_core::{JsonRecord, RecordId};
    use serde_json::{Value, json};

    fn vulnerabilities() -> Vec<JsonRecord> {
        [
            (0, "Critical", "Accessible Name", "Header"),
            (3, "Critical", "Accessible Name", "Button"),
            (2, "Minor", "Color Contrast", "Footer"),
            (16, "Critical", "Keyboard Trap", "Modal"),
            (8, "Minor", "Alt Text", "Hero Image"),
        ]
        .into_iter()
        .map(|(id, severity, issue, component)| {
            JsonRecord::try_from(json!({
                "id": id,
                "severity": severity,
                "issueType": issue,
                "component": component,
            }))
            .unwrap()
        })
        .collect()
    }

    fn columns() -> ColumnModel<JsonRecord> {
        ColumnModel::new(vec![
            ColumnDescriptor::field("id", "ID").sortable(),
            ColumnDescriptor::field("issueType", "Issue Type").sortable().filterable(),
            ColumnDescriptor::field("severity", "Severity").sortable().filterable(),
            ColumnDescriptor::field("component", "Component").filterable(),
        ])
    }

    fn ids(records: &[&JsonRecord]) -> Vec<RecordId> {
        records.iter().map(|r| r.id()).collect()
    }

    fn numbers(values: &[i64]) -> Vec<RecordId> {
        values.iter().copied().map(RecordId::from).collect()
    }

    #[test]
    fn test_no_state_preserves_input() {
        let records = vulnerabilities();
        let result = apply(&records, &columns(), &FilterState::new(), &SortState::default());
        assert_eq!(result, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_severity_filter_keeps_relative_order() {
        let records = vulnerabilities();
        let filters: FilterState = [("severity", "critical")].into_iter().collect();
        let result = apply_records(&records, &columns(), &filters, &SortState::default());
        assert_eq!(ids(&result), numbers(&[0, 3, 16]));
    }

    #[test]
    fn test_sort_by_id_is_numeric() {
        let records = vulnerabilities();
        let sort = SortState::by("id", SortDirection::Ascending);
        let result = apply_records(&records, &columns(), &FilterState::new(), &sort);
        assert_eq!(ids(&result), numbers(&[0, 2, 3, 8, 16]));
    }

    #[test]
    fn test_filters_compose_as_and() {
        let records = vulnerabilities();
        let columns = columns();
        let sort = SortState::default();
        let a: FilterState = [("severity", "crit")].into_iter().collect();
        let b: FilterState = [("issueType", "name")].into_iter().collect();
        let both: FilterState = [("severity", "crit"), ("issueType", "name")].into_iter().collect();

        let first: Vec<JsonRecord> = apply_records(&records, &columns, &a, &sort)
            .into_iter()
            .cloned()
            .collect();
        let twice = apply_records(&first, &columns, &b, &sort);
        let once = apply_records(&records, &columns, &both, &sort);

        assert_eq!(ids(&twice), ids(&once));
        assert_eq!(ids(&once), numbers(&[0, 3]));
    }

    #[test]
    fn test_filtered_is_subset_matching_every_filter() {
        let records = vulnerabilities();
        let filters: FilterState = [("component", "E"), ("severity", "minor")].into_iter().collect();
        let result = apply_records(&records, &columns(), &filters, &SortState::default());
        for record in &result {
            assert!(record.field("component").as_text().to_lowercase().contains('e'));
            assert!(record.field("severity").as_text().eq_ignore_ascii_case("minor"));
        }
        assert_eq!(ids(&result), numbers(&[2, 8]));
    }

    #[test]
    fn test_filter_on_unfilterable_column_is_ignored() {
        let records = vulnerabilities();
        let filters: FilterState = [("id", "16")].into_iter().collect();
        let result = apply(&records, &columns(), &filters, &SortState::default());
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_filter_matches_null_as_empty() {
        let records = vec![
            JsonRecord::try_from(json!({"id": 1, "severity": null})).unwrap(),
            JsonRecord::try_from(json!({"id": 2, "severity": "Minor"})).unwrap(),
        ];
        let filters: FilterState = [("severity", "m")].into_iter().collect();
        assert_eq!(apply(&records, &columns(), &filters, &SortState::default()), vec![1]);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let records = vulnerabilities();
        let columns = columns();
        let asc = apply_records(
            &records,
            &columns,
            &FilterState::new(),
            &SortState::by("severity", SortDirection::Ascending),
        );
        assert_eq!(ids(&asc), numbers(&[0, 3, 16, 2, 8]));

        let desc = apply_records(
            &records,
            &columns,
            &FilterState::new(),
            &SortState::by("severity", SortDirection::Descending),
        );
        assert_eq!(ids(&desc), numbers(&[2, 8, 0, 3, 16]));
    }

    #[test]
    fn test_nulls_sort_last_both_directions() {
        let records: Vec<JsonRecord> = [
            json!({"id": 1, "severity": null}),
            json!({"id": 2, "severity": "Minor"}),
            json!({"id": 3}),
            json!({"id": 4, "severity": "Critical"}),
        ]
        .into_iter()
        .map(|v: Value| JsonRecord::try_from(v).unwrap())
        .collect();
        let columns = columns();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = apply_records(
                &records,
                &columns,
                &FilterState::new(),
                &SortState::by("severity", direction),
            );
            let tail = ids(&sorted[2..]);
            assert_eq!(tail, numbers(&[1, 3]), "nulls last for {direction:?}");
        }
    }

    #[test]
    fn test_sort_on_unsortable_key_keeps_order() {
        let records = vulnerabilities();
        let sort = SortState::by("component", SortDirection::Descending);
        assert_eq!(
            apply(&records, &columns(), &FilterState::new(), &sort),
            vec![0, 1, 2, 3, 4]
        );
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let records: Vec<JsonRecord> = ["beta", "Alpha", "alpha", "Gamma"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| JsonRecord::try_from(json!({"id": i, "issueType": name})).unwrap())
            .collect();
        let sorted = apply_records(
            &records,
            &columns(),
            &FilterState::new(),
            &SortState::by("issueType", SortDirection::Ascending),
        );
        let names: Vec<String> = sorted
            .iter()
            .map(|r| r.field("issueType").as_text().into_owned())
            .collect();
        assert_eq!(names, vec!["alpha", "Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_filter_state_set_semantics() {
        let mut filters = FilterState::new();
        assert!(filters.set("severity", "crit"));
        assert!(!filters.set("severity", "crit"));
        assert!(filters.set("severity", ""));
        assert!(filters.is_empty());
        assert!(!filters.clear());
    }

    #[test]
    fn test_sort_state_display() {
        assert_eq!(SortState::default().to_string(), "unsorted");
        assert_eq!(
            SortState::by("id", SortDirection::Descending).to_string(),
            "id ↓"
        );
    }
}
