//! The grid orchestrator.
//!
//! [`GridView`] composes the column model, the sort/filter engine, the
//! paginator, and focus state for one grid instance. Filter text typed by the
//! user goes through a [`Debouncer`] and is committed by [`GridView::tick`]
//! once the input has been quiet long enough. Sort toggles and paging apply
//! immediately.
//!
//! Every state change is reported as a [`GridEvent`] in the order it happened;
//! the host drains them with [`GridView::take_events`].
//!
//! # State
//!
//! ```text
//! Idle ──filter/sort/page──▶ Filtered × Sorted × Paged (independent axes)
//!   │                                   │
//!   └──────────── activate(row) ────────┴──▶ NavigationContext
//!
//! return with ReturnRequest ──▶ restore_focus: focus the row if it is on the
//!                               current page, otherwise do nothing
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gs_core::{GridConfig, MIN_FILTER_DEBOUNCE_MS, Record, RecordId};
use serde::Serialize;
use tracing::{debug, warn};

use crate::column::ColumnModel;
use crate::debounce::Debouncer;
use crate::error::GridError;
use crate::navigation::{NavigationContext, ReturnRequest};
use crate::pagination::{DEFAULT_PAGE_SIZE, PageMeta, Paginator};
use crate::query::{self, FilterState, SortState};
use crate::registry::DatasetId;

// ============================================================================
// Options
// ============================================================================

/// Settings a grid is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Initial rows per page.
    pub page_size: NonZeroUsize,
    /// Page sizes offered to the user, ascending.
    pub page_size_options: Vec<NonZeroUsize>,
    /// Quiet period before typed filter text is committed.
    pub filter_debounce: Duration,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

impl GridOptions {
    /// Builds options from configuration.
    ///
    /// Zero page sizes are dropped and the debounce never goes below the
    /// 300 ms floor. The initial page size is added to the options if missing.
    #[must_use]
    pub fn from_config(config: &GridConfig) -> Self {
        let page_size = NonZeroUsize::new(config.page_size).unwrap_or_else(|| {
            warn!(page_size = config.page_size, "Invalid page size; using default");
            DEFAULT_PAGE_SIZE
        });
        let mut page_size_options: Vec<NonZeroUsize> = config
            .page_size_options
            .iter()
            .copied()
            .filter_map(NonZeroUsize::new)
            .collect();
        if !page_size_options.contains(&page_size) {
            page_size_options.push(page_size);
        }
        page_size_options.sort_unstable();
        page_size_options.dedup();

        Self {
            page_size,
            page_size_options,
            filter_debounce: Duration::from_millis(
                config.filter_debounce_ms.max(MIN_FILTER_DEBOUNCE_MS),
            ),
        }
    }
}

// ============================================================================
// Events
// ============================================================================

/// A change in grid state, reported synchronously with the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[non_exhaustive]
pub enum GridEvent {
    /// The filtered and sorted result set was recomputed.
    ResultsChanged {
        /// Number of records that passed the filters.
        total_items: usize,
    },
    /// Page, page size, or page count changed.
    PageChanged(PageMeta),
    /// The focused row changed.
    FocusChanged {
        /// The focused record, if any.
        focus_id: Option<RecordId>,
    },
    /// The sort state changed.
    SortChanged(SortState),
    /// Filter text was committed for a column.
    FilterCommitted {
        /// The column's field key.
        key: String,
        /// The committed text; empty clears the filter.
        text: String,
    },
}

/// Keyboard input understood by the grid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKey {
    /// Move focus up one row.
    Up,
    /// Move focus down one row.
    Down,
    /// Activate the focused row.
    Enter,
    /// Activate the focused row.
    Space,
}

// ============================================================================
// Grid View
// ============================================================================

/// One grid instance over a dataset.
///
/// Recreate it whenever the displayed dataset changes; it owns all sort,
/// filter, page, and focus state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use gs_core::{JsonRecord, RecordId};
/// use gs_grid::{ColumnDescriptor, ColumnModel, DatasetId, GridOptions, GridView, RowKey};
/// use serde_json::json;
///
/// let records: Vec<JsonRecord> = [0, 3, 2]
///     .into_iter()
///     .map(|id| JsonRecord::try_from(json!({"id": id})).unwrap())
///     .collect();
/// let columns = ColumnModel::new(vec![ColumnDescriptor::field("id", "ID").sortable()]);
/// let mut grid = GridView::new(
///     DatasetId::from("sample"),
///     "/sample",
///     records.into(),
///     Arc::new(columns),
///     GridOptions::default(),
/// );
///
/// grid.toggle_sort("id").unwrap();
/// grid.handle_key(RowKey::Down);
/// grid.handle_key(RowKey::Down);
/// let context = grid.handle_key(RowKey::Enter).unwrap();
/// assert_eq!(context.record_id, RecordId::from(2));
/// assert_eq!(context.origin_path, "/sample");
/// ```
pub struct GridView<R> {
    dataset_id: DatasetId,
    origin_path: String,
    records: Arc<[R]>,
    columns: Arc<ColumnModel<R>>,
    options: GridOptions,
    filters: FilterState,
    drafts: Debouncer<String, String>,
    sort: SortState,
    paginator: Paginator,
    results: Vec<usize>,
    /// Index into `records` of the focused row.
    focus: Option<usize>,
    events: Vec<GridEvent>,
}

impl<R> fmt::Debug for GridView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("dataset_id", &self.dataset_id)
            .field("records", &self.records.len())
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("page", &self.paginator.meta())
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl<R: Record> GridView<R> {
    /// Opens a grid in the idle state: no sort, no filters, page 1.
    #[must_use]
    pub fn new(
        dataset_id: DatasetId,
        origin_path: impl Into<String>,
        records: Arc<[R]>,
        columns: Arc<ColumnModel<R>>,
        options: GridOptions,
    ) -> Self {
        let mut paginator = Paginator::new(options.page_size);
        paginator.set_total_items(records.len());
        let results = (0..records.len()).collect();
        Self {
            dataset_id,
            origin_path: origin_path.into(),
            records,
            columns,
            drafts: Debouncer::new(options.filter_debounce),
            options,
            filters: FilterState::new(),
            sort: SortState::default(),
            paginator,
            results,
            focus: None,
            events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The dataset this grid shows.
    #[must_use]
    pub const fn dataset_id(&self) -> &DatasetId {
        &self.dataset_id
    }

    /// The grid's own path, carried in navigation contexts.
    #[must_use]
    pub fn origin_path(&self) -> &str {
        &self.origin_path
    }

    /// The column model.
    #[must_use]
    pub fn columns(&self) -> &ColumnModel<R> {
        &self.columns
    }

    /// The options the grid was opened with.
    #[must_use]
    pub const fn options(&self) -> &GridOptions {
        &self.options
    }

    /// The committed filters.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// The text to show in a column's filter input: pending text if the user
    /// is still typing, otherwise the committed filter.
    #[must_use]
    pub fn filter_input(&self, key: &str) -> Option<&str> {
        self.drafts
            .pending(&key.to_owned())
            .map(String::as_str)
            .or_else(|| self.filters.get(key))
    }

    /// Whether any filter text is waiting to be committed.
    #[must_use]
    pub fn has_pending_filters(&self) -> bool {
        !self.drafts.is_empty()
    }

    /// The sort state.
    #[must_use]
    pub const fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Pagination snapshot.
    #[must_use]
    pub const fn page_meta(&self) -> PageMeta {
        self.paginator.meta()
    }

    /// Number of records that passed the filters.
    #[must_use]
    pub fn result_len(&self) -> usize {
        self.results.len()
    }

    /// The records on the current page, in display order.
    #[must_use]
    pub fn page_rows(&self) -> Vec<&R> {
        self.paginator
            .slice(&self.results)
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    /// Number of rows on the current page.
    #[must_use]
    pub fn page_len(&self) -> usize {
        self.paginator.slice(&self.results).len()
    }

    /// Position of the focused row within the current page.
    #[must_use]
    pub fn focused_row(&self) -> Option<usize> {
        let focus = self.focus?;
        self.paginator
            .slice(&self.results)
            .iter()
            .position(|&index| index == focus)
    }

    /// The focused record.
    #[must_use]
    pub fn focused_record(&self) -> Option<&R> {
        self.focus.map(|index| &self.records[index])
    }

    /// Drains the events reported since the last call.
    pub fn take_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------------
    // Filtering
    // ------------------------------------------------------------------------

    /// Records filter text typed into a column's input.
    ///
    /// The text is committed once `filter_debounce` passes without further
    /// input for the same column; see [`GridView::tick`].
    ///
    /// # Errors
    ///
    /// Fails if no filterable column reads `key`.
    pub fn input_filter(&mut self, key: &str, text: &str, now: Instant) -> Result<(), GridError> {
        self.check_filterable(key)?;
        self.drafts.arm(key.to_owned(), text.to_owned(), now);
        Ok(())
    }

    /// Commits every pending filter whose quiet period has elapsed.
    ///
    /// Returns `true` if the result set was recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let due = self.drafts.fire_due(now);
        if due.is_empty() {
            return false;
        }
        let mut changed = false;
        for (key, text) in due {
            changed |= self.commit(key, text);
        }
        if changed {
            self.recompute();
        }
        changed
    }

    /// Commits the pending filter for `key` immediately.
    pub fn commit_filter(&mut self, key: &str) -> bool {
        let Some(text) = self.drafts.flush(&key.to_owned()) else {
            return false;
        };
        if !self.commit(key.to_owned(), text) {
            return false;
        }
        self.recompute();
        true
    }

    /// Sets a column's filter without debouncing, discarding pending input.
    ///
    /// # Errors
    ///
    /// Fails if no filterable column reads `key`.
    pub fn set_filter(&mut self, key: &str, text: &str) -> Result<bool, GridError> {
        self.check_filterable(key)?;
        self.drafts.cancel(&key.to_owned());
        let changed = self.commit(key.to_owned(), text.to_owned());
        if changed {
            self.recompute();
        }
        Ok(changed)
    }

    /// Removes every filter, committed or pending.
    pub fn clear_filters(&mut self) -> bool {
        self.drafts.cancel_all();
        let keys: Vec<String> = self.filters.iter().map(|(k, _)| k.to_owned()).collect();
        if !self.filters.clear() {
            return false;
        }
        for key in keys {
            self.events.push(GridEvent::FilterCommitted {
                key,
                text: String::new(),
            });
        }
        self.recompute();
        true
    }

    fn check_filterable(&self, key: &str) -> Result<(), GridError> {
        match self.columns.find(key) {
            None => Err(GridError::UnknownColumn {
                key: key.to_owned(),
            }),
            Some(column) if !column.is_filterable() => Err(GridError::NotFilterable {
                key: key.to_owned(),
            }),
            Some(_) => Ok(()),
        }
    }

    fn commit(&mut self, key: String, text: String) -> bool {
        if !self.filters.set(key.clone(), text.clone()) {
            return false;
        }
        debug!(dataset = %self.dataset_id, key = key.as_str(), text = text.as_str(), "Filter committed");
        self.events.push(GridEvent::FilterCommitted { key, text });
        true
    }

    // ------------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------------

    /// Toggles the sort on `key`: ascending first, then descending.
    ///
    /// # Errors
    ///
    /// Fails if no column reads `key` or it is not sortable.
    pub fn toggle_sort(&mut self, key: &str) -> Result<&SortState, GridError> {
        match self.columns.find(key) {
            None => {
                return Err(GridError::UnknownColumn {
                    key: key.to_owned(),
                });
            }
            Some(column) if !column.is_sortable() => {
                return Err(GridError::NotSortable {
                    key: key.to_owned(),
                });
            }
            Some(_) => {}
        }
        self.sort.toggle(key);
        debug!(dataset = %self.dataset_id, sort = %self.sort, "Sort toggled");
        self.events.push(GridEvent::SortChanged(self.sort.clone()));
        self.recompute();
        Ok(&self.sort)
    }

    // ------------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------------

    /// Moves to page `n`, clamped into range.
    pub fn go_to_page(&mut self, n: usize) -> bool {
        let changed = self.paginator.go_to_page(n);
        self.after_page_move(changed)
    }

    /// Moves one page forward.
    pub fn next_page(&mut self) -> bool {
        let changed = self.paginator.next_page();
        self.after_page_move(changed)
    }

    /// Moves one page back.
    pub fn previous_page(&mut self) -> bool {
        let changed = self.paginator.previous_page();
        self.after_page_move(changed)
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: NonZeroUsize) -> bool {
        let changed = self.paginator.set_page_size(page_size);
        self.after_page_move(changed)
    }

    /// Steps to the next (or previous) configured page size.
    pub fn cycle_page_size(&mut self, forward: bool) -> bool {
        let options = &self.options.page_size_options;
        let current = self.paginator.page_size();
        let next = if forward {
            options.iter().copied().find(|&size| size > current)
        } else {
            options.iter().copied().rev().find(|&size| size < current)
        };
        next.is_some_and(|size| self.set_page_size(size))
    }

    fn after_page_move(&mut self, changed: bool) -> bool {
        if changed {
            let meta = self.paginator.meta();
            debug!(dataset = %self.dataset_id, page = meta.page, page_size = meta.page_size, "Page changed");
            self.events.push(GridEvent::PageChanged(meta));
            self.clamp_focus();
        }
        changed
    }

    // ------------------------------------------------------------------------
    // Focus and Activation
    // ------------------------------------------------------------------------

    /// Focuses the row at `row` on the current page.
    pub fn focus_row(&mut self, row: usize) -> bool {
        let target = self.paginator.slice(&self.results).get(row).copied();
        match target {
            Some(index) => {
                self.set_focus(Some(index));
                true
            }
            None => false,
        }
    }

    /// Applies a keyboard action to the grid body.
    ///
    /// `Up`/`Down` move focus within the current page without wrapping; with
    /// nothing focused either key focuses the first row. `Enter`/`Space`
    /// activate the focused row and return its navigation context.
    pub fn handle_key(&mut self, key: RowKey) -> Option<NavigationContext> {
        match key {
            RowKey::Enter | RowKey::Space => self.focused_row().and_then(|row| self.activate(row)),
            RowKey::Up => {
                match self.focused_row() {
                    Some(row) if row > 0 => {
                        self.focus_row(row - 1);
                    }
                    Some(_) => {}
                    None => {
                        self.focus_row(0);
                    }
                }
                None
            }
            RowKey::Down => {
                match self.focused_row() {
                    Some(row) => {
                        self.focus_row(row + 1);
                    }
                    None => {
                        self.focus_row(0);
                    }
                }
                None
            }
        }
    }

    /// Activates the row at `row` on the current page.
    ///
    /// The row becomes focused, and the returned context is what the detail
    /// view needs to render the record and return here.
    pub fn activate(&mut self, row: usize) -> Option<NavigationContext> {
        if !self.focus_row(row) {
            return None;
        }
        let record = self.focused_record()?;
        Some(NavigationContext {
            record_id: record.id(),
            dataset_id: self.dataset_id.clone(),
            origin_path: self.origin_path.clone(),
        })
    }

    /// Restores focus after returning from a detail view.
    ///
    /// Only the current page is searched. A record that is filtered out or on
    /// another page is silently not focused. The request is consumed either
    /// way.
    pub fn restore_focus(&mut self, request: ReturnRequest) -> bool {
        let found = self
            .paginator
            .slice(&self.results)
            .iter()
            .position(|&index| self.records[index].id().same_as(&request.focus_id));
        match found {
            Some(row) => self.focus_row(row),
            None => {
                debug!(
                    dataset = %self.dataset_id,
                    focus = %request.focus_id,
                    "Focus target not on current page"
                );
                false
            }
        }
    }

    fn set_focus(&mut self, focus: Option<usize>) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        let focus_id = self.focused_record().map(Record::id);
        self.events.push(GridEvent::FocusChanged { focus_id });
    }

    fn clamp_focus(&mut self) {
        if self.focus.is_some() && self.focused_row().is_none() {
            self.set_focus(None);
        }
    }

    // ------------------------------------------------------------------------
    // Recomputation
    // ------------------------------------------------------------------------

    fn recompute(&mut self) {
        self.results = query::apply(&self.records, &self.columns, &self.filters, &self.sort);
        self.events.push(GridEvent::ResultsChanged {
            total_items: self.results.len(),
        });
        let page_changed = self.paginator.set_total_items(self.results.len());
        if page_changed {
            self.events.push(GridEvent::PageChanged(self.paginator.meta()));
        }
        self.clamp_focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnDescriptor;
    use crate::query::SortDirection;
    use gs_core::JsonRecord;
    use serde_json::json;

    fn vulnerabilities() -> GridView<JsonRecord> {
        let records: Vec<JsonRecord> = [
            (0, "Critical", "Accessible Name"),
            (3, "Critical", "Accessible Name"),
            (2, "Minor", "Color Contrast"),
            (16, "Critical", "Keyboard Trap"),
            (8, "Minor", "Alt Text"),
        ]
        .into_iter()
        .map(|(id, severity, issue)| {
            JsonRecord::try_from(json!({"id": id, "severity": severity, "issueType": issue}))
                .unwrap()
        })
        .collect();
        let columns = ColumnModel::new(vec![
            ColumnDescriptor::field("id", "ID").sortable(),
            ColumnDescriptor::field("issueType", "Issue Type").sortable(),
            ColumnDescriptor::field("severity", "Severity").sortable().filterable(),
            ColumnDescriptor::derived("Summary", |r: &JsonRecord| {
                r.field("issueType").as_text().into_owned()
            })
            .sortable()
            .filterable(),
        ]);
        GridView::new(
            DatasetId::from("vulnerabilities"),
            "/vulnerabilities",
            records.into(),
            Arc::new(columns),
            GridOptions::default(),
        )
    }

    fn numbered(count: i64, page_size: usize) -> GridView<JsonRecord> {
        let records: Vec<JsonRecord> = (1..=count)
            .map(|id| JsonRecord::try_from(json!({"id": id, "level": "INFO"})).unwrap())
            .collect();
        let options = GridOptions {
            page_size: NonZeroUsize::new(page_size).unwrap(),
            ..GridOptions::default()
        };
        GridView::new(
            DatasetId::from("logs"),
            "/logs",
            records.into(),
            Arc::new(ColumnModel::new(vec![
                ColumnDescriptor::field("id", "ID").sortable(),
                ColumnDescriptor::field("level", "Level").filterable(),
            ])),
            options,
        )
    }

    fn page_ids(grid: &GridView<JsonRecord>) -> Vec<RecordId> {
        grid.page_rows().iter().map(|r| r.id()).collect()
    }

    fn ids(values: &[i64]) -> Vec<RecordId> {
        values.iter().copied().map(RecordId::from).collect()
    }

    #[test]
    fn test_idle_state() {
        let grid = vulnerabilities();
        assert_eq!(grid.page_meta().page, 1);
        assert!(grid.filters().is_empty());
        assert_eq!(grid.sort().key(), None);
        assert_eq!(page_ids(&grid), ids(&[0, 3, 2, 16, 8]));
        assert_eq!(grid.focused_row(), None);
    }

    #[test]
    fn test_five_logs_single_page() {
        let grid = numbered(5, 10);
        let meta = grid.page_meta();
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.total_items, 5);
        assert_eq!(grid.page_len(), 5);
    }

    #[test]
    fn test_filter_is_debounced() {
        let mut grid = vulnerabilities();
        let start = Instant::now();
        grid.input_filter("severity", "crit", start).unwrap();
        grid.input_filter("severity", "critical", start + Duration::from_millis(100))
            .unwrap();

        assert_eq!(grid.filter_input("severity"), Some("critical"));
        assert!(!grid.tick(start + Duration::from_millis(350)));
        assert_eq!(grid.result_len(), 5);

        assert!(grid.tick(start + Duration::from_millis(400)));
        assert_eq!(page_ids(&grid), ids(&[0, 3, 16]));
        assert_eq!(grid.filters().get("severity"), Some("critical"));

        let committed: Vec<_> = grid
            .take_events()
            .into_iter()
            .filter(|e| matches!(e, GridEvent::FilterCommitted { .. }))
            .collect();
        assert_eq!(committed.len(), 1);
    }

    #[test]
    fn test_commit_filter_flushes_now() {
        let mut grid = vulnerabilities();
        grid.input_filter("severity", "minor", Instant::now()).unwrap();
        assert!(grid.commit_filter("severity"));
        assert_eq!(page_ids(&grid), ids(&[2, 8]));
        assert!(!grid.has_pending_filters());
    }

    #[test]
    fn test_filter_rejects_derived_and_unknown_columns() {
        let mut grid = vulnerabilities();
        assert_eq!(
            grid.set_filter("id", "3").unwrap_err(),
            GridError::NotFilterable { key: "id".to_owned() }
        );
        assert_eq!(
            grid.input_filter("Summary", "x", Instant::now()).unwrap_err(),
            GridError::UnknownColumn { key: "Summary".to_owned() }
        );
    }

    #[test]
    fn test_sort_toggle_and_errors() {
        let mut grid = vulnerabilities();
        grid.toggle_sort("id").unwrap();
        assert_eq!(page_ids(&grid), ids(&[0, 2, 3, 8, 16]));
        let sort = grid.toggle_sort("id").unwrap();
        assert_eq!(sort.direction(), SortDirection::Descending);
        assert_eq!(page_ids(&grid), ids(&[16, 8, 3, 2, 0]));

        assert!(matches!(
            grid.toggle_sort("component"),
            Err(GridError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_arrow_keys_stay_on_page() {
        let mut grid = numbered(12, 10);
        assert!(grid.handle_key(RowKey::Up).is_none());
        assert_eq!(grid.focused_row(), Some(0));
        grid.handle_key(RowKey::Up);
        assert_eq!(grid.focused_row(), Some(0));

        for _ in 0..20 {
            grid.handle_key(RowKey::Down);
        }
        assert_eq!(grid.focused_row(), Some(9));
        assert_eq!(grid.page_meta().page, 1);
    }

    #[test]
    fn test_enter_and_space_activate() {
        let mut grid = vulnerabilities();
        assert!(grid.handle_key(RowKey::Enter).is_none());
        grid.handle_key(RowKey::Down);
        grid.handle_key(RowKey::Down);
        let context = grid.handle_key(RowKey::Space).unwrap();
        assert_eq!(context.record_id, RecordId::from(3));
        assert_eq!(context.dataset_id, DatasetId::from("vulnerabilities"));
        assert_eq!(context.origin_path, "/vulnerabilities");
    }

    #[test]
    fn test_activate_out_of_range_is_none() {
        let mut grid = vulnerabilities();
        assert!(grid.activate(5).is_none());
        assert!(grid.activate(4).is_some());
    }

    #[test]
    fn test_restore_focus_on_current_page() {
        let mut grid = vulnerabilities();
        assert!(grid.restore_focus(ReturnRequest {
            focus_id: RecordId::from("16"),
        }));
        assert_eq!(grid.focused_row(), Some(3));
    }

    #[test]
    fn test_restore_focus_off_page_is_silent() {
        let mut grid = numbered(25, 10);
        grid.take_events();
        assert!(!grid.restore_focus(ReturnRequest {
            focus_id: RecordId::from(15),
        }));
        assert_eq!(grid.focused_row(), None);
        assert!(grid.take_events().is_empty());
    }

    #[test]
    fn test_paging_clears_focus_off_page() {
        let mut grid = numbered(25, 10);
        grid.focus_row(4);
        assert!(grid.next_page());
        assert_eq!(grid.focused_row(), None);
        assert!(grid.focused_record().is_none());
        assert_eq!(page_ids(&grid).first(), Some(&RecordId::from(11)));
    }

    #[test]
    fn test_filter_reclamps_page() {
        let mut grid = numbered(25, 10);
        grid.go_to_page(3);
        grid.take_events();
        grid.set_filter("level", "warn").unwrap();
        assert_eq!(grid.page_meta().page, 1);
        assert_eq!(grid.page_len(), 0);

        let events = grid.take_events();
        assert!(events.contains(&GridEvent::ResultsChanged { total_items: 0 }));
        assert!(events.iter().any(|e| matches!(e, GridEvent::PageChanged(m) if m.page == 1)));
    }

    #[test]
    fn test_page_size_cycle_resets_page() {
        let mut grid = numbered(120, 10);
        grid.go_to_page(4);
        assert!(grid.cycle_page_size(true));
        assert_eq!(grid.page_meta().page_size, 20);
        assert_eq!(grid.page_meta().page, 1);
        assert!(grid.cycle_page_size(false));
        assert!(!grid.cycle_page_size(false));
        assert_eq!(grid.page_meta().page_size, 10);
    }

    #[test]
    fn test_clear_filters_restores_all() {
        let mut grid = vulnerabilities();
        grid.set_filter("severity", "minor").unwrap();
        grid.input_filter("severity", "crit", Instant::now()).unwrap();
        assert!(grid.clear_filters());
        assert_eq!(grid.result_len(), 5);
        assert!(!grid.has_pending_filters());
        assert!(!grid.clear_filters());
    }

    #[test]
    fn test_options_from_config() {
        let config = GridConfig {
            page_size: 25,
            page_size_options: vec![0, 50, 10],
            filter_debounce_ms: 5,
        };
        let options = GridOptions::from_config(&config);
        assert_eq!(options.page_size.get(), 25);
        let sizes: Vec<usize> = options.page_size_options.iter().map(|s| s.get()).collect();
        assert_eq!(sizes, vec![10, 25, 50]);
        assert_eq!(options.filter_debounce, Duration::from_millis(300));
    }
}
