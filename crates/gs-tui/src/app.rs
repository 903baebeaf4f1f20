//! Application state and lifecycle management.
//!
//! ```text
//! App
//!  ├── registry: DatasetRegistry   # datasets, looked up by id
//!  ├── navigator: Navigator        # route, one-shot state
//!  ├── view: View                  # what the current route resolved to
//!  │     ├── Home
//!  │     ├── Grid(GridView)        # re-created on every visit
//!  │     ├── Detail(Result<RecordDetail, DetailError>)
//!  │     └── NotFound(path)
//!  ├── mode: AppMode               # normal / filter overlay / help overlay
//!  └── status: Option<StatusMessage>
//! ```
//!
//! Every route change goes through the navigator and then [`App::sync_view`],
//! which opens a fresh grid (consuming any pending return request) or resolves
//! the detail view from the navigation context.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gs_core::{Config, SharedRecord};
use gs_grid::{
    Breadcrumbs, DatasetRegistry, DetailError, GridEvent, GridOptions, GridView, Navigator,
    RecordDetail, Recovery, Route, RowKey, detail,
};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::components::DetailView;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode.
    #[default]
    Normal,

    /// Editing a column filter.
    Filtering,

    /// Help panel is displayed.
    Help,
}

/// What the current route resolved to.
#[derive(Debug)]
pub enum View {
    /// Dataset cards.
    Home,
    /// A dataset grid.
    Grid(Box<GridView<SharedRecord>>),
    /// A record, or why it could not be shown.
    Detail(Result<RecordDetail, DetailError>),
    /// A path that matches no route or dataset.
    NotFound(String),
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` once the message is older than five seconds.
    #[must_use]
    pub fn should_hide(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.timestamp).as_secs() >= 5
    }
}

/// The main application state.
pub struct App {
    /// The configuration.
    pub config: Config,

    registry: DatasetRegistry,
    options: GridOptions,
    navigator: Navigator,
    view: View,

    /// Current UI mode.
    pub mode: AppMode,

    home_selected: usize,
    selected_column: usize,
    /// Field key of the column whose filter is being edited.
    editing: Option<String>,
    filter_draft: String,
    detail_scroll: u16,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size (updated on resize).
    pub terminal_size: Rect,
}

impl App {
    /// Creates the application at the home view.
    #[must_use]
    pub fn new(config: Config, registry: DatasetRegistry) -> Self {
        let options = GridOptions::from_config(&config.grid);
        Self {
            config,
            registry,
            options,
            navigator: Navigator::new(),
            view: View::Home,
            mode: AppMode::Normal,
            home_selected: 0,
            selected_column: 0,
            editing: None,
            filter_draft: String::new(),
            detail_scroll: 0,
            status: None,
            should_quit: false,
            terminal_size: Rect::default(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The dataset registry.
    #[must_use]
    pub const fn registry(&self) -> &DatasetRegistry {
        &self.registry
    }

    /// The navigator.
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// The open grid, if the current view is one.
    #[must_use]
    pub fn grid(&self) -> Option<&GridView<SharedRecord>> {
        match &self.view {
            View::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    fn grid_mut(&mut self) -> Option<&mut GridView<SharedRecord>> {
        match &mut self.view {
            View::Grid(grid) => Some(grid),
            _ => None,
        }
    }

    /// The selected card on the home view.
    #[must_use]
    pub const fn home_selected(&self) -> usize {
        self.home_selected
    }

    /// The selected header column.
    #[must_use]
    pub const fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Field key of the column being filtered, while the filter overlay is open.
    #[must_use]
    pub fn editing_column(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Text in the filter overlay.
    #[must_use]
    pub fn filter_draft(&self) -> &str {
        &self.filter_draft
    }

    /// Scroll offset of the detail view.
    #[must_use]
    pub const fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    /// Breadcrumb trail for the current location.
    #[must_use]
    pub fn breadcrumbs(&self) -> Breadcrumbs {
        Breadcrumbs::for_route(
            self.navigator.route(),
            self.navigator.context(),
            &self.registry,
        )
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Maps a key event to an action.
    #[must_use]
    pub fn handle_key(&self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Filtering => self.handle_filter_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    fn handle_normal_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('?') => return Action::ToggleHelp,
            KeyCode::Char('h') => return Action::GoHome,
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(position) = dataset_position(c) {
                    return Action::OpenDataset(position);
                }
            }
            _ => {}
        }

        match &self.view {
            View::Home => match key.code {
                KeyCode::Down | KeyCode::Char('j') => Action::SelectNextDataset,
                KeyCode::Up | KeyCode::Char('k') => Action::SelectPreviousDataset,
                KeyCode::Enter => Action::OpenSelectedDataset,
                _ => Action::None,
            },
            View::Grid(_) => match key.code {
                KeyCode::Down => Action::Row(RowKey::Down),
                KeyCode::Up => Action::Row(RowKey::Up),
                KeyCode::Enter => Action::Row(RowKey::Enter),
                KeyCode::Char(' ') => Action::Row(RowKey::Space),
                KeyCode::Right | KeyCode::Tab => Action::NextColumn,
                KeyCode::Left | KeyCode::BackTab => Action::PreviousColumn,
                KeyCode::Char('s') => Action::ToggleSort,
                KeyCode::Char('/') => Action::EnterFilterMode,
                KeyCode::Char('n') | KeyCode::PageDown => Action::NextPage,
                KeyCode::Char('p') | KeyCode::PageUp => Action::PreviousPage,
                KeyCode::Char('+' | '=') => Action::GrowPageSize,
                KeyCode::Char('-') => Action::ShrinkPageSize,
                KeyCode::Char('c') => Action::ClearFilters,
                _ => Action::None,
            },
            View::Detail(result) => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Action::Back,
                KeyCode::Enter if result.is_err() => Action::Recover,
                KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
                KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
                _ => Action::None,
            },
            View::NotFound(_) => match key.code {
                KeyCode::Enter => Action::Recover,
                _ => Action::None,
            },
        }
    }

    fn handle_filter_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ExitFilterMode,
            KeyCode::Enter => Action::CommitFilter,
            KeyCode::Backspace => {
                let mut text = self.filter_draft.clone();
                text.pop();
                Action::FilterInput(text)
            }
            KeyCode::Char(c) => {
                let mut text = self.filter_draft.clone();
                text.push(c);
                Action::FilterInput(text)
            }
            _ => Action::None,
        }
    }

    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Applies an action.
    pub fn update(&mut self, action: Action) {
        self.update_at(action, Instant::now());
    }

    /// Applies an action as of `now`, the time filter input is stamped with.
    pub fn update_at(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::GoHome => self.navigate(Route::Home),
            Action::OpenDataset(position) => self.open_dataset(position),
            Action::SelectNextDataset => {
                let last = self.registry.len().saturating_sub(1);
                self.home_selected = (self.home_selected + 1).min(last);
            }
            Action::SelectPreviousDataset => {
                self.home_selected = self.home_selected.saturating_sub(1);
            }
            Action::OpenSelectedDataset => self.open_dataset(self.home_selected),
            Action::Back => {
                if self.navigator.return_to_origin() {
                    self.sync_view();
                }
            }
            Action::Recover => self.recover(),

            Action::Row(key) => {
                let context = self.grid_mut().and_then(|grid| grid.handle_key(key));
                if let Some(context) = context {
                    self.navigator.open_record(context);
                    self.sync_view();
                }
            }
            Action::NextPage => {
                if let Some(grid) = self.grid_mut() {
                    grid.next_page();
                }
            }
            Action::PreviousPage => {
                if let Some(grid) = self.grid_mut() {
                    grid.previous_page();
                }
            }
            Action::GrowPageSize => {
                if let Some(grid) = self.grid_mut() {
                    grid.cycle_page_size(true);
                }
            }
            Action::ShrinkPageSize => {
                if let Some(grid) = self.grid_mut() {
                    grid.cycle_page_size(false);
                }
            }

            Action::NextColumn => self.move_column(true),
            Action::PreviousColumn => self.move_column(false),
            Action::ToggleSort => self.toggle_sort(),
            Action::EnterFilterMode => self.enter_filter_mode(),
            Action::ExitFilterMode => {
                self.mode = AppMode::Normal;
                self.editing = None;
            }
            Action::FilterInput(text) => self.input_filter(text, now),
            Action::CommitFilter => {
                if let Some(key) = self.editing.take() {
                    if let Some(grid) = self.grid_mut() {
                        grid.commit_filter(&key);
                    }
                }
                self.mode = AppMode::Normal;
            }
            Action::ClearFilters => {
                if let Some(grid) = self.grid_mut() {
                    grid.clear_filters();
                }
            }

            Action::ScrollDown => {
                self.detail_scroll = self
                    .detail_scroll
                    .saturating_add(1)
                    .min(self.max_detail_scroll());
            }
            Action::ScrollUp => self.detail_scroll = self.detail_scroll.saturating_sub(1),

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::HideHelp => self.mode = AppMode::Normal,
            Action::ShowStatus(text) => self.status = Some(StatusMessage::info(text)),
            Action::ClearStatus => self.status = None,

            Action::Render | Action::None => {}
        }

        self.drain_grid_events();
    }

    /// Handles a tick: commits due filters and expires old status messages.
    pub fn tick(&mut self, now: Instant) {
        if let Some(grid) = self.grid_mut().filter(|grid| grid.has_pending_filters()) {
            grid.tick(now);
        }
        self.drain_grid_events();

        if self.status.as_ref().is_some_and(|s| s.should_hide(now)) {
            self.status = None;
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigates to `path`.
    pub fn open_path(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Navigates to `route`.
    pub fn navigate(&mut self, route: Route) {
        info!(route = %route, "Navigating");
        self.navigator.navigate(route);
        self.sync_view();
    }

    fn open_dataset(&mut self, position: usize) {
        let Some(dataset) = self.registry.nth(position) else {
            self.status = Some(StatusMessage::error(format!(
                "No dataset at position {}",
                position + 1
            )));
            return;
        };
        let route = Route::Grid(dataset.id().clone());
        self.navigate(route);
    }

    /// Rebuilds the view for the navigator's current route.
    pub fn sync_view(&mut self) {
        self.mode = AppMode::Normal;
        self.editing = None;
        self.filter_draft.clear();
        self.detail_scroll = 0;

        self.view = match self.navigator.route().clone() {
            Route::Home => View::Home,
            Route::Grid(id) => match self.registry.get(id.as_str()) {
                Some(dataset) => {
                    let mut grid = dataset.open_grid(&self.options);
                    if let Some(request) = self.navigator.take_return_request() {
                        grid.restore_focus(request);
                    }
                    self.selected_column = 0;
                    if let Some(position) = self.registry.position(id.as_str()) {
                        self.home_selected = position;
                    }
                    View::Grid(Box::new(grid))
                }
                None => {
                    warn!(dataset = %id, "Route names an unknown dataset");
                    View::NotFound(id.grid_path())
                }
            },
            Route::Detail(record_id) => View::Detail(detail::resolve(
                &self.registry,
                &record_id,
                self.navigator.context(),
            )),
            Route::NotFound(path) => View::NotFound(path),
        };
    }

    /// Last scroll offset that still shows a line of the detail view.
    fn max_detail_scroll(&self) -> u16 {
        let View::Detail(detail) = &self.view else {
            return 0;
        };
        let last = DetailView::line_count(detail).saturating_sub(1);
        u16::try_from(last).unwrap_or(u16::MAX)
    }

    fn recover(&mut self) {
        let recovery = match &self.view {
            View::Detail(Err(error)) => error.recovery(),
            View::NotFound(_) => Recovery::GoHome,
            View::Home | View::Grid(_) | View::Detail(Ok(_)) => return,
        };
        debug!(action = recovery.label(), "Recovering from error state");
        match recovery {
            Recovery::GoHome => self.navigate(Route::Home),
            Recovery::BackToGrid(path) => self.navigate(Route::parse(&path)),
        }
    }

    // =========================================================================
    // Grid Header
    // =========================================================================

    fn move_column(&mut self, forward: bool) {
        let Some(len) = self.grid().map(|grid| grid.columns().len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        self.selected_column = if forward {
            (self.selected_column + 1) % len
        } else {
            (self.selected_column + len - 1) % len
        };
    }

    /// Header label and field key of the selected column.
    fn selected_column_key(&self) -> Option<(String, Option<String>)> {
        let column = self.grid()?.columns().get(self.selected_column)?;
        Some((
            column.header().to_owned(),
            column.field_key().map(str::to_owned),
        ))
    }

    fn toggle_sort(&mut self) {
        let Some((header, key)) = self.selected_column_key() else {
            return;
        };
        let Some(key) = key else {
            self.status = Some(StatusMessage::error(format!(
                "Column '{header}' is not sortable"
            )));
            return;
        };
        let Some(grid) = self.grid_mut() else {
            return;
        };
        self.status = Some(match grid.toggle_sort(&key) {
            Ok(sort) => StatusMessage::info(format!("Sorted by {sort}")),
            Err(e) => StatusMessage::error(e.to_string()),
        });
    }

    fn enter_filter_mode(&mut self) {
        let Some((header, key)) = self.selected_column_key() else {
            return;
        };
        let filterable = self
            .grid()
            .and_then(|grid| grid.columns().get(self.selected_column))
            .is_some_and(|column| column.is_filterable());
        let (Some(key), true) = (key, filterable) else {
            self.status = Some(StatusMessage::error(format!(
                "Column '{header}' is not filterable"
            )));
            return;
        };
        self.filter_draft = self
            .grid()
            .and_then(|grid| grid.filter_input(&key))
            .unwrap_or_default()
            .to_owned();
        debug!(column = key.as_str(), "Editing filter");
        self.editing = Some(key);
        self.mode = AppMode::Filtering;
    }

    fn input_filter(&mut self, text: String, now: Instant) {
        self.filter_draft = text;
        let Some(key) = self.editing.clone() else {
            return;
        };
        let draft = self.filter_draft.clone();
        let Some(grid) = self.grid_mut() else {
            return;
        };
        if let Err(e) = grid.input_filter(&key, &draft, now) {
            self.status = Some(StatusMessage::error(e.to_string()));
        }
    }

    fn drain_grid_events(&mut self) {
        let Some(grid) = self.grid_mut() else {
            return;
        };
        let mut filtered = false;
        let mut matching = None;
        for event in grid.take_events() {
            debug!(?event, "Grid event");
            match event {
                GridEvent::FilterCommitted { .. } => filtered = true,
                GridEvent::ResultsChanged { total_items } => matching = Some(total_items),
                _ => {}
            }
        }
        if let (true, Some(total_items)) = (filtered, matching) {
            self.status = Some(StatusMessage::info(format!("{total_items} matching items")));
        }
    }
}

/// Registry position for a digit key: `'1'` is the first dataset.
fn dataset_position(key: char) -> Option<usize> {
    let digit = key.to_digit(10)?;
    usize::try_from(digit).ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gs_core::{Record, RecordId};

    use super::*;

    fn app() -> App {
        App::new(Config::default(), gs_datasets::default_registry().unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        let action = app.handle_key(key(code));
        app.update(action);
    }

    fn page_ids(app: &App) -> Vec<RecordId> {
        app.grid()
            .unwrap()
            .page_rows()
            .iter()
            .map(|r| r.id())
            .collect()
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_global_keys() {
        let app = app();
        assert_eq!(app.handle_key(key(KeyCode::Char('1'))), Action::OpenDataset(0));
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(app.handle_key(key(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_home_selection_opens_dataset() {
        let mut app = app();
        assert!(matches!(app.view(), View::Home));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.home_selected(), 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.home_selected(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.grid().unwrap().dataset_id().as_str(), "logs");
        assert_eq!(app.breadcrumbs().to_string(), "Home / Application Logs");
    }

    #[test]
    fn test_round_trip_restores_focus() {
        let mut app = app();
        app.open_path("/vulnerabilities");
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.grid().unwrap().focused_row(), Some(1));

        press(&mut app, KeyCode::Enter);
        let View::Detail(Ok(detail)) = app.view() else {
            panic!("expected a resolved detail view");
        };
        assert_eq!(detail.record_id, RecordId::from(3));
        insta::assert_snapshot!(
            app.breadcrumbs(),
            @"Home / Vulnerability Scanner Results / Item 3"
        );

        press(&mut app, KeyCode::Esc);
        let grid = app.grid().unwrap();
        assert_eq!(grid.focused_row(), Some(1));
        assert_eq!(grid.focused_record().map(Record::id), Some(RecordId::from(3)));
    }

    #[test]
    fn test_filter_commits_after_quiet_period() {
        let mut app = app();
        app.open_path("/vulnerabilities");

        // ID is not filterable.
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Filtering);
        assert_eq!(app.editing_column(), Some("severity"));

        let start = Instant::now();
        app.update_at(Action::FilterInput("crit".to_owned()), start);
        assert_eq!(app.filter_draft(), "crit");
        assert_eq!(app.grid().unwrap().result_len(), 5);

        app.tick(start + Duration::from_millis(299));
        assert_eq!(app.grid().unwrap().result_len(), 5);

        app.tick(start + Duration::from_millis(300));
        assert_eq!(page_ids(&app), [0, 3, 16].map(RecordId::from).to_vec());
        assert_eq!(app.status.as_ref().unwrap().text, "3 matching items");
    }

    #[test]
    fn test_enter_commits_filter_now() {
        let mut app = app();
        app.open_path("/vulnerabilities");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.grid().unwrap().filters().get("severity"), Some("mi"));
        assert_eq!(page_ids(&app), [2, 8].map(RecordId::from).to_vec());

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.grid().unwrap().result_len(), 5);
    }

    #[test]
    fn test_sort_toggles_selected_column() {
        let mut app = app();
        app.open_path("/vulnerabilities");
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(page_ids(&app), [0, 2, 3, 8, 16].map(RecordId::from).to_vec());
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(page_ids(&app), [16, 8, 3, 2, 0].map(RecordId::from).to_vec());
        assert_eq!(app.status.as_ref().unwrap().text, "Sorted by id ↓");
    }

    #[test]
    fn test_derived_column_is_not_sortable() {
        let mut app = app();
        app.open_path("/logs");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('s'));
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "Column 'Timestamp' is not sortable");
    }

    #[test]
    fn test_paging_keys() {
        let mut app = app();
        app.open_path("/logs");
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.grid().unwrap().page_meta().page, 2);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.grid().unwrap().page_meta().page, 1);

        press(&mut app, KeyCode::Char('+'));
        let meta = app.grid().unwrap().page_meta();
        assert_eq!((meta.page_size, meta.total_pages), (20, 1));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.grid().unwrap().page_meta().page_size, 10);
    }

    #[test]
    fn test_detail_scroll_stops_at_last_line() {
        let mut app = app();
        app.open_path("/vulnerabilities");
        press(&mut app, KeyCode::Enter);
        let View::Detail(detail) = app.view() else {
            panic!("expected a detail view");
        };
        let last = u16::try_from(DetailView::line_count(detail) - 1).unwrap();

        for _ in 0..500 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.detail_scroll(), last);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.detail_scroll(), last - 1);
    }

    #[test]
    fn test_detail_without_context_recovers_home() {
        let mut app = app();
        app.open_path("/details/3");
        assert!(matches!(
            app.view(),
            View::Detail(Err(DetailError::MissingContext))
        ));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::Recover);
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.view(), View::Home));
    }

    #[test]
    fn test_unknown_routes_are_not_found() {
        let mut app = app();
        app.open_path("/reports");
        assert!(matches!(app.view(), View::NotFound(path) if path == "/reports"));
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.view(), View::Home));
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        assert_eq!(app.handle_key(key(KeyCode::Char('1'))), Action::None);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_status_message_expiry() {
        let msg = StatusMessage::info("Sorted by id ↑");
        assert!(!msg.is_error);
        assert!(!msg.should_hide(msg.timestamp));
        assert!(msg.should_hide(msg.timestamp + Duration::from_secs(5)));
        assert!(StatusMessage::error("Error!").is_error);
    }

    #[test]
    fn test_dataset_position() {
        assert_eq!(dataset_position('1'), Some(0));
        assert_eq!(dataset_position('9'), Some(8));
        assert_eq!(dataset_position('0'), None);
    }
}
