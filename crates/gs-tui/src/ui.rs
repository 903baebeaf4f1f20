//! Main UI layout and rendering orchestration.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | Grid Suite │ 1 Vulnerability Scans │ 2 Application Logs │ ?      |
//! +------------------------------------------------------------------+
//! | Home / Vulnerability Scanner Results                             |
//! +------------------------------------------------------------------+
//! |  Home: dataset cards                                             |
//! |  Grid: header + filter line, page rows, pagination bar           |
//! |  Detail: field list or error state                               |
//! +------------------------------------------------------------------+
//! | NORMAL  Sorted by id ↑ │ Filters: severity="crit" │ 3 items      |
//! +------------------------------------------------------------------+
//! ```

use gs_core::SharedRecord;
use gs_grid::GridView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, TableState};

use crate::app::{App, AppMode, View};
use crate::components::{
    BreadcrumbBar, DetailView, FilterInput, GridTable, HelpPanel, HomeView, NavHeader,
    PaginationBar, StatusBar,
};
use crate::theme::Theme;

/// Renders the entire UI based on the current application state.
pub fn render(app: &App, frame: &mut Frame, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Navigation header
            Constraint::Length(1), // Breadcrumbs
            Constraint::Min(6),    // Main view
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let active = app
        .grid()
        .and_then(|grid| app.registry().position(grid.dataset_id().as_str()));
    frame.render_widget(&NavHeader::new(app.registry(), active, theme), chunks[0]);

    let crumbs = app.breadcrumbs();
    frame.render_widget(&BreadcrumbBar::new(&crumbs, theme), chunks[1]);

    match app.view() {
        View::Home => {
            frame.render_widget(&HomeView::new(app.registry(), app.home_selected(), theme), chunks[2]);
        }
        View::Grid(grid) => render_grid(app, grid, frame, chunks[2], theme),
        View::Detail(detail) => {
            frame.render_widget(&DetailView::new(detail, app.detail_scroll(), theme), chunks[2]);
        }
        View::NotFound(path) => render_not_found(path, frame, chunks[2], theme),
    }

    frame.render_widget(&StatusBar::new(app, theme), chunks[3]);

    if app.mode == AppMode::Filtering {
        let column = app
            .grid()
            .and_then(|grid| grid.columns().get(app.selected_column()))
            .map_or("Filter", |column| column.header());
        let filter_area = centered_rows(50, 3, area);
        frame.render_widget(&FilterInput::new(column, app.filter_draft(), theme), filter_area);
    }

    if app.mode == AppMode::Help {
        frame.render_widget(&HelpPanel::new(theme), centered_rect(60, 70, area));
    }
}

/// Renders the grid table and its pagination bar.
fn render_grid(
    app: &App,
    grid: &GridView<SharedRecord>,
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let title = app
        .registry()
        .title_of(grid.dataset_id().as_str())
        .unwrap_or_else(|| grid.dataset_id().as_str());
    let table = GridTable::new(grid, title, app.selected_column(), theme);
    frame.render_stateful_widget(&table, chunks[0], &mut TableState::default());
    frame.render_widget(&PaginationBar::new(grid.page_meta(), theme), chunks[1]);
}

fn render_not_found(path: &str, frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Page not found",
            theme.error_style().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Nothing lives at {path}."),
            theme.base_style(),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter] ", theme.key_style()),
            Span::styled("Go to Home", theme.accent_style()),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error_style());
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    horizontal_center(percent_x, popup_layout[1])
}

/// Creates a centered rectangle `rows` high.
fn centered_rows(percent_x: u16, rows: u16, area: Rect) -> Rect {
    let pad = area.height.saturating_sub(rows) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(pad),
            Constraint::Length(rows),
            Constraint::Min(0),
        ])
        .split(area);

    horizontal_center(percent_x, popup_layout[1])
}

fn horizontal_center(percent_x: u16, area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area)[1]
}
