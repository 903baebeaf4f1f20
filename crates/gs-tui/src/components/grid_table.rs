//! Grid table: sortable header, filter line, and the current page.
//!
//! The header shows each column's label with its sort indicator (`↑`/`↓`
//! on the sorted column, `↕` on other sortable columns) and, underneath,
//! the committed filter text. The selected header column is highlighted;
//! the focused row carries the row highlight.

use gs_core::SharedRecord;
use gs_grid::{ColumnDescriptor, GridView, SortDirection};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, Borders, Cell, HighlightSpacing, Row, StatefulWidget, Table, TableState, Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Marker for sortable columns that are not the active sort.
const UNSORTED_INDICATOR: &str = "↕";

/// Widest a cell without a width hint is allowed to grow before truncation.
const MAX_CELL_WIDTH: usize = 60;

/// The grid table.
pub struct GridTable<'a> {
    grid: &'a GridView<SharedRecord>,
    title: &'a str,
    selected_column: usize,
    theme: &'a Theme,
}

impl<'a> GridTable<'a> {
    /// Creates the grid table.
    #[must_use]
    pub const fn new(
        grid: &'a GridView<SharedRecord>,
        title: &'a str,
        selected_column: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            grid,
            title,
            selected_column,
            theme,
        }
    }

    /// Header label with its sort indicator.
    fn header_label(&self, column: &ColumnDescriptor<SharedRecord>) -> String {
        if !column.is_sortable() {
            return column.header().to_owned();
        }
        let indicator = column
            .field_key()
            .and_then(|key| self.grid.sort().direction_for(key))
            .map_or(UNSORTED_INDICATOR, SortDirection::indicator);
        format!("{} {indicator}", column.header())
    }

    fn build_header(&self) -> Row<'a> {
        let cells = self.grid.columns().iter().enumerate().map(|(i, column)| {
            let mut style = self.theme.header_style;
            if i == self.selected_column {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let filter = column
                .field_key()
                .and_then(|key| self.grid.filters().get(key))
                .map_or_else(String::new, |text| format!("≈ {text}"));
            Cell::from(Text::from(vec![
                Line::from(Span::styled(self.header_label(column), style)),
                Line::from(Span::styled(filter, self.theme.accent_style())),
            ]))
        });
        Row::new(cells).height(2).bottom_margin(1)
    }

    fn build_rows(&self) -> Vec<Row<'a>> {
        let columns = self.grid.columns();
        self.grid
            .page_rows()
            .into_iter()
            .map(|record| {
                let cells = columns.iter().map(|column| {
                    let limit = column.width_hint().map_or(MAX_CELL_WIDTH, usize::from);
                    Cell::from(truncate(&column.cell_text(record), limit))
                });
                Row::new(cells).height(1)
            })
            .collect()
    }
}

impl StatefulWidget for &GridTable<'_> {
    type State = TableState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(format!(" {} ", self.title), self.theme.header_style));

        let rows = self.build_rows();
        let empty = rows.is_empty();
        let table = Table::new(rows, column_widths(self.grid))
            .block(block)
            .header(self.build_header())
            .style(self.theme.base_style())
            .row_highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        state.select(self.grid.focused_row());
        StatefulWidget::render(table, area, buf, state);

        if empty {
            let notice = Rect {
                x: area.x.saturating_add(2),
                y: area.y.saturating_add(4),
                width: area.width.saturating_sub(4),
                height: 1,
            }
            .intersection(area);
            // Keep clear of the bottom border.
            if !notice.is_empty() && notice.y < area.bottom().saturating_sub(1) {
                Line::from(Span::styled(
                    "No records match the current filters",
                    self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
                ))
                .render(notice, buf);
            }
        }
    }
}

/// Column constraints: a fixed width for hinted columns, the rest share
/// what is left.
fn column_widths(grid: &GridView<SharedRecord>) -> Vec<Constraint> {
    grid.columns()
        .iter()
        .map(|column| column.width_hint().map_or(Constraint::Fill(1), Constraint::Length))
        .collect()
}

/// Truncates `text` to `max_width` display columns, ending in `…` when cut.
fn truncate(text: &str, max_width: usize) -> String {
    let text = text.lines().next().unwrap_or_default();
    if text.width() <= max_width {
        return text.to_owned();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
