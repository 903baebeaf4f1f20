//! Help panel component.
//!
//! Displays a modal overlay with key bindings.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, Widget};

use crate::theme::Theme;

/// Key binding definition for the help panel.
struct KeyBinding {
    /// The key(s) to press.
    key: &'static str,
    /// Description of what the key does.
    description: &'static str,
    /// The view(s) where this binding applies.
    view: &'static str,
}

const fn binding(key: &'static str, description: &'static str, view: &'static str) -> KeyBinding {
    KeyBinding {
        key,
        description,
        view,
    }
}

/// Static list of key bindings to display.
const KEY_BINDINGS: &[KeyBinding] = &[
    // Home
    binding("k / ↑", "Previous dataset", "Home"),
    binding("j / ↓", "Next dataset", "Home"),
    binding("Enter", "Open dataset", "Home"),
    // Grid
    binding("↑ / ↓", "Move row focus", "Grid"),
    binding("Enter / Space", "Open focused row", "Grid"),
    binding("← / →", "Select column", "Grid"),
    binding("s", "Sort by column", "Grid"),
    binding("/", "Filter column", "Grid"),
    binding("c", "Clear filters", "Grid"),
    binding("n / p", "Next / previous page", "Grid"),
    binding("+ / -", "Rows per page", "Grid"),
    // Filter
    binding("Enter", "Apply filter now", "Filter"),
    binding("Esc", "Stop editing", "Filter"),
    // Detail
    binding("Esc / b", "Back to grid", "Detail"),
    binding("↑ / ↓", "Scroll", "Detail"),
    binding("Enter", "Recover from error", "Detail"),
    // Global
    binding("h", "Home", "Any"),
    binding("1-9", "Open dataset by number", "Any"),
    binding("?", "Toggle help panel", "Any"),
    binding("q / Ctrl+c", "Quit", "Any"),
];

/// A help panel overlay widget.
pub struct HelpPanel<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn build_rows(&self) -> Vec<Row<'static>> {
        KEY_BINDINGS
            .iter()
            .map(|binding| {
                Row::new(vec![
                    Cell::from(Span::styled(binding.key, self.theme.key_style())),
                    Cell::from(Span::styled(binding.description, self.theme.base_style())),
                    Cell::from(Span::styled(binding.view, self.theme.dimmed_style())),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Help - Key Bindings ",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.theme.overlay_bg));

        let heading = self
            .theme
            .accent_style()
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let header = Row::new(vec![
            Cell::from(Span::styled("Key", heading)),
            Cell::from(Span::styled("Action", heading)),
            Cell::from(Span::styled("View", heading)),
        ])
        .height(1)
        .bottom_margin(1);

        let widths = [
            Constraint::Length(15),
            Constraint::Min(25),
            Constraint::Length(8),
        ];

        Table::new(self.build_rows(), widths)
            .block(block)
            .header(header)
            .column_spacing(2)
            .render(area, buf);
    }
}
