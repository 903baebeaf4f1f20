//! Filter input component.
//!
//! Displays a text input overlay for the selected column's filter.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

/// A filter input overlay widget.
///
/// Shown while filter mode is active. Typed text is committed after the
/// quiet period, or at once with `Enter`.
pub struct FilterInput<'a> {
    /// Header of the column being filtered.
    column: &'a str,
    /// The current draft.
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> FilterInput<'a> {
    /// Creates a new filter input widget.
    #[must_use]
    pub const fn new(column: &'a str, text: &'a str, theme: &'a Theme) -> Self {
        Self {
            column,
            text,
            theme,
        }
    }

    fn build_line(&self) -> Line<'a> {
        let cursor = Span::styled("▌", Style::default().fg(self.theme.accent));
        if self.text.is_empty() {
            Line::from(vec![
                Span::styled(
                    format!("Filter by {}...", self.column.to_lowercase()),
                    self.theme.dimmed_style().add_modifier(Modifier::ITALIC),
                ),
                cursor,
            ])
        } else {
            Line::from(vec![Span::styled(self.text, self.theme.base_style()), cursor])
        }
    }
}

impl Widget for &FilterInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                format!(" {} (Esc to leave, Enter to apply) ", self.column),
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.theme.overlay_bg));

        Paragraph::new(self.build_line()).block(block).render(area, buf);
    }
}
