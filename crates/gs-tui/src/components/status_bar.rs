//! Status bar component.
//!
//! Displays the mode, the latest status message, active filters, and the
//! number of matching records.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::app::{App, AppMode};
use crate::theme::Theme;

/// The status bar component.
pub struct StatusBar<'a> {
    app: &'a App,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar.
    #[must_use]
    pub const fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let mut spans = Vec::new();

        let mode_text = match self.app.mode {
            AppMode::Normal => "NORMAL",
            AppMode::Filtering => "FILTER",
            AppMode::Help => "HELP",
        };
        spans.push(Span::styled(
            format!(" {mode_text} "),
            Style::default()
                .fg(self.theme.overlay_bg)
                .bg(self.theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));

        if let Some(ref status) = self.app.status {
            let style = if status.is_error {
                self.theme.error_style()
            } else {
                self.theme.base_style()
            };
            spans.push(Span::styled(status.text.clone(), style));
            spans.push(Span::raw(" │ "));
        }

        if let Some(grid) = self.app.grid() {
            let filters = grid.filters();
            if !filters.is_empty() {
                spans.push(Span::styled("Filters: ", self.theme.dimmed_style()));
                let active: Vec<String> = filters
                    .iter()
                    .map(|(key, text)| format!("{key}=\"{text}\""))
                    .collect();
                spans.push(Span::styled(active.join(" "), self.theme.key_style()));
                spans.push(Span::raw(" │ "));
            }
            spans.push(Span::styled(
                format!("{} items", grid.result_len()),
                self.theme.dimmed_style(),
            ));
        } else {
            spans.push(Span::styled("? for help", self.theme.dimmed_style()));
        }

        Line::from(spans)
    }
}

impl Widget for &StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line())
            .style(self.theme.status_bar_style)
            .render(area, buf);
    }
}
