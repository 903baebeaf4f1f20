//! Navigation header component.
//!
//! Shows the application title and one tab per registered dataset.

use gs_grid::DatasetRegistry;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// The navigation header.
///
/// Each dataset tab carries its `1..9` shortcut; the tab of the active
/// dataset is highlighted.
pub struct NavHeader<'a> {
    registry: &'a DatasetRegistry,
    /// Registry position of the dataset being viewed, if any.
    active: Option<usize>,
    theme: &'a Theme,
}

impl<'a> NavHeader<'a> {
    /// Creates a new navigation header.
    #[must_use]
    pub const fn new(registry: &'a DatasetRegistry, active: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            registry,
            active,
            theme,
        }
    }

    fn build_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled("Grid Suite", self.theme.header_style)];

        for (position, dataset) in self.registry.iter().enumerate() {
            spans.push(Span::styled(" │ ", self.theme.dimmed_style()));
            let style = if self.active == Some(position) {
                self.theme.accent_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                self.theme.base_style()
            };
            spans.push(Span::styled(format!("{}", position + 1), self.theme.key_style()));
            spans.push(Span::styled(format!(" {} ", dataset.label()), style));
        }

        spans.push(Span::styled(" │ ", self.theme.dimmed_style()));
        spans.push(Span::styled("? for help", self.theme.key_style()));
        Line::from(spans)
    }
}

impl Widget for &NavHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style);

        Paragraph::new(self.build_line()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_header_lists_datasets() {
        let registry = gs_datasets::default_registry().unwrap();
        let theme = Theme::dark();
        let header = NavHeader::new(&registry, Some(1), &theme);
        let text: String = header
            .build_line()
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(
            text,
            "Grid Suite │ 1 Vulnerability Scans  │ 2 Application Logs  │ ? for help"
        );
    }
}
