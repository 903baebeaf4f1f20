//! Home view: one card per dataset.

use gs_grid::DatasetRegistry;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, StatefulWidget, Widget};

use crate::theme::Theme;

/// Dataset cards with a selection.
pub struct HomeView<'a> {
    registry: &'a DatasetRegistry,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> HomeView<'a> {
    /// Creates the home view.
    #[must_use]
    pub const fn new(registry: &'a DatasetRegistry, selected: usize, theme: &'a Theme) -> Self {
        Self {
            registry,
            selected,
            theme,
        }
    }

    fn build_items(&self) -> Vec<ListItem<'a>> {
        self.registry
            .iter()
            .enumerate()
            .map(|(position, dataset)| {
                let title = Line::from(vec![
                    Span::styled(format!("[{}] ", position + 1), self.theme.key_style()),
                    Span::styled(dataset.title(), self.theme.header_style),
                ]);
                let description = Line::from(Span::styled(
                    format!("    {}", dataset.description()),
                    self.theme.base_style(),
                ));
                let count = Line::from(Span::styled(
                    format!("    {} records", dataset.records().len()),
                    self.theme.dimmed_style(),
                ));
                ListItem::new(Text::from(vec![title, description, count, Line::raw("")]))
            })
            .collect()
    }
}

impl Widget for &HomeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style)
            .title(Span::styled(" Datasets ", self.theme.header_style));

        let list = List::new(self.build_items())
            .block(block)
            .highlight_style(self.theme.highlight_style)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("▸ ");

        let mut state = ListState::default();
        if !self.registry.is_empty() {
            state.select(Some(self.selected));
        }
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
