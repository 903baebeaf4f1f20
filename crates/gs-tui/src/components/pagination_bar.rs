//! Pagination bar component.
//!
//! ```text
//! Rows per page: 10 │ ‹ 1 [2] 3 › │ Page 2 of 3 (27 items)
//! ```

use std::ops::RangeInclusive;

use gs_grid::PageMeta;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// Number of page buttons shown at once.
const PAGE_WINDOW: usize = 5;

/// Page size, page buttons, and the page summary.
pub struct PaginationBar<'a> {
    meta: PageMeta,
    theme: &'a Theme,
}

impl<'a> PaginationBar<'a> {
    /// Creates a pagination bar.
    #[must_use]
    pub const fn new(meta: PageMeta, theme: &'a Theme) -> Self {
        Self { meta, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let meta = self.meta;
        let arrow = |enabled: bool, symbol: &'static str| {
            if enabled {
                Span::styled(symbol, self.theme.accent_style())
            } else {
                Span::styled(symbol, self.theme.dimmed_style())
            }
        };

        let mut spans = vec![
            Span::styled(" Rows per page: ", self.theme.dimmed_style()),
            Span::styled(meta.page_size.to_string(), self.theme.base_style()),
            Span::styled(" │ ", self.theme.dimmed_style()),
            arrow(meta.has_previous(), "‹"),
        ];
        for page in page_window(meta.page, meta.total_pages) {
            spans.push(Span::raw(" "));
            if page == meta.page {
                spans.push(Span::styled(format!("[{page}]"), self.theme.highlight_style));
            } else {
                spans.push(Span::styled(page.to_string(), self.theme.base_style()));
            }
        }
        spans.push(Span::raw(" "));
        spans.push(arrow(meta.has_next(), "›"));
        spans.push(Span::styled(" │ ", self.theme.dimmed_style()));
        spans.push(Span::styled(
            format!(
                "Page {} of {} ({} items)",
                meta.page, meta.total_pages, meta.total_items
            ),
            self.theme.base_style(),
        ));
        Line::from(spans)
    }
}

impl Widget for &PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line()).render(area, buf);
    }
}

/// The page buttons to show: up to [`PAGE_WINDOW`] pages centered on `page`,
/// shifted to stay within `1..=total_pages`.
fn page_window(page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let total_pages = total_pages.max(1);
    let page = page.clamp(1, total_pages);
    let width = PAGE_WINDOW.min(total_pages);
    let start = page
        .saturating_sub(width / 2)
        .clamp(1, total_pages + 1 - width);
    start..=start + width - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1), 1..=1);
        assert_eq!(page_window(1, 3), 1..=3);
        assert_eq!(page_window(1, 10), 1..=5);
        assert_eq!(page_window(6, 10), 4..=8);
        assert_eq!(page_window(10, 10), 6..=10);
        assert_eq!(page_window(0, 0), 1..=1);
    }

    #[test]
    fn test_bar_text() {
        let meta = PageMeta {
            page: 2,
            page_size: 10,
            total_pages: 2,
            total_items: 13,
        };
        let theme = Theme::dark();
        insta::assert_snapshot!(
            text(&PaginationBar::new(meta, &theme).build_line()),
            @" Rows per page: 10 │ ‹ 1 [2] › │ Page 2 of 2 (13 items)"
        );
    }

    #[test]
    fn test_arrows_dim_at_edges() {
        let meta = PageMeta {
            page: 1,
            page_size: 10,
            total_pages: 1,
            total_items: 0,
        };
        let theme = Theme::dark();
        let line = PaginationBar::new(meta, &theme).build_line();
        let previous = line.spans.iter().find(|s| s.content == "‹").unwrap();
        assert_eq!(previous.style, theme.dimmed_style());
    }
}
