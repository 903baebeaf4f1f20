//! Breadcrumb bar component.

use gs_grid::Breadcrumbs;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// One-line breadcrumb trail.
///
/// Crumbs with a target are drawn as links; the current location is bold.
pub struct BreadcrumbBar<'a> {
    crumbs: &'a Breadcrumbs,
    theme: &'a Theme,
}

impl<'a> BreadcrumbBar<'a> {
    /// Creates a new breadcrumb bar.
    #[must_use]
    pub const fn new(crumbs: &'a Breadcrumbs, theme: &'a Theme) -> Self {
        Self { crumbs, theme }
    }

    fn build_line(&self) -> Line<'a> {
        let mut spans = vec![Span::raw(" ")];
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(Breadcrumbs::SEPARATOR, self.theme.dimmed_style()));
            }
            let style = if crumb.is_current() {
                self.theme.base_style().add_modifier(Modifier::BOLD)
            } else {
                self.theme.link_style()
            };
            spans.push(Span::styled(crumb.label.as_str(), style));
        }
        Line::from(spans)
    }
}

impl Widget for &BreadcrumbBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.build_line()).render(area, buf);
    }
}
