//! Detail view component.
//!
//! Renders a resolved record as a labeled field list, or the error state
//! with its recovery key.

use gs_grid::{DetailError, RecordDetail, RenderedValue};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Lines drawn for an error state: title, gap, message, gap, recovery key.
const ERROR_LINES: usize = 5;

/// The detail view.
pub struct DetailView<'a> {
    detail: &'a Result<RecordDetail, DetailError>,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> DetailView<'a> {
    /// Creates a detail view scrolled down by `scroll` lines.
    #[must_use]
    pub const fn new(
        detail: &'a Result<RecordDetail, DetailError>,
        scroll: u16,
        theme: &'a Theme,
    ) -> Self {
        Self {
            detail,
            scroll,
            theme,
        }
    }

    /// Number of lines drawn for `detail`, before wrapping.
    #[must_use]
    pub fn line_count(detail: &Result<RecordDetail, DetailError>) -> usize {
        match detail {
            Ok(detail) => {
                let fields: usize = detail
                    .fields
                    .iter()
                    .map(|field| match &field.value {
                        RenderedValue::Block { text } => 1 + text.lines().count(),
                        _ => 1,
                    })
                    .sum();
                2 + fields
            }
            Err(_) => ERROR_LINES,
        }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        match self.detail {
            Ok(detail) => self.field_lines(detail),
            Err(error) => self.error_lines(error),
        }
    }

    fn field_lines(&self, detail: &'a RecordDetail) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(detail.fields.len() + 2);
        lines.push(Line::from(Span::styled(detail.heading(), self.theme.header_style)));
        lines.push(Line::raw(""));

        for field in &detail.fields {
            let label = Span::styled(
                format!("{}: ", field.label()),
                self.theme.base_style().add_modifier(Modifier::BOLD),
            );
            match &field.value {
                RenderedValue::Block { text } => {
                    lines.push(Line::from(label));
                    lines.extend(text.lines().map(|line| {
                        Line::from(Span::styled(format!("    {line}"), self.theme.dimmed_style()))
                    }));
                }
                value => lines.push(Line::from(vec![label, self.value_span(value)])),
            }
        }
        lines
    }

    fn value_span(&self, value: &'a RenderedValue) -> Span<'a> {
        match value {
            RenderedValue::Empty => {
                Span::styled(RenderedValue::EMPTY_MARKER, self.theme.dimmed_style())
            }
            RenderedValue::Badge { text, tone } => {
                Span::styled(format!(" {text} "), self.theme.tone_style(*tone))
            }
            RenderedValue::Link { label, url } => {
                Span::styled(format!("{label} <{url}>"), self.theme.link_style())
            }
            RenderedValue::Text { text } | RenderedValue::Block { text } => {
                Span::styled(text.as_str(), self.theme.base_style())
            }
            other => Span::styled(other.to_string(), self.theme.base_style()),
        }
    }

    fn error_lines(&self, error: &DetailError) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(
                error.title(),
                self.theme.error_style().add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            Line::from(Span::styled(error.message(), self.theme.base_style())),
            Line::raw(""),
            Line::from(vec![
                Span::styled("[Enter] ", self.theme.key_style()),
                Span::styled(error.recovery().label(), self.theme.accent_style()),
            ]),
        ]
    }
}

impl Widget for &DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.detail.is_ok() {
            self.theme.focused_border_style
        } else {
            self.theme.error_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(" Details ", self.theme.header_style));

        Paragraph::new(self.build_lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use gs_core::RecordId;
    use gs_grid::{NavigationContext, Recovery, Tone, detail};

    use super::*;

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_log_detail_lines() {
        let registry = gs_datasets::default_registry().unwrap();
        let context = NavigationContext {
            record_id: RecordId::from(101),
            dataset_id: "logs".into(),
            origin_path: "/logs".to_owned(),
        };
        let resolved = detail::resolve(&registry, &context.record_id, Some(&context));
        let theme = Theme::dark();
        let lines = DetailView::new(&resolved, 0, &theme).build_lines();
        let rendered = text(&lines);

        assert_eq!(DetailView::line_count(&resolved), lines.len());
        assert!(rendered.starts_with("Details for Item 101\n"));
        assert!(rendered.contains("Timestamp: Fri, 27 Oct 2023 10:00:00 GMT"));
        assert!(rendered.contains("User: Alice (ID: user-abc-123, IP: 192.168.1.10)"));
        let level = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .find(|span| span.content == " INFO ")
            .unwrap();
        assert_eq!(level.style, theme.tone_style(Tone::Info));
    }

    #[test]
    fn test_error_lines_offer_recovery() {
        let resolved = Err(DetailError::MissingContext);
        let theme = Theme::dark();
        let lines = DetailView::new(&resolved, 0, &theme).build_lines();
        let rendered = text(&lines);
        assert_eq!(DetailView::line_count(&resolved), lines.len());
        let last = rendered.lines().last().unwrap();
        assert_eq!(last, format!("[Enter] {}", Recovery::GoHome.label()));
    }
}
