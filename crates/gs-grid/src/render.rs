//! Field renderers for the detail view.
//!
//! A dataset may register a custom renderer per field name. Fields without one
//! go through [`render_default`], which dispatches on the value's shape.
//! Custom renderers also see the whole record, so a field can be presented
//! using its siblings.

use std::fmt;

use gs_core::{FieldValue, FxHashMap, Record, fx_hash_map};
use serde::Serialize;

/// Visual emphasis of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Tone {
    /// No particular emphasis.
    #[default]
    Neutral,
    /// Healthy or low severity.
    Success,
    /// Informational.
    Info,
    /// Needs attention.
    Warning,
    /// Severe.
    Danger,
}

/// A field value prepared for display.
///
/// # Examples
///
/// ```
/// use gs_core::FieldValue;
/// use gs_grid::{RenderedValue, render::render_default};
///
/// assert_eq!(render_default(&FieldValue::Null), RenderedValue::Empty);
/// assert_eq!(render_default(&FieldValue::from(42)).to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
#[non_exhaustive]
pub enum RenderedValue {
    /// Null or absent.
    Empty,
    /// A single line of text.
    Text {
        /// The text.
        text: String,
    },
    /// Preformatted multi-line text.
    Block {
        /// The lines, newline-separated.
        text: String,
    },
    /// A short label with emphasis.
    Badge {
        /// The label.
        text: String,
        /// Emphasis.
        tone: Tone,
    },
    /// A hyperlink.
    Link {
        /// Visible label.
        label: String,
        /// Target URL.
        url: String,
    },
}

impl RenderedValue {
    /// Marker shown for empty values.
    pub const EMPTY_MARKER: &'static str = "-";

    /// Creates a [`RenderedValue::Text`].
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Creates a [`RenderedValue::Block`].
    #[must_use]
    pub fn block(text: impl Into<String>) -> Self {
        Self::Block { text: text.into() }
    }

    /// Creates a [`RenderedValue::Badge`].
    #[must_use]
    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Self::Badge {
            text: text.into(),
            tone,
        }
    }

    /// Creates a [`RenderedValue::Link`].
    #[must_use]
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str(Self::EMPTY_MARKER),
            Self::Text { text } | Self::Block { text } => f.write_str(text),
            Self::Badge { text, .. } => write!(f, "[{text}]"),
            Self::Link { label, url } if label == url => f.write_str(url),
            Self::Link { label, url } => write!(f, "{label} <{url}>"),
        }
    }
}

/// Renders a value by shape: null is empty, scalars are literal text, and
/// objects or arrays are pretty-printed JSON.
#[must_use]
pub fn render_default(value: &FieldValue) -> RenderedValue {
    match value {
        FieldValue::Null => RenderedValue::Empty,
        FieldValue::Structured(json) => serde_json::to_string_pretty(json)
            .map_or_else(|_| RenderedValue::text(json.to_string()), RenderedValue::block),
        scalar => RenderedValue::text(scalar.as_text()),
    }
}

/// Custom renderer for one field, given the field's value and its record.
pub type FieldRenderer = fn(&FieldValue, &dyn Record) -> RenderedValue;

/// Custom renderers keyed by field name.
#[derive(Clone, Default)]
pub struct FieldRenderers {
    renderers: FxHashMap<String, FieldRenderer>,
}

impl FieldRenderers {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            renderers: fx_hash_map(),
        }
    }

    /// Registers `renderer` for `field`, replacing any previous one.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, renderer: FieldRenderer) -> Self {
        self.renderers.insert(field.into(), renderer);
        self
    }

    /// Whether `field` has a custom renderer.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.renderers.contains_key(field)
    }

    /// Number of custom renderers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Whether no custom renderer is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Renders `value`, the `field` of `record`, with the custom renderer for
    /// `field`, falling back to [`render_default`].
    #[must_use]
    pub fn render(&self, field: &str, value: &FieldValue, record: &dyn Record) -> RenderedValue {
        self.renderers
            .get(field)
            .map_or_else(|| render_default(value), |renderer| renderer(value, record))
    }
}

impl fmt::Debug for FieldRenderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        fields.sort_unstable();
        f.debug_struct("FieldRenderers").field("fields", &fields).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_core::JsonRecord;
    use serde_json::json;

    fn shout(value: &FieldValue, _record: &dyn Record) -> RenderedValue {
        RenderedValue::badge(value.as_text().to_uppercase(), Tone::Danger)
    }

    fn titled_link(value: &FieldValue, record: &dyn Record) -> RenderedValue {
        RenderedValue::link(record.field("title").as_text(), value.as_text())
    }

    #[test]
    fn test_default_renderer_by_shape() {
        assert_eq!(render_default(&FieldValue::Bool(false)), RenderedValue::text("false"));
        assert_eq!(render_default(&FieldValue::from("Button")), RenderedValue::text("Button"));
        insta::assert_snapshot!(
            render_default(&FieldValue::Structured(json!({"attempt": 3, "service": "stripe"}))),
            @r#"
        {
          "attempt": 3,
          "service": "stripe"
        }
        "#
        );
    }

    #[test]
    fn test_custom_renderer_wins() {
        let record = JsonRecord::try_from(json!({"id": 1, "severity": "critical"})).unwrap();
        let renderers = FieldRenderers::new().with("severity", shout);
        assert!(renderers.contains("severity"));
        assert_eq!(
            renderers.render("severity", &record.field("severity"), &record),
            RenderedValue::badge("CRITICAL", Tone::Danger)
        );
        assert_eq!(
            renderers.render("component", &record.field("component"), &record),
            RenderedValue::Empty
        );
    }

    #[test]
    fn test_renderer_reads_sibling_fields() {
        let record = JsonRecord::try_from(json!({
            "id": 7,
            "title": "Login page",
            "href": "https://example.com/login",
        }))
        .unwrap();
        let renderers = FieldRenderers::new().with("href", titled_link);
        assert_eq!(
            renderers.render("href", &record.field("href"), &record),
            RenderedValue::link("Login page", "https://example.com/login")
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RenderedValue::Empty.to_string(), "-");
        assert_eq!(RenderedValue::badge("Major", Tone::Warning).to_string(), "[Major]");
        assert_eq!(
            RenderedValue::link("View Screenshot", "https://example.com/a.png").to_string(),
            "View Screenshot <https://example.com/a.png>"
        );
    }
}
