//! Vulnerability scan results.

use std::sync::Arc;

use gs_core::{FieldValue, Record, RecordId, SharedRecord};
use gs_grid::{ColumnDescriptor, ColumnModel, Dataset, FieldRenderers, RenderedValue, Tone};
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Registry identifier.
pub const ID: &str = "vulnerabilities";

const DATA: &str = include_str!("../data/vulnerabilities.json");

/// One finding from the accessibility/security scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    /// Finding identifier.
    pub id: i64,
    /// Rule that fired.
    pub issue_type: String,
    /// `Critical`, `Major`, or `Minor`.
    pub severity: String,
    /// Component the element belongs to.
    pub component: String,
    /// CSS selector of the element.
    pub selector: String,
    /// Page the element was found on.
    pub url: String,
    /// Human-readable explanation.
    pub description: String,
    /// Offending markup.
    #[serde(default)]
    pub code_snippet: Option<String>,
    /// Screenshot URL.
    #[serde(default)]
    pub screenshot: Option<String>,
}

impl Record for Vulnerability {
    fn id(&self) -> RecordId {
        RecordId::from(self.id)
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => self.id.into(),
            "issueType" => self.issue_type.as_str().into(),
            "severity" => self.severity.as_str().into(),
            "component" => self.component.as_str().into(),
            "selector" => self.selector.as_str().into(),
            "url" => self.url.as_str().into(),
            "description" => self.description.as_str().into(),
            "codeSnippet" => self.code_snippet.as_deref().into(),
            "screenshot" => self.screenshot.as_deref().into(),
            _ => FieldValue::Null,
        }
    }

    fn fields(&self) -> Vec<(String, FieldValue)> {
        [
            "id",
            "issueType",
            "severity",
            "component",
            "selector",
            "url",
            "description",
            "codeSnippet",
            "screenshot",
        ]
        .into_iter()
        .map(|key| (key.to_owned(), self.field(key)))
        .collect()
    }
}

/// Parses the bundled findings.
pub fn load() -> Result<Vec<Vulnerability>, DatasetError> {
    serde_json::from_str(DATA).map_err(|source| DatasetError::Parse {
        dataset: ID,
        source,
    })
}

/// Grid columns. Severity is filterable so results can be narrowed by it.
#[must_use]
pub fn columns() -> ColumnModel<SharedRecord> {
    ColumnModel::new(vec![
        ColumnDescriptor::field("id", "ID").width(6).sortable(),
        ColumnDescriptor::field("issueType", "Issue Type").width(22).sortable(),
        ColumnDescriptor::field("severity", "Severity")
            .width(10)
            .sortable()
            .filterable(),
        ColumnDescriptor::field("component", "Component").width(11).sortable(),
        ColumnDescriptor::field("selector", "Selector").sortable().filterable(),
        ColumnDescriptor::field("url", "Url").sortable().filterable(),
    ])
}

/// Badge colored by severity.
#[must_use]
pub fn severity_badge(value: &FieldValue, _finding: &dyn Record) -> RenderedValue {
    let text = value.as_text();
    let tone = match text.as_ref() {
        "Critical" => Tone::Danger,
        "Major" => Tone::Warning,
        _ => Tone::Success,
    };
    RenderedValue::badge(text, tone)
}

/// Screenshot URL as a link labeled with the finding's component.
#[must_use]
pub fn screenshot_link(value: &FieldValue, finding: &dyn Record) -> RenderedValue {
    if value.is_null() {
        return RenderedValue::Empty;
    }
    let component = finding.field("component");
    let label = if component.as_text().is_empty() {
        "Screenshot".to_owned()
    } else {
        format!("Screenshot of {}", component.as_text())
    };
    RenderedValue::link(label, value.as_text())
}

/// Detail-view renderers.
#[must_use]
pub fn renderers() -> FieldRenderers {
    FieldRenderers::new()
        .with("severity", severity_badge)
        .with("screenshot", screenshot_link)
}

/// The complete dataset.
pub fn dataset() -> Result<Dataset, DatasetError> {
    let records: Vec<SharedRecord> = load()?
        .into_iter()
        .map(|v| Arc::new(v) as SharedRecord)
        .collect();
    Ok(
        Dataset::new(ID, "Vulnerability Scanner Results", records, columns())
            .with_label("Vulnerability Scans")
            .with_description("View results from the security vulnerability scanner.")
            .with_renderers(renderers()),
    )
}
