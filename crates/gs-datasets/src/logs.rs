//! Application log entries.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use gs_core::{FieldValue, Record, RecordId, SharedRecord};
use gs_grid::{ColumnDescriptor, ColumnModel, Dataset, FieldRenderers, RenderedValue, Tone};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::error::DatasetError;

/// Registry identifier.
pub const ID: &str = "logs";

const DATA: &str = include_str!("../data/logs.json");

/// Grid cell format for timestamps.
const CELL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Detail format for timestamps, in the style of an HTTP date.
const DETAIL_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Routine events.
    Info,
    /// Something worth a look.
    Warn,
    /// A failed operation.
    Error,
    /// Diagnostic detail.
    Debug,
}

impl LogLevel {
    /// The wire form (`INFO`, `WARN`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }

    /// Badge tone for this level.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Error => Tone::Danger,
            Self::Warn => Tone::Warning,
            Self::Info => Tone::Info,
            Self::Debug => Tone::Neutral,
        }
    }

    fn parse(text: &str) -> Option<Self> {
        match text {
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "ERROR" => Some(Self::Error),
            "DEBUG" => Some(Self::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user an entry was recorded for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogUser {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Client address.
    pub ip: String,
}

/// One log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry identifier.
    pub id: i64,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    /// Severity.
    pub level: LogLevel,
    /// Emitting service.
    pub service: String,
    /// Log message.
    pub message: String,
    /// Free-form structured context.
    #[serde(default)]
    pub payload: serde_json::Map<String, serde_json::Value>,
    /// Acting user.
    pub user: LogUser,
}

const FIELDS: [&str; 7] = [
    "id",
    "timestamp",
    "level",
    "service",
    "message",
    "payload",
    "user",
];

impl Record for LogEntry {
    fn id(&self) -> RecordId {
        RecordId::from(self.id)
    }

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "id" => self.id.into(),
            "timestamp" => self
                .timestamp
                .to_rfc3339_opts(SecondsFormat::Secs, true)
                .into(),
            "level" => self.level.as_str().into(),
            "service" => self.service.as_str().into(),
            "message" => self.message.as_str().into(),
            "payload" => FieldValue::Structured(serde_json::Value::Object(self.payload.clone())),
            "user" => FieldValue::Structured(json!({
                "id": self.user.id,
                "name": self.user.name,
                "ip": self.user.ip,
            })),
            _ => FieldValue::Null,
        }
    }

    fn fields(&self) -> Vec<(String, FieldValue)> {
        FIELDS
            .into_iter()
            .map(|key| (key.to_owned(), self.field(key)))
            .collect()
    }
}

/// Parses the bundled log entries.
pub fn load() -> Result<Vec<LogEntry>, DatasetError> {
    serde_json::from_str(DATA).map_err(|source| DatasetError::Parse {
        dataset: ID,
        source,
    })
}

fn parse_timestamp(value: &FieldValue) -> Option<DateTime<Utc>> {
    let FieldValue::Text(text) = value else {
        return None;
    };
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
}

/// Grid cell for the derived timestamp column.
fn timestamp_cell(record: &SharedRecord) -> String {
    let value = record.field("timestamp");
    parse_timestamp(&value).map_or_else(
        || value.as_text().into_owned(),
        |ts| ts.format(CELL_FORMAT).to_string(),
    )
}

/// Grid columns. The timestamp column is derived and therefore not sortable.
#[must_use]
pub fn columns() -> ColumnModel<SharedRecord> {
    ColumnModel::new(vec![
        ColumnDescriptor::field("id", "ID").width(6).sortable(),
        ColumnDescriptor::derived("Timestamp", timestamp_cell).width(20),
        ColumnDescriptor::field("level", "Level")
            .width(8)
            .sortable()
            .filterable(),
        ColumnDescriptor::field("service", "Service")
            .width(22)
            .sortable()
            .filterable(),
        ColumnDescriptor::field("message", "Message")
            .sortable()
            .filterable(),
    ])
}

/// Badge colored by log level.
#[must_use]
pub fn level_badge(value: &FieldValue, _entry: &dyn Record) -> RenderedValue {
    let text = value.as_text();
    let tone = LogLevel::parse(&text).map_or(Tone::Neutral, LogLevel::tone);
    RenderedValue::badge(text, tone)
}

/// Timestamp as a UTC date string.
#[must_use]
pub fn timestamp_text(value: &FieldValue, _entry: &dyn Record) -> RenderedValue {
    match parse_timestamp(value) {
        Some(ts) => RenderedValue::text(ts.format(DETAIL_FORMAT).to_string()),
        None => {
            warn!(value = %value.as_text(), "unparseable log timestamp");
            RenderedValue::text(value.as_text())
        }
    }
}

/// Payload as pretty-printed JSON.
#[must_use]
pub fn payload_block(value: &FieldValue, _entry: &dyn Record) -> RenderedValue {
    match value {
        FieldValue::Structured(json) => RenderedValue::block(
            serde_json::to_string_pretty(json).unwrap_or_else(|_| value.as_text().into_owned()),
        ),
        FieldValue::Null => RenderedValue::Empty,
        other => RenderedValue::block(other.as_text()),
    }
}

/// User as `Name (ID: id, IP: ip)`.
#[must_use]
pub fn user_summary(value: &FieldValue, _entry: &dyn Record) -> RenderedValue {
    let FieldValue::Structured(json) = value else {
        return RenderedValue::text(value.as_text());
    };
    let part = |key: &str| json.get(key).and_then(serde_json::Value::as_str).unwrap_or("-");
    RenderedValue::text(format!(
        "{} (ID: {}, IP: {})",
        part("name"),
        part("id"),
        part("ip")
    ))
}

/// Detail-view renderers.
#[must_use]
pub fn renderers() -> FieldRenderers {
    FieldRenderers::new()
        .with("level", level_badge)
        .with("timestamp", timestamp_text)
        .with("payload", payload_block)
        .with("user", user_summary)
}

/// The complete dataset.
pub fn dataset() -> Result<Dataset, DatasetError> {
    let records: Vec<SharedRecord> = load()?
        .into_iter()
        .map(|entry| Arc::new(entry) as SharedRecord)
        .collect();
    Ok(Dataset::new(ID, "Application Logs", records, columns())
        .with_description("Explore and analyze application logs from various services.")
        .with_renderers(renderers()))
}
