//! Record identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The unique, stable identifier of a record within its dataset.
///
/// Identifiers are either integers or strings. They cross the route boundary
/// as text (`/details/3`), so equality with a path segment is always checked
/// on the stringified form via [`RecordId::matches`].
///
/// # Examples
///
/// ```
/// use gs_core::RecordId;
///
/// let id = RecordId::from(3);
/// assert!(id.matches("3"));
/// assert_eq!(RecordId::parse("3"), id);
/// assert_eq!(RecordId::parse("user-abc"), RecordId::from("user-abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// A numeric identifier.
    Number(i64),
    /// A string identifier.
    Text(String),
}

impl RecordId {
    /// Parses a path segment, preferring the numeric form.
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        segment
            .parse::<i64>()
            .map_or_else(|_| Self::Text(segment.to_owned()), Self::Number)
    }

    /// Returns `true` if the stringified identifier equals `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Number(n) => n.to_string() == text,
            Self::Text(s) => s == text,
        }
    }

    /// Returns `true` if both identifiers stringify to the same text.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(_), Self::Text(text)) => self.matches(text),
            (Self::Text(_), Self::Number(_)) => other.same_as(self),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefers_number() {
        assert_eq!(RecordId::parse("16"), RecordId::Number(16));
        assert_eq!(RecordId::parse("-2"), RecordId::Number(-2));
        assert_eq!(RecordId::parse("16a"), RecordId::Text("16a".to_owned()));
    }

    #[test]
    fn test_stringified_equality() {
        let numeric = RecordId::from(3);
        let textual = RecordId::from("3");
        assert_ne!(numeric, textual);
        assert!(numeric.same_as(&textual));
        assert!(textual.same_as(&numeric));
        assert!(!numeric.same_as(&RecordId::from("03")));
    }

    #[test]
    fn test_serde_is_plain_data() {
        assert_eq!(serde_json::to_string(&RecordId::from(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&RecordId::from("x")).unwrap(), r#""x""#);
        let parsed: RecordId = serde_json::from_str("101").unwrap();
        assert_eq!(parsed, RecordId::Number(101));
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordId::from(125).to_string(), "125");
        assert_eq!(RecordId::from("deploy-bot").to_string(), "deploy-bot");
    }
}
