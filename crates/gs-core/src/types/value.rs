//! Cell values and text collation.
//!
//! [`FieldValue`] is what a [`Record`](crate::Record) hands out for a field
//! key. Filtering works on its stringified form, sorting on
//! [`FieldValue::compare`], and the detail view dispatches on its shape.

use std::borrow::Cow;
use std::cmp::Ordering;

use serde::Serialize;

/// The value of one record field.
///
/// # Examples
///
/// ```
/// use gs_core::FieldValue;
///
/// assert_eq!(FieldValue::from("Critical").as_text(), "Critical");
/// assert_eq!(FieldValue::from(16).as_text(), "16");
/// assert_eq!(FieldValue::Null.as_text(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent or null.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(String),
    /// A nested object or array.
    Structured(serde_json::Value),
}

impl FieldValue {
    /// Returns `true` for [`FieldValue::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stringifies the value.
    ///
    /// `Null` becomes the empty string and structured values become compact
    /// JSON.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Structured(v) => Cow::Owned(v.to_string()),
        }
    }

    /// Case-insensitive substring match on the stringified value.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        needle.is_empty() || self.as_text().to_lowercase().contains(needle)
    }

    /// Compares two non-null values.
    ///
    /// Numbers compare numerically, booleans `false < true`, and everything
    /// else by [`collate`] on the stringified text. Null handling belongs to
    /// the caller.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            _ => match (self, other) {
                (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
                _ => collate(&self.as_text(), &other.as_text()),
            },
        }
    }

    /// Returns the value as `f64` if it is numeric.
    #[allow(clippy::cast_precision_loss)] // ids and counts stay far below 2^52
    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

/// Compares two strings the way a human-facing list expects.
///
/// Letters compare case-insensitively first. Strings that differ only in case
/// put lowercase first, then fall back to code point order so the result is
/// total.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use gs_core::types::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("abc", "ABC"), Ordering::Less);
/// assert_eq!(collate("Minor", "minor"), Ordering::Greater);
/// ```
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    x.is_uppercase().cmp(&y.is_uppercase())
                })
        })
        .then_with(|| a.cmp(b))
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::String(s) => Self::Text(s),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Self::Structured(other)
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::Bool(true).as_text(), "true");
        assert_eq!(FieldValue::Float(99.99).as_text(), "99.99");
        assert_eq!(
            FieldValue::Structured(json!({"attempt": 3})).as_text(),
            r#"{"attempt":3}"#
        );
    }

    #[test]
    fn test_contains_lowercase() {
        let value = FieldValue::from("Critical");
        assert!(value.contains_lowercase("crit"));
        assert!(value.contains_lowercase(""));
        assert!(!value.contains_lowercase("minor"));
        assert!(!FieldValue::Null.contains_lowercase("a"));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(FieldValue::from(2).compare(&FieldValue::from(16)), Ordering::Less);
        assert_eq!(FieldValue::from(2.5).compare(&FieldValue::from(2)), Ordering::Greater);
    }

    #[test]
    fn test_mixed_values_collate_as_text() {
        assert_eq!(
            FieldValue::from(10).compare(&FieldValue::from("9 lives")),
            Ordering::Less
        );
    }

    #[test]
    fn test_collate_orders_case_insensitively() {
        let mut words = vec!["banana", "Apple", "cherry", "apple"];
        words.sort_by(|a, b| collate(a, b));
        assert_eq!(words, vec!["apple", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!(101)), FieldValue::Int(101));
        assert_eq!(FieldValue::from(json!("INFO")), FieldValue::from("INFO"));
        assert!(matches!(FieldValue::from(json!(["read"])), FieldValue::Structured(_)));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::from("x"));
    }
}
