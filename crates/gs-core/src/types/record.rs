//! The [`Record`] trait and the JSON-backed [`JsonRecord`].

use std::sync::Arc;

use serde_json::{Map, Value};

use super::id::RecordId;
use super::value::FieldValue;
use crate::error::RecordError;

/// One row of a dataset.
///
/// A record has a stable identifier, answers field lookups by key, and can
/// list all of its fields in declaration order for the detail view.
///
/// # Examples
///
/// ```
/// use gs_core::{FieldValue, Record, RecordId};
///
/// struct Service {
///     id: i64,
///     name: &'static str,
/// }
///
/// impl Record for Service {
///     fn id(&self) -> RecordId {
///         RecordId::from(self.id)
///     }
///
///     fn field(&self, key: &str) -> FieldValue {
///         match key {
///             "id" => self.id.into(),
///             "name" => self.name.into(),
///             _ => FieldValue::Null,
///         }
///     }
///
///     fn fields(&self) -> Vec<(String, FieldValue)> {
///         vec![
///             ("id".to_owned(), self.id.into()),
///             ("name".to_owned(), self.name.into()),
///         ]
///     }
/// }
///
/// let service = Service { id: 1, name: "auth-service" };
/// assert_eq!(service.field("name").as_text(), "auth-service");
/// assert!(service.field("missing").is_null());
/// ```
pub trait Record {
    /// Returns the record's identifier.
    fn id(&self) -> RecordId;

    /// Returns the value at `key`, or [`FieldValue::Null`] if absent.
    fn field(&self, key: &str) -> FieldValue;

    /// Returns every field in declaration order.
    fn fields(&self) -> Vec<(String, FieldValue)>;
}

/// A type-erased, shareable record as stored in a dataset.
pub type SharedRecord = Arc<dyn Record + Send + Sync>;

impl<R: Record + ?Sized> Record for Arc<R> {
    fn id(&self) -> RecordId {
        (**self).id()
    }

    fn field(&self, key: &str) -> FieldValue {
        (**self).field(key)
    }

    fn fields(&self) -> Vec<(String, FieldValue)> {
        (**self).fields()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> RecordId {
        (**self).id()
    }

    fn field(&self, key: &str) -> FieldValue {
        (**self).field(key)
    }

    fn fields(&self) -> Vec<(String, FieldValue)> {
        (**self).fields()
    }
}

/// A record backed by a JSON object.
///
/// The object must carry an `id` that is an integer or a string. Field order
/// follows the source document.
///
/// # Examples
///
/// ```
/// use gs_core::{JsonRecord, Record, RecordId};
/// use serde_json::json;
///
/// let record = JsonRecord::try_from(json!({"id": 7, "name": "Project Alpha"})).unwrap();
/// assert_eq!(record.id(), RecordId::from(7));
/// assert_eq!(record.field("name").as_text(), "Project Alpha");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    id: RecordId,
    fields: Map<String, Value>,
}

impl TryFrom<Value> for JsonRecord {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(fields) = value else {
            return Err(RecordError::NotAnObject);
        };
        let id = match fields.get("id") {
            None | Some(Value::Null) => return Err(RecordError::MissingId),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(RecordId::Number)
                .ok_or_else(|| RecordError::InvalidId(n.to_string()))?,
            Some(Value::String(s)) => RecordId::Text(s.clone()),
            Some(other) => return Err(RecordError::InvalidId(other.to_string())),
        };
        Ok(Self { id, fields })
    }
}

impl Record for JsonRecord {
    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        self.fields
            .get(key)
            .cloned()
            .map_or(FieldValue::Null, FieldValue::from)
    }

    fn fields(&self) -> Vec<(String, FieldValue)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.clone(), FieldValue::from(value.clone())))
            .collect()
    }
}
