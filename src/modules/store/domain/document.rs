use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::errors::{StoreError, StoreResult};

/// Key under which the document id is exposed when decoding into entities
pub const ID_FIELD: &str = "id";

/// A schemaless document as held by the store: an id plus a JSON field map.
///
/// The id is not part of `fields`; it is injected on decode and stripped on
/// encode so entities can carry it as an ordinary struct field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Encode any serializable entity; it must serialize to a JSON object
    pub fn from_entity<T: Serialize>(id: impl Into<String>, entity: &T) -> StoreResult<Self> {
        match serde_json::to_value(entity)? {
            Value::Object(mut fields) => {
                fields.remove(ID_FIELD);
                Ok(Self::new(id, fields))
            }
            other => Err(StoreError::Encoding {
                message: format!("expected a JSON object, got {}", other),
            }),
        }
    }

    /// Decode into an entity, with the document id available as `id`
    pub fn decode<T: DeserializeOwned>(&self) -> StoreResult<T> {
        let mut fields = self.fields.clone();
        fields.insert(ID_FIELD.to_string(), Value::String(self.id.clone()));
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        if field == ID_FIELD {
            return None;
        }
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }
}
