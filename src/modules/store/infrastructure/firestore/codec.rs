//! Conversion between plain JSON and Firestore's typed value encoding
//!
//! Firestore wraps every value in a single-key object naming its type
//! (`{"stringValue": "Goa"}`, `{"integerValue": "42"}`, ...). Integers travel
//! as decimal strings.

use serde_json::{json, Map, Value};

use crate::modules::store::domain::{FieldFilter, FilterOp, StructuredQuery};
use crate::shared::errors::{StoreError, StoreResult};

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64().unwrap_or_default() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(values) => json!({
            "arrayValue": { "values": values.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(fields) => json!({ "mapValue": { "fields": encode_fields(fields) } }),
    }
}

pub fn encode_fields(fields: &Map<String, Value>) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(k, v)| (k.clone(), encode_value(v)))
            .collect(),
    )
}

pub fn decode_value(value: &Value) -> StoreResult<Value> {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Err(invalid(format!("expected a typed value, got {}", value)));
    };

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" => inner
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| invalid(format!("bad booleanValue {}", inner))),
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(Value::from)
                .ok_or_else(|| invalid(format!("bad integerValue {}", inner)))
        }
        "doubleValue" => match inner {
            Value::Number(_) => Ok(inner.clone()),
            // NaN and infinities arrive as strings and have no JSON form
            Value::String(_) => Ok(Value::Null),
            _ => Err(invalid(format!("bad doubleValue {}", inner))),
        },
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => inner
            .as_str()
            .map(|s| Value::String(s.to_string()))
            .ok_or_else(|| invalid(format!("bad {} {}", kind, inner))),
        "geoPointValue" => Ok(inner.clone()),
        "arrayValue" => {
            let values = match inner.get("values") {
                Some(Value::Array(values)) => values
                    .iter()
                    .map(decode_value)
                    .collect::<StoreResult<Vec<_>>>()?,
                _ => Vec::new(),
            };
            Ok(Value::Array(values))
        }
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => Ok(Value::Object(decode_fields(fields)?)),
            _ => Ok(Value::Object(Map::new())),
        },
        other => Err(invalid(format!("unsupported value type '{}'", other))),
    }
}

pub fn decode_fields(fields: &Map<String, Value>) -> StoreResult<Map<String, Value>> {
    fields
        .iter()
        .map(|(k, v)| decode_value(v).map(|decoded| (k.clone(), decoded)))
        .collect()
}

/// Quote a field path segment unless it is a simple identifier
pub fn field_path(field: &str) -> String {
    let simple = field
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false)
        && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    if simple {
        field.to_string()
    } else {
        format!("`{}`", field.replace('\\', "\\\\").replace('`', "\\`"))
    }
}

fn encode_filter(filter: &FieldFilter) -> Value {
    let op = match filter.op {
        FilterOp::Equal => "EQUAL",
        FilterOp::ArrayContains => "ARRAY_CONTAINS",
    };
    json!({
        "fieldFilter": {
            "field": { "fieldPath": field_path(&filter.field) },
            "op": op,
            "value": encode_value(&filter.value),
        }
    })
}

/// Build the `structuredQuery` body for `:runQuery`
pub fn encode_structured_query(query: &StructuredQuery) -> Value {
    let mut body = Map::new();
    body.insert(
        "from".to_string(),
        json!([{ "collectionId": query.collection }]),
    );

    match query.filters.as_slice() {
        [] => {}
        [single] => {
            body.insert("where".to_string(), encode_filter(single));
        }
        many => {
            body.insert(
                "where".to_string(),
                json!({
                    "compositeFilter": {
                        "op": "AND",
                        "filters": many.iter().map(encode_filter).collect::<Vec<_>>(),
                    }
                }),
            );
        }
    }

    if query.offset > 0 {
        body.insert("offset".to_string(), Value::from(query.offset));
    }
    if let Some(limit) = query.limit {
        body.insert("limit".to_string(), Value::from(limit));
    }

    Value::Object(body)
}

fn invalid(message: String) -> StoreError {
    StoreError::InvalidResponse { message }
}
