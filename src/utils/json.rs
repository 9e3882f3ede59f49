// Renderização BSON -> JSON no formato que os clientes já consomem:
// ObjectId como hex, datas em ISO-8601.

use mongodb::bson::{Bson, Document};
use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Body JSON livre de POST/PATCH, repassado ao banco como veio
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[schema(value_type = Object)]
pub struct JsonDocument(pub Document);

impl JsonDocument {
    pub fn into_document(self) -> Document {
        self.0
    }
}

impl std::ops::Deref for JsonDocument {
    type Target = Document;

    fn deref(&self) -> &Document {
        &self.0
    }
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Value::Number(dt.timestamp_millis().into()),
        },
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::String(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::Int32(n) => Value::Number(n.into()),
        Bson::Int64(n) => Value::Number(n.into()),
        Bson::Double(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    let map: Map<String, Value> = doc
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect();
    Value::Object(map)
}

pub fn documents_to_json(docs: Vec<Document>) -> Value {
    Value::Array(docs.into_iter().map(document_to_json).collect())
}
