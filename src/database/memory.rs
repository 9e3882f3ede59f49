use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{DocumentStore, UpdateOutcome};
use crate::utils::StoreError;

/// Store em memória para testes e execução local (`STORE_BACKEND=memory`).
///
/// Filtros suportam apenas igualdade em campos de primeiro nível; um valor
/// `null` no filtro também casa com campo ausente, como no MongoDB.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantidade de documentos numa coleção
    #[cfg(test)]
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }
}

fn filter_matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(key, expected)| match document.get(key) {
        Some(actual) => actual == expected,
        None => matches!(expected, Bson::Null),
    })
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        // limit 0 (ou negativo) = sem limite, como no driver
        let limit = match limit {
            Some(n) if n != 0 => n.unsigned_abs() as usize,
            _ => usize::MAX,
        };

        Ok(documents
            .iter()
            .filter(|doc| filter_matches(doc, &filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter_matches(doc, &filter)))
            .cloned())
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> Result<Bson, StoreError> {
        let id = match document.get("_id").cloned() {
            Some(id) => id,
            None => {
                let id = Bson::ObjectId(ObjectId::new());
                // _id sempre primeiro, como o driver faz
                let mut with_id = Document::new();
                with_id.insert("_id", id.clone());
                for (key, value) in document {
                    with_id.insert(key, value);
                }
                document = with_id;
                id
            }
        };

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if documents.iter().any(|doc| doc.get("_id") == Some(&id)) {
            return Err(StoreError::Driver(format!(
                "E11000 duplicate key error collection: {} index: _id_ dup key: {{ _id: {} }}",
                collection, id
            )));
        }

        documents.push(document);
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        changes: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        if changes.is_empty() {
            return Err(StoreError::Driver("'$set' is empty. You must specify a field like so: {$set: {<field>: ...}}".into()));
        }

        let mut collections = self.collections.write().await;
        let Some(target) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| filter_matches(doc, &filter)))
        else {
            return Ok(UpdateOutcome::default());
        };

        if let Some(new_id) = changes.get("_id") {
            if target.get("_id") != Some(new_id) {
                return Err(StoreError::Driver(
                    "Performing an update on the path '_id' would modify the immutable field '_id'".into(),
                ));
            }
        }

        let mut modified = false;
        for (key, value) in changes {
            if target.get(&key) != Some(&value) {
                target.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(0);
        };

        match documents.iter().position(|doc| filter_matches(doc, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory document store".to_string()
    }
}
