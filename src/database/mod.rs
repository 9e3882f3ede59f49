pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoDB;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::utils::StoreError;

/// Resultado de um `update_one`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Operações de documento usadas pelas rotas.
///
/// Cada rota faz exatamente uma chamada a este trait (duas no cadastro de
/// usuário). O handle é compartilhado entre workers como `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documentos que casam com `filter`, na ordem natural da coleção.
    async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, StoreError>;

    async fn find_one(&self, collection: &str, filter: Document) -> Result<Option<Document>, StoreError>;

    /// Insere e devolve o `_id` gravado.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<Bson, StoreError>;

    /// Aplica `changes` como `$set` no primeiro documento que casar.
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        changes: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Remove no máximo um documento; devolve quantos foram removidos.
    async fn delete_one(&self, collection: &str, filter: Document) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Descrição curta para logs, ex: "MongoDB database schoolarshipDb"
    fn describe(&self) -> String;
}
