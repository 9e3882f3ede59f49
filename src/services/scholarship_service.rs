use mongodb::bson::{doc, Document};

use super::id_filter;
use crate::{
    database::DocumentStore,
    models::{SCHOLARSHIPS_COLLECTION, TOP_SCHOLARSHIPS_LIMIT},
    utils::AppError,
};

pub async fn list_scholarships(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find(SCHOLARSHIPS_COLLECTION, doc! {}, None)
        .await
        .map_err(AppError::database("Error fetching scholarships"))
}

/// Primeiros 6 na ordem natural da coleção
pub async fn top_scholarships(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find(SCHOLARSHIPS_COLLECTION, doc! {}, Some(TOP_SCHOLARSHIPS_LIMIT))
        .await
        .map_err(AppError::database("Error fetching top scholarships"))
}

pub async fn get_scholarship(db: &dyn DocumentStore, id: &str) -> Result<Option<Document>, AppError> {
    const CONTEXT: &str = "Error fetching scholarship";

    let filter = id_filter(id).map_err(AppError::database(CONTEXT))?;
    db.find_one(SCHOLARSHIPS_COLLECTION, filter)
        .await
        .map_err(AppError::database(CONTEXT))
}
