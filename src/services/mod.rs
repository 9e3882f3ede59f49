pub mod application_service;
pub mod review_service;
pub mod scholarship_service;
pub mod user_service;

use mongodb::bson::{doc, oid::ObjectId, Document};

use crate::utils::StoreError;

/// Filtro `{ _id: ObjectId(id) }` a partir do segmento da rota
pub fn id_filter(id: &str) -> Result<Document, StoreError> {
    let oid = ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;
    Ok(doc! { "_id": oid })
}

/// Filtro de igualdade por email (`email`, `user_email`)
pub fn email_filter(field: &str, email: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(field, email);
    filter
}
