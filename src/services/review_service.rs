use mongodb::bson::{doc, Document};

use super::{email_filter, id_filter};
use crate::{
    database::DocumentStore,
    models::{new_review, DeleteReceipt, InsertReceipt, UpdateReceipt, REVIEWS_COLLECTION},
    utils::AppError,
};

pub async fn create_review(db: &dyn DocumentStore, review: Document) -> Result<InsertReceipt, AppError> {
    let inserted_id = db
        .insert_one(REVIEWS_COLLECTION, new_review(review))
        .await
        .map_err(AppError::database("Error creating review"))?;

    Ok(InsertReceipt::new(inserted_id))
}

pub async fn list_user_reviews(db: &dyn DocumentStore, email: &str) -> Result<Vec<Document>, AppError> {
    db.find(REVIEWS_COLLECTION, email_filter("user_email", email), None)
        .await
        .map_err(AppError::database("Error fetching reviews"))
}

/// `scholarship_id` é gravado como string, então o filtro não converte para ObjectId
pub async fn list_scholarship_reviews(db: &dyn DocumentStore, scholarship_id: &str) -> Result<Vec<Document>, AppError> {
    db.find(REVIEWS_COLLECTION, doc! { "scholarship_id": scholarship_id }, None)
        .await
        .map_err(AppError::database("Error fetching reviews"))
}

pub async fn list_reviews(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find(REVIEWS_COLLECTION, doc! {}, None)
        .await
        .map_err(AppError::database("Error fetching reviews"))
}

pub async fn update_review(db: &dyn DocumentStore, id: &str, changes: Document) -> Result<UpdateReceipt, AppError> {
    const CONTEXT: &str = "Error updating review";

    let filter = id_filter(id).map_err(AppError::database(CONTEXT))?;
    let outcome = db
        .update_one(REVIEWS_COLLECTION, filter, changes)
        .await
        .map_err(AppError::database(CONTEXT))?;

    Ok(outcome.into())
}

pub async fn delete_review(db: &dyn DocumentStore, id: &str) -> Result<DeleteReceipt, AppError> {
    const CONTEXT: &str = "Error deleting review";

    let filter = id_filter(id).map_err(AppError::database(CONTEXT))?;
    let deleted = db
        .delete_one(REVIEWS_COLLECTION, filter)
        .await
        .map_err(AppError::database(CONTEXT))?;

    Ok(DeleteReceipt::new(deleted))
}
