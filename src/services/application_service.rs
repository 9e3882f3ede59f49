use mongodb::bson::{doc, Document};

use super::{email_filter, id_filter};
use crate::{
    database::DocumentStore,
    models::{new_application, DeleteReceipt, InsertReceipt, UpdateReceipt, APPLICATIONS_COLLECTION},
    utils::AppError,
};

/// POST /applications - status "pending" e feedback vazio sempre
pub async fn create_application(db: &dyn DocumentStore, application: Document) -> Result<InsertReceipt, AppError> {
    let inserted_id = db
        .insert_one(APPLICATIONS_COLLECTION, new_application(application))
        .await
        .map_err(AppError::database("Error creating application"))?;

    Ok(InsertReceipt::new(inserted_id))
}

pub async fn list_user_applications(db: &dyn DocumentStore, email: &str) -> Result<Vec<Document>, AppError> {
    db.find(APPLICATIONS_COLLECTION, email_filter("user_email", email), None)
        .await
        .map_err(AppError::database("Error fetching applications"))
}

pub async fn list_applications(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find(APPLICATIONS_COLLECTION, doc! {}, None)
        .await
        .map_err(AppError::database("Error fetching applications"))
}

/// PATCH /applications/{id} - `$set` com o body inteiro, sem whitelist
pub async fn update_application(
    db: &dyn DocumentStore,
    id: &str,
    changes: Document,
) -> Result<UpdateReceipt, AppError> {
    const CONTEXT: &str = "Error updating application";

    let filter = id_filter(id).map_err(AppError::database(CONTEXT))?;
    let outcome = db
        .update_one(APPLICATIONS_COLLECTION, filter, changes)
        .await
        .map_err(AppError::database(CONTEXT))?;

    Ok(outcome.into())
}

pub async fn delete_application(db: &dyn DocumentStore, id: &str) -> Result<DeleteReceipt, AppError> {
    const CONTEXT: &str = "Error deleting application";

    let filter = id_filter(id).map_err(AppError::database(CONTEXT))?;
    let deleted = db
        .delete_one(APPLICATIONS_COLLECTION, filter)
        .await
        .map_err(AppError::database(CONTEXT))?;

    Ok(DeleteReceipt::new(deleted))
}
