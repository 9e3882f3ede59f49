// ==================== USER MANAGEMENT ====================
// Cadastro idempotente por email e checagens de role (apenas consulta,
// nenhuma rota é protegida por elas)

use mongodb::bson::{doc, Bson, Document};

use super::email_filter;
use crate::{
    database::DocumentStore,
    models::{
        is_admin, is_moderator, moderator_approval_changes, moderator_request_changes, new_user,
        InsertReceipt, UpdateReceipt, UserCreation, ADMIN_EMAIL, USERS_COLLECTION,
    },
    utils::AppError,
};

/// POST /users - Cria usuário se o email ainda não existir
pub async fn create_user(db: &dyn DocumentStore, user: Document) -> Result<UserCreation, AppError> {
    const CONTEXT: &str = "Error creating user";

    let email = user.get("email").cloned().unwrap_or(Bson::Null);

    let existing = db
        .find_one(USERS_COLLECTION, doc! { "email": email })
        .await
        .map_err(AppError::database(CONTEXT))?;

    if existing.is_some() {
        log::info!("ℹ️  User already exists, skipping insert");
        return Ok(UserCreation::already_exists());
    }

    let inserted_id = db
        .insert_one(USERS_COLLECTION, new_user(user))
        .await
        .map_err(AppError::database(CONTEXT))?;

    Ok(UserCreation::Inserted(InsertReceipt::new(inserted_id)))
}

/// GET /users/{email}
pub async fn get_user(db: &dyn DocumentStore, email: &str) -> Result<Option<Document>, AppError> {
    db.find_one(USERS_COLLECTION, email_filter("email", email))
        .await
        .map_err(AppError::database("Error fetching user"))
}

/// GET /users
pub async fn list_users(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find(USERS_COLLECTION, doc! {}, None)
        .await
        .map_err(AppError::database("Error fetching users"))
}

/// GET /users/admin/{email} - O admin fixo nem consulta o banco
pub async fn check_admin(db: &dyn DocumentStore, email: &str) -> Result<bool, AppError> {
    if email == ADMIN_EMAIL {
        return Ok(true);
    }

    let user = db
        .find_one(USERS_COLLECTION, email_filter("email", email))
        .await
        .map_err(AppError::database("Error checking admin status"))?;

    Ok(is_admin(user.as_ref()))
}

/// GET /users/moderator/{email}
pub async fn check_moderator(db: &dyn DocumentStore, email: &str) -> Result<bool, AppError> {
    let user = db
        .find_one(USERS_COLLECTION, email_filter("email", email))
        .await
        .map_err(AppError::database("Error checking moderator status"))?;

    Ok(is_moderator(user.as_ref()))
}

/// PATCH /users/request-moderator/{email}
pub async fn request_moderator(db: &dyn DocumentStore, email: &str) -> Result<UpdateReceipt, AppError> {
    let outcome = db
        .update_one(USERS_COLLECTION, email_filter("email", email), moderator_request_changes())
        .await
        .map_err(AppError::database("Error requesting moderator role"))?;

    Ok(outcome.into())
}

/// PATCH /users/approve-moderator/{email}
pub async fn approve_moderator(db: &dyn DocumentStore, email: &str) -> Result<UpdateReceipt, AppError> {
    let outcome = db
        .update_one(USERS_COLLECTION, email_filter("email", email), moderator_approval_changes())
        .await
        .map_err(AppError::database("Error approving moderator"))?;

    Ok(outcome.into())
}

/// GET /users/moderator-requests
pub async fn list_moderator_requests(db: &dyn DocumentStore) -> Result<Vec<Document>, AppError> {
    db.find(USERS_COLLECTION, doc! { "moderatorRequest": true }, None)
        .await
        .map_err(AppError::database("Error fetching moderator requests"))
}

/// PATCH /users/role/{email} - Grava o role recebido sem validar
pub async fn update_role(
    db: &dyn DocumentStore,
    email: &str,
    role: Bson,
) -> Result<UpdateReceipt, AppError> {
    let outcome = db
        .update_one(USERS_COLLECTION, email_filter("email", email), doc! { "role": role })
        .await
        .map_err(AppError::database("Error updating user role"))?;

    Ok(outcome.into())
}
