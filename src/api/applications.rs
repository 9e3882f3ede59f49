use actix_web::{web, HttpResponse};

use crate::{
    database::DocumentStore,
    services::application_service,
    utils::{documents_to_json, AppError, JsonDocument},
};

/// POST /applications
#[utoipa::path(
    post,
    path = "/applications",
    tag = "Applications",
    request_body = JsonDocument,
    responses(
        (status = 200, description = "Insert receipt; status is forced to pending", body = crate::models::InsertReceipt),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn create_application(
    db: web::Data<dyn DocumentStore>,
    application: web::Json<JsonDocument>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /applications - user {:?}", application.get("user_email"));

    let receipt = application_service::create_application(db.get_ref(), application.into_inner().into_document()).await?;
    log::info!("✅ Application created: {}", receipt.inserted_id);
    Ok(HttpResponse::Ok().json(receipt))
}

/// GET /applications/user/{email}
#[utoipa::path(
    get,
    path = "/applications/user/{email}",
    tag = "Applications",
    params(("email" = String, Path, description = "Applicant email (user_email)")),
    responses(
        (status = 200, description = "Applications of the user"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_user_applications(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /applications/user/{}", email);

    let applications = application_service::list_user_applications(db.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(applications)))
}

/// GET /applications
#[utoipa::path(
    get,
    path = "/applications",
    tag = "Applications",
    responses(
        (status = 200, description = "All applications"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_applications(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /applications");

    let applications = application_service::list_applications(db.get_ref()).await?;
    log::info!("✅ Found {} applications", applications.len());
    Ok(HttpResponse::Ok().json(documents_to_json(applications)))
}

/// PATCH /applications/{id}
#[utoipa::path(
    patch,
    path = "/applications/{id}",
    tag = "Applications",
    params(("id" = String, Path, description = "Application ObjectId (hex)")),
    request_body = JsonDocument,
    responses(
        (status = 200, description = "Update receipt; body fields are merged with $set", body = crate::models::UpdateReceipt),
        (status = 500, description = "Database error or malformed id", body = crate::utils::ErrorBody)
    )
)]
pub async fn update_application(
    db: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
    changes: web::Json<JsonDocument>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PATCH /applications/{} - fields {:?}", id, changes.keys().collect::<Vec<_>>());

    let receipt = application_service::update_application(db.get_ref(), &id, changes.into_inner().into_document()).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

/// DELETE /applications/{id}
#[utoipa::path(
    delete,
    path = "/applications/{id}",
    tag = "Applications",
    params(("id" = String, Path, description = "Application ObjectId (hex)")),
    responses(
        (status = 200, description = "Delete receipt", body = crate::models::DeleteReceipt),
        (status = 500, description = "Database error or malformed id", body = crate::utils::ErrorBody)
    )
)]
pub async fn delete_application(
    db: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /applications/{}", id);

    let receipt = application_service::delete_application(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(receipt))
}
