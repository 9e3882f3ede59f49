use actix_web::{web, HttpResponse};

use crate::{
    database::DocumentStore,
    services::review_service,
    utils::{documents_to_json, AppError, JsonDocument},
};

/// POST /reviews
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "Reviews",
    request_body = JsonDocument,
    responses(
        (status = 200, description = "Insert receipt", body = crate::models::InsertReceipt),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn create_review(
    db: web::Data<dyn DocumentStore>,
    review: web::Json<JsonDocument>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /reviews - scholarship {:?}", review.get("scholarship_id"));

    let receipt = review_service::create_review(db.get_ref(), review.into_inner().into_document()).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

/// GET /reviews/user/{email}
#[utoipa::path(
    get,
    path = "/reviews/user/{email}",
    tag = "Reviews",
    params(("email" = String, Path, description = "Reviewer email (user_email)")),
    responses(
        (status = 200, description = "Reviews written by the user"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_user_reviews(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /reviews/user/{}", email);

    let reviews = review_service::list_user_reviews(db.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(reviews)))
}

/// GET /reviews/scholarship/{id}
#[utoipa::path(
    get,
    path = "/reviews/scholarship/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Scholarship id as stored in scholarship_id")),
    responses(
        (status = 200, description = "Reviews of the scholarship"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_scholarship_reviews(
    db: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /reviews/scholarship/{}", id);

    let reviews = review_service::list_scholarship_reviews(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(reviews)))
}

/// GET /reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "Reviews",
    responses(
        (status = 200, description = "All reviews"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_reviews(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /reviews");

    let reviews = review_service::list_reviews(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(reviews)))
}

/// PATCH /reviews/{id}
#[utoipa::path(
    patch,
    path = "/reviews/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Review ObjectId (hex)")),
    request_body = JsonDocument,
    responses(
        (status = 200, description = "Update receipt; body fields are merged with $set", body = crate::models::UpdateReceipt),
        (status = 500, description = "Database error or malformed id", body = crate::utils::ErrorBody)
    )
)]
pub async fn update_review(
    db: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
    changes: web::Json<JsonDocument>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔧 PATCH /reviews/{}", id);

    let receipt = review_service::update_review(db.get_ref(), &id, changes.into_inner().into_document()).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

/// DELETE /reviews/{id}
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "Reviews",
    params(("id" = String, Path, description = "Review ObjectId (hex)")),
    responses(
        (status = 200, description = "Delete receipt", body = crate::models::DeleteReceipt),
        (status = 500, description = "Database error or malformed id", body = crate::utils::ErrorBody)
    )
)]
pub async fn delete_review(
    db: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🗑️  DELETE /reviews/{}", id);

    let receipt = review_service::delete_review(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(receipt))
}
