use actix_web::{web, HttpResponse};

use crate::{
    database::DocumentStore,
    services::scholarship_service,
    utils::{document_to_json, documents_to_json, AppError},
};

/// GET /scholarships
#[utoipa::path(
    get,
    path = "/scholarships",
    tag = "Scholarships",
    responses(
        (status = 200, description = "All scholarships"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_scholarships(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("🎓 GET /scholarships");

    let scholarships = scholarship_service::list_scholarships(db.get_ref()).await?;
    log::info!("✅ Found {} scholarships", scholarships.len());
    Ok(HttpResponse::Ok().json(documents_to_json(scholarships)))
}

/// GET /scholarships/top - No máximo 6
#[utoipa::path(
    get,
    path = "/scholarships/top",
    tag = "Scholarships",
    responses(
        (status = 200, description = "Up to 6 scholarships"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn top_scholarships(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("🏆 GET /scholarships/top");

    let scholarships = scholarship_service::top_scholarships(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(scholarships)))
}

/// GET /scholarships/{id}
#[utoipa::path(
    get,
    path = "/scholarships/{id}",
    tag = "Scholarships",
    params(("id" = String, Path, description = "Scholarship ObjectId (hex)")),
    responses(
        (status = 200, description = "Scholarship document, or null when not found"),
        (status = 500, description = "Database error or malformed id", body = crate::utils::ErrorBody)
    )
)]
pub async fn get_scholarship(
    db: web::Data<dyn DocumentStore>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🎓 GET /scholarships/{}", id);

    let scholarship = scholarship_service::get_scholarship(db.get_ref(), &id).await?;
    Ok(HttpResponse::Ok().json(scholarship.map(document_to_json)))
}
