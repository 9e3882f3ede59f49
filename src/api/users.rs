use actix_web::{web, HttpResponse};

use crate::{
    database::DocumentStore,
    models::{AdminStatus, ModeratorStatus, RoleUpdateRequest},
    services::user_service,
    utils::{document_to_json, documents_to_json, AppError, JsonDocument},
};

/// POST /users - Cadastro idempotente por email
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = JsonDocument,
    responses(
        (status = 200, description = "Insert receipt, or `{ message, insertedId: null }` when the email already exists", body = crate::models::InsertReceipt),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn create_user(
    db: web::Data<dyn DocumentStore>,
    user: web::Json<JsonDocument>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /users - Registering {:?}", user.get("email"));

    let result = user_service::create_user(db.get_ref(), user.into_inner().into_document()).await?;
    if result.is_duplicate() {
        log::info!("ℹ️  User already registered");
    } else {
        log::info!("✅ User created");
    }

    Ok(HttpResponse::Ok().json(result))
}

/// GET /users/{email}
#[utoipa::path(
    get,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "User document, or null when not found"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn get_user(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /users/{}", email);

    let user = user_service::get_user(db.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(user.map(document_to_json)))
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_users(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /users");

    let users = user_service::list_users(db.get_ref()).await?;
    log::info!("✅ Found {} users", users.len());
    Ok(HttpResponse::Ok().json(documents_to_json(users)))
}

/// GET /users/admin/{email} - Checagem consultiva, não protege nenhuma rota
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Admin flag", body = AdminStatus),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn check_admin(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let admin = user_service::check_admin(db.get_ref(), &email).await?;
    log::info!("🔑 GET /users/admin/{} -> {}", email, admin);
    Ok(HttpResponse::Ok().json(AdminStatus { admin }))
}

/// GET /users/moderator/{email}
#[utoipa::path(
    get,
    path = "/users/moderator/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Moderator flag", body = ModeratorStatus),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn check_moderator(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let moderator = user_service::check_moderator(db.get_ref(), &email).await?;
    log::info!("🔑 GET /users/moderator/{} -> {}", email, moderator);
    Ok(HttpResponse::Ok().json(ModeratorStatus { moderator }))
}

/// PATCH /users/request-moderator/{email}
#[utoipa::path(
    patch,
    path = "/users/request-moderator/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Update receipt", body = crate::models::UpdateReceipt),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn request_moderator(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("🙋 PATCH /users/request-moderator/{}", email);

    let receipt = user_service::request_moderator(db.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

/// PATCH /users/approve-moderator/{email}
#[utoipa::path(
    patch,
    path = "/users/approve-moderator/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Update receipt", body = crate::models::UpdateReceipt),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn approve_moderator(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    log::info!("✅ PATCH /users/approve-moderator/{}", email);

    let receipt = user_service::approve_moderator(db.get_ref(), &email).await?;
    Ok(HttpResponse::Ok().json(receipt))
}

/// GET /users/moderator-requests
#[utoipa::path(
    get,
    path = "/users/moderator-requests",
    tag = "Users",
    responses(
        (status = 200, description = "Users with a pending moderator request"),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn list_moderator_requests(db: web::Data<dyn DocumentStore>) -> Result<HttpResponse, AppError> {
    log::info!("📋 GET /users/moderator-requests");

    let requests = user_service::list_moderator_requests(db.get_ref()).await?;
    Ok(HttpResponse::Ok().json(documents_to_json(requests)))
}

/// PATCH /users/role/{email}
#[utoipa::path(
    patch,
    path = "/users/role/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "User email")),
    request_body = RoleUpdateRequest,
    responses(
        (status = 200, description = "Update receipt", body = crate::models::UpdateReceipt),
        (status = 500, description = "Database error", body = crate::utils::ErrorBody)
    )
)]
pub async fn update_role(
    db: web::Data<dyn DocumentStore>,
    email: web::Path<String>,
    body: web::Json<RoleUpdateRequest>,
) -> Result<HttpResponse, AppError> {
    let role = body.into_inner().into_role();
    log::info!("🔧 PATCH /users/role/{} - role {}", email, role);

    let receipt = user_service::update_role(db.get_ref(), &email, role).await?;
    Ok(HttpResponse::Ok().json(receipt))
}
