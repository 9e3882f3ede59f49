use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scholarship Management API",
        version = "1.0.0",
        description = "CRUD API over scholarships, users, applications and reviews.\n\n**Authorization:** none. The admin and moderator endpoints are lookups only; no route is protected by them.\n\n**Errors:** every database failure (including a malformed ObjectId) returns 500 with `{ message, error }`."
    ),
    paths(
        // Users
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::list_users,
        crate::api::users::check_admin,
        crate::api::users::check_moderator,
        crate::api::users::request_moderator,
        crate::api::users::approve_moderator,
        crate::api::users::list_moderator_requests,
        crate::api::users::update_role,

        // Scholarships
        crate::api::scholarships::list_scholarships,
        crate::api::scholarships::top_scholarships,
        crate::api::scholarships::get_scholarship,

        // Applications
        crate::api::applications::create_application,
        crate::api::applications::list_user_applications,
        crate::api::applications::list_applications,
        crate::api::applications::update_application,
        crate::api::applications::delete_application,

        // Reviews
        crate::api::reviews::create_review,
        crate::api::reviews::list_user_reviews,
        crate::api::reviews::list_scholarship_reviews,
        crate::api::reviews::list_reviews,
        crate::api::reviews::update_review,
        crate::api::reviews::delete_review,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::InsertReceipt,
            crate::models::UpdateReceipt,
            crate::models::DeleteReceipt,
            crate::models::AdminStatus,
            crate::models::ModeratorStatus,
            crate::models::RoleUpdateRequest,
            crate::models::Role,
            crate::utils::JsonDocument,
            crate::utils::ErrorBody,
            crate::utils::ErrorDetail,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration, role lookups and moderator requests."),
        (name = "Scholarships", description = "Read-only scholarship catalog."),
        (name = "Applications", description = "Scholarship applications. New applications always start as pending."),
        (name = "Reviews", description = "Scholarship reviews."),
        (name = "Health", description = "Health check and request counters."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/users",
            "/users/{email}",
            "/users/admin/{email}",
            "/users/moderator/{email}",
            "/users/request-moderator/{email}",
            "/users/approve-moderator/{email}",
            "/users/moderator-requests",
            "/users/role/{email}",
            "/scholarships",
            "/scholarships/top",
            "/scholarships/{id}",
            "/applications",
            "/applications/user/{email}",
            "/applications/{id}",
            "/reviews",
            "/reviews/user/{email}",
            "/reviews/scholarship/{id}",
            "/reviews/{id}",
            "/health",
            "/metrics",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
    }
}
