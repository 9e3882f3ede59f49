pub mod applications;
pub mod health;
pub mod metrics;
pub mod reviews;
pub mod scholarships;
pub mod swagger;
pub mod users;

use actix_web::web;

/// Registra todas as rotas da API.
///
/// Rotas estáticas vêm antes das rotas com parâmetro no mesmo nível
/// (`/users/moderator-requests` antes de `/users/{email}`).
/// Bodies JSON são aceitos mesmo sem `Content-Type: application/json`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().content_type_required(false))
        .route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(metrics::get_metrics))
        // ==================== USERS ====================
        .service(
            web::scope("/users")
                .route("", web::post().to(users::create_user))
                .route("", web::get().to(users::list_users))
                .route("/moderator-requests", web::get().to(users::list_moderator_requests))
                .route("/admin/{email}", web::get().to(users::check_admin))
                .route("/moderator/{email}", web::get().to(users::check_moderator))
                .route("/request-moderator/{email}", web::patch().to(users::request_moderator))
                .route("/approve-moderator/{email}", web::patch().to(users::approve_moderator))
                .route("/role/{email}", web::patch().to(users::update_role))
                .route("/{email}", web::get().to(users::get_user)),
        )
        // ==================== SCHOLARSHIPS (READ ONLY) ====================
        .service(
            web::scope("/scholarships")
                .route("", web::get().to(scholarships::list_scholarships))
                .route("/top", web::get().to(scholarships::top_scholarships))
                .route("/{id}", web::get().to(scholarships::get_scholarship)),
        )
        // ==================== APPLICATIONS ====================
        .service(
            web::scope("/applications")
                .route("", web::post().to(applications::create_application))
                .route("", web::get().to(applications::list_applications))
                .route("/user/{email}", web::get().to(applications::list_user_applications))
                .route("/{id}", web::patch().to(applications::update_application))
                .route("/{id}", web::delete().to(applications::delete_application)),
        )
        // ==================== REVIEWS ====================
        .service(
            web::scope("/reviews")
                .route("", web::post().to(reviews::create_review))
                .route("", web::get().to(reviews::list_reviews))
                .route("/user/{email}", web::get().to(reviews::list_user_reviews))
                .route("/scholarship/{id}", web::get().to(reviews::list_scholarship_reviews))
                .route("/{id}", web::patch().to(reviews::update_review))
                .route("/{id}", web::delete().to(reviews::delete_review)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DocumentStore, MemoryStore};
    use crate::models::{ADMIN_EMAIL, SCHOLARSHIPS_COLLECTION};
    use actix_web::{http::StatusCode, test, App};
    use mongodb::bson::doc;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn store_data(store: &Arc<MemoryStore>) -> web::Data<dyn DocumentStore> {
        let shared: Arc<dyn DocumentStore> = store.clone();
        web::Data::from(shared)
    }

    #[actix_rt::test]
    async fn test_root_liveness_text() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, web::Bytes::from_static(b"Scholarship management server is running"));
    }

    #[actix_rt::test]
    async fn test_user_registration_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": "ana@example.com", "name": "Ana", "role": "admin" }))
            .to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first["acknowledged"], true);
        let inserted_id = first["insertedId"].as_str().unwrap().to_string();
        assert_eq!(inserted_id.len(), 24);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": "ana@example.com", "name": "Ana again" }))
            .to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second, json!({ "message": "User already exists", "insertedId": null }));

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get().uri("/users/ana@example.com").to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["_id"], inserted_id.as_str());
        assert_eq!(user["role"], "user");
        assert_eq!(user["name"], "Ana");
        assert!(user["createdAt"].is_string());

        let req = test::TestRequest::get().uri("/users/ghost@example.com").to_request();
        let missing: Value = test::call_and_read_body_json(&app, req).await;
        assert!(missing.is_null());
    }

    #[actix_rt::test]
    async fn test_admin_and_moderator_checks() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::get().uri(&format!("/users/admin/{}", ADMIN_EMAIL)).to_request();
        let admin: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(admin, json!({ "admin": true }));

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": "mod@example.com" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch().uri("/users/request-moderator/mod@example.com").to_request();
        let receipt: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt["matchedCount"], 1);
        assert_eq!(receipt["modifiedCount"], 1);

        // não pode cair em /users/{email}
        let req = test::TestRequest::get().uri("/users/moderator-requests").to_request();
        let requests: Value = test::call_and_read_body_json(&app, req).await;
        let requests = requests.as_array().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0]["email"], "mod@example.com");
        assert_eq!(requests[0]["moderatorRequest"], true);

        let req = test::TestRequest::patch().uri("/users/approve-moderator/mod@example.com").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/users/moderator/mod@example.com").to_request();
        let moderator: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(moderator, json!({ "moderator": true }));

        let req = test::TestRequest::get().uri("/users/admin/mod@example.com").to_request();
        let admin: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(admin, json!({ "admin": false }));

        let req = test::TestRequest::patch()
            .uri("/users/role/mod@example.com")
            .set_json(json!({ "role": "admin" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/users/admin/mod@example.com").to_request();
        let admin: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(admin, json!({ "admin": true }));
    }

    #[actix_rt::test]
    async fn test_role_update_writes_value_as_given() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "email": "ana@example.com" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/users/role/ana@example.com")
            .set_json(json!({ "role": 5 }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let receipt: Value = test::read_body_json(res).await;
        assert_eq!(receipt["matchedCount"], 1);
        assert_eq!(receipt["modifiedCount"], 1);

        let req = test::TestRequest::get().uri("/users/ana@example.com").to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["role"], 5);

        // role ausente grava null
        let req = test::TestRequest::patch()
            .uri("/users/role/ana@example.com")
            .set_json(json!({}))
            .to_request();
        let receipt: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(receipt["modifiedCount"], 1);

        let req = test::TestRequest::get().uri("/users/ana@example.com").to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert!(user.get("role").is_some());
        assert!(user["role"].is_null());
    }

    #[actix_rt::test]
    async fn test_registration_without_email_matches_earlier_one() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Anonymous" }))
            .to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first["acknowledged"], true);

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Someone else" }))
            .to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second, json!({ "message": "User already exists", "insertedId": null }));

        let req = test::TestRequest::get().uri("/users").to_request();
        let users: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
    }

    #[actix_rt::test]
    async fn test_json_body_without_content_type() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/applications")
            .set_payload(r#"{"user_email": "ana@example.com"}"#)
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/applications/user/ana@example.com").to_request();
        let apps: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(apps.as_array().unwrap().len(), 1);
        assert_eq!(apps[0]["status"], "pending");
    }

    #[actix_rt::test]
    async fn test_application_lifecycle() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/applications")
            .set_json(json!({
                "user_email": "ana@example.com",
                "university": "MIT",
                "status": "approved",
                "application_feedback": "already approved"
            }))
            .to_request();
        let receipt: Value = test::call_and_read_body_json(&app, req).await;
        let id = receipt["insertedId"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri("/applications/user/ana@example.com").to_request();
        let apps: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(apps[0]["status"], "pending");
        assert_eq!(apps[0]["application_feedback"], "");

        let req = test::TestRequest::patch()
            .uri(&format!("/applications/{}", id))
            .set_json(json!({ "status": "processing", "application_feedback": "missing transcript" }))
            .to_request();
        let update: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(update["matchedCount"], 1);

        let req = test::TestRequest::get().uri("/applications").to_request();
        let apps: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(apps[0]["status"], "processing");
        assert_eq!(apps[0]["application_feedback"], "missing transcript");
        assert_eq!(apps[0]["university"], "MIT");

        let req = test::TestRequest::delete().uri(&format!("/applications/{}", id)).to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted, json!({ "acknowledged": true, "deletedCount": 1 }));

        let req = test::TestRequest::delete().uri(&format!("/applications/{}", id)).to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted["deletedCount"], 0);
    }

    #[actix_rt::test]
    async fn test_scholarship_reads() {
        let store = Arc::new(MemoryStore::new());
        let mut first_id = String::new();
        for i in 0..8 {
            let id = store
                .insert_one(SCHOLARSHIPS_COLLECTION, doc! { "name": format!("Scholarship {}", i) })
                .await
                .unwrap();
            if i == 0 {
                first_id = id.as_object_id().unwrap().to_hex();
            }
        }
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/scholarships/top").to_request();
        let top: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(top.as_array().unwrap().len(), 6);

        let req = test::TestRequest::get().uri("/scholarships").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.as_array().unwrap().len(), 8);

        let req = test::TestRequest::get().uri(&format!("/scholarships/{}", first_id)).to_request();
        let one: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(one["name"], "Scholarship 0");
        assert_eq!(one["_id"], first_id.as_str());
    }

    #[actix_rt::test]
    async fn test_reviews_by_scholarship_and_user() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        for (email, scholarship) in [("ana@example.com", "s-1"), ("bob@example.com", "s-1"), ("ana@example.com", "s-2")] {
            let req = test::TestRequest::post()
                .uri("/reviews")
                .set_json(json!({ "user_email": email, "scholarship_id": scholarship, "rating": 4 }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);
        }

        let req = test::TestRequest::get().uri("/reviews/scholarship/s-1").to_request();
        let reviews: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reviews.as_array().unwrap().len(), 2);

        let req = test::TestRequest::get().uri("/reviews/user/ana@example.com").to_request();
        let reviews: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reviews.as_array().unwrap().len(), 2);

        let req = test::TestRequest::get().uri("/reviews").to_request();
        let reviews: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(reviews.as_array().unwrap().len(), 3);
    }

    #[actix_rt::test]
    async fn test_malformed_id_returns_generic_500() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::delete().uri("/reviews/not-an-id").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Error deleting review");
        assert_eq!(body["error"]["name"], "InvalidObjectId");

        let req = test::TestRequest::get().uri("/scholarships/42").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_rt::test]
    async fn test_empty_patch_surfaces_store_error() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::patch()
            .uri("/reviews/65a1b2c3d4e5f60718293a4b")
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Error updating review");
        assert_eq!(body["error"]["name"], "DatabaseError");
    }

    #[actix_rt::test]
    async fn test_health_reports_store() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(App::new().app_data(store_data(&store)).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["database"], "connected");
    }
}
