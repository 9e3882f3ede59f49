use mongodb::bson::{DateTime, Document};

pub const APPLICATIONS_COLLECTION: &str = "applications";

pub const DEFAULT_APPLICATION_STATUS: &str = "pending";

/// Status e feedback sempre começam zerados, independente do que o cliente enviar
pub fn new_application(mut application: Document) -> Document {
    application.insert("status", DEFAULT_APPLICATION_STATUS);
    application.insert("createdAt", DateTime::now());
    application.insert("application_feedback", "");
    application
}
