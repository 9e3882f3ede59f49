use mongodb::bson::{DateTime, Document};

pub const REVIEWS_COLLECTION: &str = "reviews";

pub fn new_review(mut review: Document) -> Document {
    review.insert("createdAt", DateTime::now());
    review
}
