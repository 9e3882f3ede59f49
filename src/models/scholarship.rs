/// Nome histórico da coleção no cluster (com o typo)
pub const SCHOLARSHIPS_COLLECTION: &str = "schoolarship";

/// Quantidade devolvida por `GET /scholarships/top`
pub const TOP_SCHOLARSHIPS_LIMIT: i64 = 6;
