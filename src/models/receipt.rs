use mongodb::bson::Bson;
use serde::Serialize;

use crate::database::UpdateOutcome;
use crate::utils::bson_to_json;

/// Resposta de insert no formato do driver: `{ acknowledged, insertedId }`
#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertReceipt {
    pub acknowledged: bool,
    #[schema(value_type = String)]
    pub inserted_id: serde_json::Value,
}

impl InsertReceipt {
    pub fn new(inserted_id: Bson) -> Self {
        Self {
            acknowledged: true,
            inserted_id: bson_to_json(inserted_id),
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReceipt {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    #[schema(value_type = Option<String>)]
    pub upserted_id: Option<serde_json::Value>,
}

impl From<UpdateOutcome> for UpdateReceipt {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched,
            modified_count: outcome.modified,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReceipt {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteReceipt {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Resultado de `POST /users`: cadastro novo ou marcador de duplicado
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserCreation {
    Inserted(InsertReceipt),
    AlreadyExists {
        message: String,
        #[serde(rename = "insertedId")]
        inserted_id: Option<serde_json::Value>,
    },
}

impl UserCreation {
    pub fn already_exists() -> Self {
        UserCreation::AlreadyExists {
            message: "User already exists".to_string(),
            inserted_id: None,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, UserCreation::AlreadyExists { .. })
    }
}
