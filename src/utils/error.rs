use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

/// Falha reportada por um `DocumentStore`
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Segmento de rota que não é um ObjectId válido
    InvalidId(String),
    /// Erro vindo do driver (ou do store em memória)
    Driver(String),
}

impl StoreError {
    pub fn name(&self) -> &'static str {
        match self {
            StoreError::InvalidId(_) => "InvalidObjectId",
            StoreError::Driver(_) => "DatabaseError",
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidId(id) => write!(f, "invalid ObjectId: {}", id),
            StoreError::Driver(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Driver(e.to_string())
    }
}

#[derive(Debug)]
pub enum AppError {
    /// Qualquer falha numa operação de banco; `context` é a mensagem fixa da rota
    DatabaseError {
        context: &'static str,
        source: StoreError,
    },
    Config(String),
}

impl AppError {
    /// Adaptador para `map_err`: `.map_err(AppError::database("Error fetching user"))`
    pub fn database(context: &'static str) -> impl FnOnce(StoreError) -> AppError {
        move |source| AppError::DatabaseError { context, source }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DatabaseError { context, source } => write!(f, "{}: {}", context, source),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorDetail {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub error: ErrorDetail,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("❌ {}", self);

        let body = match self {
            AppError::DatabaseError { context, source } => ErrorBody {
                message: context.to_string(),
                error: ErrorDetail {
                    name: source.name().to_string(),
                    message: source.to_string(),
                },
            },
            AppError::Config(msg) => ErrorBody {
                message: "Server configuration error".to_string(),
                error: ErrorDetail {
                    name: "ConfigError".to_string(),
                    message: msg.clone(),
                },
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn test_database_error_renders_context_and_raw_error() {
        let err = AppError::database("Error fetching user")(StoreError::Driver("connection reset".into()));
        let res = err.error_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(res.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Error fetching user");
        assert_eq!(body["error"]["name"], "DatabaseError");
        assert_eq!(body["error"]["message"], "connection reset");
    }

    #[test]
    fn test_invalid_id_is_named() {
        let err = StoreError::InvalidId("abc".into());
        assert_eq!(err.name(), "InvalidObjectId");
        assert_eq!(err.to_string(), "invalid ObjectId: abc");
    }
}
