use mongodb::bson::{doc, Bson, DateTime, Document};
use serde::{Deserialize, Serialize};

pub const USERS_COLLECTION: &str = "users";

/// Conta tratada como admin mesmo sem role gravado no banco
pub const ADMIN_EMAIL: &str = "admin@scholarship.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Moderator => "moderator",
        }
    }

    /// Lê o campo `role` de um documento de usuário (valores desconhecidos = None)
    pub fn of(user: &Document) -> Option<Role> {
        match user.get_str("role").ok()? {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            "moderator" => Some(Role::Moderator),
            _ => None,
        }
    }
}

/// Body de `PATCH /users/role/{email}`; o valor é gravado como veio (qualquer tipo JSON)
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RoleUpdateRequest {
    #[serde(default)]
    #[schema(value_type = Object)]
    pub role: Option<Bson>,
}

impl RoleUpdateRequest {
    /// Role ausente (ou null) vira `null` no banco
    pub fn into_role(self) -> Bson {
        self.role.unwrap_or(Bson::Null)
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ModeratorStatus {
    pub moderator: bool,
}

/// Prepara o documento de cadastro: role sempre "user", createdAt = agora
pub fn new_user(mut user: Document) -> Document {
    user.insert("role", Role::User.as_str());
    user.insert("createdAt", DateTime::now());
    user
}

pub fn moderator_request_changes() -> Document {
    doc! {
        "moderatorRequest": true,
        "requestDate": DateTime::now(),
    }
}

pub fn moderator_approval_changes() -> Document {
    doc! {
        "role": Role::Moderator.as_str(),
        "moderatorRequest": false,
        "approvedDate": DateTime::now(),
    }
}

/// Só olha o role gravado; o `ADMIN_EMAIL` é tratado antes de consultar o banco
pub fn is_admin(stored: Option<&Document>) -> bool {
    stored.and_then(Role::of) == Some(Role::Admin)
}

pub fn is_moderator(stored: Option<&Document>) -> bool {
    stored.and_then(Role::of) == Some(Role::Moderator)
}
