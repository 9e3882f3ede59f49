use std::env;

use crate::utils::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CLUSTER: &str = "cluster0.knxzg.mongodb.net";
const DEFAULT_DB_NAME: &str = "schoolarshipDb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB { uri: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_name: String,
    pub backend: StoreBackend,
}

impl Config {
    /// Lê a configuração das variáveis de ambiente (chamar depois de `dotenv()`)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("PORT must be a valid port number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let database_name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        let backend = match lookup("STORE_BACKEND").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("mongodb") | Some("mongo") => StoreBackend::MongoDB {
                uri: mongodb_uri(&lookup)?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "STORE_BACKEND must be 'mongodb' or 'memory', got '{}'",
                    other
                )))
            }
        };

        Ok(Self {
            host,
            port,
            database_name,
            backend,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// DATABASE_URL tem prioridade; senão monta a URI do Atlas com DB_USER/DB_PASS
fn mongodb_uri<F>(lookup: &F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
        return Ok(url);
    }

    let (user, pass) = match (lookup("DB_USER"), lookup("DB_PASS")) {
        (Some(user), Some(pass)) => (user, pass),
        _ => {
            return Err(AppError::Config(
                "either DATABASE_URL or both DB_USER and DB_PASS must be set".to_string(),
            ))
        }
    };

    let cluster = lookup("DB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());

    Ok(format!(
        "mongodb+srv://{}:{}@{}/?appName=Cluster0",
        urlencoding::encode(&user),
        urlencoding::encode(&pass),
        cluster
    ))
}

/// Esconde a senha antes de logar a URI
pub fn redact_uri(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    match rest.split_once('@') {
        Some((credentials, host)) => {
            let user = credentials.split(':').next().unwrap_or_default();
            format!("{}://{}:****@{}", scheme, user, host)
        }
        None => uri.to_string(),
    }
}
