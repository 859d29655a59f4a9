use std::env;

use crate::modules::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub argon2: Argon2Config,
    pub smtp: SmtpConfig,
    pub storage: StorageConfig,
    pub app_base_url: String,
    pub run_migrations: bool,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub region: String,
    pub bucket: Option<String>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = get("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let database = DatabaseConfig {
            url: required(&get, "DATABASE_URL")?,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 50)?,
            min_connections: parse_or(&get, "DB_MIN_CONNECTIONS", 10)?,
        };

        let smtp = SmtpConfig {
            host: get("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&get, "SMTP_PORT", 1025)?,
            username: get("SMTP_USER").filter(|v| !v.is_empty()),
            password: get("SMTP_PASS").filter(|v| !v.is_empty()),
            from: get("EMAIL_FROM")
                .or_else(|| get("SMTP_FROM"))
                .unwrap_or_else(|| "AIPIX <no-reply@aipix.local>".to_string()),
        };

        let storage = StorageConfig {
            region: get("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            bucket: get("AWS_S3_BUCKET").filter(|v| !v.trim().is_empty()),
        };

        let argon2 = Argon2Config {
            memory_kib: parse_or(&get, "ARGON2_MEMORY_KIB", 4 * 1024)?,
            iterations: parse_or(&get, "ARGON2_ITERATIONS", 3)?,
            parallelism: parse_or(&get, "ARGON2_PARALLELISM", 1)?,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 4000)?,
            database,
            jwt: JwtConfig::from_lookup(&get)?,
            argon2,
            smtp,
            storage,
            app_base_url: get("APP_BASE_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            run_migrations: parse_or(&get, "RUN_MIGRATIONS", false)?,
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn required<F>(get: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

pub(crate) fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
