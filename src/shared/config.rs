use std::env;

use crate::modules::gate::domain::AdminCredentials;

pub const DEFAULT_CERTIFICATE_BUCKET: &str = "certificates";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Where collections and uploaded objects live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBackend {
    Supabase { url: String, anon_key: String },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: ContentBackend,
    pub certificate_bucket: String,
    /// `None` keeps the admin console closed.
    pub admin: Option<AdminCredentials>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the
    /// process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", rust_env)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = read("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match read("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let backend = match read("CONTENT_BACKEND").as_deref().map(str::trim) {
            None | Some("supabase") => ContentBackend::Supabase {
                url: read("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?,
                anon_key: read("SUPABASE_ANON_KEY")
                    .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            },
            Some("memory") => ContentBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "CONTENT_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let certificate_bucket = read("CERTIFICATE_BUCKET")
            .unwrap_or_else(|| DEFAULT_CERTIFICATE_BUCKET.to_string());

        let admin = AdminCredentials::from_parts(read("ADMIN_USERNAME"), read("ADMIN_PASSWORD"));

        Ok(Self {
            host,
            port,
            backend,
            certificate_bucket,
            admin,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base used to build public object URLs when running without a remote backend.
    pub fn local_base_url(&self) -> String {
        format!("http://{}", self.bind_address())
    }
}
