use anyhow::{Context, Result};

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub identity_introspection_url: String,
    pub identity_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            identity_introspection_url: require_env("IDENTITY_INTROSPECTION_URL")?,
            identity_api_key: require_env("IDENTITY_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Fallback `EnvFilter` directives. sqlx logs every executed statement
    /// under `sqlx::query` at debug level.
    pub fn log_directives(&self) -> String {
        format!(
            "{}={},sqlx::query=debug",
            env!("CARGO_PKG_NAME"),
            self.rust_log
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_log(rust_log: &str) -> Config {
        Config {
            database_url: "postgres://localhost/resume".to_string(),
            gemini_api_key: "key".to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            identity_introspection_url: "http://localhost/introspect".to_string(),
            identity_api_key: "secret".to_string(),
            port: 8080,
            rust_log: rust_log.to_string(),
        }
    }

    #[test]
    fn test_log_directives_enable_query_logging() {
        let directives = config_with_log("info").log_directives();
        assert_eq!(directives, "resume_api=info,sqlx::query=debug");

        let filter = tracing_subscriber::EnvFilter::try_new(&directives);
        assert!(filter.is_ok());
    }

    #[test]
    fn test_log_directives_follow_rust_log_level() {
        assert!(config_with_log("warn")
            .log_directives()
            .starts_with("resume_api=warn,"));
    }
}
