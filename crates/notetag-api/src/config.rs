//! Server configuration loaded from the environment.

use axum::http::HeaderValue;

use notetag_core::defaults;

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Store connection string. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<HeaderValue>,
    /// Development mode exposes upstream error details in responses.
    pub development: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            database_url: None,
            allowed_origins: parse_allowed_origins(defaults::ALLOWED_ORIGINS),
            development: false,
        }
    }
}

impl ApiConfig {
    /// Read configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `5002` |
    /// | `DATABASE_URL` | (in-memory store) |
    /// | `ALLOWED_ORIGINS` | `http://localhost:3000` |
    /// | `APP_ENV` | `production` |
    pub fn from_env() -> Self {
        let origins = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| defaults::ALLOWED_ORIGINS.to_string());

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| defaults::HOST.to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults::PORT),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|u| !u.trim().is_empty()),
            allowed_origins: parse_allowed_origins(&origins),
            development: std::env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("development"))
                .unwrap_or(false),
        }
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a comma-separated origin list into header values.
///
/// Invalid entries are skipped with a warning. An empty list falls back to
/// the default origin.
///
/// ```text
/// ALLOWED_ORIGINS=https://notes.example.com,http://localhost:3000
/// ```
pub fn parse_allowed_origins(raw: &str) -> Vec<HeaderValue> {
    if raw.trim().is_empty() {
        return vec![HeaderValue::from_static(defaults::ALLOWED_ORIGINS)];
    }

    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    tracing::warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5002");
        assert!(config.database_url.is_none());
        assert!(!config.development);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_parse_multiple_origins() {
        let origins = parse_allowed_origins("https://a.example.com, http://localhost:3000 ,");
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[0], "https://a.example.com");
        assert_eq!(origins[1], "http://localhost:3000");
    }

    #[test]
    fn test_parse_empty_origins_falls_back() {
        assert_eq!(parse_allowed_origins("  "), vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_parse_skips_invalid_origin() {
        let origins = parse_allowed_origins("http://ok.example.com,bad\norigin");
        assert_eq!(origins, vec!["http://ok.example.com"]);
    }
}
