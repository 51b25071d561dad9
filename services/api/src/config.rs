//! API service configuration loaded from environment variables

use std::env;

/// Runtime environment the service is deployed in
///
/// The test-session bootstrap endpoint is only reachable in
/// `Development`; anything unrecognized is treated as `Production`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV` value; unknown values fall back to production
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// API service configuration struct
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// Deployment environment
    pub environment: Environment,
    /// Lifetime of a newly minted session, in seconds
    pub session_ttl_seconds: i64,
    /// Email of the seed user used by the development-only bootstrap
    pub seed_user_email: String,
}

impl ApiConfig {
    /// Create a new ApiConfig from environment variables
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

        let environment = env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Production);

        let session_ttl_seconds = env::var("SESSION_TTL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86_400);

        let seed_user_email =
            env::var("SEED_USER_EMAIL").unwrap_or_else(|_| "admin@example.org".to_string());

        Self {
            bind_addr,
            environment,
            session_ttl_seconds,
            seed_user_email,
        }
    }

    /// Whether the service runs in a development environment
    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_development_aliases() {
        assert_eq!(Environment::parse("development"), Environment::Development);
        assert_eq!(Environment::parse("dev"), Environment::Development);
        assert_eq!(Environment::parse("  Development "), Environment::Development);
    }

    #[test]
    fn unknown_environments_fall_back_to_production() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Production);
        assert_eq!(Environment::parse(""), Environment::Production);
    }
}
