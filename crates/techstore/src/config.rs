//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STRIPE_SECRET` - Stripe secret API key
//!
//! ## Optional
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `PORT` - Listen port (default: 5000)
//! - `STRIPE_API_BASE` - Stripe API origin (default: https://api.stripe.com)
//! - `ACTOR_BUFFER` - Request queue depth per collection (default: 32)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use crate::payments::stripe::STRIPE_API_BASE;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub stripe_secret: SecretString,
    pub stripe_api_base: String,
    pub actor_buffer: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("stripe_secret", &"[REDACTED]")
            .field("stripe_api_base", &self.stripe_api_base)
            .field("actor_buffer", &self.actor_buffer)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the process environment, after reading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Env(lookup);
        let stripe_secret = env.required("STRIPE_SECRET")?;
        let actor_buffer: usize = env.parsed_or("ACTOR_BUFFER", 32)?;
        if actor_buffer == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "ACTOR_BUFFER".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            host: env.parsed_or("HOST", IpAddr::from([0, 0, 0, 0]))?,
            port: env.parsed_or("PORT", 5000)?,
            stripe_secret: SecretString::from(stripe_secret),
            stripe_api_base: env.or_default("STRIPE_API_BASE", STRIPE_API_BASE),
            actor_buffer,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        (self.0)(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        (self.0)(key).unwrap_or_else(|| default.to_string())
    }

    fn parsed_or<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match (self.0)(key) {
            Some(raw) => raw
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("STRIPE_SECRET", "sk_test_123")]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.stripe_api_base, "https://api.stripe.com");
        assert_eq!(config.actor_buffer, 32);
        assert_eq!(config.stripe_secret.expose_secret(), "sk_test_123");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STRIPE_SECRET", "sk_test_123"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ACTOR_BUFFER", "4"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.actor_buffer, 4);
    }

    #[test]
    fn test_missing_stripe_secret() {
        assert_eq!(
            load(&[]).unwrap_err(),
            ConfigError::MissingEnvVar("STRIPE_SECRET".into())
        );
        assert_eq!(
            load(&[("STRIPE_SECRET", "")]).unwrap_err(),
            ConfigError::MissingEnvVar("STRIPE_SECRET".into())
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("STRIPE_SECRET", "sk"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "PORT"));
    }

    #[test]
    fn test_invalid_actor_buffer() {
        for raw in ["0", "-1", "many"] {
            let err = load(&[("STRIPE_SECRET", "sk"), ("ACTOR_BUFFER", raw)]).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ACTOR_BUFFER"),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = load(&[("STRIPE_SECRET", "sk_live_very_secret")]).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk_live_very_secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
