//! Credential configuration for the Namecheap API.
//!
//! A [`NamecheapConfig`] is loaded once (programmatically, from the
//! environment, or through serde from a host's own config file) and is then
//! treated as an immutable snapshot by the client.

use crate::types::{NamecheapError, NamecheapResult, SecureApiKey};
use serde::Deserialize;
use std::env;
use std::net::IpAddr;

/// Production endpoint of the XML API
pub const PRODUCTION_URL: &str = "https://api.namecheap.com/xml.response";

/// Sandbox endpoint of the XML API
pub const SANDBOX_URL: &str = "https://api.sandbox.namecheap.com/xml.response";

/// Which Namecheap deployment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }

    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

/// API credentials plus the target environment.
///
/// `client_ip` must be the address whitelisted for the API user; Namecheap
/// rejects calls coming from anywhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct NamecheapConfig {
    pub api_user: String,
    pub api_key: SecureApiKey,
    pub user_name: String,
    pub client_ip: IpAddr,
    #[serde(default)]
    pub environment: Environment,
}

impl NamecheapConfig {
    /// Create a production configuration
    pub fn new(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
        user_name: impl Into<String>,
        client_ip: IpAddr,
    ) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: SecureApiKey::new(api_key),
            user_name: user_name.into(),
            client_ip,
            environment: Environment::Production,
        }
    }

    /// Target the sandbox deployment
    pub fn sandbox(mut self) -> Self {
        self.environment = Environment::Sandbox;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Load the configuration from `NAMECHEAP_*` environment variables
    ///
    /// * `NAMECHEAP_API_USER` (required)
    /// * `NAMECHEAP_API_KEY` (required)
    /// * `NAMECHEAP_USER_NAME` (defaults to the API user)
    /// * `NAMECHEAP_CLIENT_IP` (required, must parse as an IP address)
    /// * `NAMECHEAP_SANDBOX` (`true`, `1` or `yes` selects the sandbox)
    pub fn from_env() -> NamecheapResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub(crate) fn from_lookup<F>(lookup: F) -> NamecheapResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| NamecheapError::Config(format!("{} is not set", key)))
        };

        let api_user = required("NAMECHEAP_API_USER")?;
        let api_key = required("NAMECHEAP_API_KEY")?;
        let user_name = lookup("NAMECHEAP_USER_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| api_user.clone());
        let raw_ip = required("NAMECHEAP_CLIENT_IP")?;
        let client_ip = raw_ip.trim().parse::<IpAddr>().map_err(|_| {
            NamecheapError::Config(format!(
                "NAMECHEAP_CLIENT_IP is not a valid IP address: {}",
                raw_ip
            ))
        })?;
        let sandbox = lookup("NAMECHEAP_SANDBOX")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
            .unwrap_or(false);

        let config = Self::new(api_user, api_key, user_name, client_ip).with_environment(
            if sandbox {
                Environment::Sandbox
            } else {
                Environment::Production
            },
        );
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> NamecheapResult<()> {
        if self.api_user.trim().is_empty() {
            return Err(NamecheapError::Config("api_user cannot be empty".into()));
        }
        if self.api_key.trim().is_empty() {
            return Err(NamecheapError::Config("api_key cannot be empty".into()));
        }
        if self.user_name.trim().is_empty() {
            return Err(NamecheapError::Config("user_name cannot be empty".into()));
        }
        if self.client_ip.is_unspecified() {
            return Err(NamecheapError::Config(format!(
                "client_ip cannot be the unspecified address {}",
                self.client_ip
            )));
        }
        Ok(())
    }

    /// Endpoint selected by the environment
    pub fn api_url(&self) -> &'static str {
        self.environment.api_url()
    }
}
