// Core Client Implementation

use crate::builder::CommandBuilder;
use crate::config::NamecheapConfig;
use crate::domains::*;
use crate::types::*;
use reqwest::Client as HttpClient;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Default timeout applied to every HTTP call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Root client for the Namecheap API.
///
/// Cloning is cheap: the HTTP client, the configuration snapshot and the
/// cached domain clients are all shared.
#[derive(Clone)]
pub struct Namecheap {
    pub(crate) http_client: HttpClient,
    config: Arc<NamecheapConfig>,
    base_url: Option<String>,
    domain_registry: Arc<OnceLock<Arc<DomainClientRegistry>>>,
}

fn build_http_client(timeout: Duration) -> NamecheapResult<HttpClient> {
    HttpClient::builder()
        .timeout(timeout)
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .build()
        .map_err(|e| {
            NamecheapError::request_error(
                "failed to create HTTP client",
                None,
                Some(e),
                Some(concat!(file!(), ":", line!())),
            )
        })
}

impl Namecheap {
    /// Create a client from a configuration, validating it first
    pub fn new(config: NamecheapConfig) -> NamecheapResult<Self> {
        let http_client = build_http_client(DEFAULT_TIMEOUT)?;
        Self::with_http_client(config, http_client)
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_http_client(config: NamecheapConfig, http_client: HttpClient) -> NamecheapResult<Self> {
        config.validate()?;
        tracing::debug!(
            api_user = %config.api_user,
            environment = ?config.environment,
            "created Namecheap client"
        );
        Ok(Self {
            http_client,
            config: Arc::new(config),
            base_url: None,
            domain_registry: Arc::new(OnceLock::new()),
        })
    }

    /// Replace the HTTP timeout
    pub fn with_timeout(mut self, timeout: Duration) -> NamecheapResult<Self> {
        self.http_client = build_http_client(timeout)?;
        self.domain_registry = Arc::new(OnceLock::new());
        Ok(self)
    }

    /// Send requests to a custom endpoint instead of the one chosen by the
    /// environment (used for testing against a local server)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self.domain_registry = Arc::new(OnceLock::new());
        self
    }

    pub fn config(&self) -> &NamecheapConfig {
        &self.config
    }

    /// Endpoint that requests are sent to
    pub fn api_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.config.api_url())
    }

    /// Start building a request for a fully qualified command such as
    /// `namecheap.domains.getInfo`
    pub fn command(&self, command: impl Into<String>) -> CommandBuilder {
        CommandBuilder::from_client(Arc::new(self.clone()), command)
    }

    /// Get the domain client registry
    pub fn clients(&self) -> Arc<DomainClientRegistry> {
        self.domain_registry
            .get_or_init(|| {
                // The registry gets its own empty cell so it does not keep itself alive
                let detached = Namecheap {
                    domain_registry: Arc::new(OnceLock::new()),
                    ..self.clone()
                };
                Arc::new(DomainClientRegistry::new(Arc::new(detached)))
            })
            .clone()
    }

    /// DNS hosts, nameservers and email forwarding
    pub fn dns(&self) -> Arc<DnsClient> {
        self.clients().dns()
    }

    /// Domain availability, registration, contacts, locks and renewals
    pub fn domains(&self) -> Arc<DomainsClient> {
        self.clients().domains()
    }
}

impl std::fmt::Debug for Namecheap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namecheap")
            .field("config", &self.config)
            .field("api_url", &self.api_url())
            .finish()
    }
}
