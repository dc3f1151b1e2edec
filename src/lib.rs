//! # namecheap-rs: A typed async client for the Namecheap XML API
//!
//! This SDK wraps the Namecheap XML-over-HTTP API with one async method per
//! remote command, typed results, and structured errors.
//!
//! ## Key Features
//!
//! - DNS host records, custom/default nameservers and email forwarding
//! - Domain availability, registration, renewal, reactivation, contacts and registrar lock
//! - Every query parameter percent-encoded; the API key is redacted from errors and logs
//! - `Status="ERROR"` responses surfaced as `NamecheapError::ApiError` with individual codes
//! - Cancellation through `tokio_util::sync::CancellationToken`
//! - Sandbox and production endpoints selected by configuration
//!
//! ## Basic Usage
//!
//! ```no_run
//! use namecheap_rs::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads NAMECHEAP_API_USER, NAMECHEAP_API_KEY, NAMECHEAP_CLIENT_IP, ...
//!     let namecheap = from_env()?;
//!
//!     let hosts = namecheap.dns().get_hosts("example.com", None).await?;
//!     for host in &hosts.hosts {
//!         println!("{} {} {}", host.host_name, host.record_type, host.address);
//!     }
//!
//!     let availability = namecheap
//!         .domains()
//!         .are_available(&["example.com", "some-fresh-name-4821.net"], None)
//!         .await?;
//!     for result in availability.iter() {
//!         println!("{}: {}", result.domain, result.available);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod types;
pub mod config;
pub mod client;
mod builder;
pub mod domains;
pub mod utils;

// Re-export core components
pub use builder::CommandBuilder;
pub use client::{Namecheap, DEFAULT_TIMEOUT};
pub use config::{Environment, NamecheapConfig, PRODUCTION_URL, SANDBOX_URL};
pub use types::{codes, sanitize_error_message, ApiErrorEntry, NamecheapError, NamecheapResult, SecureApiKey};
pub use utils::xml_extractor::CommandAck;

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::{from_env, Environment, Namecheap, NamecheapConfig, NamecheapError, NamecheapResult};
    pub use crate::domains::{DnsApi, DnsClient, DomainsApi, DomainsClient};

    // Request and result types
    pub use crate::domains::{
        contacts::{ContactInformation, ContactRole, DomainContacts},
        dns::{EmailForwarding, HostEntry, RecordType},
        registrar::{DomainCreateRequest, DomainListRequest, ListType, SortBy},
    };
    pub use tokio_util::sync::CancellationToken;
}

// Public command-group access
pub use domains::{
    // Base traits
    CommandOperations,
    DomainClient,
    ValidationOperations,

    // Capability traits
    DnsApi,
    DomainsApi,

    // Command-group clients
    DnsClient,
    DomainsClient,
};

// Request and result types
pub use domains::contacts::{ContactInformation, ContactRole, DomainContacts, DomainContactsResult};
pub use domains::dns::{DnsEmailForwardingResult, DnsHostResult, DnsListResult, EmailForwarding, HostEntry, RecordType};
pub use domains::registrar::{
    AvailabilityResults, DnsDetails, DomainCheckResult, DomainCreateRequest, DomainCreateResult,
    DomainInfoResult, DomainListRequest, DomainListResult, DomainReactivateResult, DomainRenewResult,
    DomainSummary, ListType, Paging, SortBy,
};
pub use domains::tld::{Tld, TldListResult};

// Entry point functions
pub fn new_client(config: NamecheapConfig) -> NamecheapResult<Namecheap> {
    Namecheap::new(config)
}

/// Build a client from `NAMECHEAP_*` environment variables
pub fn from_env() -> NamecheapResult<Namecheap> {
    Namecheap::new(NamecheapConfig::from_env()?)
}
