//! Command-group clients for the Namecheap API
//!
//! Each client wraps one command group (`namecheap.domains.dns`,
//! `namecheap.domains`) and exposes one async method per remote command.
//!
//! ## Architecture
//!
//! The client system uses a trait-based approach:
//!
//! - `DomainClient` trait: identifies the command group a client talks to
//! - `ValidationOperations` trait: local precondition checks run before any request
//! - `CommandOperations` trait: builds group-qualified commands and checks acknowledgements
//! - `BaseDomainClient`: implements all three and serves as a composition base
//!
//! Callers that only need the contract depend on the `DnsApi` and `DomainsApi`
//! capability traits instead of the concrete clients.
//!
//! ## Example: Creating a Custom Command-Group Client
//!
//! ```rust
//! use namecheap_rs::{Namecheap, NamecheapResult};
//! use namecheap_rs::domains::{CommandOperations, DomainClient, base::BaseDomainClient};
//! use namecheap_rs::utils::xml_extractor::{FromXml, XmlElement};
//! use std::sync::Arc;
//!
//! struct TransferStatus {
//!     transfer_id: u64,
//!     status: String,
//! }
//!
//! impl FromXml for TransferStatus {
//!     const ELEMENT: &'static str = "DomainTransferGetStatusResult";
//!
//!     fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
//!         Ok(Self {
//!             transfer_id: element.parse_attr("TransferID")?,
//!             status: element.required_attr("Status")?.to_string(),
//!         })
//!     }
//! }
//!
//! struct TransferClient {
//!     base: BaseDomainClient,
//! }
//!
//! impl TransferClient {
//!     pub fn new(namecheap: Arc<Namecheap>) -> Self {
//!         Self {
//!             base: BaseDomainClient::new(namecheap, "namecheap.domains.transfer"),
//!         }
//!     }
//!
//!     pub async fn get_status(&self, transfer_id: u64) -> NamecheapResult<TransferStatus> {
//!         self.command("getStatus")
//!             .param("TransferID", transfer_id.to_string())
//!             .send::<TransferStatus>()
//!             .await
//!     }
//! }
//!
//! impl DomainClient for TransferClient {
//!     fn command_group(&self) -> &str {
//!         self.base.command_group()
//!     }
//! }
//!
//! impl CommandOperations for TransferClient {
//!     fn namecheap(&self) -> &Namecheap {
//!         self.base.namecheap()
//!     }
//! }
//! ```

pub mod base;
pub mod contacts;
pub mod dns;
pub mod registrar;
pub mod tld;

// Re-export command-group clients
pub use contacts::{ContactInformation, ContactRole, DomainContacts, DomainContactsResult};
pub use dns::{
    DnsClient, DnsEmailForwardingResult, DnsHostResult, DnsListResult, EmailForwarding, HostEntry,
    RecordType,
};
pub use registrar::{
    AvailabilityResults, DnsDetails, DomainCheckResult, DomainCreateRequest, DomainCreateResult,
    DomainInfoResult, DomainListRequest, DomainListResult, DomainReactivateResult,
    DomainRegistrarLockResult, DomainRenewResult, DomainSummary, DomainsClient, ListType, Paging,
    SortBy,
};
pub use tld::{Tld, TldListResult};

use crate::builder::CommandBuilder;
use crate::client::Namecheap;
use crate::types::*;
use crate::utils::xml_extractor::CommandAck;
use crate::utils::{split_domain, DomainParts};
use async_trait::async_trait;
use std::sync::{Arc, OnceLock};
use tokio_util::sync::CancellationToken;

/// Common trait for all command-group clients
pub trait DomainClient: Send + Sync {
    /// Command prefix, e.g. `namecheap.domains.dns`
    fn command_group(&self) -> &str;
}

/// Local precondition checks; failures never reach the network
pub trait ValidationOperations: DomainClient {
    /// Creates a validation error tagged with the command group
    fn validation_error<T>(&self, message: impl Into<String>) -> NamecheapResult<T> {
        Err(NamecheapError::ValidationError(format!(
            "{}: {}",
            self.command_group(),
            message.into()
        )))
    }

    /// Split a full domain name into SLD and TLD
    fn validate_domain(&self, domain: &str) -> NamecheapResult<DomainParts> {
        split_domain(domain).or_else(|e| match e {
            NamecheapError::ValidationError(message) => self.validation_error(message),
            other => Err(other),
        })
    }

    /// Validate a string parameter is not blank; returns it trimmed
    fn validate_string<S: Into<String>>(&self, value: S, param_name: &str) -> NamecheapResult<String> {
        let string = value.into();
        if string.trim().is_empty() {
            return self.validation_error(format!("{} cannot be empty", param_name));
        }
        Ok(string.trim().to_string())
    }

    /// Validate a numeric parameter is within range
    fn validate_range<T: PartialOrd + Copy + std::fmt::Display>(
        &self,
        value: T,
        min: T,
        max: T,
        param_name: &str,
    ) -> NamecheapResult<T> {
        if value < min || value > max {
            return self.validation_error(format!(
                "{} must be between {} and {}, but got {}",
                param_name, min, max, value
            ));
        }
        Ok(value)
    }

    /// Validate a collection is not empty
    fn validate_not_empty<T>(&self, items: &[T], param_name: &str) -> NamecheapResult<()> {
        if items.is_empty() {
            return self.validation_error(format!("{} cannot be empty", param_name));
        }
        Ok(())
    }
}

/// Command construction shared by the command-group clients
pub trait CommandOperations: DomainClient {
    /// Get a reference to the root client
    fn namecheap(&self) -> &Namecheap;

    /// Start a request for `<command group>.<name>`
    fn command(&self, name: &str) -> CommandBuilder {
        self.namecheap()
            .command(format!("{}.{}", self.command_group(), name))
    }

    /// Turn a negative acknowledgement into an `ApiError`
    fn ensure_success(&self, name: &str, ack: &CommandAck) -> NamecheapResult<()> {
        if ack.success {
            return Ok(());
        }
        let command = format!("{}.{}", self.command_group(), name);
        let message = match &ack.domain {
            Some(domain) => format!("{} was not applied to {}", command, domain),
            None => format!("{} was not applied", command),
        };
        Err(NamecheapError::api_error(
            command,
            vec![ApiErrorEntry::new(None, message)],
            Some(concat!(file!(), ":", line!())),
        ))
    }
}

/// DNS capability: host records, nameservers and email forwarding.
///
/// Domains are full names (`example.com`); set-style operations resolve to
/// `()` once the API acknowledges the change.
#[async_trait]
pub trait DnsApi: Send + Sync {
    async fn get_hosts(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsHostResult>;

    async fn set_hosts(
        &self,
        domain: &str,
        hosts: &[HostEntry],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()>;

    async fn get_email_forwarding(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsEmailForwardingResult>;

    async fn set_email_forwarding(
        &self,
        domain: &str,
        forwards: &[EmailForwarding],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()>;

    /// Remove every forward; the same remote command as an empty set
    async fn delete_all_email_forwarding(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()>;

    async fn get_list(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsListResult>;

    async fn set_custom(
        &self,
        domain: &str,
        nameservers: &[&str],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()>;

    async fn set_default(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<()>;
}

/// Domain lifecycle capability
#[async_trait]
pub trait DomainsApi: Send + Sync {
    /// Check up to 50 domains in one call
    async fn are_available(
        &self,
        domains: &[&str],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<AvailabilityResults>;

    async fn create(
        &self,
        request: &DomainCreateRequest,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainCreateResult>;

    async fn get_contacts(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainContactsResult>;

    async fn set_contacts(
        &self,
        domain: &str,
        contacts: &DomainContacts,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()>;

    async fn get_info(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainInfoResult>;

    async fn get_list(
        &self,
        request: &DomainListRequest,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainListResult>;

    /// `true` when the domain is locked against transfer
    async fn get_registrar_lock(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<bool>;

    async fn set_registrar_lock(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<()>;

    async fn set_registrar_unlock(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<()>;

    async fn get_tld_list(&self, cancel: Option<CancellationToken>) -> NamecheapResult<TldListResult>;

    async fn renew(
        &self,
        domain: &str,
        years: u8,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainRenewResult>;

    async fn reactivate(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainReactivateResult>;
}

/// Registry of command-group clients that provides a central access point.
pub struct DomainClientRegistry {
    namecheap: Arc<Namecheap>,
    dns_client: OnceLock<Arc<DnsClient>>,
    domains_client: OnceLock<Arc<DomainsClient>>,
}

impl DomainClientRegistry {
    /// Create a new registry associated with a root client
    pub(crate) fn new(namecheap: Arc<Namecheap>) -> Self {
        Self {
            namecheap,
            dns_client: OnceLock::new(),
            domains_client: OnceLock::new(),
        }
    }

    /// Get the DNS client (cached)
    pub fn dns(&self) -> Arc<DnsClient> {
        self.dns_client
            .get_or_init(|| Arc::new(DnsClient::new(self.namecheap.clone())))
            .clone()
    }

    /// Get the domains client (cached)
    pub fn domains(&self) -> Arc<DomainsClient> {
        self.domains_client
            .get_or_init(|| Arc::new(DomainsClient::new(self.namecheap.clone())))
            .clone()
    }
}
