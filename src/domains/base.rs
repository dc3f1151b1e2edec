//! Base implementation for command-group clients.
//!
//! Concrete clients hold a `BaseDomainClient` and delegate the shared traits
//! to it.

use crate::client::Namecheap;
use crate::domains::{CommandOperations, DomainClient, ValidationOperations};
use std::sync::Arc;

/// Base client for command-group implementations
pub struct BaseDomainClient {
    /// Reference to the root client
    namecheap: Arc<Namecheap>,
    /// Command prefix for this client
    command_group: String,
}

impl BaseDomainClient {
    /// Create a new base client
    pub fn new(namecheap: Arc<Namecheap>, command_group: impl Into<String>) -> Self {
        Self {
            namecheap,
            command_group: command_group.into(),
        }
    }
}

impl DomainClient for BaseDomainClient {
    fn command_group(&self) -> &str {
        &self.command_group
    }
}

impl ValidationOperations for BaseDomainClient {}

impl CommandOperations for BaseDomainClient {
    fn namecheap(&self) -> &Namecheap {
        &self.namecheap
    }
}
