// DNS Client

use crate::client::Namecheap;
use crate::domains::{
    base::BaseDomainClient, CommandOperations, DnsApi, DomainClient, ValidationOperations,
};
use crate::types::*;
use crate::utils::xml_extractor::{ack_result, FromXml, XmlElement};
use async_trait::async_trait;
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// DNS record types accepted by `setHosts`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    ALIAS,
    CAA,
    CNAME,
    MX,
    MXE,
    NS,
    TXT,
    URL,
    URL301,
    FRAME,
    /// A type this crate does not know yet, kept verbatim
    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::ALIAS => "ALIAS",
            RecordType::CAA => "CAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::MXE => "MXE",
            RecordType::NS => "NS",
            RecordType::TXT => "TXT",
            RecordType::URL => "URL",
            RecordType::URL301 => "URL301",
            RecordType::FRAME => "FRAME",
            RecordType::Other(other) => other,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "ALIAS" => RecordType::ALIAS,
            "CAA" => RecordType::CAA,
            "CNAME" => RecordType::CNAME,
            "MX" => RecordType::MX,
            "MXE" => RecordType::MXE,
            "NS" => RecordType::NS,
            "TXT" => RecordType::TXT,
            "URL" => RecordType::URL,
            "URL301" => RecordType::URL301,
            "FRAME" => RecordType::FRAME,
            _ => RecordType::Other(trimmed.to_string()),
        })
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One DNS host record.
///
/// `host_id` and `is_active` are only filled in on records returned by
/// `getHosts`; they are ignored when sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    pub host_name: String,
    pub record_type: RecordType,
    pub address: String,
    pub ttl: Option<String>,
    pub mx_pref: Option<String>,
    pub host_id: Option<String>,
    pub is_active: Option<bool>,
}

impl HostEntry {
    pub fn new(
        host_name: impl Into<String>,
        record_type: RecordType,
        address: impl Into<String>,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            record_type,
            address: address.into(),
            ttl: None,
            mx_pref: None,
            host_id: None,
            is_active: None,
        }
    }

    pub fn with_ttl(mut self, ttl: impl ToString) -> Self {
        self.ttl = Some(ttl.to_string());
        self
    }

    pub fn with_mx_pref(mut self, mx_pref: impl ToString) -> Self {
        self.mx_pref = Some(mx_pref.to_string());
        self
    }

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let is_active = match element.attr("IsActive") {
            Some(_) => Some(element.bool_attr("IsActive")?),
            None => None,
        };
        Ok(Self {
            host_name: element.required_attr("Name")?.to_string(),
            record_type: element.parse_attr("Type")?,
            address: element.required_attr("Address")?.to_string(),
            ttl: element.string_attr("TTL"),
            mx_pref: element.string_attr("MXPref"),
            host_id: element.string_attr("HostId"),
            is_active,
        })
    }
}

/// Indexed `setHosts` parameters, 1-based, in the order the API documents them
pub fn host_params(hosts: &[HostEntry]) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(hosts.len() * 5);
    for (index, host) in hosts.iter().enumerate() {
        let n = index + 1;
        params.push((format!("HostName{}", n), host.host_name.clone()));
        params.push((format!("Address{}", n), host.address.clone()));
        params.push((
            format!("MXPref{}", n),
            host.mx_pref.clone().unwrap_or_default(),
        ));
        params.push((format!("RecordType{}", n), host.record_type.to_string()));
        if let Some(ttl) = host.ttl.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            params.push((format!("TTL{}", n), ttl.to_string()));
        }
    }
    params
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsHostResult {
    pub domain: String,
    pub is_using_our_dns: bool,
    pub email_type: Option<String>,
    pub hosts: Vec<HostEntry>,
}

impl FromXml for DnsHostResult {
    const ELEMENT: &'static str = "DomainDNSGetHostsResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let hosts = element
            .children("host")
            .iter()
            .map(HostEntry::from_xml)
            .collect::<NamecheapResult<Vec<_>>>()?;
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            is_using_our_dns: element.bool_attr("IsUsingOurDNS")?,
            email_type: element.string_attr("EmailType"),
            hosts,
        })
    }
}

/// Nameservers currently delegated for a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsListResult {
    pub domain: String,
    pub is_using_our_dns: bool,
    pub nameservers: Vec<String>,
}

impl DnsListResult {
    /// Case-insensitive lookup, ignoring a trailing root dot
    pub fn contains_nameserver(&self, nameserver: &str) -> bool {
        let wanted = nameserver.trim().trim_end_matches('.');
        self.nameservers
            .iter()
            .any(|ns| ns.trim_end_matches('.').eq_ignore_ascii_case(wanted))
    }
}

impl FromXml for DnsListResult {
    const ELEMENT: &'static str = "DomainDNSGetListResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            is_using_our_dns: element.bool_attr("IsUsingOurDNS")?,
            nameservers: element
                .children("Nameserver")
                .iter()
                .map(|ns| ns.text().to_string())
                .filter(|ns| !ns.is_empty())
                .collect(),
        })
    }
}

/// A mailbox alias and the address it forwards to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailForwarding {
    pub mailbox: String,
    pub forward_to: String,
}

impl EmailForwarding {
    pub fn new(mailbox: impl Into<String>, forward_to: impl Into<String>) -> Self {
        Self {
            mailbox: mailbox.into(),
            forward_to: forward_to.into(),
        }
    }
}

/// Indexed `setEmailForwarding` parameters, 1-based
pub fn forward_params(forwards: &[EmailForwarding]) -> Vec<(String, String)> {
    forwards
        .iter()
        .enumerate()
        .flat_map(|(index, forward)| {
            let n = index + 1;
            [
                (format!("MailBox{}", n), forward.mailbox.clone()),
                (format!("ForwardTo{}", n), forward.forward_to.clone()),
            ]
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsEmailForwardingResult {
    pub domain: String,
    pub forwards: Vec<EmailForwarding>,
}

impl DnsEmailForwardingResult {
    /// Every forward configured for one mailbox
    pub fn forwards_for(&self, mailbox: &str) -> Vec<&EmailForwarding> {
        self.forwards
            .iter()
            .filter(|f| f.mailbox.eq_ignore_ascii_case(mailbox))
            .collect()
    }
}

impl FromXml for DnsEmailForwardingResult {
    const ELEMENT: &'static str = "DomainDNSGetEmailForwardingResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let forwards = element
            .children("Forward")
            .iter()
            .map(|forward| {
                Ok(EmailForwarding {
                    mailbox: forward.required_attr("mailbox")?.to_string(),
                    forward_to: forward.text().to_string(),
                })
            })
            .collect::<NamecheapResult<Vec<_>>>()?;
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            forwards,
        })
    }
}

ack_result!(DnsSetHostsResult, "DomainDNSSetHostsResult");
ack_result!(DnsSetCustomResult, "DomainDNSSetCustomResult");
ack_result!(DnsSetDefaultResult, "DomainDNSSetDefaultResult");
ack_result!(DnsSetEmailForwardingResult, "DomainDNSSetEmailForwardingResult");

/// Client for the `namecheap.domains.dns` command group
pub struct DnsClient {
    base: BaseDomainClient,
}

impl DnsClient {
    pub(crate) fn new(namecheap: Arc<Namecheap>) -> Self {
        Self {
            base: BaseDomainClient::new(namecheap, "namecheap.domains.dns"),
        }
    }

    /// Host records of a domain using Namecheap DNS
    pub async fn get_hosts(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsHostResult> {
        let parts = self.validate_domain(domain)?;
        self.command("getHosts")
            .param("SLD", parts.sld)
            .param("TLD", parts.tld)
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Replace every host record of a domain
    pub async fn set_hosts(
        &self,
        domain: &str,
        hosts: &[HostEntry],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        let parts = self.validate_domain(domain)?;
        self.validate_not_empty(hosts, "hosts")?;
        for host in hosts {
            self.validate_string(host.host_name.as_str(), "host name")?;
            self.validate_string(host.address.as_str(), "host address")?;
        }

        let result: DnsSetHostsResult = self
            .command("setHosts")
            .param("SLD", parts.sld)
            .param("TLD", parts.tld)
            .params(host_params(hosts))
            .cancel_on(cancel)
            .send()
            .await?;
        self.ensure_success("setHosts", &result.0)
    }

    pub async fn get_email_forwarding(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsEmailForwardingResult> {
        let parts = self.validate_domain(domain)?;
        self.command("getEmailForwarding")
            .param("DomainName", parts.to_string())
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Replace every email forward of a domain. An empty slice clears them.
    pub async fn set_email_forwarding(
        &self,
        domain: &str,
        forwards: &[EmailForwarding],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        let parts = self.validate_domain(domain)?;
        for forward in forwards {
            self.validate_string(forward.mailbox.as_str(), "mailbox")?;
            self.validate_string(forward.forward_to.as_str(), "forward target")?;
        }

        let result: DnsSetEmailForwardingResult = self
            .command("setEmailForwarding")
            .param("DomainName", parts.to_string())
            .params(forward_params(forwards))
            .cancel_on(cancel)
            .send()
            .await?;
        self.ensure_success("setEmailForwarding", &result.0)
    }

    pub async fn delete_all_email_forwarding(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        self.set_email_forwarding(domain, &[], cancel).await
    }

    /// Nameservers the domain is delegated to
    pub async fn get_list(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsListResult> {
        let parts = self.validate_domain(domain)?;
        self.command("getList")
            .param("SLD", parts.sld)
            .param("TLD", parts.tld)
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Delegate the domain to custom nameservers
    pub async fn set_custom(
        &self,
        domain: &str,
        nameservers: &[&str],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        let parts = self.validate_domain(domain)?;
        self.validate_not_empty(nameservers, "nameservers")?;
        let nameservers = nameservers
            .iter()
            .map(|ns| self.validate_string(*ns, "nameserver"))
            .collect::<NamecheapResult<Vec<_>>>()?;

        let result: DnsSetCustomResult = self
            .command("setCustom")
            .param("SLD", parts.sld)
            .param("TLD", parts.tld)
            .param("Nameservers", nameservers.join(","))
            .cancel_on(cancel)
            .send()
            .await?;
        self.ensure_success("setCustom", &result.0)
    }

    /// Point the domain back at Namecheap's own nameservers
    pub async fn set_default(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        let parts = self.validate_domain(domain)?;
        let result: DnsSetDefaultResult = self
            .command("setDefault")
            .param("SLD", parts.sld)
            .param("TLD", parts.tld)
            .cancel_on(cancel)
            .send()
            .await?;
        self.ensure_success("setDefault", &result.0)
    }
}

impl DomainClient for DnsClient {
    fn command_group(&self) -> &str {
        self.base.command_group()
    }
}

impl ValidationOperations for DnsClient {}

impl CommandOperations for DnsClient {
    fn namecheap(&self) -> &Namecheap {
        self.base.namecheap()
    }
}

#[async_trait]
impl DnsApi for DnsClient {
    async fn get_hosts(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsHostResult> {
        DnsClient::get_hosts(self, domain, cancel).await
    }

    async fn set_hosts(
        &self,
        domain: &str,
        hosts: &[HostEntry],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        DnsClient::set_hosts(self, domain, hosts, cancel).await
    }

    async fn get_email_forwarding(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsEmailForwardingResult> {
        DnsClient::get_email_forwarding(self, domain, cancel).await
    }

    async fn set_email_forwarding(
        &self,
        domain: &str,
        forwards: &[EmailForwarding],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        DnsClient::set_email_forwarding(self, domain, forwards, cancel).await
    }

    async fn delete_all_email_forwarding(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        DnsClient::delete_all_email_forwarding(self, domain, cancel).await
    }

    async fn get_list(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DnsListResult> {
        DnsClient::get_list(self, domain, cancel).await
    }

    async fn set_custom(
        &self,
        domain: &str,
        nameservers: &[&str],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        DnsClient::set_custom(self, domain, nameservers, cancel).await
    }

    async fn set_default(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<()> {
        DnsClient::set_default(self, domain, cancel).await
    }
}
