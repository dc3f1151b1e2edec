// Domains Client

use crate::client::Namecheap;
use crate::domains::contacts::{DomainContacts, DomainContactsResult};
use crate::domains::tld::TldListResult;
use crate::domains::{
    base::BaseDomainClient, CommandOperations, DomainClient, DomainsApi, ValidationOperations,
};
use crate::malformed_response;
use crate::types::*;
use crate::utils::xml_extractor::{ack_result, parse_bool, FromXml, XmlElement};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Most domains accepted by one `check` call
pub const MAX_CHECK_DOMAINS: usize = 50;

/// Registration and renewal periods accepted by the API
pub const MIN_YEARS: u8 = 1;
pub const MAX_YEARS: u8 = 10;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Availability of one domain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainCheckResult {
    pub domain: String,
    pub available: bool,
    pub error_no: Option<u32>,
    pub description: Option<String>,
    pub is_premium_name: bool,
    pub premium_registration_price: Option<f64>,
    pub premium_renewal_price: Option<f64>,
    pub premium_restore_price: Option<f64>,
    pub premium_transfer_price: Option<f64>,
    pub icann_fee: Option<f64>,
    pub eap_fee: Option<f64>,
}

impl FromXml for DomainCheckResult {
    const ELEMENT: &'static str = "DomainCheckResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            available: element.bool_attr("Available")?,
            error_no: element
                .opt_parse_attr::<u32>("ErrorNo")?
                .filter(|code| *code != 0),
            description: element.string_attr("Description"),
            is_premium_name: element.flag_attr("IsPremiumName")?,
            premium_registration_price: element.opt_parse_attr("PremiumRegistrationPrice")?,
            premium_renewal_price: element.opt_parse_attr("PremiumRenewalPrice")?,
            premium_restore_price: element.opt_parse_attr("PremiumRestorePrice")?,
            premium_transfer_price: element.opt_parse_attr("PremiumTransferPrice")?,
            icann_fee: element.opt_parse_attr("IcannFee")?,
            eap_fee: element.opt_parse_attr("EapFee")?,
        })
    }
}

/// Every `DomainCheckResult` of one `check` call, in response order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityResults(pub Vec<DomainCheckResult>);

impl AvailabilityResults {
    /// Result for one domain, matched case-insensitively
    pub fn get(&self, domain: &str) -> Option<&DomainCheckResult> {
        let domain = domain.trim();
        self.0.iter().find(|r| r.domain.eq_ignore_ascii_case(domain))
    }

    pub fn is_available(&self, domain: &str) -> Option<bool> {
        self.get(domain).map(|r| r.available)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DomainCheckResult> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<DomainCheckResult> {
        self.0
    }
}

impl IntoIterator for AvailabilityResults {
    type Item = DomainCheckResult;
    type IntoIter = std::vec::IntoIter<DomainCheckResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromXml for AvailabilityResults {
    const ELEMENT: &'static str = DomainCheckResult::ELEMENT;

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        DomainCheckResult::from_xml(element).map(|r| Self(vec![r]))
    }

    fn from_command_response(response: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let results = response
            .children(Self::ELEMENT)
            .iter()
            .map(DomainCheckResult::from_xml)
            .collect::<NamecheapResult<Vec<_>>>()?;
        if results.is_empty() {
            return Err(malformed_response!(
                response.command(),
                format!("expected at least one {} element", Self::ELEMENT)
            ));
        }
        Ok(Self(results))
    }
}

/// Registration order for a new domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCreateRequest {
    pub domain: String,
    pub years: u8,
    pub contacts: DomainContacts,
    pub nameservers: Vec<String>,
    pub promotion_code: Option<String>,
    pub add_free_whoisguard: bool,
    pub wg_enabled: bool,
}

impl DomainCreateRequest {
    /// One-year registration on Namecheap's default nameservers
    pub fn new(domain: impl Into<String>, contacts: DomainContacts) -> Self {
        Self {
            domain: domain.into(),
            years: MIN_YEARS,
            contacts,
            nameservers: Vec::new(),
            promotion_code: None,
            add_free_whoisguard: false,
            wg_enabled: false,
        }
    }

    pub fn with_years(mut self, years: u8) -> Self {
        self.years = years;
        self
    }

    pub fn with_nameservers<I, S>(mut self, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nameservers = nameservers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_promotion_code(mut self, code: impl Into<String>) -> Self {
        self.promotion_code = Some(code.into());
        self
    }

    /// Add the free WhoisGuard subscription and turn it on
    pub fn with_whoisguard(mut self, enabled: bool) -> Self {
        self.add_free_whoisguard = enabled;
        self.wg_enabled = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainCreateResult {
    pub domain: String,
    pub registered: bool,
    pub charged_amount: Option<f64>,
    pub domain_id: Option<u64>,
    pub order_id: Option<u64>,
    pub transaction_id: Option<u64>,
    pub whoisguard_enabled: bool,
    pub non_real_time_domain: bool,
}

impl FromXml for DomainCreateResult {
    const ELEMENT: &'static str = "DomainCreateResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            registered: element.bool_attr("Registered")?,
            charged_amount: element.opt_parse_attr("ChargedAmount")?,
            domain_id: element.opt_parse_attr("DomainID")?,
            order_id: element.opt_parse_attr("OrderID")?,
            transaction_id: element.opt_parse_attr("TransactionID")?,
            whoisguard_enabled: element.flag_attr("WhoisguardEnable")?,
            non_real_time_domain: element.flag_attr("NonRealTimeDomain")?,
        })
    }
}

/// Nameserver delegation reported by `getInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsDetails {
    pub provider_type: Option<String>,
    pub is_using_our_dns: bool,
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainInfoResult {
    pub id: Option<u64>,
    pub domain_name: String,
    pub owner_name: Option<String>,
    pub is_owner: bool,
    pub is_premium: bool,
    pub status: Option<String>,
    pub created: Option<String>,
    pub expires: Option<String>,
    pub whoisguard_enabled: bool,
    pub dns: Option<DnsDetails>,
}

impl FromXml for DomainInfoResult {
    const ELEMENT: &'static str = "DomainGetInfoResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let details = element.child("DomainDetails");
        let dns = match element.child("DnsDetails") {
            Some(dns) => Some(DnsDetails {
                provider_type: dns.string_attr("ProviderType"),
                is_using_our_dns: dns.flag_attr("IsUsingOurDNS")?,
                nameservers: dns
                    .children("Nameserver")
                    .iter()
                    .map(|ns| ns.text().to_string())
                    .filter(|ns| !ns.is_empty())
                    .collect(),
            }),
            None => None,
        };
        // Enabled is sometimes "NotAlloted" rather than a boolean
        let whoisguard_enabled = element
            .child("Whoisguard")
            .and_then(|wg| wg.attr("Enabled").and_then(parse_bool))
            .unwrap_or(false);

        Ok(Self {
            id: element.opt_parse_attr("ID")?,
            domain_name: element.required_attr("DomainName")?.to_string(),
            owner_name: element.string_attr("OwnerName"),
            is_owner: element.flag_attr("IsOwner")?,
            is_premium: element.flag_attr("IsPremium")?,
            status: element.string_attr("Status"),
            created: details.and_then(|d| d.child_text("CreatedDate")),
            expires: details.and_then(|d| d.child_text("ExpiredDate")),
            whoisguard_enabled,
            dns,
        })
    }
}

/// Which domains `getList` returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListType {
    All,
    Expiring,
    Expired,
}

impl ListType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListType::All => "ALL",
            ListType::Expiring => "EXPIRING",
            ListType::Expired => "EXPIRED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortBy {
    Name,
    NameDesc,
    ExpireDate,
    ExpireDateDesc,
    CreateDate,
    CreateDateDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "NAME",
            SortBy::NameDesc => "NAME_DESC",
            SortBy::ExpireDate => "EXPIREDATE",
            SortBy::ExpireDateDesc => "EXPIREDATE_DESC",
            SortBy::CreateDate => "CREATEDATE",
            SortBy::CreateDateDesc => "CREATEDATE_DESC",
        }
    }
}

/// Filters and paging for `getList`; unset fields use the API defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainListRequest {
    pub list_type: Option<ListType>,
    pub search_term: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<SortBy>,
}

impl DomainListRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_type(mut self, list_type: ListType) -> Self {
        self.list_type = Some(list_type);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// One row of `getList`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainSummary {
    pub id: u64,
    pub name: String,
    pub user: Option<String>,
    pub created: Option<String>,
    pub expires: Option<String>,
    pub is_expired: bool,
    pub is_locked: bool,
    pub auto_renew: bool,
    pub whoisguard: Option<String>,
    pub is_premium: bool,
    pub is_our_dns: bool,
}

impl FromXml for DomainSummary {
    const ELEMENT: &'static str = "Domain";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            id: element.parse_attr("ID")?,
            name: element.required_attr("Name")?.to_string(),
            user: element.string_attr("User"),
            created: element.string_attr("Created"),
            expires: element.string_attr("Expires"),
            is_expired: element.flag_attr("IsExpired")?,
            is_locked: element.flag_attr("IsLocked")?,
            auto_renew: element.flag_attr("AutoRenew")?,
            whoisguard: element.string_attr("WhoisGuard"),
            is_premium: element.flag_attr("IsPremium")?,
            is_our_dns: element.flag_attr("IsOurDNS")?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub total_items: u32,
    pub current_page: u32,
    pub page_size: u32,
}

impl FromXml for Paging {
    const ELEMENT: &'static str = "Paging";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let number = |name: &str| -> NamecheapResult<u32> {
            let raw = element.child_text(name).unwrap_or_default();
            raw.parse::<u32>().map_err(|_| {
                malformed_response!(
                    element.command(),
                    format!("Paging/{} is not a number: '{}'", name, raw)
                )
            })
        };
        Ok(Self {
            total_items: number("TotalItems")?,
            current_page: number("CurrentPage")?,
            page_size: number("PageSize")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainListResult {
    pub domains: Vec<DomainSummary>,
    pub paging: Option<Paging>,
}

impl FromXml for DomainListResult {
    const ELEMENT: &'static str = "DomainGetListResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let domains = element
            .children(DomainSummary::ELEMENT)
            .iter()
            .map(DomainSummary::from_xml)
            .collect::<NamecheapResult<Vec<_>>>()?;
        let paging = match element.sibling(Paging::ELEMENT) {
            Some(paging) => Some(Paging::from_xml(&paging)?),
            None => None,
        };
        Ok(Self { domains, paging })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainRenewResult {
    pub domain_name: String,
    pub domain_id: Option<u64>,
    pub renewed: bool,
    pub charged_amount: Option<f64>,
    pub order_id: Option<u64>,
    pub transaction_id: Option<u64>,
    pub expires: Option<String>,
}

impl FromXml for DomainRenewResult {
    const ELEMENT: &'static str = "DomainRenewResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            domain_name: element.required_attr("DomainName")?.to_string(),
            domain_id: element.opt_parse_attr("DomainID")?,
            renewed: element.bool_attr("Renew")?,
            charged_amount: element.opt_parse_attr("ChargedAmount")?,
            order_id: element.opt_parse_attr("OrderID")?,
            transaction_id: element.opt_parse_attr("TransactionID")?,
            expires: element
                .child("DomainDetails")
                .and_then(|d| d.child_text("ExpiredDate")),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReactivateResult {
    pub domain: String,
    pub is_success: bool,
    pub charged_amount: Option<f64>,
    pub order_id: Option<u64>,
    pub transaction_id: Option<u64>,
    pub domain_id: Option<u64>,
}

impl FromXml for DomainReactivateResult {
    const ELEMENT: &'static str = "DomainReactivateResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let domain = element.attr_any(&["Domain", "DomainName"]).ok_or_else(|| {
            malformed_response!(
                element.command(),
                "missing attribute Domain on DomainReactivateResult"
            )
        })?;
        Ok(Self {
            domain: domain.to_string(),
            is_success: element.bool_attr("IsSuccess")?,
            charged_amount: element.opt_parse_attr("ChargedAmount")?,
            order_id: element.opt_parse_attr("OrderID")?,
            transaction_id: element.opt_parse_attr("TransactionID")?,
            domain_id: element.opt_parse_attr("DomainID")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRegistrarLockResult {
    pub domain: String,
    pub locked: bool,
}

impl FromXml for DomainRegistrarLockResult {
    const ELEMENT: &'static str = "DomainGetRegistrarLockResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            locked: element.bool_attr("RegistrarLockStatus")?,
        })
    }
}

ack_result!(DomainSetRegistrarLockResult, "DomainSetRegistrarLockResult");
ack_result!(DomainSetContactsResult, "DomainSetContactResult");

/// Client for the `namecheap.domains` command group
pub struct DomainsClient {
    base: BaseDomainClient,
}

impl DomainsClient {
    pub(crate) fn new(namecheap: Arc<Namecheap>) -> Self {
        Self {
            base: BaseDomainClient::new(namecheap, "namecheap.domains"),
        }
    }

    /// Check availability of up to 50 domains.
    ///
    /// Blank entries are rejected rather than dropped, so every result can
    /// be traced back to an input.
    pub async fn are_available(
        &self,
        domains: &[&str],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<AvailabilityResults> {
        self.validate_not_empty(domains, "domains")?;
        if domains.len() > MAX_CHECK_DOMAINS {
            return self.validation_error(format!(
                "at most {} domains can be checked at once, got {}",
                MAX_CHECK_DOMAINS,
                domains.len()
            ));
        }
        let names = domains
            .iter()
            .map(|d| self.validate_domain(d).map(|parts| parts.to_string()))
            .collect::<NamecheapResult<Vec<_>>>()?;

        self.command("check")
            .param("DomainList", names.join(","))
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Register a domain
    pub async fn create(
        &self,
        request: &DomainCreateRequest,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainCreateResult> {
        let parts = self.validate_domain(&request.domain)?;
        let years = self.validate_range(request.years, MIN_YEARS, MAX_YEARS, "years")?;
        request.contacts.validate()?;
        let nameservers = request
            .nameservers
            .iter()
            .map(|ns| self.validate_string(ns.as_str(), "nameserver"))
            .collect::<NamecheapResult<Vec<_>>>()?;

        let mut builder = self
            .command("create")
            .param("DomainName", parts.to_string())
            .param("Years", years.to_string())
            .param_opt(
                "PromotionCode",
                request
                    .promotion_code
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty()),
            );
        if !nameservers.is_empty() {
            builder = builder.param("Nameservers", nameservers.join(","));
        }

        builder
            .param("AddFreeWhoisguard", yes_no(request.add_free_whoisguard))
            .param("WGEnabled", yes_no(request.wg_enabled))
            .params(request.contacts.to_params())
            .cancel_on(cancel)
            .send()
            .await
    }

    pub async fn get_contacts(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainContactsResult> {
        let parts = self.validate_domain(domain)?;
        self.command("getContacts")
            .param("DomainName", parts.to_string())
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Replace all four contacts of a domain
    pub async fn set_contacts(
        &self,
        domain: &str,
        contacts: &DomainContacts,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        let parts = self.validate_domain(domain)?;
        contacts.validate()?;

        let result: DomainSetContactsResult = self
            .command("setContacts")
            .param("DomainName", parts.to_string())
            .params(contacts.to_params())
            .cancel_on(cancel)
            .send()
            .await?;
        self.ensure_success("setContacts", &result.0)
    }

    pub async fn get_info(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainInfoResult> {
        let parts = self.validate_domain(domain)?;
        self.command("getInfo")
            .param("DomainName", parts.to_string())
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Domains in the account, one page at a time
    pub async fn get_list(
        &self,
        request: &DomainListRequest,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainListResult> {
        if let Some(page) = request.page {
            self.validate_range(page, 1, u32::MAX, "page")?;
        }
        if let Some(page_size) = request.page_size {
            self.validate_range(page_size, 10, 100, "page size")?;
        }

        self.command("getList")
            .param_opt("ListType", request.list_type.map(|t| t.as_str()))
            .param_opt(
                "SearchTerm",
                request
                    .search_term
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty()),
            )
            .param_opt("Page", request.page.map(|p| p.to_string()))
            .param_opt("PageSize", request.page_size.map(|p| p.to_string()))
            .param_opt("SortBy", request.sort_by.map(|s| s.as_str()))
            .cancel_on(cancel)
            .send()
            .await
    }

    /// `true` when the domain is locked against transfer
    pub async fn get_registrar_lock(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<bool> {
        let parts = self.validate_domain(domain)?;
        let result: DomainRegistrarLockResult = self
            .command("getRegistrarLock")
            .param("DomainName", parts.to_string())
            .cancel_on(cancel)
            .send()
            .await?;
        Ok(result.locked)
    }

    pub async fn set_registrar_lock(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        self.lock_action(domain, "LOCK", cancel).await
    }

    pub async fn set_registrar_unlock(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        self.lock_action(domain, "UNLOCK", cancel).await
    }

    async fn lock_action(
        &self,
        domain: &str,
        action: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        let parts = self.validate_domain(domain)?;
        let result: DomainSetRegistrarLockResult = self
            .command("setRegistrarLock")
            .param("DomainName", parts.to_string())
            .param("LockAction", action)
            .cancel_on(cancel)
            .send()
            .await?;
        self.ensure_success("setRegistrarLock", &result.0)
    }

    pub async fn get_tld_list(&self, cancel: Option<CancellationToken>) -> NamecheapResult<TldListResult> {
        self.command("getTldList").cancel_on(cancel).send().await
    }

    pub async fn renew(
        &self,
        domain: &str,
        years: u8,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainRenewResult> {
        let parts = self.validate_domain(domain)?;
        let years = self.validate_range(years, MIN_YEARS, MAX_YEARS, "years")?;
        self.command("renew")
            .param("DomainName", parts.to_string())
            .param("Years", years.to_string())
            .cancel_on(cancel)
            .send()
            .await
    }

    /// Reactivate an expired domain
    pub async fn reactivate(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainReactivateResult> {
        let parts = self.validate_domain(domain)?;
        self.command("reactivate")
            .param("DomainName", parts.to_string())
            .cancel_on(cancel)
            .send()
            .await
    }
}

impl DomainClient for DomainsClient {
    fn command_group(&self) -> &str {
        self.base.command_group()
    }
}

impl ValidationOperations for DomainsClient {}

impl CommandOperations for DomainsClient {
    fn namecheap(&self) -> &Namecheap {
        self.base.namecheap()
    }
}

#[async_trait]
impl DomainsApi for DomainsClient {
    async fn are_available(
        &self,
        domains: &[&str],
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<AvailabilityResults> {
        DomainsClient::are_available(self, domains, cancel).await
    }

    async fn create(
        &self,
        request: &DomainCreateRequest,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainCreateResult> {
        DomainsClient::create(self, request, cancel).await
    }

    async fn get_contacts(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainContactsResult> {
        DomainsClient::get_contacts(self, domain, cancel).await
    }

    async fn set_contacts(
        &self,
        domain: &str,
        contacts: &DomainContacts,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<()> {
        DomainsClient::set_contacts(self, domain, contacts, cancel).await
    }

    async fn get_info(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainInfoResult> {
        DomainsClient::get_info(self, domain, cancel).await
    }

    async fn get_list(
        &self,
        request: &DomainListRequest,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainListResult> {
        DomainsClient::get_list(self, request, cancel).await
    }

    async fn get_registrar_lock(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<bool> {
        DomainsClient::get_registrar_lock(self, domain, cancel).await
    }

    async fn set_registrar_lock(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<()> {
        DomainsClient::set_registrar_lock(self, domain, cancel).await
    }

    async fn set_registrar_unlock(&self, domain: &str, cancel: Option<CancellationToken>) -> NamecheapResult<()> {
        DomainsClient::set_registrar_unlock(self, domain, cancel).await
    }

    async fn get_tld_list(&self, cancel: Option<CancellationToken>) -> NamecheapResult<TldListResult> {
        DomainsClient::get_tld_list(self, cancel).await
    }

    async fn renew(
        &self,
        domain: &str,
        years: u8,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainRenewResult> {
        DomainsClient::renew(self, domain, years, cancel).await
    }

    async fn reactivate(
        &self,
        domain: &str,
        cancel: Option<CancellationToken>,
    ) -> NamecheapResult<DomainReactivateResult> {
        DomainsClient::reactivate(self, domain, cancel).await
    }
}
