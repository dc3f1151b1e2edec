// TLD catalogue

use crate::types::*;
use crate::utils::xml_extractor::{FromXml, XmlElement};
use serde::Serialize;

/// One TLD and what the API allows for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tld {
    pub name: String,
    pub description: String,
    pub tld_type: Option<String>,
    pub category: Option<String>,
    pub non_real_time: bool,
    pub min_register_years: Option<u8>,
    pub max_register_years: Option<u8>,
    pub min_renew_years: Option<u8>,
    pub max_renew_years: Option<u8>,
    pub min_transfer_years: Option<u8>,
    pub max_transfer_years: Option<u8>,
    pub is_api_registerable: bool,
    pub is_api_renewable: bool,
    pub is_api_transferable: bool,
    pub is_epp_required: bool,
    pub is_disable_mod_contact: bool,
    pub is_supports_idn: bool,
}

impl FromXml for Tld {
    const ELEMENT: &'static str = "Tld";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            name: element.required_attr("Name")?.to_string(),
            description: element.text().to_string(),
            tld_type: element.string_attr("Type"),
            category: element.string_attr("Category"),
            non_real_time: element.flag_attr("NonRealTime")?,
            min_register_years: element.opt_parse_attr("MinRegisterYears")?,
            max_register_years: element.opt_parse_attr("MaxRegisterYears")?,
            min_renew_years: element.opt_parse_attr("MinRenewYears")?,
            max_renew_years: element.opt_parse_attr("MaxRenewYears")?,
            min_transfer_years: element.opt_parse_attr("MinTransferYears")?,
            max_transfer_years: element.opt_parse_attr("MaxTransferYears")?,
            is_api_registerable: element.flag_attr("IsApiRegisterable")?,
            is_api_renewable: element.flag_attr("IsApiRenewable")?,
            is_api_transferable: element.flag_attr("IsApiTransferable")?,
            is_epp_required: element.flag_attr("IsEppRequired")?,
            is_disable_mod_contact: element.flag_attr("IsDisableModContact")?,
            is_supports_idn: element.flag_attr("IsSupportsIDN")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TldListResult {
    pub tlds: Vec<Tld>,
}

impl TldListResult {
    /// Look up a TLD by name, with or without the leading dot
    pub fn find(&self, name: &str) -> Option<&Tld> {
        let name = name.trim().trim_start_matches('.');
        self.tlds.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// TLDs that can be registered through the API
    pub fn registerable(&self) -> impl Iterator<Item = &Tld> {
        self.tlds.iter().filter(|t| t.is_api_registerable)
    }
}

impl FromXml for TldListResult {
    const ELEMENT: &'static str = "Tlds";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let tlds = element
            .children(Tld::ELEMENT)
            .iter()
            .map(Tld::from_xml)
            .collect::<NamecheapResult<Vec<_>>>()?;
        Ok(Self { tlds })
    }
}
