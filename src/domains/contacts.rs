//! Contact records used by `create`, `getContacts` and `setContacts`.

use crate::types::*;
use crate::utils::xml_extractor::{FromXml, XmlElement};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::fmt;

lazy_static! {
    static ref PHONE: Regex = Regex::new(r"^\+\d{1,3}\.\d{4,14}$").unwrap();
}

/// The four contact roles a domain carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContactRole {
    Registrant,
    Tech,
    Admin,
    AuxBilling,
}

impl ContactRole {
    pub const ALL: [ContactRole; 4] = [
        ContactRole::Registrant,
        ContactRole::Tech,
        ContactRole::Admin,
        ContactRole::AuxBilling,
    ];

    /// Parameter prefix and response element name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactRole::Registrant => "Registrant",
            ContactRole::Tech => "Tech",
            ContactRole::Admin => "Admin",
            ContactRole::AuxBilling => "AuxBilling",
        }
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal and electronic contact details for one role.
///
/// Phone and fax numbers use the `+CCC.NNNNNNNNNN` form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInformation {
    pub first_name: String,
    pub last_name: String,
    pub organization_name: Option<String>,
    pub job_title: Option<String>,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub state_province_choice: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub phone_ext: Option<String>,
    pub fax: Option<String>,
    pub email_address: String,
}

fn push_opt(params: &mut Vec<(String, String)>, name: String, value: &Option<String>) {
    if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        params.push((name, value.to_string()));
    }
}

impl ContactInformation {
    /// Check required fields and the phone format for one role
    pub fn validate(&self, role: ContactRole) -> NamecheapResult<()> {
        let required = [
            ("FirstName", &self.first_name),
            ("LastName", &self.last_name),
            ("Address1", &self.address1),
            ("City", &self.city),
            ("StateProvince", &self.state_province),
            ("PostalCode", &self.postal_code),
            ("Country", &self.country),
            ("Phone", &self.phone),
            ("EmailAddress", &self.email_address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(NamecheapError::ValidationError(format!(
                    "{}{} cannot be empty",
                    role, field
                )));
            }
        }

        if !PHONE.is_match(self.phone.trim()) {
            return Err(NamecheapError::ValidationError(format!(
                "{}Phone must look like +NNN.NNNNNNNNNN, got {}",
                role, self.phone
            )));
        }
        if let Some(fax) = self.fax.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
            if !PHONE.is_match(fax) {
                return Err(NamecheapError::ValidationError(format!(
                    "{}Fax must look like +NNN.NNNNNNNNNN, got {}",
                    role, fax
                )));
            }
        }
        if !self.email_address.contains('@') {
            return Err(NamecheapError::ValidationError(format!(
                "{}EmailAddress is not an email address: {}",
                role, self.email_address
            )));
        }
        Ok(())
    }

    /// Request parameters prefixed with the role, optional fields only when set
    pub fn to_params(&self, role: ContactRole) -> Vec<(String, String)> {
        let prefix = role.as_str();
        let name = |field: &str| format!("{}{}", prefix, field);
        let mut params = Vec::with_capacity(15);

        params.push((name("FirstName"), self.first_name.trim().to_string()));
        params.push((name("LastName"), self.last_name.trim().to_string()));
        push_opt(&mut params, name("OrganizationName"), &self.organization_name);
        push_opt(&mut params, name("JobTitle"), &self.job_title);
        params.push((name("Address1"), self.address1.trim().to_string()));
        push_opt(&mut params, name("Address2"), &self.address2);
        params.push((name("City"), self.city.trim().to_string()));
        params.push((name("StateProvince"), self.state_province.trim().to_string()));
        push_opt(&mut params, name("StateProvinceChoice"), &self.state_province_choice);
        params.push((name("PostalCode"), self.postal_code.trim().to_string()));
        params.push((name("Country"), self.country.trim().to_string()));
        params.push((name("Phone"), self.phone.trim().to_string()));
        push_opt(&mut params, name("PhoneExt"), &self.phone_ext);
        push_opt(&mut params, name("Fax"), &self.fax);
        params.push((name("EmailAddress"), self.email_address.trim().to_string()));
        params
    }

    fn from_xml(element: &XmlElement<'_, '_>) -> Self {
        let text = |name: &str| element.child_text(name).unwrap_or_default();
        Self {
            first_name: text("FirstName"),
            last_name: text("LastName"),
            organization_name: element.child_text("OrganizationName"),
            job_title: element.child_text("JobTitle"),
            address1: text("Address1"),
            address2: element.child_text("Address2"),
            city: text("City"),
            state_province: text("StateProvince"),
            state_province_choice: element.child_text("StateProvinceChoice"),
            postal_code: text("PostalCode"),
            country: text("Country"),
            phone: text("Phone"),
            phone_ext: element.child_text("PhoneExt"),
            fax: element.child_text("Fax"),
            email_address: text("EmailAddress"),
        }
    }
}

/// All four roles; none may be left out when setting contacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainContacts {
    pub registrant: ContactInformation,
    pub tech: ContactInformation,
    pub admin: ContactInformation,
    pub aux_billing: ContactInformation,
}

impl DomainContacts {
    /// Use one contact for every role
    pub fn same_for_all(contact: ContactInformation) -> Self {
        Self {
            registrant: contact.clone(),
            tech: contact.clone(),
            admin: contact.clone(),
            aux_billing: contact,
        }
    }

    pub fn get(&self, role: ContactRole) -> &ContactInformation {
        match role {
            ContactRole::Registrant => &self.registrant,
            ContactRole::Tech => &self.tech,
            ContactRole::Admin => &self.admin,
            ContactRole::AuxBilling => &self.aux_billing,
        }
    }

    pub fn validate(&self) -> NamecheapResult<()> {
        ContactRole::ALL
            .iter()
            .try_for_each(|role| self.get(*role).validate(*role))
    }

    pub fn to_params(&self) -> Vec<(String, String)> {
        ContactRole::ALL
            .iter()
            .flat_map(|role| self.get(*role).to_params(*role))
            .collect()
    }

    pub(crate) fn from_parent(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        let role = |role: ContactRole| {
            element
                .required_child(role.as_str())
                .map(|child| ContactInformation::from_xml(&child))
        };
        Ok(Self {
            registrant: role(ContactRole::Registrant)?,
            tech: role(ContactRole::Tech)?,
            admin: role(ContactRole::Admin)?,
            aux_billing: role(ContactRole::AuxBilling)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainContactsResult {
    pub domain: String,
    pub contacts: DomainContacts,
}

impl FromXml for DomainContactsResult {
    const ELEMENT: &'static str = "DomainContactsResult";

    fn from_xml(element: &XmlElement<'_, '_>) -> NamecheapResult<Self> {
        Ok(Self {
            domain: element.required_attr("Domain")?.to_string(),
            contacts: DomainContacts::from_parent(element)?,
        })
    }
}
