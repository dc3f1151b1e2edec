use namecheap_rs::domains::{
    ContactInformation, ContactRole, DomainContacts, DomainCreateRequest, DomainListRequest,
    DomainsApi, ListType, SortBy,
};
use namecheap_rs::NamecheapError;
use pretty_assertions::assert_eq;


use test_helpers::{
    capture_request, client_for, client_for_url, command_param_names, mock_command,
    offline_client, ok_envelope, raw_query_pairs,
};

const CHECK: &str = "namecheap.domains.check";
const GET_INFO: &str = "namecheap.domains.getInfo";
const GET_LIST: &str = "namecheap.domains.getList";
const GET_LOCK: &str = "namecheap.domains.getRegistrarLock";
const SET_LOCK: &str = "namecheap.domains.setRegistrarLock";
const CREATE: &str = "namecheap.domains.create";
const RENEW: &str = "namecheap.domains.renew";
const REACTIVATE: &str = "namecheap.domains.reactivate";
const GET_CONTACTS: &str = "namecheap.domains.getContacts";
const SET_CONTACTS: &str = "namecheap.domains.setContacts";
const GET_TLDS: &str = "namecheap.domains.getTldList";

fn contact() -> ContactInformation {
    ContactInformation {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        address1: "1 Compiler Ave".into(),
        city: "Arlington".into(),
        state_province: "VA".into(),
        postal_code: "22201".into(),
        country: "US".into(),
        phone: "+1.5555550100".into(),
        email_address: "grace@example.org".into(),
        ..Default::default()
    }
}

fn contact_xml(role: &str, first_name: &str) -> String {
    format!(
        r#"<{role} read-only="false">
        <OrganizationName />
        <JobTitle />
        <FirstName>{first}</FirstName>
        <LastName>Hopper</LastName>
        <Address1>1 Compiler Ave</Address1>
        <Address2 />
        <City>Arlington</City>
        <StateProvince>VA</StateProvince>
        <StateProvinceChoice>S</StateProvinceChoice>
        <PostalCode>22201</PostalCode>
        <Country>US</Country>
        <Phone>+1.5555550100</Phone>
        <Fax />
        <EmailAddress>grace@example.org</EmailAddress>
        <PhoneExt />
      </{role}>"#,
        role = role,
        first = first_name
    )
}

#[tokio::test]
async fn test_are_available_attributes_each_result_to_its_domain() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_command(
        &mut server,
        CHECK,
        &[("DomainList", "google.com,fresh-name-90210.net")],
        ok_envelope(
            CHECK,
            r#"<DomainCheckResult Domain="fresh-name-90210.net" Available="true" ErrorNo="0" Description="" IsPremiumName="false" PremiumRegistrationPrice="0" />
    <DomainCheckResult Domain="google.com" Available="false" ErrorNo="0" Description="" IsPremiumName="false" PremiumRegistrationPrice="0" />"#,
        ),
    )
    .await;

    let results = client_for(&server)
        .domains()
        .are_available(&["google.com", "fresh-name-90210.net"], None)
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(results.len(), 2);
    assert_eq!(results.is_available("GOOGLE.COM"), Some(false));
    assert_eq!(results.is_available("fresh-name-90210.net"), Some(true));
    assert_eq!(results.get("google.com").unwrap().error_no, None);
    assert!(results.get("example.org").is_none());
}

#[tokio::test]
async fn test_are_available_validates_before_sending() {
    let domains = offline_client().domains();

    let too_many: Vec<String> = (0..51).map(|i| format!("name{}.com", i)).collect();
    let too_many: Vec<&str> = too_many.iter().map(String::as_str).collect();
    let err = domains.are_available(&too_many, None).await.unwrap_err();
    assert!(matches!(err, NamecheapError::ValidationError(ref m) if m.contains("50")));

    let err = domains
        .are_available(&["example.com", "  "], None)
        .await
        .unwrap_err();
    assert!(matches!(err, NamecheapError::ValidationError(_)));

    let err = domains.are_available(&[], None).await.unwrap_err();
    assert!(matches!(err, NamecheapError::ValidationError(_)));
}

#[tokio::test]
async fn test_registrar_lock_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let lock = mock_command(
        &mut server,
        SET_LOCK,
        &[("DomainName", "example.com"), ("LockAction", "LOCK")],
        ok_envelope(
            SET_LOCK,
            r#"<DomainSetRegistrarLockResult Domain="example.com" IsSuccess="true" />"#,
        ),
    )
    .await;
    let unlock = mock_command(
        &mut server,
        SET_LOCK,
        &[("DomainName", "example.com"), ("LockAction", "UNLOCK")],
        ok_envelope(
            SET_LOCK,
            r#"<DomainSetRegistrarLockResult Domain="example.com" IsSuccess="true" />"#,
        ),
    )
    .await;
    let status = mock_command(
        &mut server,
        GET_LOCK,
        &[("DomainName", "example.com")],
        ok_envelope(
            GET_LOCK,
            r#"<DomainGetRegistrarLockResult Domain="example.com" RegistrarLockStatus="true" />"#,
        ),
    )
    .await;

    let domains = client_for(&server).domains();
    domains.set_registrar_lock("example.com", None).await.unwrap();
    assert!(domains.get_registrar_lock("example.com", None).await.unwrap());
    domains.set_registrar_unlock("example.com", None).await.unwrap();

    lock.assert_async().await;
    unlock.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_get_info_decodes_nested_details() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_command(
        &mut server,
        GET_INFO,
        &[("DomainName", "example.com")],
        ok_envelope(
            GET_INFO,
            r#"<DomainGetInfoResult Status="Ok" ID="57579" DomainName="example.com" OwnerName="apiuser" IsOwner="true" IsPremium="false">
      <DomainDetails>
        <CreatedDate>02/15/2016</CreatedDate>
        <ExpiredDate>02/15/2027</ExpiredDate>
        <NumYears>0</NumYears>
      </DomainDetails>
      <LockDetails />
      <Whoisguard Enabled="True">
        <ID>53536</ID>
      </Whoisguard>
      <DnsDetails ProviderType="CUSTOM" IsUsingOurDNS="false" HostCount="2" EmailType="FWD">
        <Nameserver>ns1.example.net</Nameserver>
        <Nameserver>ns2.example.net</Nameserver>
      </DnsDetails>
    </DomainGetInfoResult>"#,
        ),
    )
    .await;

    let info = client_for(&server)
        .domains()
        .get_info("example.com", None)
        .await
        .unwrap();
    assert_eq!(info.id, Some(57579));
    assert_eq!(info.domain_name, "example.com");
    assert!(info.is_owner);
    assert!(info.whoisguard_enabled);
    assert_eq!(info.created.as_deref(), Some("02/15/2016"));
    assert_eq!(info.expires.as_deref(), Some("02/15/2027"));
    let dns = info.dns.unwrap();
    assert_eq!(dns.provider_type.as_deref(), Some("CUSTOM"));
    assert!(!dns.is_using_our_dns);
    assert_eq!(dns.nameservers, vec!["ns1.example.net", "ns2.example.net"]);
}

#[tokio::test]
async fn test_get_list_sends_filters_and_decodes_paging() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_command(
        &mut server,
        GET_LIST,
        &[
            ("ListType", "EXPIRING"),
            ("SearchTerm", "shop"),
            ("Page", "2"),
            ("PageSize", "20"),
            ("SortBy", "EXPIREDATE_DESC"),
        ],
        ok_envelope(
            GET_LIST,
            r#"<DomainGetListResult>
      <Domain ID="127" Name="shop-one.com" User="apiuser" Created="02/15/2016" Expires="02/15/2027" IsExpired="false" IsLocked="true" AutoRenew="false" WhoisGuard="ENABLED" IsPremium="false" IsOurDNS="true" />
      <Domain ID="128" Name="shop-two.net" User="apiuser" Created="03/01/2017" Expires="03/01/2027" IsExpired="false" IsLocked="false" AutoRenew="true" WhoisGuard="NOTPRESENT" IsPremium="false" IsOurDNS="false" />
    </DomainGetListResult>
    <Paging>
      <TotalItems>22</TotalItems>
      <CurrentPage>2</CurrentPage>
      <PageSize>20</PageSize>
    </Paging>"#,
        ),
    )
    .await;

    let request = DomainListRequest::new()
        .list_type(ListType::Expiring)
        .search("shop")
        .page(2, 20)
        .sort_by(SortBy::ExpireDateDesc);
    let result = client_for(&server)
        .domains()
        .get_list(&request, None)
        .await
        .unwrap();
    mock.assert_async().await;

    let names: Vec<&str> = result.domains.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["shop-one.com", "shop-two.net"]);
    assert!(result.domains[0].is_locked);
    assert!(result.domains[1].auto_renew);
    let paging = result.paging.unwrap();
    assert_eq!((paging.total_items, paging.current_page, paging.page_size), (22, 2, 20));
}

#[tokio::test]
async fn test_get_list_rejects_out_of_range_page_size() {
    let request = DomainListRequest::new().page(1, 500);
    let err = offline_client()
        .domains()
        .get_list(&request, None)
        .await
        .unwrap_err();
    assert!(matches!(err, NamecheapError::ValidationError(_)));
}

#[tokio::test]
async fn test_create_sends_order_then_contact_blocks() {
    let body = ok_envelope(
        CREATE,
        r#"<DomainCreateResult Domain="fresh-name-90210.net" Registered="true" ChargedAmount="20.1500" DomainID="9007" OrderID="196074" TransactionID="380716" WhoisguardEnable="false" NonRealTimeDomain="false" />"#,
    );
    let (url, captured) = capture_request(200, body).await;

    let request = DomainCreateRequest::new("fresh-name-90210.net", DomainContacts::same_for_all(contact()))
        .with_years(2)
        .with_nameservers(["ns1.example.net", "ns2.example.net"]);
    let result = client_for_url(&url)
        .domains()
        .create(&request, None)
        .await
        .unwrap();

    assert!(result.registered);
    assert_eq!(result.order_id, Some(196074));
    assert_eq!(result.charged_amount, Some(20.15));

    let target = captured.await.unwrap();
    let names = command_param_names(&target);
    assert_eq!(
        &names[..5],
        &["DomainName", "Years", "Nameservers", "AddFreeWhoisguard", "WGEnabled"]
    );
    for role in ContactRole::ALL {
        assert!(names.contains(&format!("{}EmailAddress", role)));
    }
    assert!(!names.iter().any(|n| n == "PromotionCode"));

    let pairs = raw_query_pairs(&target);
    assert!(pairs.contains(&("Nameservers".to_string(), "ns1.example.net%2Cns2.example.net".to_string())));
    assert!(pairs.contains(&("RegistrantPhone".to_string(), "%2B1.5555550100".to_string())));
}

#[tokio::test]
async fn test_create_validates_years_and_contacts() {
    let domains = offline_client().domains();

    let request = DomainCreateRequest::new("example.com", DomainContacts::same_for_all(contact()))
        .with_years(11);
    assert!(matches!(
        domains.create(&request, None).await.unwrap_err(),
        NamecheapError::ValidationError(_)
    ));

    let mut contacts = DomainContacts::same_for_all(contact());
    contacts.admin.email_address = String::new();
    let request = DomainCreateRequest::new("example.com", contacts);
    let err = domains.create(&request, None).await.unwrap_err();
    assert!(err.to_string().contains("AdminEmailAddress"));
}

#[tokio::test]
async fn test_get_contacts_decodes_every_role() {
    let mut server = mockito::Server::new_async().await;
    let inner = format!(
        r#"<DomainContactsResult Domain="example.com" domainnameid="3152456">{}{}{}{}</DomainContactsResult>"#,
        contact_xml("Registrant", "Grace"),
        contact_xml("Tech", "Alan"),
        contact_xml("Admin", "Edsger"),
        contact_xml("AuxBilling", "Barbara"),
    );
    let _mock = mock_command(
        &mut server,
        GET_CONTACTS,
        &[("DomainName", "example.com")],
        ok_envelope(GET_CONTACTS, &inner),
    )
    .await;

    let result = client_for(&server)
        .domains()
        .get_contacts("example.com", None)
        .await
        .unwrap();
    assert_eq!(result.domain, "example.com");
    assert_eq!(result.contacts.tech.first_name, "Alan");
    assert_eq!(result.contacts.aux_billing.first_name, "Barbara");
    assert_eq!(result.contacts.registrant.phone, "+1.5555550100");
    assert_eq!(result.contacts.registrant.state_province_choice.as_deref(), Some("S"));
    assert_eq!(result.contacts.admin.fax, None);
}

#[tokio::test]
async fn test_get_contacts_missing_role_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let inner = format!(
        r#"<DomainContactsResult Domain="example.com">{}{}{}</DomainContactsResult>"#,
        contact_xml("Registrant", "Grace"),
        contact_xml("Tech", "Alan"),
        contact_xml("Admin", "Edsger"),
    );
    let _mock = mock_command(&mut server, GET_CONTACTS, &[], ok_envelope(GET_CONTACTS, &inner)).await;

    let err = client_for(&server)
        .domains()
        .get_contacts("example.com", None)
        .await
        .unwrap_err();
    assert!(matches!(err, NamecheapError::MalformedResponse { ref message, .. } if message.contains("AuxBilling")));
}

#[tokio::test]
async fn test_set_contacts_sends_all_four_roles() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_command(
        &mut server,
        SET_CONTACTS,
        &[
            ("DomainName", "example.com"),
            ("RegistrantFirstName", "Grace"),
            ("TechFirstName", "Grace"),
            ("AdminFirstName", "Grace"),
            ("AuxBillingFirstName", "Grace"),
            ("AuxBillingPhone", "+1.5555550100"),
        ],
        ok_envelope(
            SET_CONTACTS,
            r#"<DomainSetContactResult Domain="example.com" IsSuccess="true" />"#,
        ),
    )
    .await;

    client_for(&server)
        .domains()
        .set_contacts("example.com", &DomainContacts::same_for_all(contact()), None)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_renew_and_reactivate() {
    let mut server = mockito::Server::new_async().await;
    let renew = mock_command(
        &mut server,
        RENEW,
        &[("DomainName", "example.com"), ("Years", "3")],
        ok_envelope(
            RENEW,
            r#"<DomainRenewResult DomainName="example.com" DomainID="151378" Renew="true" OrderID="82955" TransactionID="51906" ChargedAmount="650.0000">
      <DomainDetails>
        <ExpiredDate>11/03/2030 08:15:57</ExpiredDate>
        <NumYears>0</NumYears>
      </DomainDetails>
    </DomainRenewResult>"#,
        ),
    )
    .await;
    let reactivate = mock_command(
        &mut server,
        REACTIVATE,
        &[("DomainName", "example.com")],
        ok_envelope(
            REACTIVATE,
            r#"<DomainReactivateResult Domain="example.com" IsSuccess="true" ChargedAmount="650.0000" OrderID="23569" TransactionID="25080" />"#,
        ),
    )
    .await;

    let domains = client_for(&server).domains();
    let renewed = domains.renew("example.com", 3, None).await.unwrap();
    assert!(renewed.renewed);
    assert_eq!(renewed.domain_id, Some(151378));
    assert_eq!(renewed.expires.as_deref(), Some("11/03/2030 08:15:57"));

    let reactivated = domains.reactivate("example.com", None).await.unwrap();
    assert!(reactivated.is_success);
    assert_eq!(reactivated.domain, "example.com");
    assert_eq!(reactivated.order_id, Some(23569));

    renew.assert_async().await;
    reactivate.assert_async().await;

    let err = domains.renew("example.com", 0, None).await.unwrap_err();
    assert!(matches!(err, NamecheapError::ValidationError(_)));
}

#[tokio::test]
async fn test_get_tld_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_command(
        &mut server,
        GET_TLDS,
        &[],
        ok_envelope(
            GET_TLDS,
            r#"<Tlds>
      <Tld Name="biz" NonRealTime="false" MinRegisterYears="1" MaxRegisterYears="10" MinRenewYears="1" MaxRenewYears="10" MinTransferYears="1" MaxTransferYears="10" IsApiRegisterable="true" IsApiRenewable="true" IsApiTransferable="false" IsEppRequired="false" IsDisableModContact="false" IsDisableWGAllot="false" IsIncludeInExtendedSearchOnly="false" SequenceNumber="5" Type="GTLD" IsSupportsIDN="false" Category="P">US Business</Tld>
      <Tld Name="co.uk" NonRealTime="false" MinRegisterYears="1" MaxRegisterYears="10" IsApiRegisterable="false" Type="CCTLD" Category="A">United Kingdom</Tld>
    </Tlds>"#,
        ),
    )
    .await;

    let tlds = client_for(&server).domains().get_tld_list(None).await.unwrap();
    assert_eq!(tlds.tlds.len(), 2);
    let biz = tlds.find(".BIZ").unwrap();
    assert_eq!(biz.description, "US Business");
    assert_eq!(biz.max_register_years, Some(10));
    assert!(biz.is_api_registerable);
    assert!(!biz.is_api_transferable);
    assert_eq!(tlds.registerable().count(), 1);
    assert_eq!(tlds.find("co.uk").unwrap().min_renew_years, None);
}

#[tokio::test]
async fn test_domains_client_is_usable_through_the_capability_trait() {
    let mut server = mockito::Server::new_async().await;
    let _mock = mock_command(
        &mut server,
        GET_LOCK,
        &[("DomainName", "example.com")],
        ok_envelope(
            GET_LOCK,
            r#"<DomainGetRegistrarLockResult Domain="example.com" RegistrarLockStatus="false" />"#,
        ),
    )
    .await;

    let domains: std::sync::Arc<dyn DomainsApi> = client_for(&server).domains();
    assert!(!domains.get_registrar_lock("example.com", None).await.unwrap());
}
