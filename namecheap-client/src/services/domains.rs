//! `namecheap.domains.*` commands.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{command, insert_opt, yes_no};
use crate::error::{Result, ValidationError};

/// `Page` lower bound.
const MIN_PAGE: u32 = 1;
/// `PageSize` bounds.
const MIN_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;
/// `Years` bounds for renewals.
const MIN_RENEW_YEARS: u32 = 1;
const MAX_RENEW_YEARS: u32 = 10;

service!(
    /// Domain listing, registration and lifecycle commands.
    DomainsService
);

// ============ Arguments ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    All,
    Expiring,
    Expired,
}

impl ListType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Expiring => "EXPIRING",
            Self::Expired => "EXPIRED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    NameDesc,
    ExpireDate,
    ExpireDateDesc,
    CreateDate,
    CreateDateDesc,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::NameDesc => "NAME_DESC",
            Self::ExpireDate => "EXPIREDATE",
            Self::ExpireDateDesc => "EXPIREDATE_DESC",
            Self::CreateDate => "CREATEDATE",
            Self::CreateDateDesc => "CREATEDATE_DESC",
        }
    }
}

/// Filters of `namecheap.domains.getList`. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainsGetListArgs {
    pub list_type: Option<ListType>,
    pub search_term: Option<String>,
    /// 1-based.
    pub page: Option<u32>,
    /// 10..=100.
    pub page_size: Option<u32>,
    pub sort_by: Option<SortBy>,
}

impl DomainsGetListArgs {
    fn to_params(&self) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
        let mut params = BTreeMap::new();

        if let Some(page) = self.page
            && page < MIN_PAGE
        {
            return Err(ValidationError::invalid(
                "Page",
                format!("{page}, minimum value is {MIN_PAGE}"),
            ));
        }
        if let Some(page_size) = self.page_size
            && !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size)
        {
            return Err(ValidationError::invalid(
                "PageSize",
                format!(
                    "{page_size}, minimum value is {MIN_PAGE_SIZE}, and maximum value is {MAX_PAGE_SIZE}"
                ),
            ));
        }

        insert_opt(&mut params, "ListType", self.list_type.map(ListType::as_str));
        insert_opt(&mut params, "SearchTerm", self.search_term.as_deref());
        insert_opt(&mut params, "Page", self.page);
        insert_opt(&mut params, "PageSize", self.page_size);
        insert_opt(&mut params, "SortBy", self.sort_by.map(SortBy::as_str));
        Ok(params)
    }
}

/// Contact block of a registration. `Registrant`, `Tech`, `Admin` and `AuxBilling`
/// each need one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub state_province_choice: Option<String>,
    pub postal_code: String,
    pub country: String,
    /// `+NNN.NNNNNNNNNN`
    pub phone: String,
    pub phone_ext: Option<String>,
    pub fax: Option<String>,
    pub email_address: String,
    pub organization_name: Option<String>,
    pub job_title: Option<String>,
}

impl ContactInfo {
    fn validate(&self, prefix: &str) -> std::result::Result<(), ValidationError> {
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
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::missing(format!("{prefix}{field}"))),
            None => Ok(()),
        }
    }

    fn add_to_params(&self, params: &mut BTreeMap<String, String>, prefix: &str) {
        let mut put = |field: &str, value: Option<&str>| {
            insert_opt(params, &format!("{prefix}{field}"), value);
        };
        put("FirstName", Some(self.first_name.as_str()));
        put("LastName", Some(self.last_name.as_str()));
        put("Address1", Some(self.address1.as_str()));
        put("Address2", self.address2.as_deref());
        put("City", Some(self.city.as_str()));
        put("StateProvince", Some(self.state_province.as_str()));
        put("StateProvinceChoice", self.state_province_choice.as_deref());
        put("PostalCode", Some(self.postal_code.as_str()));
        put("Country", Some(self.country.as_str()));
        put("Phone", Some(self.phone.as_str()));
        put("PhoneExt", self.phone_ext.as_deref());
        put("Fax", self.fax.as_deref());
        put("EmailAddress", Some(self.email_address.as_str()));
        put("OrganizationName", self.organization_name.as_deref());
        put("JobTitle", self.job_title.as_deref());
    }
}

/// Arguments of `namecheap.domains.create`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainsCreateArgs {
    pub domain_name: String,
    pub years: u32,
    pub promotion_code: Option<String>,
    pub registrant: ContactInfo,
    pub tech: ContactInfo,
    pub admin: ContactInfo,
    pub aux_billing: ContactInfo,
    pub add_free_whoisguard: Option<bool>,
    pub wg_enabled: Option<bool>,
    /// Comma-separated custom nameservers.
    pub nameservers: Option<String>,
    pub idn_code: Option<String>,
    pub is_premium_domain: Option<bool>,
    pub premium_price: Option<String>,
    pub eap_fee: Option<String>,
}

impl DomainsCreateArgs {
    fn to_params(&self) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
        if self.domain_name.trim().is_empty() {
            return Err(ValidationError::missing("DomainName"));
        }
        if self.years < 1 {
            return Err(ValidationError::invalid(
                "Years",
                format!("{}, minimum value is 1", self.years),
            ));
        }
        self.registrant.validate("Registrant")?;
        self.tech.validate("Tech")?;
        self.admin.validate("Admin")?;
        self.aux_billing.validate("AuxBilling")?;

        let mut params = BTreeMap::new();
        params.insert("DomainName".to_string(), self.domain_name.clone());
        params.insert("Years".to_string(), self.years.to_string());
        insert_opt(&mut params, "PromotionCode", self.promotion_code.as_deref());

        self.registrant.add_to_params(&mut params, "Registrant");
        self.tech.add_to_params(&mut params, "Tech");
        self.admin.add_to_params(&mut params, "Admin");
        self.aux_billing.add_to_params(&mut params, "AuxBilling");

        insert_opt(
            &mut params,
            "AddFreeWhoisguard",
            self.add_free_whoisguard.map(yes_no),
        );
        insert_opt(&mut params, "WGEnabled", self.wg_enabled.map(yes_no));
        insert_opt(&mut params, "Nameservers", self.nameservers.as_deref());
        insert_opt(&mut params, "IdnCode", self.idn_code.as_deref());
        insert_opt(&mut params, "IsPremiumDomain", self.is_premium_domain);
        insert_opt(&mut params, "PremiumPrice", self.premium_price.as_deref());
        insert_opt(&mut params, "EapFee", self.eap_fee.as_deref());
        Ok(params)
    }
}

/// Arguments of `namecheap.domains.renew`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenewArgs {
    /// 1..=10.
    pub years: u32,
    pub promotion_code: Option<String>,
    pub is_premium_domain: Option<bool>,
    /// Required when `is_premium_domain` is true.
    pub premium_price: Option<String>,
}

impl RenewArgs {
    fn to_params(&self) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
        if !(MIN_RENEW_YEARS..=MAX_RENEW_YEARS).contains(&self.years) {
            return Err(ValidationError::invalid(
                "Years",
                format!(
                    "{}, minimum value is {MIN_RENEW_YEARS}, and maximum value is {MAX_RENEW_YEARS}",
                    self.years
                ),
            ));
        }
        require_premium_price(self.is_premium_domain, self.premium_price.as_ref())?;

        let mut params = BTreeMap::new();
        params.insert("Years".to_string(), self.years.to_string());
        insert_opt(&mut params, "PromotionCode", self.promotion_code.as_deref());
        insert_opt(&mut params, "IsPremiumDomain", self.is_premium_domain);
        insert_opt(&mut params, "PremiumPrice", self.premium_price.as_deref());
        Ok(params)
    }
}

/// Arguments of `namecheap.domains.reactivate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactivateArgs {
    pub promotion_code: Option<String>,
    pub years_to_add: Option<u32>,
    pub is_premium_domain: Option<bool>,
    /// Required when `is_premium_domain` is true.
    pub premium_price: Option<String>,
}

impl ReactivateArgs {
    fn to_params(&self) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
        require_premium_price(self.is_premium_domain, self.premium_price.as_ref())?;

        let mut params = BTreeMap::new();
        insert_opt(&mut params, "PromotionCode", self.promotion_code.as_deref());
        insert_opt(&mut params, "YearsToAdd", self.years_to_add);
        insert_opt(&mut params, "IsPremiumDomain", self.is_premium_domain);
        insert_opt(&mut params, "PremiumPrice", self.premium_price.as_deref());
        Ok(params)
    }
}

fn require_premium_price(
    is_premium: Option<bool>,
    price: Option<&String>,
) -> std::result::Result<(), ValidationError> {
    if is_premium == Some(true) && price.is_none() {
        return Err(ValidationError::missing("PremiumPrice"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockAction {
    Lock,
    Unlock,
}

impl LockAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
        }
    }
}

// ============ Results ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsGetListCommandResponse {
    #[serde(rename = "DomainGetListResult")]
    pub result: Option<DomainGetListResult>,
    #[serde(rename = "Paging")]
    pub paging: Option<Paging>,
}

impl DomainsGetListCommandResponse {
    pub fn domains(&self) -> &[DomainListEntry] {
        self.result
            .as_ref()
            .map(|r| r.domains.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainGetListResult {
    #[serde(rename = "Domain", default)]
    pub domains: Vec<DomainListEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainListEntry {
    #[serde(rename = "@ID")]
    pub id: Option<u64>,
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "@User")]
    pub user: Option<String>,
    #[serde(rename = "@Created", default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub created: Option<NaiveDate>,
    #[serde(rename = "@Expires", default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub expires: Option<NaiveDate>,
    #[serde(rename = "@IsExpired")]
    pub is_expired: Option<bool>,
    #[serde(rename = "@IsLocked")]
    pub is_locked: Option<bool>,
    #[serde(rename = "@AutoRenew")]
    pub auto_renew: Option<bool>,
    /// `ENABLED`, `NOTPRESENT`, ...
    #[serde(rename = "@WhoisGuard")]
    pub whois_guard: Option<String>,
    #[serde(rename = "@IsPremium")]
    pub is_premium: Option<bool>,
    #[serde(rename = "@IsOurDNS")]
    pub is_our_dns: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(rename = "TotalItems")]
    pub total_items: Option<u32>,
    #[serde(rename = "CurrentPage")]
    pub current_page: Option<u32>,
    #[serde(rename = "PageSize")]
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsGetInfoCommandResponse {
    #[serde(rename = "DomainGetInfoResult")]
    pub result: Option<DomainGetInfoResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainGetInfoResult {
    #[serde(rename = "@ID")]
    pub id: Option<u64>,
    #[serde(rename = "@DomainName")]
    pub domain_name: Option<String>,
    #[serde(rename = "@OwnerName")]
    pub owner_name: Option<String>,
    #[serde(rename = "@IsOwner")]
    pub is_owner: Option<bool>,
    #[serde(rename = "@IsPremium")]
    pub is_premium: Option<bool>,
    #[serde(rename = "DomainDetails")]
    pub domain_details: Option<DomainInfoDetails>,
    #[serde(rename = "Whoisguard")]
    pub whoisguard: Option<WhoisguardInfo>,
    #[serde(rename = "DnsDetails")]
    pub dns_details: Option<DnsDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainInfoDetails {
    #[serde(rename = "CreatedDate", default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub created_date: Option<NaiveDate>,
    #[serde(rename = "ExpiredDate", default, deserialize_with = "crate::utils::datetime::deserialize")]
    pub expired_date: Option<NaiveDate>,
    #[serde(rename = "NumYears")]
    pub num_years: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhoisguardInfo {
    /// `True`, `False` or `NotAlloted`.
    #[serde(rename = "@Enabled")]
    pub enabled: Option<String>,
    #[serde(rename = "ID")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DnsDetails {
    /// `FreeDNS`, `CUSTOM`, ...
    #[serde(rename = "@ProviderType")]
    pub provider_type: Option<String>,
    #[serde(rename = "@IsUsingOurDNS")]
    pub is_using_our_dns: Option<bool>,
    #[serde(rename = "@HostCount")]
    pub host_count: Option<u32>,
    #[serde(rename = "@EmailType")]
    pub email_type: Option<String>,
    #[serde(rename = "@DynamicDNSStatus")]
    pub dynamic_dns_status: Option<bool>,
    #[serde(rename = "@IsFailover")]
    pub is_failover: Option<bool>,
    #[serde(rename = "Nameserver", default)]
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsCheckCommandResponse {
    #[serde(rename = "DomainCheckResult", default)]
    pub results: Vec<DomainCheckResult>,
}

/// Prices are kept as the decimal text the API returns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainCheckResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Available")]
    pub available: Option<bool>,
    #[serde(rename = "@ErrorNo")]
    pub error_no: Option<String>,
    #[serde(rename = "@Description")]
    pub description: Option<String>,
    #[serde(rename = "@IsPremiumName")]
    pub is_premium_name: Option<bool>,
    #[serde(rename = "@PremiumRegistrationPrice")]
    pub premium_registration_price: Option<String>,
    #[serde(rename = "@PremiumRenewalPrice")]
    pub premium_renewal_price: Option<String>,
    #[serde(rename = "@PremiumRestorePrice")]
    pub premium_restore_price: Option<String>,
    #[serde(rename = "@PremiumTransferPrice")]
    pub premium_transfer_price: Option<String>,
    #[serde(rename = "@IcannFee")]
    pub icann_fee: Option<String>,
    #[serde(rename = "@EapFee")]
    pub eap_fee: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsCreateCommandResponse {
    #[serde(rename = "DomainCreateResult")]
    pub result: Option<DomainCreateResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainCreateResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Registered")]
    pub registered: Option<bool>,
    #[serde(rename = "@ChargedAmount")]
    pub charged_amount: Option<String>,
    #[serde(rename = "@DomainID")]
    pub domain_id: Option<u64>,
    #[serde(rename = "@OrderID")]
    pub order_id: Option<u64>,
    #[serde(rename = "@TransactionID")]
    pub transaction_id: Option<u64>,
    #[serde(rename = "@WhoisguardEnable")]
    pub whoisguard_enable: Option<bool>,
    #[serde(rename = "@NonRealTimeDomain")]
    pub non_real_time_domain: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsGetContactsCommandResponse {
    #[serde(rename = "DomainContactsResult")]
    pub result: Option<DomainContactsResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainContactsResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@domainnameid")]
    pub domain_name_id: Option<String>,
    #[serde(rename = "Registrant")]
    pub registrant: Option<DomainContact>,
    #[serde(rename = "Tech")]
    pub tech: Option<DomainContact>,
    #[serde(rename = "Admin")]
    pub admin: Option<DomainContact>,
    #[serde(rename = "AuxBilling")]
    pub aux_billing: Option<DomainContact>,
    #[serde(rename = "CurrentAttributes")]
    pub current_attributes: Option<CurrentAttributes>,
    #[serde(rename = "WhoisGuardContact")]
    pub whois_guard_contact: Option<WhoisGuardContact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainContact {
    #[serde(rename = "@ReadOnly")]
    pub read_only: Option<bool>,
    #[serde(rename = "OrganizationName")]
    pub organization_name: Option<String>,
    #[serde(rename = "JobTitle")]
    pub job_title: Option<String>,
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Address1")]
    pub address1: Option<String>,
    #[serde(rename = "Address2")]
    pub address2: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "StateProvince")]
    pub state_province: Option<String>,
    #[serde(rename = "StateProvinceChoice")]
    pub state_province_choice: Option<String>,
    #[serde(rename = "PostalCode")]
    pub postal_code: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Fax")]
    pub fax: Option<String>,
    #[serde(rename = "EmailAddress")]
    pub email_address: Option<String>,
    #[serde(rename = "PhoneExt")]
    pub phone_ext: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentAttributes {
    #[serde(rename = "RegistrantNexus")]
    pub registrant_nexus: Option<String>,
    #[serde(rename = "RegistrantNexusCountry")]
    pub registrant_nexus_country: Option<String>,
    #[serde(rename = "RegistrantPurpose")]
    pub registrant_purpose: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WhoisGuardContact {
    #[serde(rename = "Registrant")]
    pub registrant: Option<DomainContact>,
    #[serde(rename = "Tech")]
    pub tech: Option<DomainContact>,
    #[serde(rename = "Admin")]
    pub admin: Option<DomainContact>,
    #[serde(rename = "AuxBilling")]
    pub aux_billing: Option<DomainContact>,
    #[serde(rename = "CurrentAttributes")]
    pub current_attributes: Option<CurrentAttributes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsGetTldListCommandResponse {
    #[serde(rename = "Tlds")]
    pub tlds: Option<TldList>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TldList {
    #[serde(rename = "Tld", default)]
    pub tlds: Vec<Tld>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Tld {
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "@NonRealTime")]
    pub non_real_time: Option<bool>,
    #[serde(rename = "@MinRegisterYears")]
    pub min_register_years: Option<u32>,
    #[serde(rename = "@MaxRegisterYears")]
    pub max_register_years: Option<u32>,
    #[serde(rename = "@MinRenewYears")]
    pub min_renew_years: Option<u32>,
    #[serde(rename = "@MaxRenewYears")]
    pub max_renew_years: Option<u32>,
    #[serde(rename = "@MinTransferYears")]
    pub min_transfer_years: Option<u32>,
    #[serde(rename = "@MaxTransferYears")]
    pub max_transfer_years: Option<u32>,
    #[serde(rename = "@IsApiRegisterable")]
    pub is_api_registerable: Option<bool>,
    #[serde(rename = "@IsApiRenewable")]
    pub is_api_renewable: Option<bool>,
    #[serde(rename = "@IsApiTransferable")]
    pub is_api_transferable: Option<bool>,
    #[serde(rename = "@IsEppRequired")]
    pub is_epp_required: Option<bool>,
    #[serde(rename = "@IsDisableModContact")]
    pub is_disable_mod_contact: Option<bool>,
    #[serde(rename = "@IsDisableWGAllot")]
    pub is_disable_wg_allot: Option<bool>,
    #[serde(rename = "@IsIncludeInExtendedSearchOnly")]
    pub is_include_in_extended_search_only: Option<bool>,
    #[serde(rename = "@SequenceNumber")]
    pub sequence_number: Option<u32>,
    /// `GTLD`, `CCTLD`, ...
    #[serde(rename = "@Type")]
    pub tld_type: Option<String>,
    #[serde(rename = "@IsSupportsIDN")]
    pub is_supports_idn: Option<bool>,
    #[serde(rename = "@Category")]
    pub category: Option<String>,
    #[serde(rename = "$text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsRenewCommandResponse {
    #[serde(rename = "DomainRenewResult")]
    pub result: Option<DomainRenewResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainRenewResult {
    #[serde(rename = "@DomainName")]
    pub domain_name: Option<String>,
    #[serde(rename = "@DomainID")]
    pub domain_id: Option<u64>,
    #[serde(rename = "@Renew")]
    pub renew: Option<bool>,
    #[serde(rename = "@OrderID")]
    pub order_id: Option<u64>,
    #[serde(rename = "@TransactionID")]
    pub transaction_id: Option<u64>,
    #[serde(rename = "@ChargedAmount")]
    pub charged_amount: Option<String>,
    #[serde(rename = "DomainDetails")]
    pub domain_details: Option<RenewDomainDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenewDomainDetails {
    /// Server-local timestamp such as `4/30/2021 11:31:13 AM`.
    #[serde(rename = "ExpiredDate")]
    pub expired_date: Option<String>,
    #[serde(rename = "NumYears")]
    pub num_years: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsReactivateCommandResponse {
    #[serde(rename = "DomainReactivateResult")]
    pub result: Option<DomainReactivateResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainReactivateResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
    #[serde(rename = "@ChargedAmount")]
    pub charged_amount: Option<String>,
    #[serde(rename = "@OrderID")]
    pub order_id: Option<u64>,
    #[serde(rename = "@TransactionID")]
    pub transaction_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsGetRegistrarLockCommandResponse {
    #[serde(rename = "DomainGetRegistrarLockResult")]
    pub result: Option<GetRegistrarLockResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetRegistrarLockResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@RegistrarLockStatus")]
    pub registrar_lock_status: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsSetRegistrarLockCommandResponse {
    #[serde(rename = "DomainSetRegistrarLockResult")]
    pub result: Option<SetRegistrarLockResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetRegistrarLockResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
}

// ============ Commands ============

impl DomainsService<'_> {
    /// Returns the domains of the account (`namecheap.domains.getList`).
    pub async fn get_list(
        &self,
        args: Option<&DomainsGetListArgs>,
    ) -> Result<DomainsGetListCommandResponse> {
        let mut params = command("namecheap.domains.getList");
        if let Some(args) = args {
            params.extend(args.to_params()?);
        }
        self.client.do_xml(params).await
    }

    /// Returns ownership, whois guard and DNS details of one domain.
    pub async fn get_info(&self, domain: &str) -> Result<DomainsGetInfoCommandResponse> {
        let mut params = command("namecheap.domains.getInfo");
        params.insert("DomainName".to_string(), domain.to_string());
        self.client.do_xml(params).await
    }

    /// Checks availability of one or more domains.
    pub async fn check(&self, domains: &[&str]) -> Result<DomainsCheckCommandResponse> {
        if domains.is_empty() {
            return Err(ValidationError::missing("DomainList").into());
        }
        let mut params = command("namecheap.domains.check");
        params.insert("DomainList".to_string(), domains.join(","));
        self.client.do_xml(params).await
    }

    /// Registers a new domain.
    pub async fn create(&self, args: &DomainsCreateArgs) -> Result<DomainsCreateCommandResponse> {
        let mut params = command("namecheap.domains.create");
        params.extend(args.to_params()?);
        self.client.do_xml(params).await
    }

    pub async fn get_contacts(&self, domain: &str) -> Result<DomainsGetContactsCommandResponse> {
        let mut params = command("namecheap.domains.getContacts");
        params.insert("DomainName".to_string(), domain.to_string());
        self.client.do_xml(params).await
    }

    /// Returns every TLD the registrar supports.
    pub async fn get_tld_list(&self) -> Result<DomainsGetTldListCommandResponse> {
        self.client
            .do_xml(command("namecheap.domains.getTldList"))
            .await
    }

    /// Renews an expiring domain.
    pub async fn renew(&self, domain: &str, args: &RenewArgs) -> Result<DomainsRenewCommandResponse> {
        let mut params = command("namecheap.domains.renew");
        params.insert("DomainName".to_string(), domain.to_string());
        params.extend(args.to_params()?);
        self.client.do_xml(params).await
    }

    /// Reactivates an expired domain.
    pub async fn reactivate(
        &self,
        domain: &str,
        args: Option<&ReactivateArgs>,
    ) -> Result<DomainsReactivateCommandResponse> {
        let mut params = command("namecheap.domains.reactivate");
        params.insert("DomainName".to_string(), domain.to_string());
        if let Some(args) = args {
            params.extend(args.to_params()?);
        }
        self.client.do_xml(params).await
    }

    pub async fn get_registrar_lock(
        &self,
        domain: &str,
    ) -> Result<DomainsGetRegistrarLockCommandResponse> {
        let mut params = command("namecheap.domains.getRegistrarLock");
        params.insert("DomainName".to_string(), domain.to_string());
        self.client.do_xml(params).await
    }

    /// Locks or unlocks a domain. Without an action the API defaults to `LOCK`.
    pub async fn set_registrar_lock(
        &self,
        domain: &str,
        action: Option<LockAction>,
    ) -> Result<DomainsSetRegistrarLockCommandResponse> {
        let mut params = command("namecheap.domains.setRegistrarLock");
        params.insert("DomainName".to_string(), domain.to_string());
        insert_opt(&mut params, "LockAction", action.map(LockAction::as_str));
        self.client.do_xml(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactInfo {
        ContactInfo {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            address1: "8939 S. cross Blvd".to_string(),
            city: "California".to_string(),
            state_province: "CA".to_string(),
            postal_code: "90045".to_string(),
            country: "US".to_string(),
            phone: "+1.6613102107".to_string(),
            email_address: "john@gmail.com".to_string(),
            ..ContactInfo::default()
        }
    }

    fn create_args() -> DomainsCreateArgs {
        DomainsCreateArgs {
            domain_name: "domain.com".to_string(),
            years: 1,
            registrant: contact(),
            tech: contact(),
            admin: contact(),
            aux_billing: contact(),
            ..DomainsCreateArgs::default()
        }
    }

    // ---- getList ----

    #[test]
    fn get_list_params() {
        let args = DomainsGetListArgs {
            list_type: Some(ListType::Expiring),
            search_term: Some("search.com".to_string()),
            page: Some(2),
            page_size: Some(10),
            sort_by: Some(SortBy::ExpireDateDesc),
        };
        let params = args.to_params().unwrap();
        assert_eq!(params["ListType"], "EXPIRING");
        assert_eq!(params["SearchTerm"], "search.com");
        assert_eq!(params["Page"], "2");
        assert_eq!(params["PageSize"], "10");
        assert_eq!(params["SortBy"], "EXPIREDATE_DESC");
    }

    #[test]
    fn get_list_empty_args_send_nothing() {
        assert!(DomainsGetListArgs::default().to_params().unwrap().is_empty());
    }

    #[test]
    fn get_list_page_bounds() {
        let page_zero = DomainsGetListArgs {
            page: Some(0),
            ..DomainsGetListArgs::default()
        };
        assert_eq!(
            page_zero.to_params().unwrap_err().to_string(),
            "invalid Page value: 0, minimum value is 1"
        );

        for page_size in [3, 9, 101, 999] {
            let args = DomainsGetListArgs {
                page_size: Some(page_size),
                ..DomainsGetListArgs::default()
            };
            assert!(matches!(
                args.to_params(),
                Err(ValidationError::InvalidArgument { ref name, .. }) if name == "PageSize"
            ));
        }
        for page_size in [10, 100] {
            let args = DomainsGetListArgs {
                page_size: Some(page_size),
                ..DomainsGetListArgs::default()
            };
            assert!(args.to_params().is_ok());
        }
    }

    // ---- create ----

    #[test]
    fn create_params() {
        let mut args = create_args();
        args.add_free_whoisguard = Some(true);
        args.wg_enabled = Some(false);
        args.is_premium_domain = Some(false);
        args.registrant.organization_name = Some("NameCheap.com".to_string());

        let params = args.to_params().unwrap();
        assert_eq!(params["DomainName"], "domain.com");
        assert_eq!(params["Years"], "1");
        assert_eq!(params["RegistrantFirstName"], "John");
        assert_eq!(params["AuxBillingEmailAddress"], "john@gmail.com");
        assert_eq!(params["RegistrantOrganizationName"], "NameCheap.com");
        assert!(!params.contains_key("TechOrganizationName"));
        assert!(!params.contains_key("RegistrantAddress2"));
        assert_eq!(params["AddFreeWhoisguard"], "yes");
        assert_eq!(params["WGEnabled"], "no");
        assert_eq!(params["IsPremiumDomain"], "false");
    }

    #[test]
    fn create_requires_domain_and_years() {
        let mut args = create_args();
        args.domain_name = String::new();
        assert_eq!(
            args.to_params().unwrap_err(),
            ValidationError::missing("DomainName")
        );

        let mut args = create_args();
        args.years = 0;
        assert!(matches!(
            args.to_params(),
            Err(ValidationError::InvalidArgument { ref name, .. }) if name == "Years"
        ));
    }

    #[test]
    fn create_requires_contact_fields() {
        let mut args = create_args();
        args.admin.city = String::new();
        assert_eq!(
            args.to_params().unwrap_err(),
            ValidationError::missing("AdminCity")
        );

        let mut args = create_args();
        args.registrant.email_address = "  ".to_string();
        assert_eq!(
            args.to_params().unwrap_err(),
            ValidationError::missing("RegistrantEmailAddress")
        );
    }

    // ---- renew / reactivate ----

    #[test]
    fn renew_years_bounds() {
        for years in [0, 11] {
            let args = RenewArgs {
                years,
                ..RenewArgs::default()
            };
            assert!(matches!(
                args.to_params(),
                Err(ValidationError::InvalidArgument { ref name, .. }) if name == "Years"
            ));
        }
        let args = RenewArgs {
            years: 10,
            ..RenewArgs::default()
        };
        assert_eq!(args.to_params().unwrap()["Years"], "10");
    }

    #[test]
    fn premium_requires_price() {
        let renew = RenewArgs {
            years: 1,
            is_premium_domain: Some(true),
            ..RenewArgs::default()
        };
        assert_eq!(
            renew.to_params().unwrap_err(),
            ValidationError::missing("PremiumPrice")
        );

        let reactivate = ReactivateArgs {
            is_premium_domain: Some(true),
            ..ReactivateArgs::default()
        };
        assert_eq!(
            reactivate.to_params().unwrap_err(),
            ValidationError::missing("PremiumPrice")
        );

        let reactivate = ReactivateArgs {
            is_premium_domain: Some(true),
            premium_price: Some("650.0000".to_string()),
            years_to_add: Some(2),
            ..ReactivateArgs::default()
        };
        let params = reactivate.to_params().unwrap();
        assert_eq!(params["IsPremiumDomain"], "true");
        assert_eq!(params["PremiumPrice"], "650.0000");
        assert_eq!(params["YearsToAdd"], "2");
    }

    #[test]
    fn lock_action_wire_values() {
        assert_eq!(LockAction::Lock.as_str(), "LOCK");
        assert_eq!(LockAction::Unlock.as_str(), "UNLOCK");
    }
}
