//! `namecheap.domains.dns.*` commands.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::command;
use crate::domain_name::{DomainNameParts, parse_domain};
use crate::error::{ClientError, Result, ValidationError};
use crate::host_records::{SetHostsArgs, validate_host_records};

/// Remote error of `getList` for domains on FreeDNS.
const DOMAIN_NOT_FOUND_CODE: &str = "2019166";
const FREE_DNS_PROVIDER: &str = "FreeDNS";
const MIN_CUSTOM_NAMESERVERS: usize = 2;

service!(
    /// DNS configuration of registered domains.
    DomainsDnsService
);

/// One row of `setEmailForwarding`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailForwardingEntry {
    pub mailbox: String,
    pub forward_to: String,
}

impl EmailForwardingEntry {
    pub fn new(mailbox: impl Into<String>, forward_to: impl Into<String>) -> Self {
        Self {
            mailbox: mailbox.into(),
            forward_to: forward_to.into(),
        }
    }
}

// ============ Results ============

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsSetDefaultCommandResponse {
    #[serde(rename = "DomainDNSSetDefaultResult")]
    pub result: Option<DomainDnsSetDefaultResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsSetDefaultResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Updated")]
    pub updated: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsSetCustomCommandResponse {
    #[serde(rename = "DomainDNSSetCustomResult")]
    pub result: Option<DomainDnsSetCustomResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsSetCustomResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Updated")]
    pub updated: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsGetListCommandResponse {
    #[serde(rename = "DomainDNSGetListResult")]
    pub result: Option<DomainDnsGetListResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsGetListResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@IsUsingOurDNS")]
    pub is_using_our_dns: Option<bool>,
    #[serde(rename = "@IsPremiumDNS")]
    pub is_premium_dns: Option<bool>,
    #[serde(rename = "@IsUsingFreeDNS")]
    pub is_using_free_dns: Option<bool>,
    #[serde(rename = "Nameserver", default)]
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsGetHostsCommandResponse {
    #[serde(rename = "DomainDNSGetHostsResult")]
    pub result: Option<DomainDnsGetHostsResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsGetHostsResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@EmailType")]
    pub email_type: Option<String>,
    #[serde(rename = "@IsUsingOurDNS")]
    pub is_using_our_dns: Option<bool>,
    #[serde(rename = "host", default)]
    pub hosts: Vec<HostEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostEntry {
    #[serde(rename = "@HostId")]
    pub host_id: Option<u64>,
    #[serde(rename = "@Name")]
    pub name: Option<String>,
    #[serde(rename = "@Type")]
    pub record_type: Option<String>,
    #[serde(rename = "@Address")]
    pub address: Option<String>,
    #[serde(rename = "@MXPref")]
    pub mx_pref: Option<u32>,
    #[serde(rename = "@TTL")]
    pub ttl: Option<u32>,
    #[serde(rename = "@AssociatedAppTitle")]
    pub associated_app_title: Option<String>,
    #[serde(rename = "@FriendlyName")]
    pub friendly_name: Option<String>,
    #[serde(rename = "@IsActive")]
    pub is_active: Option<bool>,
    #[serde(rename = "@IsDDNSEnabled")]
    pub is_ddns_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsSetHostsCommandResponse {
    #[serde(rename = "DomainDNSSetHostsResult")]
    pub result: Option<DomainDnsSetHostsResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsSetHostsResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsGetEmailForwardingCommandResponse {
    #[serde(rename = "DomainDNSGetEmailForwardingResult")]
    pub result: Option<DomainDnsGetEmailForwardingResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsGetEmailForwardingResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "Forward", default)]
    pub forwards: Vec<EmailForwardingRule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailForwardingRule {
    #[serde(rename = "@mailbox")]
    pub mailbox: Option<String>,
    #[serde(rename = "$text")]
    pub forward_to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsDnsSetEmailForwardingCommandResponse {
    #[serde(rename = "DomainDNSSetEmailForwardingResult")]
    pub result: Option<DomainDnsSetEmailForwardingResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainDnsSetEmailForwardingResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
}

// ============ Commands ============

impl DomainsDnsService<'_> {
    /// Switches a domain to the registrar's default nameservers.
    pub async fn set_default(&self, domain: &str) -> Result<DomainsDnsSetDefaultCommandResponse> {
        let params = sld_tld_params("namecheap.domains.dns.setDefault", domain)?;
        self.client.do_xml(params).await
    }

    /// Points a domain at custom nameservers (at least two).
    pub async fn set_custom(
        &self,
        domain: &str,
        nameservers: &[&str],
    ) -> Result<DomainsDnsSetCustomCommandResponse> {
        let mut params = sld_tld_params("namecheap.domains.dns.setCustom", domain)?;
        if nameservers.len() < MIN_CUSTOM_NAMESERVERS {
            return Err(ValidationError::invalid(
                "Nameservers",
                format!(
                    "{} given, must contain minimum {MIN_CUSTOM_NAMESERVERS} items",
                    nameservers.len()
                ),
            )
            .into());
        }
        params.insert("Nameservers".to_string(), nameservers.join(","));
        self.client.do_xml(params).await
    }

    /// Returns the nameservers of a domain.
    ///
    /// `getList` answers FreeDNS domains with error `2019166`; in that case the
    /// result is rebuilt from `namecheap.domains.getInfo`.
    pub async fn get_list(&self, domain: &str) -> Result<DomainsDnsGetListCommandResponse> {
        let params = sld_tld_params("namecheap.domains.dns.getList", domain)?;
        match self.client.do_xml(params).await {
            Err(e) if e.remote_code() == Some(DOMAIN_NOT_FOUND_CODE) => {
                log::debug!("[namecheap] {domain} not found by dns.getList, checking for FreeDNS");
                self.free_dns_list(domain).await?.ok_or(e)
            }
            other => other,
        }
    }

    async fn free_dns_list(&self, domain: &str) -> Result<Option<DomainsDnsGetListCommandResponse>> {
        let info = self.client.domains().get_info(domain).await?;
        let Some(info) = info.result else {
            return Ok(None);
        };
        let Some(dns) = info.dns_details else {
            return Ok(None);
        };
        if dns.provider_type.as_deref() != Some(FREE_DNS_PROVIDER) {
            return Ok(None);
        }

        Ok(Some(DomainsDnsGetListCommandResponse {
            result: Some(DomainDnsGetListResult {
                domain: info.domain_name,
                is_using_our_dns: Some(true),
                is_premium_dns: Some(false),
                is_using_free_dns: Some(true),
                nameservers: dns.nameservers,
            }),
        }))
    }

    pub async fn get_hosts(&self, domain: &str) -> Result<DomainsDnsGetHostsCommandResponse> {
        let params = sld_tld_params("namecheap.domains.dns.getHosts", domain)?;
        self.client.do_xml(params).await
    }

    /// Replaces every host record of a domain with `args.records`.
    ///
    /// The batch is validated locally first; nothing is sent when a rule fails.
    pub async fn set_hosts(&self, args: &SetHostsArgs) -> Result<DomainsDnsSetHostsCommandResponse> {
        let validated = validate_host_records(args)?;
        let mut params = command("namecheap.domains.dns.setHosts");
        params.extend(validated.to_params());
        self.client.do_xml(params).await
    }

    pub async fn get_email_forwarding(
        &self,
        domain: &str,
    ) -> Result<DomainsDnsGetEmailForwardingCommandResponse> {
        let mut params = command("namecheap.domains.dns.getEmailForwarding");
        params.insert("DomainName".to_string(), domain.to_string());
        self.client.do_xml(params).await
    }

    /// Replaces the forwarding rules of a domain.
    pub async fn set_email_forwarding(
        &self,
        domain: &str,
        rules: &[EmailForwardingEntry],
    ) -> Result<DomainsDnsSetEmailForwardingCommandResponse> {
        let mut params = command("namecheap.domains.dns.setEmailForwarding");
        params.insert("DomainName".to_string(), domain.to_string());
        params.extend(email_forwarding_params(rules));
        self.client.do_xml(params).await
    }
}

/// `Command`, `SLD` and `TLD` for commands addressed by split domain.
fn sld_tld_params(name: &str, domain: &str) -> Result<BTreeMap<String, String>> {
    let DomainNameParts {
        second_level,
        top_level,
        ..
    } = parse_domain(domain).map_err(ClientError::from)?;

    let mut params = command(name);
    params.insert("SLD".to_string(), second_level);
    params.insert("TLD".to_string(), top_level);
    Ok(params)
}

fn email_forwarding_params(rules: &[EmailForwardingEntry]) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    for (i, rule) in rules.iter().enumerate() {
        let n = i + 1;
        params.insert(format!("mailbox{n}"), rule.mailbox.clone());
        params.insert(format!("ForwardTo{n}"), rule.forward_to.clone());
    }
    params
}
