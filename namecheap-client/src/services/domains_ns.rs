//! `namecheap.domains.ns.*` commands (child nameservers / glue records).

use std::collections::BTreeMap;

use serde::Deserialize;

use super::command;
use crate::error::{Result, ValidationError};

service!(
    /// Child nameservers registered under a domain.
    DomainsNsService
);

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsNsCreateCommandResponse {
    #[serde(rename = "DomainNSCreateResult")]
    pub result: Option<DomainNsCreateResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainNsCreateResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Nameserver")]
    pub nameserver: Option<String>,
    #[serde(rename = "@IP")]
    pub ip: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsNsDeleteCommandResponse {
    #[serde(rename = "DomainNSDeleteResult")]
    pub result: Option<DomainNsDeleteResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainNsDeleteResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Nameserver")]
    pub nameserver: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsNsGetInfoCommandResponse {
    #[serde(rename = "DomainNSInfoResult")]
    pub result: Option<DomainNsInfoResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainNsInfoResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Nameserver")]
    pub nameserver: Option<String>,
    #[serde(rename = "@IP")]
    pub ip: Option<String>,
    #[serde(rename = "NameserverStatuses")]
    pub statuses: Option<NameserverStatuses>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameserverStatuses {
    /// `OK`, `Linked`, `CLIENT DELETE PROHIBITED`, ...
    #[serde(rename = "Status", default)]
    pub statuses: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainsNsUpdateCommandResponse {
    #[serde(rename = "DomainNSUpdateResult")]
    pub result: Option<DomainNsUpdateResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainNsUpdateResult {
    #[serde(rename = "@Domain")]
    pub domain: Option<String>,
    #[serde(rename = "@Nameserver")]
    pub nameserver: Option<String>,
    #[serde(rename = "@IsSuccess")]
    pub is_success: Option<bool>,
}

impl DomainsNsService<'_> {
    /// Registers `nameserver` with address `ip` under `sld.tld`.
    pub async fn create(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
        ip: &str,
    ) -> Result<DomainsNsCreateCommandResponse> {
        let params = ns_params(
            "namecheap.domains.ns.create",
            &[("SLD", sld), ("TLD", tld), ("Nameserver", nameserver), ("IP", ip)],
        )?;
        self.client.do_xml(params).await
    }

    pub async fn delete(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
    ) -> Result<DomainsNsDeleteCommandResponse> {
        let params = ns_params(
            "namecheap.domains.ns.delete",
            &[("SLD", sld), ("TLD", tld), ("Nameserver", nameserver)],
        )?;
        self.client.do_xml(params).await
    }

    pub async fn get_info(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
    ) -> Result<DomainsNsGetInfoCommandResponse> {
        let params = ns_params(
            "namecheap.domains.ns.getInfo",
            &[("SLD", sld), ("TLD", tld), ("Nameserver", nameserver)],
        )?;
        self.client.do_xml(params).await
    }

    /// Moves `nameserver` from `old_ip` to `ip`.
    pub async fn update(
        &self,
        sld: &str,
        tld: &str,
        nameserver: &str,
        old_ip: &str,
        ip: &str,
    ) -> Result<DomainsNsUpdateCommandResponse> {
        let params = ns_params(
            "namecheap.domains.ns.update",
            &[
                ("SLD", sld),
                ("TLD", tld),
                ("Nameserver", nameserver),
                ("OldIP", old_ip),
                ("IP", ip),
            ],
        )?;
        self.client.do_xml(params).await
    }
}

/// Every argument of these commands is required.
fn ns_params(
    name: &str,
    fields: &[(&str, &str)],
) -> std::result::Result<BTreeMap<String, String>, ValidationError> {
    let mut params = command(name);
    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::missing(*key));
        }
        params.insert((*key).to_string(), (*value).to_string());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_params() {
        let params = ns_params(
            "namecheap.domains.ns.update",
            &[
                ("SLD", "domain"),
                ("TLD", "com"),
                ("Nameserver", "ns1.domain.com"),
                ("OldIP", "1.1.1.1"),
                ("IP", "2.2.2.2"),
            ],
        )
        .unwrap();
        assert_eq!(params["Command"], "namecheap.domains.ns.update");
        assert_eq!(params["SLD"], "domain");
        assert_eq!(params["OldIP"], "1.1.1.1");
        assert_eq!(params["IP"], "2.2.2.2");
    }

    #[test]
    fn rejects_empty_argument() {
        let err = ns_params(
            "namecheap.domains.ns.create",
            &[("SLD", "domain"), ("TLD", ""), ("Nameserver", "ns1.domain.com")],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::missing("TLD"));
    }

    #[test]
    fn decodes_statuses() {
        let body = r#"<ApiResponse Status="OK">
                <CommandResponse Type="namecheap.domains.ns.getInfo">
                    <DomainNSInfoResult Domain="domain.com" Nameserver="ns1.domain.com" IP="1.1.1.1">
                        <NameserverStatuses>
                            <Status>OK</Status>
                            <Status>Linked</Status>
                        </NameserverStatuses>
                    </DomainNSInfoResult>
                </CommandResponse>
            </ApiResponse>"#;
        let response: DomainsNsGetInfoCommandResponse =
            crate::xml::decode_response(body).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result.ip.as_deref(), Some("1.1.1.1"));
        assert_eq!(result.statuses.unwrap().statuses, vec!["OK", "Linked"]);
    }
}
