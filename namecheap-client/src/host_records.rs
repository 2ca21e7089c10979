//! DNS host-record batch validation for `namecheap.domains.dns.setHosts`.
//!
//! The API replaces the whole host list on every call and does no compound checks of
//! its own, so the batch is validated here before anything is sent.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain_name::{DomainNameParts, parse_domain};
use crate::error::ValidationError;

/// 最小 TTL（秒）
pub const MIN_TTL: u32 = 60;
/// 最大 TTL（秒）
pub const MAX_TTL: u32 = 60_000;

// ============ Enums ============

/// Record types accepted by `setHosts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cname,
    Mx,
    Mxe,
    Ns,
    Txt,
    Url,
    Url301,
    Frame,
}

impl RecordType {
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::Aaaa,
        Self::Alias,
        Self::Caa,
        Self::Cname,
        Self::Mx,
        Self::Mxe,
        Self::Ns,
        Self::Txt,
        Self::Url,
        Self::Url301,
        Self::Frame,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Alias => "ALIAS",
            Self::Caa => "CAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Mxe => "MXE",
            Self::Ns => "NS",
            Self::Txt => "TXT",
            Self::Url => "URL",
            Self::Url301 => "URL301",
            Self::Frame => "FRAME",
        }
    }

    /// Redirect-style records whose address must be a URL.
    fn is_redirect(self) -> bool {
        matches!(self, Self::Url | Self::Url301 | Self::Frame)
    }
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|record_type| record_type.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mail routing mode of a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailType {
    None,
    Mxe,
    Mx,
    Fwd,
    Ox,
}

impl EmailType {
    pub const ALL: [Self; 5] = [Self::None, Self::Mxe, Self::Mx, Self::Fwd, Self::Ox];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Mxe => "MXE",
            Self::Mx => "MX",
            Self::Fwd => "FWD",
            Self::Ox => "OX",
        }
    }
}

impl FromStr for EmailType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|email_type| email_type.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for EmailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CAA property tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaaTag {
    Issue,
    IssueWild,
    Iodef,
}

impl CaaTag {
    pub const ALL: [Self; 3] = [Self::Issue, Self::IssueWild, Self::Iodef];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::IssueWild => "issuewild",
            Self::Iodef => "iodef",
        }
    }
}

impl FromStr for CaaTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == s).ok_or(())
    }
}

// ============ Input ============

/// One host record as supplied by the caller. Every field is optional so that
/// missing values are reported instead of defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecordSpec {
    pub host_name: Option<String>,
    /// One of `A, AAAA, ALIAS, CAA, CNAME, MX, MXE, NS, TXT, URL, URL301, FRAME`.
    pub record_type: Option<String>,
    /// IP address, host name or URL depending on the record type.
    pub address: Option<String>,
    /// Required for `MX` records.
    pub mx_pref: Option<u8>,
    /// 60..=60000 seconds when present.
    pub ttl: Option<u32>,
}

impl HostRecordSpec {
    pub fn new(
        host_name: impl Into<String>,
        record_type: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            host_name: Some(host_name.into()),
            record_type: Some(record_type.into()),
            address: Some(address.into()),
            mx_pref: None,
            ttl: None,
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn with_mx_pref(mut self, mx_pref: u8) -> Self {
        self.mx_pref = Some(mx_pref);
        self
    }
}

/// Arguments of `namecheap.domains.dns.setHosts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetHostsArgs {
    pub domain: String,
    /// Order is preserved and defines the 1-based wire index.
    pub records: Vec<HostRecordSpec>,
    /// `NONE, MXE, MX, FWD, OX`; omitted from the request when absent.
    pub email_type: Option<String>,
    /// CAA flag, `0` is the usual value.
    pub flag: Option<u8>,
    /// `issue, issuewild, iodef`.
    pub tag: Option<String>,
}

// ============ Output ============

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub host_name: String,
    pub record_type: RecordType,
    pub address: String,
    pub mx_pref: Option<u8>,
    pub ttl: Option<u32>,
}

/// A batch that passed every rule of [`validate_host_records`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedHosts {
    pub domain: DomainNameParts,
    pub records: Vec<ValidatedRecord>,
    pub email_type: Option<EmailType>,
    pub flag: Option<u8>,
    pub tag: Option<CaaTag>,
}

impl ValidatedHosts {
    /// Flattens the batch into request parameters, record indexes starting at 1.
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("SLD".to_string(), self.domain.second_level.clone());
        params.insert("TLD".to_string(), self.domain.top_level.clone());

        if let Some(email_type) = self.email_type {
            params.insert("EmailType".to_string(), email_type.as_str().to_string());
        }
        if let Some(flag) = self.flag {
            params.insert("Flag".to_string(), flag.to_string());
        }
        if let Some(tag) = self.tag {
            params.insert("Tag".to_string(), tag.as_str().to_string());
        }

        for (i, record) in self.records.iter().enumerate() {
            let n = i + 1;
            params.insert(format!("HostName{n}"), record.host_name.clone());
            params.insert(
                format!("RecordType{n}"),
                record.record_type.as_str().to_string(),
            );
            params.insert(format!("Address{n}"), record.address.clone());
            if let Some(ttl) = record.ttl {
                params.insert(format!("TTL{n}"), ttl.to_string());
            }
            if let Some(mx_pref) = record.mx_pref {
                params.insert(format!("MXPref{n}"), mx_pref.to_string());
            }
        }

        params
    }
}

// ============ Validation ============

/// Validates a `setHosts` batch, failing on the first violated rule.
///
/// Domain, email type and tag are checked first, then each record in order, then the
/// batch-wide MX/MXE counts.
pub fn validate_host_records(args: &SetHostsArgs) -> Result<ValidatedHosts, ValidationError> {
    let domain = parse_domain(&args.domain)?;

    let email_type = args
        .email_type
        .as_deref()
        .map(|value| {
            value
                .parse::<EmailType>()
                .map_err(|()| ValidationError::InvalidEmailType {
                    value: value.to_string(),
                })
        })
        .transpose()?;

    let tag = args
        .tag
        .as_deref()
        .map(|value| {
            value
                .parse::<CaaTag>()
                .map_err(|()| ValidationError::InvalidTag {
                    value: value.to_string(),
                })
        })
        .transpose()?;

    let records = args
        .records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record, email_type))
        .collect::<Result<Vec<_>, _>>()?;

    match email_type {
        Some(EmailType::Mx) if !records.iter().any(|r| r.record_type == RecordType::Mx) => {
            return Err(ValidationError::MxRecordRequiredForMxEmailType);
        }
        Some(EmailType::Mxe) => {
            let found = records
                .iter()
                .filter(|r| r.record_type == RecordType::Mxe)
                .count();
            if found != 1 {
                return Err(ValidationError::MxeRecordRequiredForMxeEmailType { found });
            }
        }
        _ => {}
    }

    Ok(ValidatedHosts {
        domain,
        records,
        email_type,
        flag: args.flag,
        tag,
    })
}

fn validate_record(
    index: usize,
    record: &HostRecordSpec,
    email_type: Option<EmailType>,
) -> Result<ValidatedRecord, ValidationError> {
    let host_name = record
        .host_name
        .clone()
        .ok_or(ValidationError::MissingHostName { index })?;

    let raw_type = record
        .record_type
        .as_deref()
        .ok_or(ValidationError::MissingRecordType { index })?;
    let record_type =
        raw_type
            .parse::<RecordType>()
            .map_err(|()| ValidationError::InvalidRecordType {
                index,
                value: raw_type.to_string(),
            })?;

    if let Some(ttl) = record.ttl
        && !(MIN_TTL..=MAX_TTL).contains(&ttl)
    {
        return Err(ValidationError::InvalidTtl { index, value: ttl });
    }

    let address = record
        .address
        .clone()
        .ok_or(ValidationError::MissingAddress { index })?;

    let required_email_type = match record_type {
        RecordType::Mx => Some(EmailType::Mx),
        RecordType::Mxe => Some(EmailType::Mxe),
        _ => None,
    };
    if let Some(required) = required_email_type
        && email_type != Some(required)
    {
        return Err(ValidationError::RecordTypeNotAllowedForEmailType {
            index,
            record_type: record_type.as_str().to_string(),
            email_type: email_type.map_or_else(|| "nil".to_string(), |e| e.as_str().to_string()),
        });
    }
    if record_type == RecordType::Mx && record.mx_pref.is_none() {
        return Err(ValidationError::MissingMxPref { index });
    }

    if record_type.is_redirect() && !has_protocol_prefix(&address) {
        return Err(ValidationError::MissingProtocolPrefix {
            index,
            record_type: record_type.as_str().to_string(),
        });
    }

    // Substring match on the raw `flag tag value` text, not a parse of the CAA value.
    if record_type == RecordType::Caa
        && address.contains("iodef")
        && !["http://", "https://", "mailto:"]
            .iter()
            .any(|scheme| address.contains(scheme))
    {
        return Err(ValidationError::MissingProtocolPrefix {
            index,
            record_type: "CAA iodef".to_string(),
        });
    }

    Ok(ValidatedRecord {
        host_name,
        record_type,
        address,
        mx_pref: record.mx_pref,
        ttl: record.ttl,
    })
}

/// `scheme://...` where the scheme starts with a letter (RFC 3986 scheme charset).
fn has_protocol_prefix(address: &str) -> bool {
    let Some((scheme, _)) = address.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
