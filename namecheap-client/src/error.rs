use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sync_retry::Transient;

/// Unified error type for every Namecheap API operation.
///
/// Local argument problems surface as [`Validation`](Self::Validation) before any
/// network traffic. Everything else comes from the transport, the XML envelope, or
/// the retry coordinator.
///
/// # Transient errors
///
/// Only [`Retryable`](Self::Retryable) is transient. The client retries it under the
/// per-client retry lock and converts exhaustion into
/// [`RetryLimitExceeded`](Self::RetryLimitExceeded), so callers never observe it directly.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "details")]
pub enum ClientError {
    /// Arguments were rejected locally, nothing was sent.
    #[error(transparent)]
    Validation {
        /// The validation failure.
        #[from]
        error: ValidationError,
    },

    /// The API answered with a non-empty `Errors` list. Only the first entry is kept.
    #[error("{message} ({code})")]
    Remote {
        /// Value of the `Number` attribute.
        code: String,
        /// Text content of the `Error` element.
        message: String,
    },

    /// Every delay of the retry policy was consumed without a definitive answer.
    #[error("API retry limit exceeded after {attempts} attempts")]
    RetryLimitExceeded {
        /// Total attempts made, the first one included.
        attempts: usize,
    },

    /// The upstream answered with a status that is worth retrying (HTTP 405).
    #[error("transient HTTP status {status}")]
    Retryable {
        /// HTTP status code.
        status: u16,
    },

    /// Connection-level failure (DNS, TLS, refused connection, broken body).
    #[error("network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded into the expected envelope.
    #[error("unable to parse server response: {detail}")]
    Parse {
        /// Details about the decode failure.
        detail: String,
    },
}

impl ClientError {
    /// Returns the remote error number when this is a [`Remote`](Self::Remote) error.
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Self::Remote { code, .. } => Some(code),
            _ => None,
        }
    }

    /// 是否为预期行为（参数错误、远端业务错误），用于日志分级。
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Remote { .. })
    }
}

impl Transient for ClientError {
    fn is_transient(&self) -> bool {
        matches!(self, Self::Retryable { .. })
    }
}

impl From<DomainError> for ClientError {
    fn from(error: DomainError) -> Self {
        Self::Validation {
            error: ValidationError::from(error),
        }
    }
}

/// Failure to split a host name into its registrable parts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum DomainError {
    /// The input is not shaped like `label(.label)+`.
    #[error("invalid domain: incorrect format")]
    InvalidFormat {
        /// Rejected input.
        input: String,
    },

    /// The input is itself a public suffix, there is no registrable part.
    #[error("invalid domain: {input} is not a registrable domain")]
    NotRegistrable {
        /// Rejected input.
        input: String,
    },
}

/// Local argument validation failure. Record indexes are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValidationError {
    #[error(transparent)]
    InvalidDomain {
        #[from]
        source: DomainError,
    },

    #[error("invalid EmailType value: {value}")]
    InvalidEmailType { value: String },

    #[error("invalid Tag value: {value}")]
    InvalidTag { value: String },

    #[error("Records[{index}].HostName is required")]
    MissingHostName { index: usize },

    #[error("Records[{index}].RecordType is required")]
    MissingRecordType { index: usize },

    #[error("invalid Records[{index}].RecordType value: {value}")]
    InvalidRecordType { index: usize, value: String },

    #[error("invalid Records[{index}].TTL value: {value}")]
    InvalidTtl { index: usize, value: u32 },

    #[error("Records[{index}].Address is required")]
    MissingAddress { index: usize },

    #[error("Records[{index}].RecordType {record_type} is not allowed for EmailType={email_type}")]
    RecordTypeNotAllowedForEmailType {
        index: usize,
        record_type: String,
        /// Requested email type, `nil` when none was given.
        email_type: String,
    },

    #[error("at least one MX record is required for EmailType=MX")]
    MxRecordRequiredForMxEmailType,

    #[error("exactly one MXE record is required for EmailType=MXE, got {found}")]
    MxeRecordRequiredForMxeEmailType { found: usize },

    #[error("Records[{index}].MXPref is required for MX records")]
    MissingMxPref { index: usize },

    #[error("Records[{index}].Address must contain a protocol prefix for {record_type} records")]
    MissingProtocolPrefix { index: usize, record_type: String },

    #[error("{name} is required")]
    MissingArgument { name: String },

    #[error("invalid {name} value: {detail}")]
    InvalidArgument { name: String, detail: String },
}

impl ValidationError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub(crate) fn invalid(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            detail: detail.into(),
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
