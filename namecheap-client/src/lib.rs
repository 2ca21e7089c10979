//! # namecheap-client
//!
//! Typed async client for the [Namecheap](https://www.namecheap.com/) registrar XML API.
//!
//! ## Endpoint Groups
//!
//! | Group | Accessor | Commands |
//! |-------|----------|----------|
//! | Domains | [`Client::domains`] | `getList`, `getInfo`, `check`, `create`, `getContacts`, `getTldList`, `renew`, `reactivate`, `getRegistrarLock`, `setRegistrarLock` |
//! | Domains DNS | [`Client::domains_dns`] | `setDefault`, `setCustom`, `getList`, `getHosts`, `setHosts`, `getEmailForwarding`, `setEmailForwarding` |
//! | Domains NS | [`Client::domains_ns`] | `create`, `delete`, `getInfo`, `update` |
//! | Users | [`Client::users`] | `getBalances`, `getPricing`, `createaddfundsrequest`, `getAddFundsStatus` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* - Use the platform's native TLS implementation.
//! - **`rustls`** - Use rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use namecheap_client::{Client, ClientOptions, HostRecordSpec, SetHostsArgs};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientOptions {
//!         user_name: "user".to_string(),
//!         api_user: "user".to_string(),
//!         api_key: "your-api-key".to_string(),
//!         client_ip: "10.10.10.10".to_string(),
//!         use_sandbox: true,
//!     })?;
//!
//!     // 1. List domains
//!     let list = client.domains().get_list(None).await?;
//!     for domain in list.domains() {
//!         println!("{:?} expires {:?}", domain.name, domain.expires);
//!     }
//!
//!     // 2. Replace the host records of one domain
//!     let args = SetHostsArgs {
//!         domain: "example.com".to_string(),
//!         records: vec![
//!             HostRecordSpec::new("@", "A", "192.0.2.1").with_ttl(1800),
//!             HostRecordSpec::new("www", "CNAME", "example.com."),
//!         ],
//!         ..SetHostsArgs::default()
//!     };
//!     client.domains_dns().set_hosts(&args).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::Validation`] - arguments rejected locally, nothing was sent
//! - [`ClientError::Remote`] - the API answered with an error (`message (code)`)
//! - [`ClientError::RetryLimitExceeded`] - HTTP 405 persisted through the retry policy
//! - [`ClientError::Network`] / [`ClientError::Timeout`] - transport failure, not retried
//! - [`ClientError::Parse`] - the body was not a valid `ApiResponse`
//!
//! HTTP 405 answers are retried with the client's [`RetryPolicy`]. All retrying
//! callers of one client take turns, so concurrent requests never pile up retries.

mod client;
mod domain_name;
mod error;
mod host_records;
mod http_client;
mod services;
mod sync_retry;
mod utils;
mod xml;

pub use client::{Client, ClientBuilder, ClientOptions, PRODUCTION_API_URL, SANDBOX_API_URL};

// Re-export error types
pub use error::{ClientError, DomainError, Result, ValidationError};

pub use domain_name::{DomainNameParts, parse_domain};

pub use host_records::{
    CaaTag, EmailType, HostRecordSpec, MAX_TTL, MIN_TTL, RecordType, SetHostsArgs,
    ValidatedHosts, ValidatedRecord, validate_host_records,
};

pub use http_client::{HttpTransport, ReqwestTransport, TransportResponse};

pub use sync_retry::{RetryPolicy, SyncRetry, SyncRetryError, Transient};

pub use services::*;

// Re-export utils module
pub use utils::datetime;
