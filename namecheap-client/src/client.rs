//! Request dispatcher and client configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpTransport, ReqwestTransport,
};
use crate::services::{DomainsDnsService, DomainsNsService, DomainsService, UsersService};
use crate::sync_retry::{RetryPolicy, SyncRetry, SyncRetryError};
use crate::utils::log_sanitizer::mask_secret;
use crate::xml::decode_response;

pub const PRODUCTION_API_URL: &str = "https://api.namecheap.com/xml.response";
pub const SANDBOX_API_URL: &str = "https://api.sandbox.namecheap.com/xml.response";

/// HTTP status the API answers with when it wants the request repeated.
const RETRY_STATUS: u16 = 405;

/// Account credentials and environment.
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Account the commands act on (`Username`).
    pub user_name: String,
    /// Account owning the API key (`ApiUser`).
    pub api_user: String,
    pub api_key: String,
    /// Whitelisted IPv4 address of the caller (`ClientIp`).
    pub client_ip: String,
    /// Target the sandbox API instead of production.
    pub use_sandbox: bool,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("user_name", &self.user_name)
            .field("api_user", &self.api_user)
            .field("api_key", &mask_secret(&self.api_key))
            .field("client_ip", &self.client_ip)
            .field("use_sandbox", &self.use_sandbox)
            .finish()
    }
}

/// Namecheap API client.
///
/// Cheap to share behind an [`Arc`]; every call made through one client shares a
/// single retry lock.
///
/// # Construction
///
/// ```rust,no_run
/// use namecheap_client::{Client, ClientOptions};
///
/// let client = Client::new(ClientOptions {
///     user_name: "user".to_string(),
///     api_user: "user".to_string(),
///     api_key: "your-api-key".to_string(),
///     client_ip: "10.10.10.10".to_string(),
///     use_sandbox: true,
/// })?;
/// # Ok::<(), namecheap_client::ClientError>(())
/// ```
pub struct Client {
    options: ClientOptions,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    retry: SyncRetry,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("options", &self.options)
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`] with configurable transport and retry behavior.
pub struct ClientBuilder {
    options: ClientOptions,
    base_url: Option<String>,
    retry_policy: RetryPolicy,
    transport: Option<Arc<dyn HttpTransport>>,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl ClientBuilder {
    fn new(options: ClientOptions) -> Self {
        Self {
            options,
            base_url: None,
            retry_policy: RetryPolicy::default(),
            transport: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Set the delays slept before each retry of a 405 answer (default: 1, 5, 15, 30, 50 seconds).
    #[must_use]
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Override the endpoint chosen from `use_sandbox`.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Replace the reqwest transport. Timeouts are ignored when set.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the connect timeout (default: 10s).
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the overall request timeout (default: 30s).
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the [`Client`] instance.
    pub fn build(self) -> Result<Client> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeouts(
                self.connect_timeout,
                self.request_timeout,
            )?),
        };

        let base_url = self.base_url.unwrap_or_else(|| {
            if self.options.use_sandbox {
                SANDBOX_API_URL.to_string()
            } else {
                PRODUCTION_API_URL.to_string()
            }
        });

        Ok(Client {
            options: self.options,
            base_url,
            transport,
            retry: SyncRetry::new(self.retry_policy),
        })
    }
}

impl Client {
    /// Creates a client with default transport and retry policy.
    pub fn new(options: ClientOptions) -> Result<Self> {
        Self::builder(options).build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(options: ClientOptions) -> ClientBuilder {
        ClientBuilder::new(options)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        self.retry.policy()
    }

    /// `namecheap.domains.*`
    pub fn domains(&self) -> DomainsService<'_> {
        DomainsService::new(self)
    }

    /// `namecheap.domains.dns.*`
    pub fn domains_dns(&self) -> DomainsDnsService<'_> {
        DomainsDnsService::new(self)
    }

    /// `namecheap.domains.ns.*`
    pub fn domains_ns(&self) -> DomainsNsService<'_> {
        DomainsNsService::new(self)
    }

    /// `namecheap.users.*`
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Sends one command and decodes its `CommandResponse`.
    ///
    /// `params` must contain `Command`; credentials are merged in here. HTTP 405
    /// answers are retried through the shared coordinator.
    pub(crate) async fn do_xml<T: DeserializeOwned>(
        &self,
        mut params: BTreeMap<String, String>,
    ) -> Result<T> {
        let command = params.get("Command").cloned().unwrap_or_default();
        log::debug!(
            "[namecheap] {command} params={:?}",
            params.keys().collect::<Vec<_>>()
        );

        self.merge_credentials(&mut params);
        let body = encode_body(&params);

        match self.retry.run(|| self.send_once::<T>(&body)).await {
            Ok(value) => Ok(value),
            Err(SyncRetryError::Operation(e)) => {
                if e.is_expected() {
                    log::warn!("[namecheap] {command} failed: {e}");
                } else {
                    log::error!("[namecheap] {command} failed: {e}");
                }
                Err(e)
            }
            Err(SyncRetryError::AttemptsExhausted { attempts }) => {
                log::error!("[namecheap] {command} gave up after {attempts} attempts");
                Err(ClientError::RetryLimitExceeded { attempts })
            }
        }
    }

    async fn send_once<T: DeserializeOwned>(&self, body: &str) -> Result<T> {
        let response = self
            .transport
            .post_form(&self.base_url, body.to_string())
            .await?;

        if response.status == RETRY_STATUS {
            log::warn!("[namecheap] HTTP {RETRY_STATUS}, request will be retried");
            return Err(ClientError::Retryable {
                status: response.status,
            });
        }

        decode_response(&response.body)
    }

    fn merge_credentials(&self, params: &mut BTreeMap<String, String>) {
        params.insert("Username".to_string(), self.options.user_name.clone());
        params.insert("ApiKey".to_string(), self.options.api_key.clone());
        params.insert("ApiUser".to_string(), self.options.api_user.clone());
        params.insert("ClientIp".to_string(), self.options.client_ip.clone());
    }
}

/// `application/x-www-form-urlencoded` body, keys in sorted order.
pub(crate) fn encode_body(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
