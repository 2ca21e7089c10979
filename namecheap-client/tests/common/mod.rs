//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::env;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use namecheap_client::{
    Client, ClientOptions, HttpTransport, Result, RetryPolicy, TransportResponse,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

pub const TEST_URL: &str = "http://mock.namecheap.local/xml.response";

/// 测试用凭证
pub fn test_options() -> ClientOptions {
    ClientOptions {
        user_name: "user".to_string(),
        api_user: "api-user".to_string(),
        api_key: "test-api-key".to_string(),
        client_ip: "10.10.10.10".to_string(),
        use_sandbox: true,
    }
}

/// 包装成完整 `ApiResponse` 的成功响应
pub fn ok_body(command: &str, inner: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
    <Errors />
    <Warnings />
    <RequestedCommand>{command}</RequestedCommand>
    <CommandResponse Type="{command}">
        {inner}
    </CommandResponse>
    <Server>PHX01SBAPIEXT05</Server>
    <GMTTimeDifference>--4:00</GMTTimeDifference>
    <ExecutionTime>0.011</ExecutionTime>
</ApiResponse>"#
    )
}

/// 远端错误响应
pub fn error_body(number: &str, message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
    <Errors>
        <Error Number="{number}">{message}</Error>
    </Errors>
    <Warnings />
    <CommandResponse Type="" />
    <Server>PHX01SBAPIEXT05</Server>
    <ExecutionTime>0.011</ExecutionTime>
</ApiResponse>"#
    )
}

/// 记录请求并按顺序返回预设响应的传输层。
///
/// 队列只剩最后一个响应时会一直返回它。
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<BTreeMap<String, String>>>,
}

impl MockTransport {
    pub fn new(responses: impl IntoIterator<Item = TransportResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// 只返回 200 + `body`
    pub fn ok(body: impl Into<String>) -> Arc<Self> {
        Self::new([TransportResponse::new(200, body)])
    }

    /// 已收到的请求（按发送顺序，表单已解码）
    pub fn requests(&self) -> Vec<BTreeMap<String, String>> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// 最后一个请求
    pub fn last_request(&self) -> Option<BTreeMap<String, String>> {
        lock(&self.requests).last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<TransportResponse> {
        assert_eq!(url, TEST_URL);
        lock(&self.requests).push(decode_form(&body));

        let mut responses = lock(&self.responses);
        let response = if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        };
        Ok(response.unwrap_or_else(|| TransportResponse::new(500, "")))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 解码 `application/x-www-form-urlencoded` 请求体
pub fn decode_form(body: &str) -> BTreeMap<String, String> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                urlencoding::decode(key).map(|k| k.into_owned()).unwrap_or_default(),
                urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_default(),
            )
        })
        .collect()
}

/// 使用 mock 传输层和短重试间隔的客户端
pub fn mock_client(transport: Arc<MockTransport>) -> Client {
    mock_client_with_policy(
        transport,
        RetryPolicy::new(vec![Duration::from_millis(10), Duration::from_millis(20)]),
    )
}

pub fn mock_client_with_policy(transport: Arc<MockTransport>, policy: RetryPolicy) -> Client {
    Client::builder(test_options())
        .base_url(TEST_URL)
        .transport(transport)
        .retry_policy(policy)
        .build()
        .unwrap_or_else(|e| panic!("failed to build mock client: {e}"))
}

/// 每个请求都应带上凭证和命令名
pub fn assert_envelope(request: &BTreeMap<String, String>, command: &str) {
    assert_eq!(request.get("Command").map(String::as_str), Some(command));
    assert_eq!(request.get("Username").map(String::as_str), Some("user"));
    assert_eq!(request.get("ApiUser").map(String::as_str), Some("api-user"));
    assert_eq!(request.get("ApiKey").map(String::as_str), Some("test-api-key"));
    assert_eq!(request.get("ClientIp").map(String::as_str), Some("10.10.10.10"));
}

/// 沙箱集成测试上下文
pub struct SandboxContext {
    pub client: Client,
    pub domain: String,
}

impl SandboxContext {
    pub fn from_env() -> Option<Self> {
        let user_name = env::var("NAMECHEAP_USER_NAME").ok()?;
        let api_key = env::var("NAMECHEAP_API_KEY").ok()?;
        let client_ip = env::var("NAMECHEAP_CLIENT_IP").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let api_user = env::var("NAMECHEAP_API_USER").unwrap_or_else(|_| user_name.clone());

        let client = Client::new(ClientOptions {
            user_name,
            api_user,
            api_key,
            client_ip,
            use_sandbox: true,
        })
        .ok()?;

        Some(Self { client, domain })
    }
}
