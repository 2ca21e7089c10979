//! Namecheap 沙箱集成测试
//!
//! 运行方式:
//! ```bash
//! NAMECHEAP_USER_NAME=xxx NAMECHEAP_API_KEY=xxx NAMECHEAP_CLIENT_IP=1.2.3.4 TEST_DOMAIN=example.com \
//!     cargo test -p namecheap-client --test sandbox_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::SandboxContext;
use namecheap_client::{DomainsGetListArgs, GetPricingArgs, ProductName};

#[tokio::test]
#[ignore = "integration test: requires NAMECHEAP_USER_NAME, NAMECHEAP_API_KEY, NAMECHEAP_CLIENT_IP and TEST_DOMAIN"]
async fn test_sandbox_get_balances() {
    skip_if_no_credentials!(
        "NAMECHEAP_USER_NAME",
        "NAMECHEAP_API_KEY",
        "NAMECHEAP_CLIENT_IP",
        "TEST_DOMAIN"
    );

    let ctx = require_some!(SandboxContext::from_env(), "创建测试上下文失败");
    let response = require_ok!(ctx.client.users().get_balances().await, "get_balances 调用失败");
    let result = require_some!(response.result);
    assert!(result.currency.is_some());

    println!("✓ get_balances 测试通过: {result:?}");
}

#[tokio::test]
#[ignore = "integration test: requires NAMECHEAP_USER_NAME, NAMECHEAP_API_KEY, NAMECHEAP_CLIENT_IP and TEST_DOMAIN"]
async fn test_sandbox_list_domains() {
    skip_if_no_credentials!(
        "NAMECHEAP_USER_NAME",
        "NAMECHEAP_API_KEY",
        "NAMECHEAP_CLIENT_IP",
        "TEST_DOMAIN"
    );

    let ctx = require_some!(SandboxContext::from_env(), "创建测试上下文失败");
    let args = DomainsGetListArgs {
        search_term: Some(ctx.domain.clone()),
        ..DomainsGetListArgs::default()
    };
    let response = require_ok!(
        ctx.client.domains().get_list(Some(&args)).await,
        "get_list 调用失败"
    );
    assert!(
        response
            .domains()
            .iter()
            .any(|d| d.name.as_deref() == Some(ctx.domain.as_str())),
        "域名列表中应包含 {}",
        ctx.domain
    );

    println!("✓ get_list 测试通过，共 {} 个域名", response.domains().len());
}

#[tokio::test]
#[ignore = "integration test: requires NAMECHEAP_USER_NAME, NAMECHEAP_API_KEY, NAMECHEAP_CLIENT_IP and TEST_DOMAIN"]
async fn test_sandbox_get_hosts() {
    skip_if_no_credentials!(
        "NAMECHEAP_USER_NAME",
        "NAMECHEAP_API_KEY",
        "NAMECHEAP_CLIENT_IP",
        "TEST_DOMAIN"
    );

    let ctx = require_some!(SandboxContext::from_env(), "创建测试上下文失败");
    let response = require_ok!(
        ctx.client.domains_dns().get_hosts(&ctx.domain).await,
        "get_hosts 调用失败"
    );
    let result = require_some!(response.result);

    println!("✓ get_hosts 测试通过，共 {} 条记录", result.hosts.len());
}

#[tokio::test]
#[ignore = "integration test: requires NAMECHEAP_USER_NAME, NAMECHEAP_API_KEY, NAMECHEAP_CLIENT_IP and TEST_DOMAIN"]
async fn test_sandbox_get_pricing() {
    skip_if_no_credentials!(
        "NAMECHEAP_USER_NAME",
        "NAMECHEAP_API_KEY",
        "NAMECHEAP_CLIENT_IP",
        "TEST_DOMAIN"
    );

    let ctx = require_some!(SandboxContext::from_env(), "创建测试上下文失败");
    let args = GetPricingArgs {
        product_name: Some(ProductName::Com),
        ..GetPricingArgs::default()
    };
    let response = require_ok!(
        ctx.client.users().get_pricing(&args).await,
        "get_pricing 调用失败"
    );
    let result = require_some!(response.result);
    assert!(!result.product_types.is_empty(), "价格列表不应为空");

    println!("✓ get_pricing 测试通过");
}
