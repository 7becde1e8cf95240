//! FastDNS Provider integration test
//!
//! Operation mode:
//! ```bash
//! FASTDNS_API_TOKEN=xxx TEST_DOMAIN=example.com \
//!     cargo test -p fastdns-provider --test fastdns_test -- --ignored --nocapture --test-threads=1
//! ```
//!
//! `FASTDNS_API_URL` optionally points the tests at another endpoint.

mod common;

use std::time::Duration;

use common::{TestContext, generate_test_record_name};
use fastdns_provider::{ProviderError, Record};

// ============ Basic Test ============

#[tokio::test]
#[ignore = "integration test: requires FASTDNS_API_TOKEN and TEST_DOMAIN"]
async fn test_fastdns_list_records() {
    skip_if_no_credentials!("FASTDNS_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::fastdns(), "创建测试上下文失败");
    let records = require_ok!(
        ctx.provider.get_records(&ctx.domain).await,
        "get_records 调用失败"
    );

    println!("✓ get_records 测试通过，共 {} 条记录", records.len());
}

#[tokio::test]
#[ignore = "integration test: requires FASTDNS_API_TOKEN and TEST_DOMAIN"]
async fn test_fastdns_unknown_zone() {
    skip_if_no_credentials!("FASTDNS_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::fastdns(), "创建测试上下文失败");
    let zone = format!("{}.invalid", generate_test_record_name().trim_start_matches('_'));
    let result = ctx.provider.get_records(&zone).await;

    assert!(
        matches!(
            result,
            Err(ProviderError::DomainNotFound { .. } | ProviderError::Api { .. })
        ),
        "未知区域应返回错误: {result:?}"
    );

    println!("✓ 未知区域测试通过");
}

// ============ Record lifecycle ============

#[tokio::test]
#[ignore = "integration test: requires FASTDNS_API_TOKEN and TEST_DOMAIN"]
async fn test_fastdns_txt_record_lifecycle() {
    skip_if_no_credentials!("FASTDNS_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::fastdns(), "创建测试上下文失败");
    let name = generate_test_record_name();

    // 1. 创建
    let record = Record::new("TXT", name.clone(), "hello", Duration::from_secs(300));
    let created = require_ok!(
        ctx.provider.append_records(&ctx.domain, &[record]).await,
        "append_records 调用失败"
    );
    let created = require_some!(created.into_iter().next(), "未返回创建的记录");
    assert!(created.has_id(), "创建的记录应带有 id");
    println!("  创建记录: {} ({})", created.name, created.id);

    // 2. 读回
    let found = require_some!(
        ctx.find_record(&created.id).await,
        "列表中找不到刚创建的记录"
    );
    assert_eq!(found.record_type, "TXT");
    assert_eq!(found.value, "hello");
    assert_eq!(found.ttl, Duration::from_secs(300));

    // 3. 更新
    let mut changed = found.clone();
    changed.value = "hello-again".to_string();
    let updated = require_ok!(
        ctx.provider.set_records(&ctx.domain, &[changed]).await,
        "set_records 调用失败"
    );
    assert_eq!(updated[0].id, created.id);
    assert_eq!(updated[0].value, "hello-again");

    // 4. 删除
    let deleted = require_ok!(
        ctx.provider.delete_records(&ctx.domain, &updated).await,
        "delete_records 调用失败"
    );
    assert_eq!(deleted, updated);
    assert!(
        ctx.find_record(&created.id).await.is_none(),
        "删除后记录仍然存在"
    );

    println!("✓ TXT 记录生命周期测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires FASTDNS_API_TOKEN and TEST_DOMAIN"]
async fn test_fastdns_delete_missing_record() {
    skip_if_no_credentials!("FASTDNS_API_TOKEN", "TEST_DOMAIN");

    let ctx = require_some!(TestContext::fastdns(), "创建测试上下文失败");
    let record = Record::new("TXT", generate_test_record_name(), "x", Duration::from_secs(60))
        .with_id("999999999");
    let result = ctx.provider.delete_records(&ctx.domain, &[record]).await;

    assert!(result.is_err(), "删除不存在的记录应失败: {result:?}");
    println!("✓ 删除不存在记录测试通过");
}
