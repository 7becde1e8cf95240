//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use fastdns_provider::{
    DnsProvider, FastdnsProvider, ProviderCredentials, Record, create_provider,
};
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{Value, json};

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

// ============ Mock server helpers ============

pub const API_TOKEN: &str = "test-api-token-0123456789";
pub const SESSION_TOKEN: &str = "session-token-abcdef";
pub const ZONE: &str = "example.com";
pub const DOMAIN_ID: i64 = 7;

/// `Authorization` header value every authenticated mock expects
pub fn bearer() -> String {
    format!("Bearer {SESSION_TOKEN}")
}

/// 指向 mock server 的 provider
pub fn provider_for(server: &MockServer) -> FastdnsProvider {
    let result = FastdnsProvider::builder(API_TOKEN)
        .api_url(server.base_url())
        .build();
    match result {
        Ok(provider) => provider,
        Err(e) => panic!("failed to build provider: {e}"),
    }
}

/// `POST /login_token` 成功
pub async fn mock_login(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/login_token")
                .header("authenticate", API_TOKEN);
            then.status(200).json_body(json!({
                "expire": "2030-01-01T00:00:00Z",
                "token": SESSION_TOKEN,
            }));
        })
        .await
}

/// `GET /api/domains/{zone}/name` 成功
pub async fn mock_domain<'a>(server: &'a MockServer, zone: &str, id: i64) -> Mock<'a> {
    let path = format!("/api/domains/{zone}/name");
    let zone = zone.to_string();
    server
        .mock_async(move |when, then| {
            when.method(GET)
                .path(path)
                .header("authorization", bearer());
            then.status(200).json_body(json!({
                "id": id,
                "name": zone,
                "owner_id": 1,
                "created_at": "2023-01-02T03:04:05Z",
                "updated_at": "2023-01-02T03:04:05Z",
            }));
        })
        .await
}

/// FastDNS 记录 JSON
pub fn wire_record(id: &str, record_type: &str, name: &str, content: &str, ttl: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": record_type,
        "content": content,
        "serial": 2024010101,
        "refresh": 10800,
        "retry": 3600,
        "expire": 604800,
        "ttl": ttl,
        "tag": "",
        "flag": 0,
        "priority": 0,
        "weight": 0,
        "port": 0,
    })
}

/// `GET /api/domains/{id}/records` 返回给定记录
pub async fn mock_list<'a>(server: &'a MockServer, domain_id: i64, records: Value) -> Mock<'a> {
    let path = format!("/api/domains/{domain_id}/records");
    server
        .mock_async(move |when, then| {
            when.method(GET)
                .path(path)
                .header("authorization", bearer());
            then.status(200).json_body(records);
        })
        .await
}

// ============ Live test helpers ============

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl TestContext {
    /// 从环境变量创建 FastDNS 测试上下文
    pub fn fastdns() -> Option<Self> {
        let credentials = ProviderCredentials::from_env().ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider, domain })
    }

    /// 在区域中查找指定 id 的记录
    pub async fn find_record(&self, id: &str) -> Option<Record> {
        let records = self.provider.get_records(&self.domain).await.ok()?;
        records.into_iter().find(|r| r.id == id)
    }
}
