//! FastDNS API 类型定义
//!
//! Each struct mirrors exactly one JSON contract of the API. Conversions to and from
//! the generic [`Record`](crate::types::Record) live in `provider.rs`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

/// `POST /login_token` 响应：短期会话令牌
///
/// Obtained at the start of every operation and passed by reference to each
/// following request of that operation; it is never stored on the provider.
#[derive(Clone, Deserialize)]
pub struct Session {
    pub expire: DateTime<Utc>,
    pub token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("expire", &self.expire)
            .field("token", &mask_secret(&self.token))
            .finish()
    }
}

/// 错误信封，非成功状态码时返回
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}

/// `GET /api/domains/{zone}/name` 响应：区域对应的域名
#[derive(Debug, Clone, Deserialize)]
pub struct FastdnsDomain {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub owner_id: i64,
    #[serde(default)]
    #[allow(dead_code)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    #[allow(dead_code)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// DNS 记录（请求与响应）
///
/// `serial`/`refresh`/`retry`/`expire` are zone-level SOA values the API reports on
/// every record; they are not settable per record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastdnsRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub serial: i64,
    pub refresh: i64,
    pub retry: i64,
    pub expire: i64,
    pub ttl: u32,
    pub tag: String,
    pub flag: i32,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
}

/// 创建记录的请求体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordForm {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub tag: String,
    pub flag: i32,
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
}
