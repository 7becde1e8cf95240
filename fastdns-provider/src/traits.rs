use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::Record;

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 错误信封中的错误码（响应体无法解析时为 None）
    pub code: Option<i64>,
    /// 错误信封中的消息，或原始响应体
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: i64, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录 ID（用于 `RecordNotFound`）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound`）
    pub domain: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未分类的 API 错误（fallback）
    fn api_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Api {
            provider: self.provider_name().to_string(),
            status: raw.status,
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Zone-scoped record operations over the provider-agnostic [`Record`] model.
///
/// This is the surface a DNS-automation caller (ACME DNS-01 solvers, dynamic DNS
/// updaters, ...) programs against. Each method takes a zone name such as
/// `"example.com"` and returns the records as the provider reports them afterwards.
///
/// Multi-record calls process records in order and stop at the first failure.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// List every record in the zone.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Create the given records and return them with their provider-assigned ids.
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Update records that carry an id and create those that don't.
    ///
    /// Updates are full replacements of the record with that id; records are never
    /// matched by name or content.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Delete the given records by id and return them unchanged.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}
