//! FastDNS 错误映射
//!
//! The API reports failures through the HTTP status plus a `{code, message}`
//! envelope, so classification is driven by the status and the request context:
//!
//! - **401 / 403**: rejected or expired token -> `InvalidCredentials`
//! - **404** on a record path -> `RecordNotFound`
//! - **404** on a zone/domain path -> `DomainNotFound`
//! - anything else -> `Api` with the envelope code and message
//!
//! Login failures of any status are credential errors (see `credentials_error`).

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::FASTDNS_PROVIDER;
use super::http::FastdnsClient;
use super::types::ErrorResponse;

impl ProviderErrorMapper for FastdnsClient {
    fn provider_name(&self) -> &'static str {
        FASTDNS_PROVIDER
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.status {
            401 | 403 => self.credentials_error(raw),
            404 => {
                if let Some(record_id) = context.record_id {
                    ProviderError::RecordNotFound {
                        provider: self.provider_name().to_string(),
                        record_id,
                        raw_message: raw.message,
                    }
                } else if let Some(domain) = context.domain {
                    ProviderError::DomainNotFound {
                        provider: self.provider_name().to_string(),
                        domain,
                        raw_message: raw.message,
                    }
                } else {
                    self.api_error(raw)
                }
            }
            _ => self.api_error(raw),
        }
    }
}

impl FastdnsClient {
    /// 登录失败统一视为凭证错误
    pub(crate) fn credentials_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::InvalidCredentials {
            provider: self.provider_name().to_string(),
            raw_message: raw.message,
        }
    }

    /// 解析非成功响应：优先错误信封，失败时使用原始响应体
    pub(crate) fn raw_error(status: u16, response_text: &str) -> RawApiError {
        match serde_json::from_str::<ErrorResponse>(response_text) {
            Ok(ErrorResponse {
                code: Some(code),
                message,
            }) => RawApiError::with_code(status, code, message),
            Ok(ErrorResponse {
                code: None,
                message,
            }) => RawApiError::new(status, message),
            Err(_) => RawApiError::new(status, response_text),
        }
    }
}
