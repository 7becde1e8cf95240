use serde::{Deserialize, Serialize};

/// Unified error type for all FastDNS provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Errors that originate from the provider API display the provider's own message verbatim
/// (or the raw response body when it is not a JSON error envelope), since that text is usually
/// the most specific explanation available (`"zone not found"`, `"duplicate record"`, ...).
///
/// None of these errors are retried internally; every failure ends the current operation.
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{provider}] Network error: {detail}")]
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out at the transport level.
    #[error("[{provider}] Request timeout: {detail}")]
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API token was rejected, or the session token is invalid or expired.
    #[error("{raw_message}")]
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Message from the provider API, or the raw response body.
        raw_message: String,
    },

    /// The zone has no matching domain at the provider.
    #[error("{raw_message}")]
    DomainNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was looked up.
        domain: String,
        /// Message from the provider API, or the raw response body.
        raw_message: String,
    },

    /// The specified DNS record was not found, or no record id was supplied.
    #[error("{raw_message}")]
    RecordNotFound {
        /// Provider that produced the error.
        provider: String,
        /// ID of the record that was not found (empty when none was supplied).
        record_id: String,
        /// Message from the provider API, or a local explanation.
        raw_message: String,
    },

    /// Any other non-success response from the provider API.
    #[error("{raw_message}")]
    Api {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code of the response.
        status: u16,
        /// Error code from the error envelope, if the body parsed as one.
        raw_code: Option<i64>,
        /// Message from the error envelope, or the raw response body.
        raw_message: String,
    },

    /// A request parameter is invalid (e.g., malformed base URL).
    #[error("[{provider}] Invalid parameter '{param}': {detail}")]
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse a successful API response.
    #[error("[{provider}] Parse error: {detail}")]
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    #[error("[{provider}] Serialization error: {detail}")]
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（凭证错误、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::DomainNotFound { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Whether the error was raised by the transport rather than by an API response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
