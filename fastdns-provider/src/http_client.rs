//! Generic HTTP client tools
//!
//! The provider builds each `RequestBuilder` itself (URL, headers, body); this module
//! owns the shared part of the flow: sending, logging, reading the response, and
//! turning JSON bodies into typed values.
//!
//! Nothing here retries. A transport failure is returned to the caller as-is.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `provider_name` - Provider name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP status
    /// * `Err(ProviderError::Timeout)` / `Err(ProviderError::NetworkError)` on transport failure
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        Self::send(request_builder, provider_name, method_name, url, true).await
    }

    /// Same as [`execute_request`](Self::execute_request), but the response body is
    /// never written to the log (only its length). Used for responses carrying secrets.
    pub async fn execute_request_redacted(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        Self::send(request_builder, provider_name, method_name, url, false).await
    }

    async fn send(
        request_builder: RequestBuilder,
        provider_name: &str,
        method_name: &str,
        url: &str,
        log_body: bool,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| transport_error(provider_name, &e))?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider_name}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        if log_body {
            log::debug!(
                "[{provider_name}] Response Body: {}",
                truncate_for_log(&response_text)
            );
        } else {
            log::debug!(
                "[{provider_name}] Response Body: <redacted, {} bytes>",
                response_text.len()
            );
        }

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider_name}] JSON parse failed: {e}");
            log::error!(
                "[{provider_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Serialize a request body to JSON text
    ///
    /// # Returns
    /// * `Err(ProviderError::SerializationError)` - serialization failed
    pub fn to_json<B>(body: &B, provider_name: &str) -> Result<String, ProviderError>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        })
    }
}

/// 将 reqwest 发送错误转换为统一错误类型
fn transport_error(provider_name: &str, e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    }
}
