//! FastDNS Provider

mod error;
mod http;
mod provider;
/// FastDNS API-specific request/response types.
pub(crate) mod types;

use reqwest::Client;
use tokio::sync::Mutex;

use crate::error::{ProviderError, Result};
use crate::types::ProviderCredentials;

use self::http::FastdnsClient;

/// Provider identifier, also used as the `provider` field of every error.
pub(crate) const FASTDNS_PROVIDER: &str = "fastdns";

/// FastDNS provider implementation.
///
/// Authenticates with a long-lived API token, exchanged for a short-lived session
/// token at the start of every operation. Zone operations on one instance never
/// overlap: each runs to completion (or is dropped) before the next one starts.
///
/// # Construction
///
/// ```rust,no_run
/// use fastdns_provider::FastdnsProvider;
///
/// # fn main() -> fastdns_provider::Result<()> {
/// let provider = FastdnsProvider::new("your-api-token")?;
///
/// // or with a custom endpoint / transport
/// let provider = FastdnsProvider::builder("your-api-token")
///     .api_url("https://fastdns.example.net")
///     .http_client(reqwest::Client::new())
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct FastdnsProvider {
    pub(crate) client: FastdnsClient,
    /// 串行化所有区域操作
    pub(crate) lock: Mutex<()>,
}

impl std::fmt::Debug for FastdnsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastdnsProvider")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FastdnsProvider`] with a configurable endpoint and HTTP client.
pub struct FastdnsProviderBuilder {
    credentials: ProviderCredentials,
    http_client: Option<Client>,
}

impl FastdnsProviderBuilder {
    fn new(api_token: String) -> Self {
        Self {
            credentials: ProviderCredentials::new(api_token),
            http_client: None,
        }
    }

    /// Override the API base URL (default: [`DEFAULT_API_URL`](crate::DEFAULT_API_URL)).
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.credentials.api_url = Some(api_url.into());
        self
    }

    /// Use the given HTTP client instead of a default one.
    ///
    /// The default client has no timeouts; configure them here if needed. A timeout
    /// hit by the client surfaces as [`ProviderError::Timeout`].
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the [`FastdnsProvider`] instance.
    ///
    /// # Errors
    /// * `InvalidParameter` - the API URL does not parse or is not http(s)
    /// * `NetworkError` - the default HTTP client could not be initialized
    pub fn build(self) -> Result<FastdnsProvider> {
        let client = match self.http_client {
            Some(client) => client,
            None => Client::builder()
                .build()
                .map_err(|e| ProviderError::NetworkError {
                    provider: FASTDNS_PROVIDER.to_string(),
                    detail: format!("Failed to create HTTP client: {e}"),
                })?,
        };

        Ok(FastdnsProvider {
            client: FastdnsClient::new(client, &self.credentials)?,
            lock: Mutex::new(()),
        })
    }
}

impl FastdnsProvider {
    /// Creates a provider for the default API endpoint.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::builder(api_token).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(api_token: impl Into<String>) -> FastdnsProviderBuilder {
        FastdnsProviderBuilder::new(api_token.into())
    }

    /// Creates a provider from stored credentials.
    pub fn from_credentials(credentials: ProviderCredentials) -> Result<Self> {
        let mut builder = Self::builder(credentials.api_token);
        if let Some(api_url) = credentials.api_url {
            builder = builder.api_url(api_url);
        }
        builder.build()
    }

    /// The API base URL requests are sent to.
    pub fn api_url(&self) -> &str {
        self.client.base_url().as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url() {
        let provider = FastdnsProvider::new("token").unwrap();
        assert_eq!(provider.api_url(), "https://fastdns.fv.ee/");
    }

    #[test]
    fn builder_overrides_url() {
        let provider = FastdnsProvider::builder("token")
            .api_url("http://127.0.0.1:9000")
            .http_client(Client::new())
            .build()
            .unwrap();
        assert_eq!(provider.api_url(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn from_credentials_uses_stored_url() {
        let credentials = ProviderCredentials {
            api_token: "token".to_string(),
            api_url: Some("https://dns.example.net".to_string()),
        };
        let provider = FastdnsProvider::from_credentials(credentials).unwrap();
        assert_eq!(provider.api_url(), "https://dns.example.net/");
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = FastdnsProvider::builder("token").api_url("mailto:x@y").build();
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "api_url"
        ));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let provider = FastdnsProvider::new("super-secret-token-value").unwrap();
        let out = format!("{provider:?}");
        assert!(!out.contains("super-secret-token-value"), "token leaked: {out}");
    }
}
