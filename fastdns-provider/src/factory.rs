//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::FastdnsProvider;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` for easy sharing
/// across async tasks. Operations issued through clones of the `Arc` still run one
/// at a time.
///
/// # Errors
/// Fails with `InvalidParameter` when `api_url` is not a valid http(s) URL.
///
/// # Examples
///
/// ```rust,no_run
/// use fastdns_provider::{create_provider, ProviderCredentials};
///
/// let provider = create_provider(ProviderCredentials::new("your-token")).unwrap();
/// assert_eq!(provider.id(), "fastdns");
/// ```
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    Ok(Arc::new(FastdnsProvider::from_credentials(credentials)?))
}
