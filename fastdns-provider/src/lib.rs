//! # fastdns-provider
//!
//! Manage DNS records hosted by the [FastDNS](https://fastdns.fv.ee) HTTP API through
//! a small, provider-agnostic record model, the way DNS-automation tools (ACME
//! DNS-01 solvers, dynamic DNS updaters) expect it.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation and static builds.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! fastdns-provider = "0.1"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use fastdns_provider::{create_provider, DnsProvider, ProviderCredentials, Record};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Create a provider from credentials (FASTDNS_API_TOKEN / FASTDNS_API_URL)
//!     let provider = create_provider(ProviderCredentials::from_env()?)?;
//!
//!     // 2. List the records of a zone
//!     for record in provider.get_records("example.com").await? {
//!         println!("{} {} {} -> {}", record.id, record.record_type, record.name, record.value);
//!     }
//!
//!     // 3. Publish an ACME challenge, then clean it up
//!     let challenge = Record::new(
//!         "TXT",
//!         "_acme-challenge",
//!         "gfj9Xq...Rg85nM",
//!         Duration::from_secs(60),
//!     );
//!     let created = provider.append_records("example.com", &[challenge]).await?;
//!     provider.delete_records("example.com", &created).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Records returned by `append_records` carry the provider-assigned `id`; updates and
//! deletions address records only by that id.
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`] — the API token (or session) was rejected
//! - [`ProviderError::DomainNotFound`] — the zone is unknown to the account
//! - [`ProviderError::RecordNotFound`] — no record with that id, or no id given
//! - [`ProviderError::Api`] — any other non-success response
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failure
//!
//! Errors reported by the API display exactly the API's message. Nothing is retried
//! automatically. See [`ProviderError`] for the full list.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CredentialValidationError, DEFAULT_API_URL, ENV_API_TOKEN, ENV_API_URL, ProviderCredentials,
    Record,
};

// Re-export concrete provider
pub use providers::{FastdnsProvider, FastdnsProviderBuilder};
