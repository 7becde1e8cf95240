use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::log_sanitizer::mask_secret;

// ============ Generic Record ============

/// A provider-agnostic DNS record.
///
/// This is the shape exchanged with callers; the FastDNS wire format is mapped to and
/// from it at the provider boundary. Record content is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Provider-assigned record id. Empty for records that do not exist yet.
    pub id: String,
    /// Record type, e.g. `"A"`, `"TXT"`, `"MX"`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name relative to the zone, e.g. `"www"` or `"@"`.
    pub name: String,
    /// Record content (address, target, text, ...).
    pub value: String,
    /// Time to live. Sent to the provider in whole seconds.
    pub ttl: Duration,
    /// Priority for MX/SRV records, 0 otherwise.
    pub priority: u16,
}

impl Record {
    /// Create a record that has not been assigned an id yet.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            id: String::new(),
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ttl,
            priority: 0,
        }
    }

    /// Set the provider record id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the record already carries a provider id.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

// ============ Credentials ============

/// Default FastDNS API base URL.
pub const DEFAULT_API_URL: &str = "https://fastdns.fv.ee";

/// Environment variable holding the API token for [`ProviderCredentials::from_env`].
pub const ENV_API_TOKEN: &str = "FASTDNS_API_TOKEN";
/// Environment variable holding an optional API base URL for [`ProviderCredentials::from_env`].
pub const ENV_API_URL: &str = "FASTDNS_API_URL";

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize, thiserror::Error)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    #[error("Missing required field: {label}")]
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    #[error("Field cannot be empty: {label}")]
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

/// Credentials and endpoint for the FastDNS API.
///
/// The API token is long-lived and is exchanged for a short-lived session token on
/// every operation. It is masked in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    /// API token sent in the `Authenticate` header on login.
    pub api_token: String,
    /// API base URL; [`DEFAULT_API_URL`] when `None`.
    pub api_url: Option<String>,
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("api_token", &mask_secret(&self.api_token))
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl ProviderCredentials {
    /// Credentials for the default endpoint.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_url: None,
        }
    }

    /// Build credentials from a key/value map (`apiToken`, optional `apiUrl`).
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        let api_token = Self::get_required_field(map, "apiToken", "API Token")?;
        let api_url = map
            .get("apiUrl")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(Self { api_token, api_url })
    }

    /// Build credentials from `FASTDNS_API_TOKEN` and optional `FASTDNS_API_URL`.
    pub fn from_env() -> Result<Self, CredentialValidationError> {
        let map: HashMap<String, String> = [("apiToken", ENV_API_TOKEN), ("apiUrl", ENV_API_URL)]
            .into_iter()
            .filter_map(|(key, var)| std::env::var(var).ok().map(|v| (key.to_string(), v)))
            .collect();
        Self::from_map(&map)
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        match map.get(key) {
            None => Err(CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) if v.trim().is_empty() => Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            }),
            Some(v) => Ok(v.trim().to_string()),
        }
    }

    /// Convert back to a key/value map.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("apiToken".to_string(), self.api_token.clone());
        if let Some(url) = &self.api_url {
            map.insert("apiUrl".to_string(), url.clone());
        }
        map
    }

    /// The configured base URL, or the default one.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
