//! FastDNS 线路客户端
//!
//! One method per API endpoint. Each call sends exactly one request, checks for the
//! single success status of that endpoint, and decodes the body. Nothing is retried
//! and nothing is cached: the session token is passed in by the caller.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper};
use crate::types::ProviderCredentials;
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

use super::FASTDNS_PROVIDER;
use super::types::{FastdnsDomain, FastdnsRecord, RecordForm, Session};

/// Header carrying the long-lived API token on login.
const AUTHENTICATE_HEADER: &str = "Authenticate";

/// Low-level FastDNS API client
pub(crate) struct FastdnsClient {
    client: Client,
    base_url: Url,
    api_token: String,
}

impl std::fmt::Debug for FastdnsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FastdnsClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &mask_secret(&self.api_token))
            .finish_non_exhaustive()
    }
}

impl FastdnsClient {
    /// Build a client for the credentials' base URL.
    ///
    /// The URL must parse and use `http` or `https`; anything else is an
    /// `InvalidParameter` error.
    pub(crate) fn new(client: Client, credentials: &ProviderCredentials) -> Result<Self> {
        let invalid_url = |detail: String| ProviderError::InvalidParameter {
            provider: FASTDNS_PROVIDER.to_string(),
            param: "api_url".to_string(),
            detail,
        };

        let base_url = Url::parse(credentials.api_url())
            .map_err(|e| invalid_url(format!("{e}: {}", credentials.api_url())))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid_url(format!(
                "unsupported scheme '{}'",
                base_url.scheme()
            )));
        }

        Ok(Self {
            client,
            base_url,
            api_token: credentials.api_token.clone(),
        })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ==================== 辅助方法 ====================

    /// 以给定路径段替换基础 URL 的路径（段内特殊字符会被编码）
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "api_url".to_string(),
                detail: format!("cannot be used as a base URL: {}", self.base_url),
            })?
            .clear()
            .extend(segments);
        Ok(url)
    }

    /// 发送请求，并要求返回指定的成功状态码
    async fn send(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &Url,
        success: u16,
        ctx: ErrorContext,
    ) -> Result<String> {
        let (status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), method, url.as_str())
                .await?;

        if status == success {
            Ok(response_text)
        } else {
            Err(self.map_error(Self::raw_error(status, &response_text), ctx))
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &Url,
        success: u16,
        ctx: ErrorContext,
    ) -> Result<T> {
        let response_text = self.send(request, method, url, success, ctx).await?;
        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    fn with_json_body(&self, request: RequestBuilder, payload: String) -> RequestBuilder {
        log::debug!(
            "[{}] Request Body: {}",
            self.provider_name(),
            truncate_for_log(&payload)
        );
        request.header(CONTENT_TYPE, "application/json").body(payload)
    }

    /// `/api/domains/{id}/records[/{rid}]`
    fn records_url(&self, domain_id: i64, record_id: Option<&str>) -> Result<Url> {
        let domain_id = domain_id.to_string();
        match record_id {
            Some(record_id) => {
                self.endpoint(&["api", "domains", domain_id.as_str(), "records", record_id])
            }
            None => self.endpoint(&["api", "domains", domain_id.as_str(), "records"]),
        }
    }

    // ==================== API 方法 ====================

    /// `POST /login_token`: exchange the API token for a short-lived session.
    ///
    /// Any status other than 200 is a credentials failure. The response body holds the
    /// session token and is kept out of the logs.
    pub(crate) async fn authenticate(&self) -> Result<Session> {
        let url = self.endpoint(&["login_token"])?;
        let request = self
            .client
            .post(url.clone())
            .header(ACCEPT, "application/json")
            .header(AUTHENTICATE_HEADER, &self.api_token);

        let (status, response_text) = HttpUtils::execute_request_redacted(
            request,
            self.provider_name(),
            "POST",
            url.as_str(),
        )
        .await?;

        if status != 200 {
            return Err(self.credentials_error(Self::raw_error(status, &response_text)));
        }

        // 不使用 HttpUtils::parse_json：解析失败时它会记录原始响应体
        serde_json::from_str(&response_text).map_err(|e| self.parse_error(e))
    }

    /// `GET /api/domains/{zone}/name`: resolve a zone name to its domain.
    pub(crate) async fn resolve_domain(
        &self,
        session: &Session,
        zone: &str,
    ) -> Result<FastdnsDomain> {
        let url = self.endpoint(&["api", "domains", zone, "name"])?;
        let request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .bearer_auth(&session.token);

        let ctx = ErrorContext {
            domain: Some(zone.to_string()),
            ..Default::default()
        };
        let domain: FastdnsDomain = self.send_json(request, "GET", &url, 200, ctx).await?;
        log::debug!(
            "[{}] Zone '{zone}' resolved to domain {} ({})",
            self.provider_name(),
            domain.id,
            domain.name
        );
        Ok(domain)
    }

    /// `GET /api/domains/{id}/records`
    ///
    /// A zone without records may come back as `null`, which reads as an empty list.
    pub(crate) async fn list_records(
        &self,
        session: &Session,
        domain: &FastdnsDomain,
    ) -> Result<Vec<FastdnsRecord>> {
        let url = self.records_url(domain.id, None)?;
        let request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .bearer_auth(&session.token);

        let ctx = ErrorContext {
            domain: Some(domain.name.clone()),
            ..Default::default()
        };
        let records: Option<Vec<FastdnsRecord>> =
            self.send_json(request, "GET", &url, 200, ctx).await?;
        Ok(records.unwrap_or_default())
    }

    /// `POST /api/domains/{id}/records`: success is 201 Created.
    pub(crate) async fn create_record(
        &self,
        session: &Session,
        domain: &FastdnsDomain,
        form: &RecordForm,
    ) -> Result<FastdnsRecord> {
        let url = self.records_url(domain.id, None)?;
        let payload = HttpUtils::to_json(form, self.provider_name())?;
        let request = self.with_json_body(
            self.client
                .post(url.clone())
                .header(ACCEPT, "application/json")
                .bearer_auth(&session.token),
            payload,
        );

        let ctx = ErrorContext {
            domain: Some(domain.name.clone()),
            ..Default::default()
        };
        self.send_json(request, "POST", &url, 201, ctx).await
    }

    /// `PUT /api/domains/{id}/records/{record.id}`: full replace of an existing record.
    pub(crate) async fn update_record(
        &self,
        session: &Session,
        domain: &FastdnsDomain,
        record: &FastdnsRecord,
    ) -> Result<FastdnsRecord> {
        let url = self.records_url(domain.id, Some(record.id.as_str()))?;
        let payload = HttpUtils::to_json(record, self.provider_name())?;
        let request = self.with_json_body(
            self.client
                .put(url.clone())
                .header(ACCEPT, "application/json")
                .bearer_auth(&session.token),
            payload,
        );

        let ctx = ErrorContext {
            record_id: Some(record.id.clone()),
            domain: Some(domain.name.clone()),
        };
        self.send_json(request, "PUT", &url, 200, ctx).await
    }

    /// `DELETE /api/domains/{id}/records/{rid}`: success is 204, the body is ignored.
    pub(crate) async fn delete_record(
        &self,
        session: &Session,
        domain: &FastdnsDomain,
        record_id: &str,
    ) -> Result<()> {
        let url = self.records_url(domain.id, Some(record_id))?;
        let request = self
            .client
            .delete(url.clone())
            .header(ACCEPT, "application/json")
            .bearer_auth(&session.token);

        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(domain.name.clone()),
        };
        self.send(request, "DELETE", &url, 204, ctx).await?;
        Ok(())
    }
}
