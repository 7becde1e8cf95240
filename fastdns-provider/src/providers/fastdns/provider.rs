//! FastDNS DnsProvider trait 实现
//!
//! Every zone operation follows the same sequence under the provider lock:
//! authenticate -> resolve the zone to a domain id -> one record call -> map back.
//! The first failing step ends the operation; nothing is retried or rolled back.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::DnsProvider;
use crate::types::Record;

use super::types::{FastdnsRecord, RecordForm};
use super::{FASTDNS_PROVIDER, FastdnsProvider};

// ============ 记录转换 ============

/// TTL 以整秒传输，不足一秒的部分截断
pub(crate) fn ttl_seconds(ttl: Duration) -> u32 {
    u32::try_from(ttl.as_secs()).unwrap_or(u32::MAX)
}

/// 将 FastDNS 记录转换为通用记录
pub(crate) fn wire_to_record(record: FastdnsRecord) -> Record {
    Record {
        id: record.id,
        record_type: record.record_type,
        name: record.name,
        value: record.content,
        ttl: Duration::from_secs(u64::from(record.ttl)),
        priority: record.priority,
    }
}

/// 构建创建记录的请求体
pub(crate) fn record_to_form(record: &Record) -> RecordForm {
    RecordForm {
        name: record.name.clone(),
        record_type: record.record_type.clone(),
        content: record.value.clone(),
        ttl: ttl_seconds(record.ttl),
        priority: record.priority,
        ..Default::default()
    }
}

/// 构建用于整体替换的完整 FastDNS 记录
pub(crate) fn record_to_wire(record: &Record) -> FastdnsRecord {
    FastdnsRecord {
        id: record.id.clone(),
        name: record.name.clone(),
        record_type: record.record_type.clone(),
        content: record.value.clone(),
        ttl: ttl_seconds(record.ttl),
        priority: record.priority,
        ..Default::default()
    }
}

fn log_failure(operation: &str, zone: &str, err: &ProviderError) {
    if err.is_expected() {
        log::warn!("[{FASTDNS_PROVIDER}] {operation} on zone '{zone}' failed: {err}");
    } else {
        log::error!("[{FASTDNS_PROVIDER}] {operation} on zone '{zone}' failed: {err}");
    }
}

/// update/remove 只按 id 定位记录，缺少 id 时不发出任何请求
fn require_id(record: &Record) -> Result<()> {
    if record.has_id() {
        Ok(())
    } else {
        Err(ProviderError::RecordNotFound {
            provider: FASTDNS_PROVIDER.to_string(),
            record_id: String::new(),
            raw_message: "record id is required".to_string(),
        })
    }
}

// ============ 区域操作 ============

impl FastdnsProvider {
    /// List every record in the zone.
    pub(crate) async fn list_entries(&self, zone: &str) -> Result<Vec<Record>> {
        let _guard = self.lock.lock().await;

        let result: Result<Vec<Record>> = async {
            let session = self.client.authenticate().await?;
            let domain = self.client.resolve_domain(&session, zone).await?;
            let records = self.client.list_records(&session, &domain).await?;
            Ok(records.into_iter().map(wire_to_record).collect())
        }
        .await;

        result.inspect_err(|e| log_failure("list_entries", zone, e))
    }

    /// Create a record; the returned record carries the provider-assigned id.
    pub(crate) async fn add_entry(&self, zone: &str, record: &Record) -> Result<Record> {
        let _guard = self.lock.lock().await;

        let result: Result<Record> = async {
            let session = self.client.authenticate().await?;
            let domain = self.client.resolve_domain(&session, zone).await?;
            let created = self
                .client
                .create_record(&session, &domain, &record_to_form(record))
                .await?;
            log::info!(
                "[{FASTDNS_PROVIDER}] Created {} record '{}' in zone '{zone}' (id {})",
                created.record_type,
                created.name,
                created.id
            );
            Ok(wire_to_record(created))
        }
        .await;

        result.inspect_err(|e| log_failure("add_entry", zone, e))
    }

    /// Delete a record by id and return it unchanged.
    pub(crate) async fn remove_entry(&self, zone: &str, record: &Record) -> Result<Record> {
        require_id(record).inspect_err(|e| log_failure("remove_entry", zone, e))?;
        let _guard = self.lock.lock().await;

        let result: Result<Record> = async {
            let session = self.client.authenticate().await?;
            let domain = self.client.resolve_domain(&session, zone).await?;
            self.client
                .delete_record(&session, &domain, &record.id)
                .await?;
            log::info!(
                "[{FASTDNS_PROVIDER}] Deleted record {} from zone '{zone}'",
                record.id
            );
            Ok(record.clone())
        }
        .await;

        result.inspect_err(|e| log_failure("remove_entry", zone, e))
    }

    /// Replace the record with the same id. Never creates.
    pub(crate) async fn update_entry(&self, zone: &str, record: &Record) -> Result<Record> {
        require_id(record).inspect_err(|e| log_failure("update_entry", zone, e))?;
        let _guard = self.lock.lock().await;

        let result: Result<Record> = async {
            let session = self.client.authenticate().await?;
            let domain = self.client.resolve_domain(&session, zone).await?;
            let updated = self
                .client
                .update_record(&session, &domain, &record_to_wire(record))
                .await?;
            Ok(wire_to_record(updated))
        }
        .await;

        result.inspect_err(|e| log_failure("update_entry", zone, e))
    }
}

#[async_trait]
impl DnsProvider for FastdnsProvider {
    fn id(&self) -> &'static str {
        FASTDNS_PROVIDER
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        self.list_entries(zone).await
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut appended = Vec::with_capacity(records.len());
        for record in records {
            appended.push(self.add_entry(zone, record).await?);
        }
        Ok(appended)
    }

    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut set = Vec::with_capacity(records.len());
        for record in records {
            let result = if record.has_id() {
                self.update_entry(zone, record).await?
            } else {
                self.add_entry(zone, record).await?
            };
            set.push(result);
        }
        Ok(set)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let mut deleted = Vec::with_capacity(records.len());
        for record in records {
            deleted.push(self.remove_entry(zone, record).await?);
        }
        Ok(deleted)
    }
}
