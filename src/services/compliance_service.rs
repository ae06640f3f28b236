//! Compliance service: audit log, data retention and cleanup.
//!
//! Retention is enforced by the backend. The client reads and replaces the
//! policy and can ask for an immediate cleanup run.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::compliance;
use crate::error::ClientError;
use crate::models::query::AuditLogQuery;

pub async fn audit_logs(client: &ApiClient, query: &AuditLogQuery) -> Result<Value, ClientError> {
    client.get_with_query(compliance::AUDIT_LOGS, &query.pairs()).await
}

pub async fn get_retention_policy(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(compliance::RETENTION_POLICY).await
}

pub async fn update_retention_policy<B: Serialize + ?Sized>(
    client: &ApiClient,
    policy: &B,
) -> Result<Value, ClientError> {
    client.put(compliance::RETENTION_POLICY, policy).await
}

/// Trigger a cleanup run against the current retention policy.
///
/// The response describes what the backend removed or scheduled; the call
/// itself carries no body.
pub async fn trigger_cleanup(client: &ApiClient) -> Result<Value, ClientError> {
    client.post_empty(compliance::CLEANUP).await
}

pub async fn compliance_report(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(compliance::REPORT).await
}
