//! Super-admin service.
//!
//! Mirrors the regular resource services under the elevated `/super-admin`
//! namespace, plus platform-only operations: user moderation, plan
//! management, AI configuration and broadcast notifications.
//!
//! # Authorization
//!
//! Every call requires a token belonging to a super-admin; the backend
//! answers 403 otherwise, surfaced as `ClientError::Api`.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::super_admin;
use crate::error::ClientError;
use crate::models::admin::{BroadcastNotification, UserStatusUpdate};
use crate::models::query::{AnalyticsRange, AuditLogQuery, ListQuery};

/// Headline counters for the dashboard (users, agreements, revenue, AI usage).
pub async fn dashboard_stats(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(super_admin::DASHBOARD).await
}

pub async fn list_users(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::USERS, &query.pairs()).await
}

pub async fn get_user(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&super_admin::user(id)?).await
}

/// Suspend, reactivate or ban a user.
pub async fn update_user_status(
    client: &ApiClient,
    id: &str,
    update: &UserStatusUpdate,
) -> Result<Value, ClientError> {
    tracing::info!(user_id = id, status = %update.status, "Updating user status");
    client.patch(&super_admin::user_status(id)?, update).await
}

pub async fn delete_user(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    tracing::info!(user_id = id, "Deleting user");
    client.delete(&super_admin::user(id)?).await
}

pub async fn list_agreements(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::AGREEMENTS, &query.pairs()).await
}

pub async fn list_templates(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::TEMPLATES, &query.pairs()).await
}

pub async fn list_plans(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(super_admin::PLANS).await
}

pub async fn create_plan<B: Serialize + ?Sized>(
    client: &ApiClient,
    plan: &B,
) -> Result<Value, ClientError> {
    client.post(super_admin::PLANS, plan).await
}

pub async fn update_plan<B: Serialize + ?Sized>(
    client: &ApiClient,
    id: &str,
    changes: &B,
) -> Result<Value, ClientError> {
    client.put(&super_admin::plan(id)?, changes).await
}

pub async fn delete_plan(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.delete(&super_admin::plan(id)?).await
}

pub async fn list_transactions(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::TRANSACTIONS, &query.pairs()).await
}

/// Model, limits and feature switches for AI-assisted drafting.
pub async fn get_ai_config(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(super_admin::AI_CONFIG).await
}

pub async fn update_ai_config<B: Serialize + ?Sized>(
    client: &ApiClient,
    config: &B,
) -> Result<Value, ClientError> {
    client.put(super_admin::AI_CONFIG, config).await
}

/// AI usage accounting, aggregated by the backend over `range`.
pub async fn ai_usage(client: &ApiClient, range: &AnalyticsRange) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::AI_USAGE, &range.pairs()).await
}

pub async fn compliance_events(
    client: &ApiClient,
    query: &AuditLogQuery,
) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::COMPLIANCE_EVENTS, &query.pairs()).await
}

pub async fn broadcast_notification(
    client: &ApiClient,
    notification: &BroadcastNotification,
) -> Result<Value, ClientError> {
    client.post(super_admin::NOTIFICATIONS_BROADCAST, notification).await
}

pub async fn platform_analytics(
    client: &ApiClient,
    range: &AnalyticsRange,
) -> Result<Value, ClientError> {
    client.get_with_query(super_admin::ANALYTICS, &range.pairs()).await
}
