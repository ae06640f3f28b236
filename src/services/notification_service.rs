//! Notification service.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::notifications;
use crate::error::ClientError;
use crate::models::query::ListQuery;

pub async fn list_notifications(
    client: &ApiClient,
    query: &ListQuery,
) -> Result<Value, ClientError> {
    client.get_with_query(notifications::LIST, &query.pairs()).await
}

pub async fn get_notification(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&notifications::by_id(id)?).await
}

pub async fn create_notification<B: Serialize + ?Sized>(
    client: &ApiClient,
    notification: &B,
) -> Result<Value, ClientError> {
    client.post(notifications::LIST, notification).await
}

pub async fn delete_notification(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.delete(&notifications::by_id(id)?).await
}

pub async fn mark_read(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.patch(&notifications::mark_read(id)?, &serde_json::json!({})).await
}

pub async fn mark_all_read(client: &ApiClient) -> Result<Value, ClientError> {
    client.patch(notifications::READ_ALL, &serde_json::json!({})).await
}

pub async fn unread_count(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(notifications::UNREAD_COUNT).await
}

/// Per-user delivery preferences (email, in-app, per event type).
pub async fn get_settings(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(notifications::SETTINGS).await
}

pub async fn update_settings<B: Serialize + ?Sized>(
    client: &ApiClient,
    settings: &B,
) -> Result<Value, ClientError> {
    client.put(notifications::SETTINGS, settings).await
}
