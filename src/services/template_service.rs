//! Template service.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::templates;
use crate::error::ClientError;
use crate::models::query::ListQuery;

pub async fn list_templates(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(templates::LIST, &query.pairs()).await
}

pub async fn get_template(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&templates::by_id(id)?).await
}

pub async fn create_template<B: Serialize + ?Sized>(
    client: &ApiClient,
    template: &B,
) -> Result<Value, ClientError> {
    client.post(templates::LIST, template).await
}

pub async fn update_template<B: Serialize + ?Sized>(
    client: &ApiClient,
    id: &str,
    changes: &B,
) -> Result<Value, ClientError> {
    client.put(&templates::by_id(id)?, changes).await
}

pub async fn delete_template(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.delete(&templates::by_id(id)?).await
}

/// Business sectors templates are grouped under (legal, real estate, HR, ...).
pub async fn list_sectors(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(templates::SECTORS).await
}

pub async fn list_categories(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(templates::CATEGORIES).await
}

pub async fn templates_by_sector(client: &ApiClient, sector: &str) -> Result<Value, ClientError> {
    client.get(&templates::by_sector(sector)?).await
}
