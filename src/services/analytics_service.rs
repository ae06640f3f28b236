//! Analytics service. Every aggregate takes the same time range.

use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::analytics;
use crate::error::ClientError;
use crate::models::query::AnalyticsRange;

pub async fn overview(client: &ApiClient, range: &AnalyticsRange) -> Result<Value, ClientError> {
    client.get_with_query(analytics::OVERVIEW, &range.pairs()).await
}

pub async fn agreement_stats(
    client: &ApiClient,
    range: &AnalyticsRange,
) -> Result<Value, ClientError> {
    client.get_with_query(analytics::AGREEMENTS, &range.pairs()).await
}

pub async fn revenue(client: &ApiClient, range: &AnalyticsRange) -> Result<Value, ClientError> {
    client.get_with_query(analytics::REVENUE, &range.pairs()).await
}

pub async fn user_growth(client: &ApiClient, range: &AnalyticsRange) -> Result<Value, ClientError> {
    client.get_with_query(analytics::USERS, &range.pairs()).await
}
