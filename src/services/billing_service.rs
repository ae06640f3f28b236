//! Billing service: plans, transactions and Paystack payments.
//!
//! # Payment Flow
//!
//! 1. `initialize_payment` returns a Paystack authorization URL and reference
//! 2. The payer completes checkout on Paystack
//! 3. Paystack redirects to the callback URL with `?reference=...`
//! 4. `verify_payment` asks the backend to confirm the reference with Paystack

use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::billing;
use crate::error::ClientError;
use crate::models::billing::PaystackInitializeRequest;
use crate::models::query::ListQuery;

/// Plans available for purchase (the public pricing page).
pub async fn list_plans(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(billing::PLANS).await
}

pub async fn get_plan(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&billing::plan(id)?).await
}

pub async fn list_transactions(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(billing::TRANSACTIONS, &query.pairs()).await
}

pub async fn get_transaction(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&billing::transaction(id)?).await
}

pub async fn current_subscription(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(billing::SUBSCRIPTION).await
}

/// Start a Paystack checkout.
///
/// # Errors
///
/// - `Api`: unknown plan, invalid amount or Paystack rejected the request
pub async fn initialize_payment(
    client: &ApiClient,
    request: &PaystackInitializeRequest,
) -> Result<Value, ClientError> {
    client.post(billing::PAYSTACK_INITIALIZE, request).await
}

/// Confirm a payment by the reference Paystack handed back on redirect.
pub async fn verify_payment(client: &ApiClient, reference: &str) -> Result<Value, ClientError> {
    client.get(&billing::paystack_verify(reference)?).await
}
