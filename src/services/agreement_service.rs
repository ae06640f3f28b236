//! Agreement service: CRUD, signing and verification.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::agreements;
use crate::error::ClientError;
use crate::models::agreement::SignAgreementRequest;
use crate::models::query::ListQuery;

pub async fn list_agreements(client: &ApiClient, query: &ListQuery) -> Result<Value, ClientError> {
    client.get_with_query(agreements::LIST, &query.pairs()).await
}

pub async fn get_agreement(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&agreements::by_id(id)?).await
}

/// Create an agreement from an arbitrary JSON-serializable payload.
pub async fn create_agreement<B: Serialize + ?Sized>(
    client: &ApiClient,
    agreement: &B,
) -> Result<Value, ClientError> {
    client.post(agreements::LIST, agreement).await
}

pub async fn update_agreement<B: Serialize + ?Sized>(
    client: &ApiClient,
    id: &str,
    changes: &B,
) -> Result<Value, ClientError> {
    client.put(&agreements::by_id(id)?, changes).await
}

pub async fn delete_agreement(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.delete(&agreements::by_id(id)?).await
}

/// Sign an agreement on behalf of the authenticated (or invited) signer.
pub async fn sign_agreement(
    client: &ApiClient,
    id: &str,
    request: &SignAgreementRequest,
) -> Result<Value, ClientError> {
    client.post(&agreements::sign(id)?, request).await
}

/// Ask the backend to verify the integrity of a signed agreement.
pub async fn verify_agreement(client: &ApiClient, id: &str) -> Result<Value, ClientError> {
    client.get(&agreements::verify(id)?).await
}

/// Verify a document by the code printed on it. Works without a token.
pub async fn verify_by_code(client: &ApiClient, code: &str) -> Result<Value, ClientError> {
    client.get(&agreements::verify_code(code)?).await
}
