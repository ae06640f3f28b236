//! Profile of the authenticated user.

use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints::users;
use crate::error::ClientError;
use crate::models::admin::ChangePasswordRequest;

pub async fn get_profile(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(users::PROFILE).await
}

pub async fn update_profile<B: Serialize + ?Sized>(
    client: &ApiClient,
    changes: &B,
) -> Result<Value, ClientError> {
    client.put(users::PROFILE, changes).await
}

pub async fn change_password(
    client: &ApiClient,
    request: &ChangePasswordRequest,
) -> Result<Value, ClientError> {
    client.post(users::CHANGE_PASSWORD, request).await
}
