//! Authentication service.
//!
//! Login, registration and token refresh store the returned bearer token in
//! the client's token store; logout clears it. These are the only places the
//! crate writes a token on its own.

use serde_json::Value;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ClientError;
use crate::models::auth::{
    AuthSession, ForgotPasswordRequest, LoginRequest, RefreshRequest, RegisterRequest,
    ResetPasswordRequest, VerifyEmailRequest,
};

/// Log in and store the session token.
///
/// # Process
///
/// 1. POST credentials to the login endpoint
/// 2. Store the returned token so subsequent requests are authenticated
/// 3. Return the full session (token, refresh token, user)
///
/// # Errors
///
/// - `Api`: wrong credentials (usually 401) or unverified account
/// - `Json`: the response carried no token
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthSession, ClientError> {
    let session: AuthSession = client.post(endpoints::auth::LOGIN, request).await?;

    client.set_token(&session.token)?;
    tracing::info!("Logged in as {}", request.email);

    Ok(session)
}

/// Register a new account. The backend logs the account in immediately, so
/// the returned token is stored just like on login.
pub async fn register(
    client: &ApiClient,
    request: &RegisterRequest,
) -> Result<AuthSession, ClientError> {
    let session: AuthSession = client.post(endpoints::auth::REGISTER, request).await?;

    client.set_token(&session.token)?;
    tracing::info!("Registered {}", request.email);

    Ok(session)
}

/// Exchange a refresh token for a new session and store the new token.
pub async fn refresh(client: &ApiClient, refresh_token: &str) -> Result<AuthSession, ClientError> {
    let request = RefreshRequest {
        refresh_token: refresh_token.to_string(),
    };
    let session: AuthSession = client.post(endpoints::auth::REFRESH, &request).await?;

    client.set_token(&session.token)?;

    Ok(session)
}

pub async fn verify_email(client: &ApiClient, token: &str) -> Result<Value, ClientError> {
    let request = VerifyEmailRequest {
        token: token.to_string(),
    };
    client.post(endpoints::auth::VERIFY_EMAIL, &request).await
}

pub async fn forgot_password(client: &ApiClient, email: &str) -> Result<Value, ClientError> {
    let request = ForgotPasswordRequest {
        email: email.to_string(),
    };
    client.post(endpoints::auth::FORGOT_PASSWORD, &request).await
}

pub async fn reset_password(
    client: &ApiClient,
    request: &ResetPasswordRequest,
) -> Result<Value, ClientError> {
    client.post(endpoints::auth::RESET_PASSWORD, request).await
}

/// The authenticated user as the backend sees it.
pub async fn current_user(client: &ApiClient) -> Result<Value, ClientError> {
    client.get(endpoints::auth::ME).await
}

/// Log out.
///
/// The server-side logout is best-effort: a failure is logged but the local
/// token is cleared regardless. A token store that cannot be read is treated
/// as holding a token, so the server call is still attempted.
pub async fn logout(client: &ApiClient) -> Result<(), ClientError> {
    let authenticated = client.is_authenticated().unwrap_or_else(|e| {
        tracing::warn!("Could not read token before logout: {}", e);
        true
    });

    if authenticated
        && let Err(e) = client.post_empty::<Value>(endpoints::auth::LOGOUT).await
    {
        tracing::warn!("Server-side logout failed: {}", e);
    }

    client.clear_token()?;
    tracing::info!("Logged out");

    Ok(())
}
