//! Authentication request bodies and the session returned on login.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Credentials for `POST /auth/login`.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "admin@sealia.io",
///   "password": "correct horse battery staple"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account registration for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,

    /// Organisation the account is created for, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Session returned by login, register and refresh.
///
/// # JSON Example
///
/// ```json
/// {
///   "token": "eyJhbGciOi...",
///   "refresh_token": "rt_5f1c...",
///   "user": { "id": "u_1", "email": "admin@sealia.io", "role": "super_admin" }
/// }
/// ```
///
/// `accessToken`/`access_token` are accepted in place of `token`. The user
/// record is kept as opaque JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    #[serde(alias = "access_token", alias = "accessToken")]
    pub token: String,

    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,

    #[serde(default)]
    pub user: Value,
}
