//! Request bodies used by the user profile and super-admin endpoints.

use serde::Serialize;

/// Body for `PATCH /super-admin/users/{id}/status`.
///
/// Typical values are `active`, `suspended` and `banned`; the backend
/// decides which are valid.
#[derive(Debug, Clone, Serialize)]
pub struct UserStatusUpdate {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Platform-wide announcement sent through the super-admin namespace.
///
/// # JSON Example
///
/// ```json
/// {
///   "title": "Scheduled maintenance",
///   "message": "Signing will be unavailable 02:00-03:00 UTC.",
///   "audience": "all"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct BroadcastNotification {
    pub title: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
