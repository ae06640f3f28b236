//! Agreement signing request body.

use serde::Serialize;

/// Body for `POST /agreements/{id}/sign`.
///
/// # JSON Example
///
/// ```json
/// {
///   "signature": "data:image/png;base64,iVBORw0KGgo...",
///   "signer_name": "Ngozi Okafor",
///   "signer_email": "ngozi@example.com"
/// }
/// ```
///
/// `signature` is whatever the signing surface captured (typed name or a
/// data URL of a drawn signature); the backend interprets it.
#[derive(Debug, Clone, Serialize)]
pub struct SignAgreementRequest {
    pub signature: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_email: Option<String>,
}
