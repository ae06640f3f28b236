//! Billing request bodies.
//!
//! Plans, transactions and subscriptions are returned as opaque JSON; only
//! the Paystack payment initialization is built client-side.

use serde::Serialize;

/// Body for `POST /billing/paystack/initialize`.
///
/// # Amounts
///
/// `amount` is in the smallest currency unit (kobo for NGN), the same unit
/// Paystack itself uses. ₦5,000.00 is sent as `500000`.
///
/// # JSON Example
///
/// ```json
/// {
///   "email": "billing@acme.ng",
///   "amount": 500000,
///   "plan_id": "plan_pro_monthly",
///   "callback_url": "https://app.sealia.io/payment/callback"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PaystackInitializeRequest {
    pub email: String,

    pub amount: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Where Paystack redirects after checkout; the reference it appends is
    /// later passed to `verify_payment`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}
