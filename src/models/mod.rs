//! Request bodies and query types built client-side.
//!
//! Backend entities (users, agreements, plans, ...) are not modelled here;
//! responses are handled as opaque JSON.

/// Super-admin and profile bodies
pub mod admin;
/// Agreement signing
pub mod agreement;
/// Login, registration and session
pub mod auth;
/// Paystack payment initialization
pub mod billing;
/// List, audit log and analytics query parameters
pub mod query;
