//! Per-resource service functions.
//!
//! Each function binds one HTTP verb to one endpoint-map entry and takes the
//! client explicitly as its first argument.

pub mod agreement_service;
pub mod analytics_service;
pub mod auth_service;
pub mod billing_service;
pub mod compliance_service;
pub mod notification_service;
pub mod super_admin_service;
pub mod template_service;
pub mod user_service;
