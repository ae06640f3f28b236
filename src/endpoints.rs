//! Endpoint map.
//!
//! Static URL templates grouped by resource. Paths are relative to the
//! configured API base URL; parameterized entries are functions taking the
//! resource id and returning the filled-in path.
//!
//! Ids are percent-encoded as a single path segment, so `/`, `?`, `#` or `%`
//! inside an id can never reach another resource. Ids that are empty or
//! consist only of dots are rejected: URL parsing would collapse them into
//! the parent path even when encoded.

use std::borrow::Cow;

use crate::error::ClientError;

/// Encode `id` as exactly one path segment.
pub fn segment(id: &str) -> Result<Cow<'_, str>, ClientError> {
    if id.is_empty() || id.chars().all(|c| c == '.') {
        return Err(ClientError::InvalidId(id.to_string()));
    }

    Ok(urlencoding::encode(id))
}

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const REFRESH: &str = "/auth/refresh";
    pub const LOGOUT: &str = "/auth/logout";
    pub const ME: &str = "/auth/me";
    pub const VERIFY_EMAIL: &str = "/auth/verify-email";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
}

pub mod users {
    pub const PROFILE: &str = "/users/profile";
    pub const CHANGE_PASSWORD: &str = "/users/change-password";
}

pub mod agreements {
    use super::{ClientError, segment};

    pub const LIST: &str = "/agreements";

    pub fn by_id(id: &str) -> Result<String, ClientError> {
        Ok(format!("/agreements/{}", segment(id)?))
    }

    pub fn sign(id: &str) -> Result<String, ClientError> {
        Ok(format!("/agreements/{}/sign", segment(id)?))
    }

    pub fn verify(id: &str) -> Result<String, ClientError> {
        Ok(format!("/agreements/{}/verify", segment(id)?))
    }

    /// Public verification by the code printed on a signed document.
    pub fn verify_code(code: &str) -> Result<String, ClientError> {
        Ok(format!("/agreements/verify/{}", segment(code)?))
    }
}

pub mod templates {
    use super::{ClientError, segment};

    pub const LIST: &str = "/templates";
    pub const SECTORS: &str = "/templates/sectors";
    pub const CATEGORIES: &str = "/templates/categories";

    pub fn by_id(id: &str) -> Result<String, ClientError> {
        Ok(format!("/templates/{}", segment(id)?))
    }

    pub fn by_sector(sector: &str) -> Result<String, ClientError> {
        Ok(format!("/templates/sectors/{}", segment(sector)?))
    }
}

pub mod billing {
    use super::{ClientError, segment};

    pub const PLANS: &str = "/billing/plans";
    pub const TRANSACTIONS: &str = "/billing/transactions";
    pub const SUBSCRIPTION: &str = "/billing/subscription";
    pub const PAYSTACK_INITIALIZE: &str = "/billing/paystack/initialize";

    pub fn plan(id: &str) -> Result<String, ClientError> {
        Ok(format!("/billing/plans/{}", segment(id)?))
    }

    pub fn transaction(id: &str) -> Result<String, ClientError> {
        Ok(format!("/billing/transactions/{}", segment(id)?))
    }

    pub fn paystack_verify(reference: &str) -> Result<String, ClientError> {
        Ok(format!("/billing/paystack/verify/{}", segment(reference)?))
    }
}

pub mod notifications {
    use super::{ClientError, segment};

    pub const LIST: &str = "/notifications";
    pub const READ_ALL: &str = "/notifications/read-all";
    pub const UNREAD_COUNT: &str = "/notifications/unread-count";
    pub const SETTINGS: &str = "/notifications/settings";

    pub fn by_id(id: &str) -> Result<String, ClientError> {
        Ok(format!("/notifications/{}", segment(id)?))
    }

    pub fn mark_read(id: &str) -> Result<String, ClientError> {
        Ok(format!("/notifications/{}/read", segment(id)?))
    }
}

pub mod compliance {
    pub const AUDIT_LOGS: &str = "/compliance/audit-logs";
    pub const RETENTION_POLICY: &str = "/compliance/retention-policy";
    pub const CLEANUP: &str = "/compliance/cleanup";
    pub const REPORT: &str = "/compliance/report";
}

pub mod analytics {
    pub const OVERVIEW: &str = "/analytics/overview";
    pub const AGREEMENTS: &str = "/analytics/agreements";
    pub const REVENUE: &str = "/analytics/revenue";
    pub const USERS: &str = "/analytics/users";
}

/// Elevated-scope namespace mirroring most resource groups.
pub mod super_admin {
    use super::{ClientError, segment};

    pub const DASHBOARD: &str = "/super-admin/dashboard";
    pub const USERS: &str = "/super-admin/users";
    pub const AGREEMENTS: &str = "/super-admin/agreements";
    pub const TEMPLATES: &str = "/super-admin/templates";
    pub const PLANS: &str = "/super-admin/billing/plans";
    pub const TRANSACTIONS: &str = "/super-admin/billing/transactions";
    pub const AI_CONFIG: &str = "/super-admin/ai/config";
    pub const AI_USAGE: &str = "/super-admin/ai/usage";
    pub const COMPLIANCE_EVENTS: &str = "/super-admin/compliance/events";
    pub const NOTIFICATIONS_BROADCAST: &str = "/super-admin/notifications/broadcast";
    pub const ANALYTICS: &str = "/super-admin/analytics";

    pub fn user(id: &str) -> Result<String, ClientError> {
        Ok(format!("/super-admin/users/{}", segment(id)?))
    }

    pub fn user_status(id: &str) -> Result<String, ClientError> {
        Ok(format!("/super-admin/users/{}/status", segment(id)?))
    }

    pub fn plan(id: &str) -> Result<String, ClientError> {
        Ok(format!("/super-admin/billing/plans/{}", segment(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterized_templates_embed_the_id() {
        assert_eq!(agreements::by_id("ag_1").unwrap(), "/agreements/ag_1");
        assert_eq!(agreements::sign("ag_1").unwrap(), "/agreements/ag_1/sign");
        assert_eq!(
            billing::paystack_verify("ref-9").unwrap(),
            "/billing/paystack/verify/ref-9"
        );
        assert_eq!(notifications::mark_read("n2").unwrap(), "/notifications/n2/read");
        assert_eq!(
            super_admin::user_status("u7").unwrap(),
            "/super-admin/users/u7/status"
        );
    }

    #[test]
    fn reserved_characters_stay_inside_one_segment() {
        assert_eq!(
            agreements::by_id("../users/profile").unwrap(),
            "/agreements/..%2Fusers%2Fprofile"
        );
        assert_eq!(
            billing::paystack_verify("T1?admin=1").unwrap(),
            "/billing/paystack/verify/T1%3Fadmin%3D1"
        );
        assert_eq!(agreements::by_id("a#b").unwrap(), "/agreements/a%23b");
        assert_eq!(
            templates::by_sector("real estate").unwrap(),
            "/templates/sectors/real%20estate"
        );
    }

    #[test]
    fn dot_and_empty_ids_are_rejected() {
        for id in ["", ".", "..", "..."] {
            let err = agreements::by_id(id).unwrap_err();
            assert!(matches!(err, ClientError::InvalidId(ref bad) if bad == id), "{id:?}");
        }
    }

    #[test]
    fn static_paths_are_relative() {
        for path in [
            auth::LOGIN,
            users::PROFILE,
            templates::SECTORS,
            compliance::CLEANUP,
            analytics::REVENUE,
            super_admin::AI_CONFIG,
        ] {
            assert!(path.starts_with('/'), "{path} should be relative");
        }
    }
}
