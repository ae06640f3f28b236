//! Query parameters for list, audit and analytics endpoints.
//!
//! Each type renders to `(name, value)` pairs for
//! [`ApiClient::get_with_query`](crate::client::ApiClient::get_with_query).
//! Unset fields are left out of the query string.

use chrono::{DateTime, SecondsFormat, Utc};

pub type QueryPairs = Vec<(&'static str, String)>;

fn push<T: ToString>(pairs: &mut QueryPairs, name: &'static str, value: &Option<T>) {
    if let Some(v) = value {
        pairs.push((name, v.to_string()));
    }
}

fn push_time(pairs: &mut QueryPairs, name: &'static str, value: &Option<DateTime<Utc>>) {
    if let Some(t) = value {
        pairs.push((name, t.to_rfc3339_opts(SecondsFormat::Secs, true)));
    }
}

/// Pagination and filtering shared by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "limit", &self.limit);
        push(&mut pairs, "search", &self.search);
        push(&mut pairs, "status", &self.status);
        push(&mut pairs, "sort", &self.sort);
        pairs
    }
}

/// Filters for the compliance audit log.
#[derive(Debug, Clone, Default)]
pub struct AuditLogQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub user_id: Option<String>,
    pub action: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl AuditLogQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", &self.page);
        push(&mut pairs, "limit", &self.limit);
        push(&mut pairs, "user_id", &self.user_id);
        push(&mut pairs, "action", &self.action);
        push_time(&mut pairs, "from", &self.from);
        push_time(&mut pairs, "to", &self.to);
        pairs
    }
}

/// Time range for analytics aggregates.
///
/// Either a named `period` understood by the backend (`7d`, `30d`, `90d`,
/// `1y`) or an explicit `from`/`to` window; both may be sent.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsRange {
    pub period: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl AnalyticsRange {
    pub fn period(period: impl Into<String>) -> Self {
        Self {
            period: Some(period.into()),
            ..Default::default()
        }
    }

    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            period: None,
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "period", &self.period);
        push_time(&mut pairs, "from", &self.from);
        push_time(&mut pairs, "to", &self.to);
        pairs
    }
}
