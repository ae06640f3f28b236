//! Client library for the Sealia document-signing REST API.
//!
//! # Architecture
//!
//! - **Endpoint map** (`endpoints`): URL templates grouped by resource
//! - **Request wrapper** (`client`): headers, bearer token, JSON in/out, error normalization
//! - **Services** (`services`): one function per resource operation
//! - **Token store** (`token`): the credential, passed to the client explicitly
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sealia_admin_client::client::ApiClient;
//! use sealia_admin_client::models::query::ListQuery;
//! use sealia_admin_client::services::agreement_service;
//! use sealia_admin_client::token::MemoryTokenStore;
//!
//! # async fn run() -> Result<(), sealia_admin_client::error::ClientError> {
//! let client = ApiClient::new(
//!     "https://api.sealia.io/api",
//!     Arc::new(MemoryTokenStore::with_token("eyJhbGciOi...")),
//! )?;
//!
//! let page = agreement_service::list_agreements(&client, &ListQuery::page(1, 20)).await?;
//! println!("{page}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod services;
pub mod token;

pub use client::ApiClient;
pub use config::Config;
pub use error::ClientError;
