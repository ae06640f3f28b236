//! sealia-admin - command-line console for the Sealia API.
//!
//! Drives the client library from a terminal: log in once, and the token is
//! persisted to the configured token file for later invocations. Responses
//! are printed to stdout as pretty JSON; logs go to stderr.
//!
//! # Startup Flow
//!
//! 1. Initialize logging (`RUST_LOG`, defaults to "info")
//! 2. Load configuration from `SEALIA_*` environment variables
//! 3. Build the API client with a file-backed token store
//! 4. Run the requested subcommand

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use sealia_admin_client::models::auth::LoginRequest;
use sealia_admin_client::models::query::{AnalyticsRange, AuditLogQuery, ListQuery};
use sealia_admin_client::services::{
    agreement_service, analytics_service, auth_service, billing_service, compliance_service,
    super_admin_service,
};
use sealia_admin_client::{ApiClient, Config};

#[derive(Debug, Parser)]
#[command(name = "sealia-admin", version, about = "Command-line console for the Sealia API")]
struct Cli {
    /// Override SEALIA_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in and persist the bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and forget the stored token
    Logout,
    /// Show the authenticated user
    Whoami,
    /// GET any path, relative to the API URL or absolute
    Get {
        path: String,
        /// Query parameter as key=value (repeatable)
        #[arg(long = "query", short = 'q', value_parser = parse_pair)]
        query: Vec<(String, String)>,
    },
    /// POST to any path with an optional JSON body
    Post {
        path: String,
        #[arg(long)]
        data: Option<String>,
    },
    /// Agreement operations
    Agreements {
        #[command(subcommand)]
        action: AgreementCommand,
    },
    /// List billing plans
    Plans,
    /// Verify a Paystack payment reference
    PaymentVerify { reference: String },
    /// Platform analytics overview
    Analytics {
        #[arg(long, default_value = "30d")]
        period: String,
    },
    /// Super-admin dashboard counters
    Dashboard,
    /// Query the compliance audit log
    AuditLogs {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        action: Option<String>,
    },
    /// Trigger a retention cleanup run
    Cleanup,
}

#[derive(Debug, Subcommand)]
enum AgreementCommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: String,
    },
    Verify {
        id: String,
    },
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    Ok((key.to_string(), value.to_string()))
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration, letting --api-url override the environment
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    tracing::debug!(api_url = %config.api_url, "Configuration loaded");

    // Build the client on top of the file token store
    let client = ApiClient::from_config(&config)?;

    // Dispatch the subcommand and print its response as JSON
    match cli.command {
        Command::Login { email, password } => {
            let session =
                auth_service::login(&client, &LoginRequest { email, password }).await?;
            print_json(&session.user)?;
        }
        Command::Logout => auth_service::logout(&client).await?,
        Command::Whoami => print_json(&auth_service::current_user(&client).await?)?,
        Command::Get { path, query } => {
            let pairs: Vec<(&str, String)> =
                query.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
            print_json(&client.get_with_query(&path, &pairs).await?)?;
        }
        Command::Post { path, data } => {
            let response: Value = match data {
                Some(raw) => {
                    let body: Value =
                        serde_json::from_str(&raw).context("--data must be valid JSON")?;
                    client.post(&path, &body).await?
                }
                None => client.post_empty(&path).await?,
            };
            print_json(&response)?;
        }
        Command::Agreements { action } => {
            let response = match action {
                AgreementCommand::List {
                    page,
                    limit,
                    status,
                    search,
                } => {
                    let query = ListQuery {
                        status,
                        search,
                        ..ListQuery::page(page, limit)
                    };
                    agreement_service::list_agreements(&client, &query).await?
                }
                AgreementCommand::Show { id } => {
                    agreement_service::get_agreement(&client, &id).await?
                }
                AgreementCommand::Verify { id } => {
                    agreement_service::verify_agreement(&client, &id).await?
                }
            };
            print_json(&response)?;
        }
        Command::Plans => print_json(&billing_service::list_plans(&client).await?)?,
        Command::PaymentVerify { reference } => {
            print_json(&billing_service::verify_payment(&client, &reference).await?)?
        }
        Command::Analytics { period } => {
            let range = AnalyticsRange::period(period);
            print_json(&analytics_service::overview(&client, &range).await?)?;
        }
        Command::Dashboard => print_json(&super_admin_service::dashboard_stats(&client).await?)?,
        Command::AuditLogs {
            page,
            limit,
            action,
        } => {
            let query = AuditLogQuery {
                page,
                limit,
                action,
                ..Default::default()
            };
            print_json(&compliance_service::audit_logs(&client, &query).await?)?;
        }
        Command::Cleanup => print_json(&compliance_service::trigger_cleanup(&client).await?)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_pairs_split_on_first_equals() {
        assert_eq!(
            parse_pair("filter=a=b").unwrap(),
            ("filter".to_string(), "a=b".to_string())
        );
        assert!(parse_pair("novalue").is_err());
    }

    #[test]
    fn cli_parses_nested_agreement_command() {
        let cli = Cli::try_parse_from([
            "sealia-admin",
            "agreements",
            "list",
            "--status",
            "signed",
        ])
        .unwrap();

        match cli.command {
            Command::Agreements {
                action: AgreementCommand::List { page, status, .. },
            } => {
                assert_eq!(page, 1);
                assert_eq!(status.as_deref(), Some("signed"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
