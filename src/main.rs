use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pos_reports::api::{self, AppState};
use pos_reports::config::{self, ApiConfig, PoolConfig, ServiceConfig};
use pos_reports::{Connection, ConnectionPool, ReportService};

const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = config::DEFAULT_ACQUIRE_TIMEOUT.as_millis() as u64;
const DEFAULT_QUERY_TIMEOUT_MS: u64 = config::DEFAULT_QUERY_TIMEOUT.as_millis() as u64;
const DEFAULT_READINESS_TTL_SECS: u64 = config::DEFAULT_READINESS_TTL.as_secs();

#[derive(Parser, Debug)]
#[command(name = "pos-reports")]
#[command(version, about = "Point-of-sale sales reporting API", long_about = None)]
struct Args {
    /// DuckDB database file. An in-memory database with the reference schema is used when omitted.
    #[arg(long, env = "POS_REPORTS_DATABASE")]
    database: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "POS_REPORTS_BIND", default_value = config::DEFAULT_BIND_ADDR)]
    bind: String,

    /// Number of pooled connections
    #[arg(long, env = "POS_REPORTS_POOL_SIZE", default_value_t = config::DEFAULT_POOL_SIZE)]
    pool_size: usize,

    /// Maximum wait for a pooled connection, in milliseconds
    #[arg(long, env = "POS_REPORTS_ACQUIRE_TIMEOUT_MS", default_value_t = DEFAULT_ACQUIRE_TIMEOUT_MS)]
    acquire_timeout_ms: u64,

    /// Maximum duration of a single report query, in milliseconds
    #[arg(long, env = "POS_REPORTS_QUERY_TIMEOUT_MS", default_value_t = DEFAULT_QUERY_TIMEOUT_MS)]
    query_timeout_ms: u64,

    /// How long a health probe result is reused, in seconds
    #[arg(long, env = "POS_REPORTS_READINESS_TTL_SECS", default_value_t = DEFAULT_READINESS_TTL_SECS)]
    readiness_ttl_secs: u64,

    /// Advertise fallback mode to clients on 503 responses
    #[arg(long, env = "POS_REPORTS_FALLBACK_MODE")]
    fallback_mode: bool,

    /// Create the reference tables if they are missing
    #[arg(long)]
    init_schema: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pos_reports=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let conn = match &args.database {
        Some(path) => Connection::open(path)?,
        None => {
            tracing::warn!("no database given; serving an empty in-memory store");
            Connection::open_in_memory()?
        }
    };
    if args.init_schema || args.database.is_none() {
        conn.apply_schema()?;
        tracing::info!("reference schema applied");
    }

    let pool = ConnectionPool::from_connection(
        conn,
        PoolConfig {
            size: args.pool_size,
            acquire_timeout: Duration::from_millis(args.acquire_timeout_ms),
        },
    )?;
    let reports = ReportService::new(
        pool.clone(),
        ServiceConfig {
            query_timeout: Duration::from_millis(args.query_timeout_ms),
        },
    );
    let state = Arc::new(AppState::new(
        reports,
        ApiConfig {
            readiness_ttl: Duration::from_secs(args.readiness_ttl_secs),
            fallback_mode: args.fallback_mode,
        },
    ));

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(args.bind.as_str()).await?;
    tracing::info!(addr = %args.bind, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    pool.close();
    Ok(())
}
