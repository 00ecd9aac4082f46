pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    leads::{
        create_lead_request::CreateLeadRequest, lead_response::LeadResponse,
        leads::create_lead,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use lead_db::DocumentStore;
use lead_notify::TelegramNotifier;

use std::error::Error;
use std::str::FromStr;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = lead_config::Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, config.logging.colored)?;

    info!("Starting lead-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the document store when a database is configured
    let store = match config.database.url.as_deref() {
        Some(url) => {
            info!("Connecting to database: {}", url);

            let pool = SqlitePoolOptions::new()
                .max_connections(10)
                .connect_with(
                    SqliteConnectOptions::from_str(url)?
                        .create_if_missing(true)
                        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                        .busy_timeout(std::time::Duration::from_secs(5)),
                )
                .await?;

            info!("Database connection established");

            // Run migrations
            info!("Running database migrations...");
            sqlx::migrate!("../crates/lead-db/migrations")
                .run(&pool)
                .await?;
            info!("Migrations complete");

            Some(DocumentStore::new(pool))
        }
        None => {
            warn!("No database configured, lead submissions will be rejected");
            None
        }
    };

    // Build the Telegram notifier when both credentials are present
    let notifier = match config.telegram.credentials() {
        Some((bot_token, chat_id)) => {
            info!("Telegram relay enabled for chat {}", chat_id);
            Some(TelegramNotifier::new(
                bot_token.to_string(),
                chat_id.to_string(),
            )?)
        }
        None => None,
    };

    // Build application state
    let app_state = AppState {
        store,
        notifier,
        config: config.clone(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    Ok(())
}
