//! dialog-admin - Administrative settings service
//!
//! Serves the auto-responder admin endpoint for the Dialog application.
//! Sessions and users are shared with the main application through
//! dialog.db; this service issues neither, it only validates them.

use anyhow::Result;
use clap::Parser;
use dialog_admin::{build_router, AppState};
use tracing::{error, info};

/// Dialog auto-responder admin service
#[derive(Parser, Debug)]
#[command(name = "dialog-admin", version)]
struct Args {
    /// Data folder holding dialog.db
    /// (falls back to DIALOG_DATA_FOLDER, config file, then OS default)
    #[arg(long)]
    data_folder: Option<String>,

    /// Port for the HTTP server
    #[arg(long, env = "DIALOG_ADMIN_PORT", default_value_t = 5730)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Dialog Admin (dialog-admin) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let data_folder = dialog_common::config::resolve_data_folder(
        args.data_folder.as_deref(),
        "DIALOG_DATA_FOLDER",
    );
    dialog_common::config::ensure_data_folder(&data_folder)?;

    let db_path = dialog_common::config::database_path(&data_folder);
    info!("Database path: {}", db_path.display());

    let pool = match dialog_common::db::init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Connected to database");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("dialog-admin listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
