//! # Book Manager
//!
//! A book catalogue CRUD service.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage (PostgreSQL pool or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use book_manager::config::Settings;
use book_manager::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    book_manager::telemetry::init_tracing();

    info!("Starting Book Manager...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.storage.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
