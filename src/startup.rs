//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{BookService, BookServiceImpl};
use crate::config::{Settings, StorageBackend};
use crate::domain::BookRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryBookRepository, PgBookRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookService>,
    /// Present only for the PostgreSQL backend
    pub db: Option<PgPool>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State backed by any repository implementation.
    pub fn with_repository<R>(repo: Arc<R>, db: Option<PgPool>, settings: Settings) -> Self
    where
        R: BookRepository + 'static,
    {
        Self {
            books: Arc::new(BookServiceImpl::new(repo)),
            db,
            settings: Arc::new(settings),
        }
    }
}

/// Router with all routes and middleware applied.
pub fn build_router(state: AppState) -> Router {
    let cors = cors::create_cors_layer(&state.settings.cors);

    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors)
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let state = match settings.storage.backend {
            StorageBackend::Postgres => {
                let db = database::create_pool(&settings.database)
                    .await
                    .context("Failed to create database pool")?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&db)
                        .await
                        .context("Failed to run migrations")?;
                    tracing::info!("Database migrations applied");
                }

                let repo = Arc::new(PgBookRepository::new(db.clone()));
                AppState::with_repository(repo, Some(db), settings.clone())
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; books are lost on restart");
                let repo = Arc::new(InMemoryBookRepository::new());
                AppState::with_repository(repo, None, settings.clone())
            }
        };

        let router = build_router(state);

        // Bind to address
        let addr: SocketAddr = settings
            .server
            .socket_addr()
            .context("Invalid server address configuration")?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until CTRL+C or SIGTERM
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server failed")?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("SIGTERM received");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
