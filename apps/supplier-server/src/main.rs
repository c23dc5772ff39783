use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};

use supplier_api::{build_router, AppState};
use supplier_core::repositories::SupplierRepository;
use supplier_infrastructure::database::{connection, InMemorySupplierRepository, PgSupplierRepository};
use supplier_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry
    let _log_guard = supplier_shared::telemetry::init_telemetry(&config.log)?;

    info!("Supplier server starting ({})...", config.app.env);

    // Connect to the store
    let (supplier_repo, pool) = if config.database.is_in_memory() {
        warn!("Using in-memory supplier store; data is lost on shutdown");
        (Arc::new(InMemorySupplierRepository::new()) as Arc<dyn SupplierRepository>, None)
    } else {
        info!("Connecting to database...");
        let pool = connection::create_pool(&config.database)
            .await
            .context("failed to connect to database")?;
        info!("Database connection established.");

        if config.database.run_migrations {
            connection::run_migrations(&pool)
                .await
                .context("failed to run migrations")?;
        }

        (Arc::new(PgSupplierRepository::new(pool.clone())) as Arc<dyn SupplierRepository>, Some(pool))
    };

    // Build router
    let app = build_router(AppState::new(supplier_repo, config.clone()));

    // Bind address
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    info!("Supplier server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received, draining connections");
}
