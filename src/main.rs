//! TenderWatch Server — tender portal monitoring service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing_subscriber::{fmt, EnvFilter};

use tenderwatch_core::config::AppConfig;
use tenderwatch_core::error::AppError;
use tenderwatch_database::{DatabasePool, StoreSet};
use tenderwatch_entity::tender::ValueBandScorer;
use tenderwatch_monitor::{MonitorScheduler, ScanRunner};
use tenderwatch_realtime::BroadcastHub;
use tenderwatch_service::{
    EventBroadcaster, NotificationEmitter, NotificationService, PortalRegistry, TenderDirectory,
    TenderIngest,
};
use tenderwatch_source::{KeywordFilter, SourceSelector};

#[tokio::main]
async fn main() {
    let env = std::env::var("TENDERWATCH_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TenderWatch v{}", env!("CARGO_PKG_VERSION"));

    // Stores: PostgreSQL or in-process, per configuration.
    let (stores, db) = match config.database.provider.as_str() {
        "postgres" => {
            let pool = DatabasePool::connect(&config.database).await?;
            pool.migrate().await?;
            (StoreSet::postgres(pool.pool().clone()), Some(pool))
        }
        _ => {
            tracing::info!("Using in-memory stores; data will not survive a restart");
            (StoreSet::memory(), None)
        }
    };

    // Portal catalog.
    let registry = PortalRegistry::new(stores.portals.clone());
    registry.seed(&config.monitor.portals).await?;

    // Realtime hub and services.
    let hub = Arc::new(BroadcastHub::new(config.realtime.channel_capacity));
    let emitter = NotificationEmitter::new(
        stores.notifications.clone(),
        Arc::clone(&hub) as Arc<dyn EventBroadcaster>,
    );
    let ingest = TenderIngest::new(stores.tenders.clone(), Arc::new(ValueBandScorer));

    // Scan pipeline.
    let fetch_timeout = Duration::from_secs(config.monitor.fetch_timeout_seconds);
    let selector = SourceSelector::new(fetch_timeout)?;
    let runner = ScanRunner::new(
        registry.clone(),
        ingest,
        emitter,
        Arc::new(selector),
        KeywordFilter::new(&config.monitor.keywords),
        fetch_timeout,
    );
    let scheduler = Arc::new(MonitorScheduler::new(
        Arc::new(runner),
        Duration::from_secs(config.monitor.interval_minutes * 60),
    ));

    if config.monitor.enabled {
        scheduler.start();
    } else {
        tracing::info!("Monitor disabled at startup; use POST /api/monitor/start");
    }

    // HTTP server.
    let state = tenderwatch_api::AppState {
        config: Arc::new(config.clone()),
        portals: registry,
        tenders: TenderDirectory::new(stores.tenders.clone()),
        notifications: NotificationService::new(stores.notifications.clone()),
        scheduler: Arc::clone(&scheduler),
        hub,
        db: db.clone(),
        started_at: Instant::now(),
    };

    let app = tenderwatch_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(
            tenderwatch_core::error::ErrorKind::Internal,
            format!("Failed to bind {addr}"),
            e,
        ))?;

    tracing::info!("TenderWatch server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    scheduler.stop();
    if let Some(pool) = db {
        pool.close().await;
    }

    tracing::info!("TenderWatch server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
