//! Process bootstrap: pool, router, listener, shutdown.

use crate::config::ServiceConfig;
use crate::error::StartupError;
use crate::routes::ranger_routes;
use crate::state::AppState;
use crate::store::{ping, PgRangerStore};
use axum::Router;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Open the pool and verify the database answers.
pub async fn connect(config: &ServiceConfig) -> Result<PgPool, StartupError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ping(&pool).await?;
    Ok(pool)
}

/// The four ranger routes plus request logging, panic recovery and a body size cap.
pub fn app(state: AppState, config: &ServiceConfig) -> Router {
    ranger_routes(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::new())
            .layer(RequestBodyLimitLayer::new(config.body_limit_bytes)),
    )
}

/// Serve until Ctrl-C or SIGTERM, then drain requests and close the pool.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let pool = connect(&config).await?;
    tracing::info!(max_connections = config.max_connections, "connected to the powerranger database");

    let state = AppState::new(PgRangerStore::new(pool.clone()));
    let app = app(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}
