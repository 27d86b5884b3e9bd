// Framework bootstrap for the player server runtime.

use crate::frameworks::config::{PlayerConfig, ServerConfig};
use crate::interface_adapters::gateway::StateAccessGateway;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{PlayerState, travel_task};

use std::future::Future;
use std::{io::Result, sync::Arc, time::Duration};
use tokio::sync::Notify;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Resolves on SIGINT. If the handler can't be installed the server keeps running
// rather than shutting down immediately.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("interrupt received; stopping"),
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for interrupt");
            std::future::pending::<()>().await;
        }
    }
}

/// Serves the player on `listener` until SIGINT.
pub async fn run(
    listener: tokio::net::TcpListener,
    player: PlayerConfig,
    update_interval: Duration,
) -> Result<()> {
    serve(listener, player, update_interval, shutdown_signal()).await
}

/// Serves the player until `shutdown` resolves, then drains in-flight requests and
/// stops the travel driver before returning.
pub async fn serve<F>(
    listener: tokio::net::TcpListener,
    player: PlayerConfig,
    update_interval: Duration,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;

    let player = Arc::new(PlayerState::new(player.into_player()));
    tracing::info!(player = %player.snapshot(), "player created");

    // Spawn the travel driver. It owns the only periodic writer of the position.
    let stop_travel = Arc::new(Notify::new());
    let travel = tokio::spawn(travel_task(
        Arc::clone(&player),
        update_interval,
        Arc::clone(&stop_travel),
    ));

    let state = Arc::new(AppState {
        gateway: StateAccessGateway::new(player),
    });
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        });

    stop_travel.notify_one();
    if let Err(e) = travel.await {
        tracing::error!(error = %e, "travel driver failed");
    }
    tracing::info!("server stopped");

    served
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let address = config.address();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config.player, config.update_interval).await
}
