use std::{env::var, path::PathBuf, time::Duration};

use site_nav::{config::Config, error::AppError, export::export_site, routes};
use tokio::{net::TcpListener, signal};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_nav=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_path = PathBuf::from(var("SITE_NAV_CONFIG").unwrap_or(String::from("site.toml")));
    let config = Config::load(&config_path)?;
    let state = routes::AppState::load(&config)?;

    match std::env::args().nth(1).as_deref() {
        Some("export") => {
            let written = export_site(&state, &config.out_dir).await?;
            tracing::info!("Exported {} pages to {}", written.len(), config.out_dir.display());
        }
        None | Some("serve") => {
            let listener = TcpListener::bind(config.address()).await?;
            tracing::info!("Listening on http://{}", listener.local_addr()?);
            axum::serve(
                listener,
                routes::app(&config.public_dir)
                    .with_state(state)
                    .layer((
                        TraceLayer::new_for_http(),
                        TimeoutLayer::new(Duration::from_secs(10)),
                    )),
            )
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        }
        Some(other) => {
            return Err(AppError::Other(format!(
                "unknown command {other:?}, expected `serve` or `export`"
            )));
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received, shutting down...");
}
