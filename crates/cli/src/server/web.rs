use iplookup_api::{create_routes, AppState};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Serves HTTP until Ctrl-C or until `shutdown` is cancelled, then drains
/// in-flight requests.
pub async fn start_web_server(
    bind_addr: &str,
    state: AppState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        bind_address = %local_addr,
        dashboard_url = format!("http://{}", local_addr),
        lookup_url = format!("http://{}/service/ip?domain=", local_addr),
        "Web server started successfully"
    );

    let app = create_routes(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => {
                    info!("Ctrl-C received, shutting down");
                    shutdown.cancel();
                }
                Err(e) => {
                    warn!(error = %e, "Could not listen for Ctrl-C");
                    shutdown.cancelled().await;
                }
            }
        }
        _ = shutdown.cancelled() => {}
    }
}
