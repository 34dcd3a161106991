use clap::Parser;
use iplookup_api::AppState;
use iplookup_domain::{BuildInfo, CliOverrides};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "iplookup")]
#[command(version)]
#[command(about = "iplookup - resolve domain names over HTTP and keep a query dashboard")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listening address (host:port), overrides LISTENING_ADDRESS
    #[arg(short = 'l', long, value_name = "ADDR")]
    listen: Option<String>,

    /// Heartbeat collector address, overrides HEARTBEAT_ADDRESS
    #[arg(long, value_name = "ADDR")]
    heartbeat: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        listening_address: cli.listen.clone(),
        heartbeat_address: cli.heartbeat.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    let build = BuildInfo::current();
    info!(build = %build, "Starting iplookup v{}", env!("CARGO_PKG_VERSION"));

    // Dependency Injection - Build all dependencies
    let adapters = di::Adapters::new(&config);
    let use_cases = di::UseCases::new(&config, &adapters, build);

    let shutdown = CancellationToken::new();
    let jobs = bootstrap::start_jobs(&config, &use_cases, shutdown.clone()).await;

    let app_state = AppState {
        resolve_domain: use_cases.resolve_domain,
        render_dashboard: use_cases.render_dashboard,
    };

    let served =
        server::start_web_server(&config.server.bind_address(), app_state, shutdown.clone()).await;

    // The server may also have stopped on a bind or accept error; either way
    // the background jobs stop with it.
    shutdown.cancel();
    for job in jobs {
        if let Err(e) = job.await {
            tracing::error!(error = %e, "Background job ended abnormally");
        }
    }

    served?;
    info!("Server shutdown complete");
    Ok(())
}
