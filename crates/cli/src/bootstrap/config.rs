use super::init_logging;
use iplookup_domain::{CliOverrides, Config};
use tracing::info;

/// Loads and validates the configuration, then brings up logging at the
/// configured level.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    init_logging(&config);

    info!(
        config_file = config_path.unwrap_or("default"),
        listening_address = %config.server.listening_address,
        heartbeat_enabled = config.heartbeat.is_enabled(),
        template = %config.dashboard.template_path,
        record_failures = config.query_log.record_failures,
        "Configuration loaded"
    );

    Ok(config)
}
