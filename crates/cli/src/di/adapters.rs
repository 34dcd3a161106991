use iplookup_domain::Config;
use iplookup_infrastructure::{
    FileTemplateSource, HttpHeartbeatSender, InMemoryQueryLogRepository, SystemResolver,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct Adapters {
    pub resolver: Arc<SystemResolver>,
    pub query_log: Arc<InMemoryQueryLogRepository>,
    pub templates: Arc<FileTemplateSource>,
    pub heartbeat: Option<Arc<HttpHeartbeatSender>>,
}

impl Adapters {
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: Arc::new(SystemResolver::from_millis(config.resolver.timeout_ms)),
            query_log: Arc::new(InMemoryQueryLogRepository::new()),
            templates: Arc::new(FileTemplateSource::new(&config.dashboard.template_path)),
            heartbeat: heartbeat_sender(config),
        }
    }
}

fn heartbeat_sender(config: &Config) -> Option<Arc<HttpHeartbeatSender>> {
    if !config.heartbeat.is_enabled() {
        return None;
    }

    let timeout = Duration::from_millis(config.heartbeat.timeout_ms);
    match HttpHeartbeatSender::new(&config.heartbeat.address, timeout) {
        Ok(sender) => {
            info!(endpoint = sender.endpoint(), "Heartbeat sender ready");
            Some(Arc::new(sender))
        }
        Err(e) => {
            warn!(error = %e, "Could not build heartbeat client");
            None
        }
    }
}
