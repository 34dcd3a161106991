use super::Adapters;
use iplookup_application::ports::HeartbeatSender;
use iplookup_application::use_cases::{
    RenderDashboardUseCase, ResolveDomainUseCase, SendHeartbeatUseCase,
};
use iplookup_domain::{BuildInfo, Config};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    pub render_dashboard: Arc<RenderDashboardUseCase>,
    pub send_heartbeat: Option<Arc<SendHeartbeatUseCase>>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters, build: BuildInfo) -> Self {
        Self {
            resolve_domain: Arc::new(
                ResolveDomainUseCase::new(adapters.resolver.clone(), adapters.query_log.clone())
                    .with_record_failures(config.query_log.record_failures),
            ),
            render_dashboard: Arc::new(RenderDashboardUseCase::new(
                adapters.query_log.clone(),
                adapters.templates.clone(),
                build.clone(),
            )),
            send_heartbeat: adapters.heartbeat.clone().map(|sender| {
                let sender: Arc<dyn HeartbeatSender> = sender;
                Arc::new(SendHeartbeatUseCase::new(sender, build))
            }),
        }
    }
}
