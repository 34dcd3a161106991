use crate::di::UseCases;
use iplookup_domain::Config;
use iplookup_jobs::{HeartbeatJob, JobRunner};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub async fn start_jobs(
    config: &Config,
    use_cases: &UseCases,
    shutdown: CancellationToken,
) -> Vec<JoinHandle<()>> {
    let mut runner = JobRunner::new().with_shutdown_token(shutdown);

    match &use_cases.send_heartbeat {
        Some(send) => {
            runner = runner.with_heartbeat(
                HeartbeatJob::new(send.clone()).with_interval(config.heartbeat.interval_secs),
            );
        }
        None => warn!("Heartbeat address not set; liveness reporting disabled"),
    }

    runner.start().await
}
