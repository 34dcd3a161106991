use crate::HeartbeatJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once. The
/// returned handles finish after the shutdown token is cancelled.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_heartbeat(HeartbeatJob::new(send_heartbeat).with_interval(10))
///     .with_shutdown_token(token.clone())
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    heartbeat: Option<HeartbeatJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            heartbeat: None,
            shutdown: None,
        }
    }

    pub fn with_heartbeat(mut self, job: HeartbeatJob) -> Self {
        self.heartbeat = Some(job);
        self
    }

    /// Token handed to every registered job, replacing any token the job
    /// was built with.
    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");
        let mut handles = Vec::new();

        if let Some(mut job) = self.heartbeat {
            if let Some(token) = &self.shutdown {
                job = job.with_cancellation(token.clone());
            }
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
