pub mod heartbeat;
pub mod runner;

pub use heartbeat::HeartbeatJob;
pub use runner::JobRunner;
