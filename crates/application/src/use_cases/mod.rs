pub mod dashboard;
pub mod heartbeat;
pub mod lookup;

// Re-export use cases
pub use dashboard::RenderDashboardUseCase;
pub use heartbeat::SendHeartbeatUseCase;
pub use lookup::ResolveDomainUseCase;
