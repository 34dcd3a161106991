//! iplookup infrastructure: adapters behind the application ports
pub mod heartbeat;
pub mod repositories;
pub mod system;
pub mod templates;

pub use heartbeat::HttpHeartbeatSender;
pub use repositories::InMemoryQueryLogRepository;
pub use system::SystemResolver;
pub use templates::FileTemplateSource;
