mod domain_resolver;
mod heartbeat_sender;
mod query_log_repository;
mod template_source;

pub use domain_resolver::DomainResolver;
pub use heartbeat_sender::HeartbeatSender;
pub use query_log_repository::QueryLogRepository;
pub use template_source::TemplateSource;
