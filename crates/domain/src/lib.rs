//! iplookup domain layer
pub mod build_info;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod heartbeat;
pub mod query_record;

pub use build_info::BuildInfo;
pub use config::{CliOverrides, Config, ConfigError};
pub use dashboard::DashboardPage;
pub use errors::DomainError;
pub use heartbeat::Heartbeat;
pub use query_record::QueryRecord;
