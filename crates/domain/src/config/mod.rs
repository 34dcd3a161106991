//! Configuration module for iplookup
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, environment and CLI overrides
//! - `server`: HTTP listening address
//! - `heartbeat`: Liveness reporter destination and cadence
//! - `resolver`: Name resolution limits
//! - `dashboard`: Dashboard template location
//! - `query_log`: Query log recording policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dashboard;
pub mod errors;
pub mod heartbeat;
pub mod logging;
pub mod query_log;
pub mod resolver;
pub mod root;
pub mod server;

pub use dashboard::DashboardConfig;
pub use errors::ConfigError;
pub use heartbeat::HeartbeatConfig;
pub use logging::LoggingConfig;
pub use query_log::QueryLogConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config, ENV_HEARTBEAT_ADDRESS, ENV_LISTENING_ADDRESS};
pub use server::ServerConfig;
