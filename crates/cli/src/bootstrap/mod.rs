pub mod config;
pub mod jobs;
pub mod logging;

pub use config::load_config;
pub use jobs::start_jobs;
pub use logging::init_logging;
