use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QueryLogConfig {
    /// Also record lookups that failed to resolve, with an empty address
    /// list. Requests with an empty domain are never recorded.
    #[serde(default)]
    pub record_failures: bool,
}
