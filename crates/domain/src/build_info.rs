use std::fmt;
use std::sync::Arc;

/// Build identifier shown on the dashboard and sent with every heartbeat.
///
/// CI injects the commit hash through `IPLOOKUP_BUILD` at compile time;
/// local builds fall back to the crate version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo(Arc<str>);

impl BuildInfo {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn current() -> Self {
        Self::new(option_env!("IPLOOKUP_BUILD").unwrap_or(env!("CARGO_PKG_VERSION")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
