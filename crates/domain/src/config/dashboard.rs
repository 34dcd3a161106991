use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardConfig {
    /// Template path, relative to the working directory
    #[serde(default = "default_template_path")]
    pub template_path: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
        }
    }
}

fn default_template_path() -> String {
    "templates/index.html".to_string()
}
