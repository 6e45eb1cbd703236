//! Dashboard configuration shared by the front end and the host page writer

use serde::{Deserialize, Serialize};

/// Id of the host element the dashboard mounts into
pub const DEFAULT_HOST_ELEMENT_ID: &str = "issue-dashboard";

/// Configuration for mounting and hosting the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Id of the container element in the host page
    pub host_element_id: String,
    /// Page title
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host_element_id: DEFAULT_HOST_ELEMENT_ID.to_string(),
            title: "Loyalty App Issue Digest".to_string(),
        }
    }
}
