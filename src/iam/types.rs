//! Wire types for the testIamPermissions call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified Pub/Sub topic resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPath {
    project: String,
    topic: String,
}

impl TopicPath {
    pub fn new(project: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            topic: topic.into(),
        }
    }

    /// Resource path in the form `projects/{project}/topics/{topic}`.
    pub fn path(&self) -> String {
        format!("projects/{}/topics/{}", self.project, self.topic)
    }
}

impl fmt::Display for TopicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Request body: the permission names to test.
#[derive(Debug, Clone, Serialize)]
pub struct TestPermissionsRequest {
    pub permissions: Vec<String>,
}

/// Response body: the granted subset. The API omits the field entirely
/// when no permission is granted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestPermissionsResponse {
    #[serde(default)]
    pub permissions: Vec<String>,
}
