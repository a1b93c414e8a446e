//! Running / not-running status of a service.

use std::fmt;

use serde::Serialize;

/// Whether at least one matching process exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Running,
    NotRunning,
}

impl ServiceStatus {
    /// Map a presence check onto a status.
    pub fn from_running(running: bool) -> Self {
        if running {
            Self::Running
        } else {
            Self::NotRunning
        }
    }

    /// Whether the service is running.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => f.write_str("Running"),
            Self::NotRunning => f.write_str("Not running"),
        }
    }
}
