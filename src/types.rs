//! Type definitions and aliases

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// Identity of one regional registry instance.
///
/// The harness is fixed at two regions; which network endpoint each one maps
/// to is carried by the configuration, not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    A,
    B,
}

impl Region {
    /// Short label used in report lines and generated usernames
    pub fn label(&self) -> &'static str {
        match self {
            Region::A => "A",
            Region::B => "B",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Region {}", self.label())
    }
}

/// Which registry operation a latency probe measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeOperation {
    /// `POST /register` round trips
    Register,
    /// `GET /list` round trips
    List,
}

impl ProbeOperation {
    /// Get the endpoint path this operation exercises
    pub fn path(&self) -> &'static str {
        match self {
            ProbeOperation::Register => "/register",
            ProbeOperation::List => "/list",
        }
    }
}

impl std::fmt::Display for ProbeOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
