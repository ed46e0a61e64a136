use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Verdict attached to a check or to one meal of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CheckStatus {
    #[serde(rename = "OK")]
    Ok,
    Warning,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Warning => "Warning",
            CheckStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
