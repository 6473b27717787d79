use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of request routed through the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Analyze,
    Qa,
    Compare,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Analyze => "analyze",
            Action::Qa => "qa",
            Action::Compare => "compare",
        }
    }

    /// Only document analysis asks the upstream model for strict JSON.
    pub fn requires_structured_output(&self) -> bool {
        matches!(self, Action::Analyze)
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyze" => Ok(Action::Analyze),
            "qa" => Ok(Action::Qa),
            "compare" => Ok(Action::Compare),
            other => Err(format!(
                "Invalid action: {}. Expected: analyze, qa, or compare",
                other
            )),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
