use serde::{Deserialize, Serialize};

use super::action::Action;

/// Body the client posts to the proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRequest {
    pub prompt: String,
    pub action: Action,
}

impl ProxyRequest {
    pub fn new(prompt: impl Into<String>, action: Action) -> Self {
        Self {
            prompt: prompt.into(),
            action,
        }
    }
}

/// JSON body returned by the proxy: either `{"response": ...}` or
/// `{"error": ...}`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProxyResponse {
    Success(ProxySuccess),
    Failure(ProxyFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySuccess {
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyFailure {
    pub error: String,
}

impl ProxyResponse {
    pub fn success(response: impl Into<String>) -> Self {
        Self::Success(ProxySuccess {
            response: response.into(),
        })
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(ProxyFailure {
            error: error.into(),
        })
    }

    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Success(s) => Ok(s.response),
            Self::Failure(f) => Err(f.error),
        }
    }
}
