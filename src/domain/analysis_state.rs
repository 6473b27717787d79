use std::fmt;

/// Lifecycle of the current upload inside an analysis session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Extracting,
    Extracted,
    Analyzing,
    Ready,
    Error(String),
}

impl AnalysisState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisState::Idle => "IDLE",
            AnalysisState::Extracting => "EXTRACTING",
            AnalysisState::Extracted => "EXTRACTED",
            AnalysisState::Analyzing => "ANALYZING",
            AnalysisState::Ready => "READY",
            AnalysisState::Error(_) => "ERROR",
        }
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisState::Error(message) => write!(f, "{}: {}", self.as_str(), message),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
