use serde::{Deserialize, Serialize};

/// Keys the model must return, in the order the analysis prompt lists them.
pub const ANALYSIS_KEYS: [&str; 5] = [
    "keyIssues",
    "loopholes",
    "legalCitations",
    "simplifiedText",
    "financialSummary",
];

/// Structured analysis of one document.
///
/// Every field except `simplified_text` is an HTML `<ul>` fragment produced by
/// the model. Values are only trusted after [`AnalysisResult::parse_strict`]
/// has accepted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalysisResult {
    pub financial_summary: String,
    pub key_issues: String,
    pub loopholes: String,
    pub legal_citations: String,
    pub simplified_text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisParseError {
    #[error("model output is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("model output is not a JSON object")]
    NotAnObject,
    #[error("model output does not match the analysis schema: {0}")]
    SchemaMismatch(String),
}

impl AnalysisResult {
    /// Parses raw model output, failing closed on any deviation from the
    /// five-key schema: missing keys, extra keys and non-string values are
    /// all rejected.
    pub fn parse_strict(raw: &str) -> Result<Self, AnalysisParseError> {
        let value: serde_json::Value = serde_json::from_str(raw.trim())
            .map_err(|e| AnalysisParseError::InvalidJson(e.to_string()))?;

        if !value.is_object() {
            return Err(AnalysisParseError::NotAnObject);
        }

        serde_json::from_value(value)
            .map_err(|e| AnalysisParseError::SchemaMismatch(e.to_string()))
    }
}
