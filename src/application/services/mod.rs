mod analysis_orchestrator;
mod prompt_builder;
mod proxy_service;

pub use analysis_orchestrator::{
    AnalysisOrchestrator, COMPARE_FAILURE_MESSAGE, COMPARE_GUIDANCE_MESSAGE, OrchestratorError,
    PDF_REQUIRED_MESSAGE, QA_FAILURE_MESSAGE, QA_GUIDANCE_MESSAGE,
};
pub use prompt_builder::{
    Prompt, QA_FALLBACK_ANSWER, analyze_prompt, build_prompt, compare_prompt, qa_prompt,
};
pub use proxy_service::{
    METHOD_NOT_ALLOWED_BODY, ProxyReply, ProxyReplyBody, ProxyService, RetryPolicy,
};
