mod action;
mod analysis_result;
mod analysis_state;
mod document;
mod generation;
mod proxy_message;
mod uploaded_file;

pub use action::Action;
pub use analysis_result::{ANALYSIS_KEYS, AnalysisParseError, AnalysisResult};
pub use analysis_state::AnalysisState;
pub use document::{Document, PageText};
pub use generation::Generation;
pub use proxy_message::{ProxyFailure, ProxyRequest, ProxyResponse, ProxySuccess};
pub use uploaded_file::{PDF_MIME, UploadedFile};
