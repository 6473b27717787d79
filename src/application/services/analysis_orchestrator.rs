use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::application::ports::{ProxyClient, ProxyError, TextExtractor, TextExtractorError};
use crate::domain::{
    Action, AnalysisParseError, AnalysisResult, AnalysisState, Document, Generation,
    UploadedFile,
};

use super::prompt_builder::{Prompt, build_prompt};

pub const PDF_REQUIRED_MESSAGE: &str = "Please select a PDF file.";
pub const QA_GUIDANCE_MESSAGE: &str = "Please upload a document and enter a question.";
pub const COMPARE_GUIDANCE_MESSAGE: &str = "Please paste a clause to compare.";
pub const QA_FAILURE_MESSAGE: &str = "Sorry, I couldn't get an answer. Please try again.";
pub const COMPARE_FAILURE_MESSAGE: &str = "Sorry, an error occurred during comparison.";

const STATUS_READING: &str = "Reading your PDF...";
const STATUS_ANALYZING: &str = "Analyzing with AI... This may take a moment.";
const STATUS_READY: &str =
    "Your document has been analyzed! You can now ask questions or compare clauses.";
const QA_PENDING_MESSAGE: &str = "Thinking...";
const COMPARE_PENDING_MESSAGE: &str = "Analyzing and comparing...";

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("a request of this kind is already in flight")]
    Busy,
    #[error("superseded by a newer upload")]
    Superseded,
    #[error(transparent)]
    Extraction(#[from] TextExtractorError),
    #[error(transparent)]
    Proxy(#[from] ProxyError),
    #[error(transparent)]
    Parse(#[from] AnalysisParseError),
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

#[derive(Debug, Default)]
struct Session {
    state: AnalysisState,
    status: String,
    document: Option<Arc<Document>>,
    analysis: Option<AnalysisResult>,
    qa_answer: String,
    comparison: String,
}

/// Clears an in-flight flag when the request finishes or its future is
/// dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Client-side coordinator for upload, extraction, analysis and the
/// follow-up Q&A and clause-comparison requests.
///
/// All session data lives behind one mutex that is never held across an
/// await. Each upload takes a new [`Generation`]; any async completion that
/// returns under an older generation is dropped instead of written.
pub struct AnalysisOrchestrator<P>
where
    P: ProxyClient,
{
    extractor: Arc<dyn TextExtractor>,
    proxy_client: Arc<P>,
    request_timeout: Duration,
    session: Mutex<Session>,
    generation: AtomicU64,
    qa_in_flight: AtomicBool,
    compare_in_flight: AtomicBool,
}

impl<P> AnalysisOrchestrator<P>
where
    P: ProxyClient,
{
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        proxy_client: Arc<P>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            extractor,
            proxy_client,
            request_timeout,
            session: Mutex::new(Session::default()),
            generation: AtomicU64::new(0),
            qa_in_flight: AtomicBool::new(false),
            compare_in_flight: AtomicBool::new(false),
        }
    }

    /// Runs extraction and analysis for a new upload, replacing everything
    /// the session knew about the previous one.
    #[tracing::instrument(
        skip(self, file),
        fields(filename = %file.filename, size_bytes = file.size_bytes())
    )]
    pub async fn upload(&self, file: UploadedFile) -> Result<AnalysisResult, OrchestratorError> {
        if !file.is_pdf() {
            tracing::warn!(content_type = %file.content_type, "Rejected non-PDF upload");
            return Err(OrchestratorError::InvalidInput(PDF_REQUIRED_MESSAGE));
        }

        let generation = self.begin_upload();

        let pages = match self.extractor.extract_pages(&file).await {
            Ok(pages) => pages,
            Err(e) => return Err(self.fail(generation, e.into())),
        };

        let document = Arc::new(Document::from_pages(pages));
        tracing::info!(
            generation = generation.value(),
            chars = document.raw_text.chars().count(),
            "Document extracted"
        );

        {
            let mut session = self.lock_session();
            if !self.is_current(generation) {
                return Err(self.discard_stale(generation, "extraction"));
            }
            session.document = Some(Arc::clone(&document));
            transition(&mut session, AnalysisState::Extracted);
        }

        {
            let mut session = self.lock_session();
            if !self.is_current(generation) {
                return Err(self.discard_stale(generation, "extraction"));
            }
            transition(&mut session, AnalysisState::Analyzing);
            session.status = STATUS_ANALYZING.to_string();
        }

        let outcome = self
            .call_proxy(
                Action::Analyze,
                build_prompt(Action::Analyze, &document.raw_text, None),
            )
            .await
            .and_then(|raw| AnalysisResult::parse_strict(&raw).map_err(OrchestratorError::from));

        let mut session = self.lock_session();
        if !self.is_current(generation) {
            return Err(self.discard_stale(generation, "analysis"));
        }

        match outcome {
            Ok(analysis) => {
                session.analysis = Some(analysis.clone());
                transition(&mut session, AnalysisState::Ready);
                session.status = STATUS_READY.to_string();
                tracing::info!(generation = generation.value(), "Document analyzed");
                Ok(analysis)
            }
            Err(e) => {
                record_failure(&mut session, &e);
                Err(e)
            }
        }
    }

    /// Answers a question about the current document.
    ///
    /// At most one question is in flight at a time; a concurrent call gets
    /// [`OrchestratorError::Busy`] and leaves the session untouched. Otherwise
    /// a non-empty question and an extracted document are required.
    #[tracing::instrument(skip(self, question))]
    pub async fn ask_question(&self, question: &str) -> Result<String, OrchestratorError> {
        let question = question.trim();

        let (document, generation, _guard) = {
            let mut session = self.lock_session();

            let Some(guard) = InFlightGuard::acquire(&self.qa_in_flight) else {
                tracing::debug!("Question ignored while another is pending");
                return Err(OrchestratorError::Busy);
            };

            let document = session
                .document
                .as_ref()
                .filter(|d| !d.is_empty())
                .map(Arc::clone);

            let Some(document) = document.filter(|_| !question.is_empty()) else {
                session.qa_answer = QA_GUIDANCE_MESSAGE.to_string();
                return Err(OrchestratorError::InvalidInput(QA_GUIDANCE_MESSAGE));
            };

            session.qa_answer = QA_PENDING_MESSAGE.to_string();
            (document, self.current_generation(), guard)
        };

        let result = self
            .call_proxy(
                Action::Qa,
                build_prompt(Action::Qa, &document.raw_text, Some(question)),
            )
            .await;

        let mut session = self.lock_session();
        if !self.is_current(generation) {
            return Err(self.discard_stale(generation, "answer"));
        }

        match result {
            Ok(answer) => {
                session.qa_answer = answer.clone();
                Ok(answer)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Question failed");
                session.qa_answer = QA_FAILURE_MESSAGE.to_string();
                Err(e)
            }
        }
    }

    /// Compares a clause against a fair standard version. Needs no upload.
    #[tracing::instrument(skip(self, clause))]
    pub async fn compare_clause(&self, clause: &str) -> Result<String, OrchestratorError> {
        let clause = clause.trim();

        let (generation, _guard) = {
            let mut session = self.lock_session();

            let Some(guard) = InFlightGuard::acquire(&self.compare_in_flight) else {
                tracing::debug!("Comparison ignored while another is pending");
                return Err(OrchestratorError::Busy);
            };

            if clause.is_empty() {
                session.comparison = COMPARE_GUIDANCE_MESSAGE.to_string();
                return Err(OrchestratorError::InvalidInput(COMPARE_GUIDANCE_MESSAGE));
            }

            session.comparison = COMPARE_PENDING_MESSAGE.to_string();
            (self.current_generation(), guard)
        };

        let result = self
            .call_proxy(Action::Compare, build_prompt(Action::Compare, "", Some(clause)))
            .await;

        let mut session = self.lock_session();
        if !self.is_current(generation) {
            return Err(self.discard_stale(generation, "comparison"));
        }

        match result {
            Ok(comparison) => {
                session.comparison = comparison.clone();
                Ok(comparison)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clause comparison failed");
                session.comparison = COMPARE_FAILURE_MESSAGE.to_string();
                Err(e)
            }
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.lock_session().state.clone()
    }

    /// User-facing status line for the upload flow.
    pub fn status(&self) -> String {
        self.lock_session().status.clone()
    }

    pub fn document(&self) -> Option<Arc<Document>> {
        self.lock_session().document.clone()
    }

    pub fn analysis(&self) -> Option<AnalysisResult> {
        self.lock_session().analysis.clone()
    }

    pub fn qa_answer(&self) -> String {
        self.lock_session().qa_answer.clone()
    }

    pub fn comparison(&self) -> String {
        self.lock_session().comparison.clone()
    }

    pub fn generation(&self) -> Generation {
        self.current_generation()
    }

    pub fn is_question_pending(&self) -> bool {
        self.qa_in_flight.load(Ordering::Acquire)
    }

    pub fn is_comparison_pending(&self) -> bool {
        self.compare_in_flight.load(Ordering::Acquire)
    }

    fn begin_upload(&self) -> Generation {
        let mut session = self.lock_session();
        let generation = Generation::new(self.generation.fetch_add(1, Ordering::AcqRel) + 1);

        *session = Session::default();
        transition(&mut session, AnalysisState::Extracting);
        session.status = STATUS_READING.to_string();

        generation
    }

    fn fail(&self, generation: Generation, error: OrchestratorError) -> OrchestratorError {
        let mut session = self.lock_session();
        if !self.is_current(generation) {
            return self.discard_stale(generation, "failure");
        }
        record_failure(&mut session, &error);
        error
    }

    fn discard_stale(&self, generation: Generation, stage: &str) -> OrchestratorError {
        tracing::info!(
            stale_generation = generation.value(),
            current_generation = self.current_generation().value(),
            stage,
            "Discarding result from a superseded upload"
        );
        OrchestratorError::Superseded
    }

    async fn call_proxy(
        &self,
        action: Action,
        prompt: Prompt,
    ) -> Result<String, OrchestratorError> {
        tracing::debug!(
            %action,
            structured_output = prompt.structured_output,
            "Sending prompt to proxy"
        );

        let call = self.proxy_client.call(&prompt.text, action);

        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result.map_err(OrchestratorError::from),
            Err(_) => {
                tracing::warn!(
                    %action,
                    timeout_secs = self.request_timeout.as_secs(),
                    "Proxy call timed out"
                );
                Err(OrchestratorError::Timeout(self.request_timeout))
            }
        }
    }

    fn current_generation(&self) -> Generation {
        Generation::new(self.generation.load(Ordering::Acquire))
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.current_generation() == generation
    }

    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn transition(session: &mut Session, next: AnalysisState) {
    tracing::debug!(from = %session.state, to = %next, "Analysis state transition");
    session.state = next;
}

/// Moves the session to `Error` and drops the document so follow-up
/// questions report that nothing is loaded.
fn record_failure(session: &mut Session, error: &OrchestratorError) {
    tracing::error!(error = %error, "Document analysis failed");
    let message = error.to_string();
    session.status = format!("Error: {}", message);
    session.document = None;
    session.analysis = None;
    transition(session, AnalysisState::Error(message));
}
