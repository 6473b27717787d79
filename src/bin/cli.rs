use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use legalyze::application::services::{AnalysisOrchestrator, OrchestratorError};
use legalyze::domain::{AnalysisResult, Document, PDF_MIME, UploadedFile};
use legalyze::infrastructure::http::HttpProxyClient;
use legalyze::infrastructure::observability::init_tracing;
use legalyze::infrastructure::text_processing::PdfAdapter;
use legalyze::presentation::{Environment, Settings};

/// Analyze a PDF legal document through the legalyze proxy.
#[derive(Parser, Debug)]
#[command(name = "legalyze-cli", version)]
struct Cli {
    /// PDF document to analyze
    file: Option<PathBuf>,

    /// Proxy endpoint, overriding `client.proxy_url`
    #[arg(long)]
    proxy_url: Option<String>,

    /// Question about the document (repeatable)
    #[arg(long = "ask", value_name = "QUESTION")]
    questions: Vec<String>,

    /// Print the full extracted document text after analysis
    #[arg(long)]
    show_text: bool,

    /// Clause to compare with a fair standard version (repeatable, no file needed)
    #[arg(long = "compare", value_name = "CLAUSE")]
    clauses: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.file.is_none() && cli.questions.is_empty() && cli.clauses.is_empty() {
        anyhow::bail!("Nothing to do: pass a PDF file, --ask or --compare");
    }

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    let mut tracing_config = settings.logging.tracing_config(environment);
    tracing_config.default_filter = "warn".to_string();
    tracing_config.use_stderr = true;
    init_tracing(&tracing_config);

    let proxy_url = cli
        .proxy_url
        .clone()
        .unwrap_or_else(|| settings.client.proxy_url.clone());

    let orchestrator = AnalysisOrchestrator::new(
        Arc::new(PdfAdapter::new(settings.client.extraction_timeout())),
        Arc::new(HttpProxyClient::new(&proxy_url)),
        settings.client.request_timeout(),
    );

    if let Some(path) = &cli.file {
        let file = read_upload(path)?;

        match orchestrator.upload(file).await {
            Ok(analysis) => {
                eprintln!("{}", orchestrator.status());
                print_analysis(&analysis);
                if cli.show_text {
                    print_document_text(orchestrator.document().as_deref());
                }
            }
            Err(OrchestratorError::InvalidInput(message)) => anyhow::bail!(message),
            Err(_) => eprintln!("{}", orchestrator.status()),
        }
    }

    for question in &cli.questions {
        println!("\n## Q: {}", question.trim());
        // The orchestrator records user-facing text for every outcome.
        let _ = orchestrator.ask_question(question).await;
        println!("{}", orchestrator.qa_answer());
    }

    for clause in &cli.clauses {
        println!("\n## Clause comparison");
        let _ = orchestrator.compare_clause(clause).await;
        println!("{}", orchestrator.comparison());
    }

    Ok(())
}

fn read_upload(path: &Path) -> anyhow::Result<UploadedFile> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content_type = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MIME,
        _ => "application/octet-stream",
    };

    Ok(UploadedFile::new(filename, content_type, data))
}

fn print_analysis(analysis: &AnalysisResult) {
    let sections = [
        ("Financial Summary", &analysis.financial_summary),
        ("Key Issues", &analysis.key_issues),
        ("Risks & Loopholes", &analysis.loopholes),
        ("Legal Citations", &analysis.legal_citations),
        ("Simplified Text", &analysis.simplified_text),
    ];

    for (title, body) in sections {
        println!("\n## {}\n{}", title, body);
    }
}

fn print_document_text(document: Option<&Document>) {
    if let Some(document) = document {
        println!("\n## Original Text\n{}", document.raw_text);
    }
}
